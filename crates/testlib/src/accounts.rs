//! Well-known accounts used across tests. The addresses are arbitrary but
//! distinct, so a mixed up argument shows up as a failing assertion.

use alloy_primitives::{Address, address};

/// Owner of the pool master under test.
pub const OWNER: Address = address!("0000000000000000000000000000000000000a11");

/// Vault holding the pools' funds.
pub const VAULT: Address = address!("ba12222222228d8ba445958a75a0704d566bf2c8");

/// Initial recipient of protocol fees.
pub const FEE_RECIPIENT: Address = address!("00000000000000000000000000000000000000fe");

/// Alternative fee recipient.
pub const TREASURY: Address = address!("00000000000000000000000000000000000000fd");

/// Factory for classic constant product pools.
pub const CLASSIC_FACTORY: Address = address!("f2dad89f2788a8cd54625c60b55cd3d2d0aca7cb");

/// Factory for stable swap pools.
pub const STABLE_FACTORY: Address = address!("5b9f21d407f35b10cbfddca17d5d84b129356ea3");

pub const POOL_A: Address = address!("00000000000000000000000000000000000a000a");
pub const POOL_B: Address = address!("00000000000000000000000000000000000b000b");
pub const POOL_C: Address = address!("00000000000000000000000000000000000c000c");

/// Accounts without any special role.
pub const ALICE: Address = address!("00000000000000000000000000000000000a1ce0");
pub const BOB: Address = address!("0000000000000000000000000000000000000b0b");
