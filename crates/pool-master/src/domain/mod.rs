//! Value types shared by every component of the pool master.

pub mod fee;
pub mod pool;

pub use {
    alloy_primitives::{Address, B256, Bytes},
    fee::{CustomSwapFee, FEE_PRECISION, Fee, MAX_PROTOCOL_FEE, MAX_SWAP_FEE, SENTINEL_ZERO_FEE},
    pool::{Pool, PoolKey, PoolType},
};

#[cfg(any(test, feature = "test-util"))]
pub use pool::MockPool;
