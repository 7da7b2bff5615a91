use {
    alloy_primitives::{Address, B256, Bytes, keccak256},
    alloy_sol_types::SolValue,
    serde::{Deserialize, Serialize},
};

/// Tag identifying a pool's curve family, e.g. classic constant product or
/// stable swap. Default swap fees and protocol fees are configured per type.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
    derive_more::Into,
)]
#[serde(transparent)]
pub struct PoolType(pub u16);

/// Content address of a pool: `keccak256(abi.encode(uint16 poolType, bytes
/// data))`. Two registrations with the same type and construction data
/// always produce the same key.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display,
)]
pub struct PoolKey(pub B256);

impl PoolKey {
    pub fn new(pool_type: PoolType, data: &[u8]) -> Self {
        Self(keccak256(Self::preimage(pool_type, data)))
    }

    fn preimage(pool_type: PoolType, data: &[u8]) -> Vec<u8> {
        (pool_type.0, Bytes::copy_from_slice(data)).abi_encode_params()
    }
}

impl From<PoolKey> for B256 {
    fn from(key: PoolKey) -> Self {
        key.0
    }
}

/// Read-only view of a deployed pool.
#[cfg_attr(any(test, feature = "test-util"), mockall::automock)]
pub trait Pool: Send + Sync {
    fn address(&self) -> Address;

    /// The type tag the pool was deployed with.
    fn pool_type(&self) -> PoolType;
}
