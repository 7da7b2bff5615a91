use {crate::domain::PoolKey, alloy_primitives::Address};

/// Rejection of a pool master operation. A failed operation never leaves a
/// partial state change behind.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{caller} is not authorized to perform this operation")]
    Unauthorized { caller: Address },
    #[error("factory {0} is not whitelisted")]
    NotWhitelistedFactory(Address),
    #[error("fee {fee} exceeds the maximum of {max}")]
    InvalidFee { fee: u32, max: u32 },
    #[error("pool {pool} already exists")]
    PoolAlreadyExists { pool: Address, key: Option<PoolKey> },
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    #[error("factory {factory} failed to construct pool")]
    Construction {
        factory: Address,
        #[source]
        source: anyhow::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
