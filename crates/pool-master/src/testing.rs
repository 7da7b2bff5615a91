//! Test doubles for the collaborators of the pool master.

use {
    crate::{
        domain::{Address, Pool, PoolType},
        error::{Error, Result},
        master::{PoolFactory, PoolRegistrar},
    },
    alloy_primitives::{B256, keccak256},
    std::sync::atomic::{AtomicUsize, Ordering},
};

/// Pool with a fixed address and type.
#[derive(Clone, Copy, Debug)]
pub struct StaticPool {
    pub address: Address,
    pub pool_type: PoolType,
}

impl Pool for StaticPool {
    fn address(&self) -> Address {
        self.address
    }

    fn pool_type(&self) -> PoolType {
        self.pool_type
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Behavior {
    /// Deploy and register the pool.
    #[default]
    Register,
    /// Deploy the pool without registering it.
    SkipRegistration,
    /// Register the pool, then fail the deployment.
    FailAfterRegistration,
}

/// Factory deploying pools to CREATE2 addresses salted with the hash of the
/// construction data, the way Uniswap V2 style factories do.
#[derive(Debug)]
pub struct Create2Factory {
    address: Address,
    pool_type: PoolType,
    init_code_digest: B256,
    behavior: Behavior,
    calls: AtomicUsize,
}

impl Create2Factory {
    pub fn new(address: Address, pool_type: PoolType) -> Self {
        Self {
            address,
            pool_type,
            init_code_digest: keccak256(b"pool init code"),
            behavior: Behavior::default(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_behavior(mut self, behavior: Behavior) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn pool_address(&self, data: &[u8]) -> Address {
        self.address.create2(keccak256(data), self.init_code_digest)
    }

    /// Number of deployments this factory was asked for.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PoolFactory for Create2Factory {
    fn address(&self) -> Address {
        self.address
    }

    fn create_pool(&self, data: &[u8], registrar: &mut dyn PoolRegistrar) -> Result<Address> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let pool = self.pool_address(data);
        match self.behavior {
            Behavior::Register => registrar.register_pool(pool, self.pool_type, data)?,
            Behavior::SkipRegistration => (),
            Behavior::FailAfterRegistration => {
                registrar.register_pool(pool, self.pool_type, data)?;
                return Err(Error::Construction {
                    factory: self.address,
                    source: anyhow::anyhow!("pool initialization reverted"),
                });
            }
        }
        Ok(pool)
    }
}
