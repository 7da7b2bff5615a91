use {
    crate::{
        domain::{Address, Fee, Pool, PoolType},
        error::Result,
        events::Event,
        master::{PoolFactory, PoolMaster},
    },
    std::sync::Arc,
    tokio::sync::{RwLock, RwLockReadGuard, broadcast},
};

/// Pool master shared between tasks.
///
/// Every mutation, including a complete create and register round trip
/// through a factory, runs under the write lock. Two registrations racing
/// for the same content key are therefore serialized and exactly one of them
/// observes the key as free.
#[derive(Clone, Debug)]
pub struct SharedPoolMaster(Arc<RwLock<PoolMaster>>);

impl SharedPoolMaster {
    pub fn new(master: PoolMaster) -> Self {
        Self(Arc::new(RwLock::new(master)))
    }

    /// Read access for queries. Mutations wait until the guard is dropped.
    pub async fn read(&self) -> RwLockReadGuard<'_, PoolMaster> {
        self.0.read().await
    }

    /// Runs an administrative operation atomically.
    pub async fn update<T>(&self, update: impl FnOnce(&mut PoolMaster) -> Result<T>) -> Result<T> {
        update(&mut *self.0.write().await)
    }

    pub async fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.0.read().await.subscribe()
    }

    pub async fn resolve_swap_fee(&self, pool: &dyn Pool) -> Fee {
        self.0.read().await.resolve_swap_fee(pool)
    }

    pub async fn create_pool(&self, factory: &dyn PoolFactory, data: &[u8]) -> Result<Address> {
        self.0.write().await.create_pool(factory, data)
    }

    pub async fn register_pool(
        &self,
        caller: Address,
        pool: Address,
        pool_type: PoolType,
        data: &[u8],
    ) -> Result<()> {
        self.0
            .write()
            .await
            .register_pool(caller, pool, pool_type, data)
    }
}
