//! Authoritative record of registered pools.
//!
//! Pools live in a single append-only table. Lookups by pool address and by
//! content key are secondary indices into that table and are only ever
//! written together, so "is this a pool" and "which pool has this key" can
//! not disagree.

use {
    crate::{
        domain::{Address, Bytes, PoolKey, PoolType},
        error::{Error, Result},
        events::Event,
    },
    std::collections::HashMap,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PoolEntry {
    pub pool: Address,
    pub pool_type: PoolType,
    pub key: PoolKey,
    /// Factory that registered the pool.
    pub factory: Address,
    /// Construction data exactly as the factory passed it.
    pub data: Bytes,
}

/// Registry length at some point in time. Rolling back to it forgets every
/// pool registered since.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Checkpoint(usize);

#[derive(Debug, Default)]
pub struct PoolRegistry {
    entries: Vec<PoolEntry>,
    by_pool: HashMap<Address, usize>,
    by_key: HashMap<PoolKey, usize>,
}

impl PoolRegistry {
    /// Records `pool` under the content key of `(pool_type, data)`. The
    /// caller is responsible for checking that `factory` may register pools.
    pub fn register(
        &mut self,
        factory: Address,
        pool: Address,
        pool_type: PoolType,
        data: &[u8],
    ) -> Result<Event> {
        if pool.is_zero() {
            return Err(Error::InvalidArgument("pool address is zero"));
        }
        if self.contains(pool) {
            return Err(Error::PoolAlreadyExists { pool, key: None });
        }
        let key = PoolKey::new(pool_type, data);
        if let Some(existing) = self.get(key) {
            return Err(Error::PoolAlreadyExists {
                pool: existing,
                key: Some(key),
            });
        }

        let data = Bytes::copy_from_slice(data);
        let index = self.entries.len();
        self.entries.push(PoolEntry {
            pool,
            pool_type,
            key,
            factory,
            data: data.clone(),
        });
        self.by_pool.insert(pool, index);
        self.by_key.insert(key, index);

        Ok(Event::RegisterPool {
            factory,
            pool,
            pool_type,
            data,
        })
    }

    pub fn contains(&self, pool: Address) -> bool {
        self.by_pool.contains_key(&pool)
    }

    /// Pool registered under the given content key.
    pub fn get(&self, key: PoolKey) -> Option<Address> {
        self.by_key.get(&key).map(|&index| self.entries[index].pool)
    }

    pub fn entry(&self, pool: Address) -> Option<&PoolEntry> {
        self.by_pool.get(&pool).map(|&index| &self.entries[index])
    }

    /// Pool at position `index` in registration order.
    pub fn pool_at(&self, index: usize) -> Option<Address> {
        self.entries.get(index).map(|entry| entry.pool)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn pools(&self) -> impl Iterator<Item = &PoolEntry> {
        self.entries.iter()
    }

    pub(crate) fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.entries.len())
    }

    pub(crate) fn rollback(&mut self, checkpoint: Checkpoint) {
        for entry in self.entries.drain(checkpoint.0..) {
            self.by_pool.remove(&entry.pool);
            self.by_key.remove(&entry.key);
        }
    }
}
