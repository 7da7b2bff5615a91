//! Registry and fee policy of a decentralized exchange.
//!
//! The [`PoolMaster`] tracks which pools exist and which factories may
//! register them, and resolves the swap and protocol fees that apply to each
//! pool. Pools are created in two phases: the master forwards construction
//! data to a [`PoolFactory`], and the factory registers the deployed pool
//! through the [`PoolRegistrar`] it was handed. Every pool is indexed by the
//! content key of its type and construction data, so the same pool can never
//! be registered twice.

pub mod access;
pub mod config;
pub mod domain;
pub mod error;
pub mod events;
pub mod fee_policy;
pub mod master;
pub mod registry;
pub mod shared;
#[cfg(any(test, feature = "test-util"))]
pub mod testing;
pub mod whitelist;

pub use {
    error::{Error, Result},
    events::Event,
    master::{PoolFactory, PoolMaster, PoolRegistrar},
    shared::SharedPoolMaster,
};
