//! The pool master: single external surface over access control, fee
//! policy, factory whitelist and pool registry.

use {
    crate::{
        access::AccessControl,
        config::Config,
        domain::{Address, CustomSwapFee, Fee, Pool, PoolKey, PoolType},
        error::{Error, Result},
        events::{Event, Publisher},
        fee_policy::FeePolicy,
        registry::{PoolEntry, PoolRegistry},
        whitelist::FactoryWhitelist,
    },
    tokio::sync::broadcast,
};

/// Deploys pools on request of the pool master.
///
/// A factory receives the opaque construction data from
/// [`PoolMaster::create_pool`] and is expected to register every pool it
/// deploys through the given [`PoolRegistrar`]. Registration only succeeds
/// for whitelisted factories; whether construction itself is honored for
/// arbitrary data is up to the factory.
pub trait PoolFactory: Send + Sync {
    fn address(&self) -> Address;

    fn create_pool(&self, data: &[u8], registrar: &mut dyn PoolRegistrar) -> Result<Address>;
}

/// Registration callback handed to a [`PoolFactory`]. The caller identity of
/// every registration is the factory the registrar was created for.
pub trait PoolRegistrar {
    fn register_pool(&mut self, pool: Address, pool_type: PoolType, data: &[u8]) -> Result<()>;
}

#[derive(Debug)]
pub struct PoolMaster {
    access: AccessControl,
    fee_policy: FeePolicy,
    whitelist: FactoryWhitelist,
    registry: PoolRegistry,
    vault: Address,
    events: Publisher,
}

impl PoolMaster {
    pub fn new(owner: Address, vault: Address, fee_recipient: Address) -> Self {
        Self {
            access: AccessControl::new(owner),
            fee_policy: FeePolicy::new(fee_recipient),
            whitelist: FactoryWhitelist::default(),
            registry: PoolRegistry::default(),
            vault,
            events: Publisher::default(),
        }
    }

    /// Builds a pool master in the state described by `config`. Fees are
    /// checked against the same bounds the setters enforce.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut master = Self::new(config.owner, config.vault, config.fee_recipient);
        for factory in &config.whitelisted_factories {
            master.set_factory_whitelisted(config.owner, *factory, true)?;
        }
        for pool_type in &config.pool_types {
            master.set_default_swap_fee(
                config.owner,
                pool_type.pool_type,
                pool_type.default_swap_fee,
            )?;
            master.set_protocol_fee(config.owner, pool_type.pool_type, pool_type.protocol_fee)?;
        }
        for custom in &config.custom_swap_fees {
            master.set_custom_swap_fee(
                config.owner,
                custom.pool,
                CustomSwapFee::from_raw(custom.fee)?,
            )?;
        }
        tracing::info!(
            owner = ?config.owner,
            vault = ?config.vault,
            factories = config.whitelisted_factories.len(),
            pool_types = config.pool_types.len(),
            "initialized pool master"
        );
        Ok(master)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.events.subscribe()
    }

    fn emit(&self, event: Event) {
        tracing::info!(?event, "pool master state changed");
        self.events.publish(event);
    }

    pub fn owner(&self) -> Address {
        self.access.owner()
    }

    pub fn pending_owner(&self) -> Address {
        self.access.pending_owner()
    }

    /// Custody contract of the pools' funds. Never changes.
    pub fn vault(&self) -> Address {
        self.vault
    }

    pub fn transfer_ownership(&mut self, caller: Address, new_owner: Address) -> Result<()> {
        let auth = self.access.authorize(caller)?;
        let event = self.access.transfer_ownership(&auth, new_owner);
        self.emit(event);
        Ok(())
    }

    pub fn accept_ownership(&mut self, caller: Address) -> Result<()> {
        let event = self.access.accept_ownership(caller)?;
        self.emit(event);
        Ok(())
    }

    pub fn fee_policy(&self) -> &FeePolicy {
        &self.fee_policy
    }

    pub fn resolve_swap_fee(&self, pool: &dyn Pool) -> Fee {
        self.fee_policy.resolve_swap_fee(pool)
    }

    pub fn resolve_protocol_fee(&self, pool: &dyn Pool) -> Fee {
        self.fee_policy.resolve_protocol_fee(pool)
    }

    pub fn fee_recipient(&self) -> Address {
        self.fee_policy.fee_recipient()
    }

    pub fn set_default_swap_fee(
        &mut self,
        caller: Address,
        pool_type: PoolType,
        fee: Fee,
    ) -> Result<()> {
        let auth = self.access.authorize(caller)?;
        let event = self.fee_policy.set_default_swap_fee(&auth, pool_type, fee)?;
        self.emit(event);
        Ok(())
    }

    pub fn set_custom_swap_fee(
        &mut self,
        caller: Address,
        pool: Address,
        fee: CustomSwapFee,
    ) -> Result<()> {
        let auth = self.access.authorize(caller)?;
        let event = self.fee_policy.set_custom_swap_fee(&auth, pool, fee)?;
        self.emit(event);
        Ok(())
    }

    pub fn set_protocol_fee(&mut self, caller: Address, pool_type: PoolType, fee: Fee) -> Result<()> {
        let auth = self.access.authorize(caller)?;
        let event = self.fee_policy.set_protocol_fee(&auth, pool_type, fee)?;
        self.emit(event);
        Ok(())
    }

    pub fn set_fee_recipient(&mut self, caller: Address, recipient: Address) -> Result<()> {
        let auth = self.access.authorize(caller)?;
        let event = self.fee_policy.set_fee_recipient(&auth, recipient);
        self.emit(event);
        Ok(())
    }

    pub fn is_factory_whitelisted(&self, factory: Address) -> bool {
        self.whitelist.contains(factory)
    }

    pub fn set_factory_whitelisted(
        &mut self,
        caller: Address,
        factory: Address,
        whitelisted: bool,
    ) -> Result<()> {
        let auth = self.access.authorize(caller)?;
        let event = self.whitelist.set(&auth, factory, whitelisted);
        self.emit(event);
        Ok(())
    }

    pub fn registry(&self) -> &PoolRegistry {
        &self.registry
    }

    pub fn is_pool(&self, pool: Address) -> bool {
        self.registry.contains(pool)
    }

    pub fn get_pool(&self, key: PoolKey) -> Option<Address> {
        self.registry.get(key)
    }

    pub fn pools_length(&self) -> usize {
        self.registry.len()
    }

    pub fn pool_at(&self, index: usize) -> Option<Address> {
        self.registry.pool_at(index)
    }

    pub fn pool_entry(&self, pool: Address) -> Option<&PoolEntry> {
        self.registry.entry(pool)
    }

    /// Asks `factory` to deploy a pool from `data` and returns whatever pool
    /// the factory reports. No whitelist check happens here, a factory that is
    /// not whitelisted is still asked to construct and only fails once it
    /// tries to register.
    ///
    /// If the factory fails, every registration it performed during this call
    /// is undone and no events are emitted for them.
    pub fn create_pool(&mut self, factory: &dyn PoolFactory, data: &[u8]) -> Result<Address> {
        let checkpoint = self.registry.checkpoint();
        let (result, events) = {
            let mut callback = FactoryCallback {
                factory: factory.address(),
                whitelist: &self.whitelist,
                registry: &mut self.registry,
                events: Vec::new(),
            };
            let result = factory.create_pool(data, &mut callback);
            (result, callback.events)
        };

        match result {
            Ok(pool) => {
                for event in events {
                    self.emit(event);
                }
                Ok(pool)
            }
            Err(err) => {
                self.registry.rollback(checkpoint);
                tracing::warn!(factory = ?factory.address(), ?err, "pool creation failed");
                Err(err)
            }
        }
    }

    /// Registration entry point for whitelisted factories, see
    /// [`PoolRegistry::register`].
    pub fn register_pool(
        &mut self,
        caller: Address,
        pool: Address,
        pool_type: PoolType,
        data: &[u8],
    ) -> Result<()> {
        let event = register(&self.whitelist, &mut self.registry, caller, pool, pool_type, data)?;
        self.emit(event);
        Ok(())
    }
}

struct FactoryCallback<'a> {
    factory: Address,
    whitelist: &'a FactoryWhitelist,
    registry: &'a mut PoolRegistry,
    events: Vec<Event>,
}

impl PoolRegistrar for FactoryCallback<'_> {
    fn register_pool(&mut self, pool: Address, pool_type: PoolType, data: &[u8]) -> Result<()> {
        let event = register(
            self.whitelist,
            self.registry,
            self.factory,
            pool,
            pool_type,
            data,
        )?;
        self.events.push(event);
        Ok(())
    }
}

fn register(
    whitelist: &FactoryWhitelist,
    registry: &mut PoolRegistry,
    factory: Address,
    pool: Address,
    pool_type: PoolType,
    data: &[u8],
) -> Result<Event> {
    if !whitelist.contains(factory) {
        tracing::debug!(?factory, ?pool, "registration from non-whitelisted factory");
        return Err(Error::NotWhitelistedFactory(factory));
    }
    registry.register(factory, pool, pool_type, data)
}
