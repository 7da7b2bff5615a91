use {
    crate::{access::Authorized, events::Event},
    alloy_primitives::Address,
    std::collections::HashSet,
};

/// Factories allowed to register pools.
#[derive(Debug, Default)]
pub struct FactoryWhitelist(HashSet<Address>);

impl FactoryWhitelist {
    pub fn contains(&self, factory: Address) -> bool {
        self.0.contains(&factory)
    }

    pub fn set(&mut self, _: &Authorized, factory: Address, whitelisted: bool) -> Event {
        if whitelisted {
            self.0.insert(factory);
        } else {
            self.0.remove(&factory);
        }
        Event::UpdateFactoryWhitelist {
            factory,
            whitelisted,
        }
    }
}
