//! Change notifications emitted by successful mutations.
//!
//! Indexers subscribe through [`Publisher::subscribe`]. Delivery is best
//! effort: a slow subscriber that falls behind the channel capacity observes
//! a lag error on its receiver, the pool master itself never blocks on it.

use {
    crate::domain::{Address, Bytes, CustomSwapFee, Fee, PoolType},
    tokio::sync::broadcast,
};

const CHANNEL_CAPACITY: usize = 1024;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    OwnershipTransferStarted {
        owner: Address,
        pending_owner: Address,
    },
    OwnershipTransferred {
        previous_owner: Address,
        new_owner: Address,
    },
    UpdateDefaultSwapFee {
        pool_type: PoolType,
        previous: Fee,
        fee: Fee,
    },
    UpdateCustomSwapFee {
        pool: Address,
        previous: CustomSwapFee,
        fee: CustomSwapFee,
    },
    UpdateProtocolFee {
        pool_type: PoolType,
        previous: Fee,
        fee: Fee,
    },
    UpdateFeeRecipient {
        previous: Address,
        recipient: Address,
    },
    UpdateFactoryWhitelist {
        factory: Address,
        whitelisted: bool,
    },
    RegisterPool {
        factory: Address,
        pool: Address,
        pool_type: PoolType,
        data: Bytes,
    },
}

#[derive(Debug)]
pub struct Publisher(broadcast::Sender<Event>);

impl Publisher {
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.0.subscribe()
    }

    pub(crate) fn publish(&self, event: Event) {
        tracing::debug!(?event, "publishing event");
        // An error only means that nobody is listening right now.
        let _ = self.0.send(event);
    }
}

impl Default for Publisher {
    fn default() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self(sender)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publishing_without_subscribers_is_fine() {
        Publisher::default().publish(Event::UpdateFactoryWhitelist {
            factory: Address::ZERO,
            whitelisted: true,
        });
    }

    #[test]
    fn subscribers_receive_events_in_order() {
        let publisher = Publisher::default();
        let mut receiver = publisher.subscribe();
        let first = Event::UpdateFactoryWhitelist {
            factory: Address::repeat_byte(1),
            whitelisted: true,
        };
        let second = Event::UpdateFactoryWhitelist {
            factory: Address::repeat_byte(1),
            whitelisted: false,
        };
        publisher.publish(first.clone());
        publisher.publish(second.clone());
        assert_eq!(receiver.try_recv().unwrap(), first);
        assert_eq!(receiver.try_recv().unwrap(), second);
        assert!(receiver.try_recv().is_err());
    }
}
