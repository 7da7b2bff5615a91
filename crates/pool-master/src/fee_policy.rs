//! Swap and protocol fee configuration and resolution.

use {
    crate::{
        access::Authorized,
        domain::{CustomSwapFee, Fee, MAX_PROTOCOL_FEE, MAX_SWAP_FEE, Pool, PoolType},
        error::Result,
        events::Event,
    },
    alloy_primitives::Address,
    std::collections::HashMap,
};

#[derive(Debug)]
pub struct FeePolicy {
    default_swap_fees: HashMap<PoolType, Fee>,
    protocol_fees: HashMap<PoolType, Fee>,
    custom_swap_fees: HashMap<Address, CustomSwapFee>,
    fee_recipient: Address,
}

impl FeePolicy {
    pub fn new(fee_recipient: Address) -> Self {
        Self {
            default_swap_fees: Default::default(),
            protocol_fees: Default::default(),
            custom_swap_fees: Default::default(),
            fee_recipient,
        }
    }

    /// Returns the swap fee the pool should charge: the pool's override if
    /// one is set, otherwise the default of its type.
    pub fn resolve_swap_fee(&self, pool: &dyn Pool) -> Fee {
        match self.custom_swap_fee(pool.address()) {
            CustomSwapFee::Unset => self.default_swap_fee(pool.pool_type()),
            CustomSwapFee::Zero => Fee::ZERO,
            CustomSwapFee::Fixed(fee) => fee,
        }
    }

    /// Share of the collected swap fees owed to the fee recipient.
    pub fn resolve_protocol_fee(&self, pool: &dyn Pool) -> Fee {
        self.protocol_fee(pool.pool_type())
    }

    pub fn default_swap_fee(&self, pool_type: PoolType) -> Fee {
        self.default_swap_fees
            .get(&pool_type)
            .copied()
            .unwrap_or_default()
    }

    pub fn protocol_fee(&self, pool_type: PoolType) -> Fee {
        self.protocol_fees.get(&pool_type).copied().unwrap_or_default()
    }

    pub fn custom_swap_fee(&self, pool: Address) -> CustomSwapFee {
        self.custom_swap_fees.get(&pool).copied().unwrap_or_default()
    }

    pub fn fee_recipient(&self) -> Address {
        self.fee_recipient
    }

    pub fn set_default_swap_fee(
        &mut self,
        _: &Authorized,
        pool_type: PoolType,
        fee: Fee,
    ) -> Result<Event> {
        let fee = fee.bounded(MAX_SWAP_FEE)?;
        let previous = self
            .default_swap_fees
            .insert(pool_type, fee)
            .unwrap_or_default();
        Ok(Event::UpdateDefaultSwapFee {
            pool_type,
            previous,
            fee,
        })
    }

    pub fn set_custom_swap_fee(
        &mut self,
        _: &Authorized,
        pool: Address,
        fee: CustomSwapFee,
    ) -> Result<Event> {
        let fee = fee.validated()?;
        let previous = match fee {
            CustomSwapFee::Unset => self.custom_swap_fees.remove(&pool),
            _ => self.custom_swap_fees.insert(pool, fee),
        }
        .unwrap_or_default();
        Ok(Event::UpdateCustomSwapFee {
            pool,
            previous,
            fee,
        })
    }

    pub fn set_protocol_fee(
        &mut self,
        _: &Authorized,
        pool_type: PoolType,
        fee: Fee,
    ) -> Result<Event> {
        let fee = fee.bounded(MAX_PROTOCOL_FEE)?;
        let previous = self.protocol_fees.insert(pool_type, fee).unwrap_or_default();
        Ok(Event::UpdateProtocolFee {
            pool_type,
            previous,
            fee,
        })
    }

    pub fn set_fee_recipient(&mut self, _: &Authorized, recipient: Address) -> Event {
        let previous = std::mem::replace(&mut self.fee_recipient, recipient);
        Event::UpdateFeeRecipient {
            previous,
            recipient,
        }
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{access::AccessControl, domain::MockPool, error::Error},
        rstest::rstest,
        testlib::accounts::{FEE_RECIPIENT, OWNER, POOL_A, TREASURY},
    };

    fn pool(address: Address, pool_type: u16) -> MockPool {
        let mut pool = MockPool::new();
        pool.expect_address().return_const(address);
        pool.expect_pool_type().return_const(PoolType(pool_type));
        pool
    }

    fn authorized() -> Authorized {
        AccessControl::new(OWNER).authorize(OWNER).unwrap()
    }

    #[test]
    fn falls_back_to_type_default() {
        let auth = authorized();
        let mut policy = FeePolicy::new(FEE_RECIPIENT);
        policy
            .set_default_swap_fee(&auth, PoolType(1), Fee(300))
            .unwrap();
        policy
            .set_default_swap_fee(&auth, PoolType(2), Fee(40))
            .unwrap();

        assert_eq!(policy.resolve_swap_fee(&pool(POOL_A, 1)), Fee(300));
        assert_eq!(policy.resolve_swap_fee(&pool(POOL_A, 2)), Fee(40));
        assert_eq!(policy.resolve_swap_fee(&pool(POOL_A, 3)), Fee::ZERO);
    }

    #[test]
    fn explicit_zero_ignores_default() {
        let auth = authorized();
        let mut policy = FeePolicy::new(FEE_RECIPIENT);
        policy
            .set_default_swap_fee(&auth, PoolType(1), Fee(300))
            .unwrap();
        policy
            .set_custom_swap_fee(&auth, POOL_A, CustomSwapFee::Zero)
            .unwrap();

        assert_eq!(policy.resolve_swap_fee(&pool(POOL_A, 1)), Fee::ZERO);
    }

    #[test]
    fn fixed_override_wins() {
        let auth = authorized();
        let mut policy = FeePolicy::new(FEE_RECIPIENT);
        policy
            .set_default_swap_fee(&auth, PoolType(1), Fee(300))
            .unwrap();
        policy
            .set_custom_swap_fee(&auth, POOL_A, CustomSwapFee::Fixed(Fee(10_000)))
            .unwrap();
        assert_eq!(policy.resolve_swap_fee(&pool(POOL_A, 1)), Fee(10_000));

        let event = policy
            .set_custom_swap_fee(&auth, POOL_A, CustomSwapFee::Unset)
            .unwrap();
        assert_eq!(
            event,
            Event::UpdateCustomSwapFee {
                pool: POOL_A,
                previous: CustomSwapFee::Fixed(Fee(10_000)),
                fee: CustomSwapFee::Unset,
            }
        );
        assert_eq!(policy.resolve_swap_fee(&pool(POOL_A, 1)), Fee(300));
    }

    #[rstest]
    #[case(10_000, true)]
    #[case(10_001, false)]
    fn default_swap_fee_bound(#[case] fee: u32, #[case] accepted: bool) {
        let mut policy = FeePolicy::new(FEE_RECIPIENT);
        let result = policy.set_default_swap_fee(&authorized(), PoolType(1), Fee(fee));
        assert_eq!(result.is_ok(), accepted);
        if !accepted {
            assert!(matches!(result, Err(Error::InvalidFee { .. })));
            assert_eq!(policy.default_swap_fee(PoolType(1)), Fee::ZERO);
        }
    }

    #[rstest]
    #[case(100_000, true)]
    #[case(100_001, false)]
    fn protocol_fee_bound(#[case] fee: u32, #[case] accepted: bool) {
        let mut policy = FeePolicy::new(FEE_RECIPIENT);
        let result = policy.set_protocol_fee(&authorized(), PoolType(1), Fee(fee));
        assert_eq!(result.is_ok(), accepted);
        let stored = if accepted { Fee(fee) } else { Fee::ZERO };
        assert_eq!(policy.resolve_protocol_fee(&pool(POOL_A, 1)), stored);
    }

    #[test]
    fn fee_recipient_event_carries_previous_value() {
        let mut policy = FeePolicy::new(FEE_RECIPIENT);
        let event = policy.set_fee_recipient(&authorized(), TREASURY);
        assert_eq!(
            event,
            Event::UpdateFeeRecipient {
                previous: FEE_RECIPIENT,
                recipient: TREASURY,
            }
        );
        assert_eq!(policy.fee_recipient(), TREASURY);
    }
}
