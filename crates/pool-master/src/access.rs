//! Single owner access control with a two step ownership transfer.

use {
    crate::{
        error::{Error, Result},
        events::Event,
    },
    alloy_primitives::Address,
};

/// Proof that the caller of the current operation is the owner. It can only
/// be obtained from [`AccessControl::authorize`], so every administrative
/// setter that asks for one is owner gated by construction.
#[derive(Debug)]
pub struct Authorized {
    _private: (),
}

#[derive(Debug)]
pub struct AccessControl {
    owner: Address,
    pending_owner: Address,
}

impl AccessControl {
    pub fn new(owner: Address) -> Self {
        Self {
            owner,
            pending_owner: Address::ZERO,
        }
    }

    pub fn owner(&self) -> Address {
        self.owner
    }

    /// The account that may accept ownership, `Address::ZERO` if no transfer
    /// is in progress.
    pub fn pending_owner(&self) -> Address {
        self.pending_owner
    }

    pub fn authorize(&self, caller: Address) -> Result<Authorized> {
        if caller != self.owner {
            tracing::debug!(?caller, owner = ?self.owner, "rejected non-owner caller");
            return Err(Error::Unauthorized { caller });
        }
        Ok(Authorized { _private: () })
    }

    /// Starts handing over ownership to `new_owner`. Transferring to
    /// `Address::ZERO` cancels a pending transfer.
    pub fn transfer_ownership(&mut self, _: &Authorized, new_owner: Address) -> Event {
        self.pending_owner = new_owner;
        Event::OwnershipTransferStarted {
            owner: self.owner,
            pending_owner: new_owner,
        }
    }

    pub fn accept_ownership(&mut self, caller: Address) -> Result<Event> {
        if self.pending_owner.is_zero() || caller != self.pending_owner {
            return Err(Error::Unauthorized { caller });
        }
        let previous_owner = std::mem::replace(&mut self.owner, caller);
        self.pending_owner = Address::ZERO;
        Ok(Event::OwnershipTransferred {
            previous_owner,
            new_owner: caller,
        })
    }
}
