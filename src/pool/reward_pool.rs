//! Reward Pool - deposit CSPR, share injected rewards, withdraw everything at once
//!
//! Rewards are split by `floor(amount * principal / total_principal)`. The
//! truncation remainder is never paid out; it is tracked in
//! `undistributed_rewards` so the contract balance always equals
//! `total_principal + total_rewards_pending + undistributed_rewards`.

use odra::prelude::*;
use odra::casper_types::U512;
use crate::errors::PoolError;
use crate::math::{RewardMath, SafeMath};
use super::events::*;

/// Participant balance record
#[odra::odra_type]
pub struct Participant {
    /// Deposited amount, net of withdrawals
    pub principal: U512,
    /// Distributed rewards not yet withdrawn
    pub accrued_reward: U512,
}

impl Participant {
    pub fn empty() -> Self {
        Participant {
            principal: U512::zero(),
            accrued_reward: U512::zero(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.principal.is_zero() && self.accrued_reward.is_zero()
    }
}

/// Reward Pool contract
#[odra::module]
pub struct RewardPool {
    /// Balance records by participant
    participants: Mapping<Address, Participant>,
    /// Participant list (for iteration) - dense slots `0..participant_count`
    participant_list: Mapping<u32, Address>,
    /// Slot of each listed participant
    participant_slots: Mapping<Address, u32>,
    /// Number of listed participants
    participant_count: Var<u32>,
    /// Sum of all principals
    total_principal: Var<U512>,
    /// Sum of all accrued rewards
    total_rewards_pending: Var<U512>,
    /// Truncation remainders from reward splits
    undistributed_rewards: Var<U512>,
    /// Reentrancy lock
    locked: Var<bool>,
}

#[odra::module]
impl RewardPool {
    // ========================================
    // Pool Operations
    // ========================================

    /// Deposit CSPR as principal
    ///
    /// # Arguments
    /// * `amount` - Declared deposit, must equal the attached value
    #[odra(payable)]
    pub fn deposit(&mut self, amount: U512) {
        self.lock();
        self.ensure_attached(amount);

        let caller = self.env().caller();
        let mut participant = self.participants.get(&caller).unwrap_or_else(Participant::empty);

        // Only participants with principal are listed
        if participant.principal.is_zero() {
            self.append_participant(caller);
        }

        participant.principal = self.ensure(SafeMath::add(participant.principal, amount));
        let total_principal = self.ensure(SafeMath::add(self.total_principal.get_or_default(), amount));

        let principal = participant.principal;
        self.participants.set(&caller, participant);
        self.total_principal.set(total_principal);

        self.env().emit_event(Deposited {
            participant: caller,
            amount,
            principal,
            total_principal,
        });

        self.unlock();
    }

    /// Deposit rewards to be split across current participants
    ///
    /// # Arguments
    /// * `amount` - Declared reward, must equal the attached value
    #[odra(payable)]
    pub fn deposit_rewards(&mut self, amount: U512) {
        self.lock();
        self.ensure_attached(amount);

        let total_principal = self.total_principal.get_or_default();
        if total_principal.is_zero() {
            self.env().revert(PoolError::NoDepositors);
        }

        let holders = self.holders();
        let shares = self.ensure(RewardMath::split(amount, &holders, total_principal));
        let distributed = self.ensure(RewardMath::total_of(&shares));
        let remainder = self.ensure(SafeMath::sub(amount, distributed));

        for (address, share) in shares {
            if share.is_zero() {
                continue;
            }
            let mut participant = self.participants.get(&address).unwrap_or_else(Participant::empty);
            participant.accrued_reward = self.ensure(SafeMath::add(participant.accrued_reward, share));
            self.participants.set(&address, participant);
        }

        let pending = self.ensure(SafeMath::add(self.total_rewards_pending.get_or_default(), distributed));
        let undistributed = self.ensure(SafeMath::add(self.undistributed_rewards.get_or_default(), remainder));
        self.total_rewards_pending.set(pending);
        self.undistributed_rewards.set(undistributed);

        self.env().emit_event(RewardsDeposited {
            depositor: self.env().caller(),
            amount,
            distributed,
            remainder,
            participant_count: holders.len() as u32,
        });

        self.unlock();
    }

    /// Withdraw principal plus accrued rewards and clear the caller's record
    ///
    /// # Returns
    /// The amount paid out
    pub fn withdraw(&mut self) -> U512 {
        self.lock();

        let caller = self.env().caller();
        let participant = self.participants.get(&caller).unwrap_or_else(Participant::empty);
        if participant.is_empty() {
            self.env().revert(PoolError::NothingToWithdraw);
        }

        let payout = self.ensure(SafeMath::add(participant.principal, participant.accrued_reward));
        let total_principal = self.ensure(SafeMath::sub(
            self.total_principal.get_or_default(),
            participant.principal,
        ));
        let pending = self.ensure(SafeMath::sub(
            self.total_rewards_pending.get_or_default(),
            participant.accrued_reward,
        ));

        // Commit the cleared balance before paying out
        self.participants.set(&caller, Participant::empty());
        self.remove_participant(caller);
        self.total_principal.set(total_principal);
        self.total_rewards_pending.set(pending);

        // A revert here discards the commit above
        if self.env().self_balance() < payout {
            self.env().revert(PoolError::PaymentFailed);
        }
        self.env().transfer_tokens(&caller, &payout);

        self.env().emit_event(Withdrawn {
            participant: caller,
            principal: participant.principal,
            reward: participant.accrued_reward,
            payout,
        });

        self.unlock();
        payout
    }

    // ========================================
    // View Functions
    // ========================================

    pub fn get_participant(&self, participant: Address) -> Option<Participant> {
        self.participants
            .get(&participant)
            .filter(|record| !record.is_empty())
    }

    /// Principal plus accrued rewards
    pub fn get_balance(&self, participant: Address) -> U512 {
        match self.participants.get(&participant) {
            Some(record) => record.principal.saturating_add(record.accrued_reward),
            None => U512::zero(),
        }
    }

    pub fn get_principal(&self, participant: Address) -> U512 {
        self.participants
            .get(&participant)
            .map(|record| record.principal)
            .unwrap_or_default()
    }

    pub fn get_accrued_reward(&self, participant: Address) -> U512 {
        self.participants
            .get(&participant)
            .map(|record| record.accrued_reward)
            .unwrap_or_default()
    }

    pub fn get_total_principal(&self) -> U512 {
        self.total_principal.get_or_default()
    }

    pub fn get_total_rewards_pending(&self) -> U512 {
        self.total_rewards_pending.get_or_default()
    }

    pub fn get_undistributed_rewards(&self) -> U512 {
        self.undistributed_rewards.get_or_default()
    }

    pub fn get_participant_count(&self) -> u32 {
        self.participant_count.get_or_default()
    }

    /// Listed participants in distribution order
    pub fn get_participants(&self) -> Vec<Address> {
        (0..self.participant_count.get_or_default())
            .filter_map(|slot| self.participant_list.get(&slot))
            .collect()
    }
}

impl RewardPool {
    // ========================================
    // Internal Functions
    // ========================================

    /// `(participant, principal)` pairs in slot order
    fn holders(&self) -> Vec<(Address, U512)> {
        self.get_participants()
            .into_iter()
            .map(|address| (address, self.get_principal(address)))
            .collect()
    }

    fn append_participant(&mut self, participant: Address) {
        let slot = self.participant_count.get_or_default();
        self.participant_list.set(&slot, participant);
        self.participant_slots.set(&participant, slot);
        self.participant_count.set(slot + 1);
    }

    /// Swap-remove: the last listed participant takes over the freed slot
    fn remove_participant(&mut self, participant: Address) {
        let count = self.participant_count.get_or_default();
        let slot = self
            .participant_slots
            .get(&participant)
            .unwrap_or_revert_with(&self.env(), PoolError::InconsistentState);
        if count == 0 || slot >= count {
            self.env().revert(PoolError::InconsistentState);
        }

        let last = count - 1;
        if slot != last {
            let moved = self
                .participant_list
                .get(&last)
                .unwrap_or_revert_with(&self.env(), PoolError::InconsistentState);
            self.participant_list.set(&slot, moved);
            self.participant_slots.set(&moved, slot);
        }
        self.participant_count.set(last);
    }

    /// Rejects zero amounts and attached value that differs from `amount`
    fn ensure_attached(&self, amount: U512) {
        if amount.is_zero() {
            self.env().revert(PoolError::InvalidAmount);
        }
        if self.env().attached_value() != amount {
            self.env().revert(PoolError::AttachedValueMismatch);
        }
    }

    fn ensure<T>(&self, result: Result<T, PoolError>) -> T {
        result.unwrap_or_else(|error| self.env().revert(error))
    }

    /// Reentrancy lock
    fn lock(&mut self) {
        if self.locked.get_or_default() {
            self.env().revert(PoolError::Locked);
        }
        self.locked.set(true);
    }

    /// Reentrancy unlock
    fn unlock(&mut self) {
        self.locked.set(false);
    }
}
