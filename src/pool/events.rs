//! Events for the Reward Pool

use odra::prelude::*;
use odra::casper_types::U512;

/// Event emitted when a participant deposits principal
#[odra::event]
pub struct Deposited {
    pub participant: Address,
    pub amount: U512,
    /// Participant principal after the deposit
    pub principal: U512,
    pub total_principal: U512,
}

/// Event emitted when rewards are split across participants
#[odra::event]
pub struct RewardsDeposited {
    pub depositor: Address,
    pub amount: U512,
    /// Sum of the credited shares
    pub distributed: U512,
    /// Truncation remainder left undistributed
    pub remainder: U512,
    pub participant_count: u32,
}

/// Event emitted when a participant settles their balance
#[odra::event]
pub struct Withdrawn {
    pub participant: Address,
    pub principal: U512,
    pub reward: U512,
    pub payout: U512,
}
