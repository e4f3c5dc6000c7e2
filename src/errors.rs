//! Error definitions for the reward pool contract
use odra::prelude::*;

/// Custom errors for the reward pool
#[odra::odra_error]
pub enum PoolError {
    /// Amount must be greater than zero
    InvalidAmount = 1,

    /// No depositors are available for rewards
    NoDepositors = 2,

    /// User has nothing to withdraw
    NothingToWithdraw = 3,

    /// Arithmetic overflow
    ArithmeticOverflow = 4,

    /// Payment failed
    PaymentFailed = 5,

    /// Attached value does not match the declared amount
    AttachedValueMismatch = 6,

    /// Locked - reentrancy guard
    Locked = 7,

    /// Participant list and slot index disagree
    InconsistentState = 8,
}

impl PoolError {
    /// Human-readable message reported alongside the error code
    pub fn message(&self) -> &'static str {
        match self {
            PoolError::InvalidAmount => "Amount must be greater than zero",
            PoolError::NoDepositors => "No depositors are available for rewards",
            PoolError::NothingToWithdraw => "User has nothing to withdraw",
            PoolError::ArithmeticOverflow => "Arithmetic overflow",
            PoolError::PaymentFailed => "Payment failed",
            PoolError::AttachedValueMismatch => "Attached value does not match the declared amount",
            PoolError::Locked => "Reentrant call rejected",
            PoolError::InconsistentState => "Participant list is inconsistent",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_messages() {
        assert_eq!(PoolError::NothingToWithdraw.message(), "User has nothing to withdraw");
        assert_eq!(
            PoolError::NoDepositors.message(),
            "No depositors are available for rewards"
        );
    }

    #[test]
    fn test_internal_failure_not_reported_as_user_error() {
        assert_ne!(
            PoolError::InconsistentState.message(),
            PoolError::NothingToWithdraw.message()
        );
        assert_ne!(PoolError::InconsistentState as u16, PoolError::NothingToWithdraw as u16);
    }
}
