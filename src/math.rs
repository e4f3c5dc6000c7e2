//! Mathematical utilities for the reward pool
//! Implements checked U512 arithmetic and the proportional reward split
use alloc::vec::Vec;
use odra::casper_types::U512;
use crate::errors::PoolError;

/// Safe math operations for U512
pub struct SafeMath;

impl SafeMath {
    /// Safe addition with overflow check
    pub fn add(a: U512, b: U512) -> Result<U512, PoolError> {
        a.checked_add(b).ok_or(PoolError::ArithmeticOverflow)
    }

    /// Safe subtraction, an underflow means the ledger totals are out of range
    pub fn sub(a: U512, b: U512) -> Result<U512, PoolError> {
        a.checked_sub(b).ok_or(PoolError::ArithmeticOverflow)
    }

    /// Safe multiplication with overflow check
    pub fn mul(a: U512, b: U512) -> Result<U512, PoolError> {
        a.checked_mul(b).ok_or(PoolError::ArithmeticOverflow)
    }

    /// Safe division with zero check
    pub fn div(a: U512, b: U512) -> Result<U512, PoolError> {
        if b.is_zero() {
            return Err(PoolError::ArithmeticOverflow);
        }
        Ok(a / b)
    }
}

/// Proportional reward calculations
pub struct RewardMath;

impl RewardMath {
    /// Calculate a single holder's share of `amount`
    /// share = floor(amount * principal / total)
    pub fn share_of(amount: U512, principal: U512, total: U512) -> Result<U512, PoolError> {
        if total.is_zero() {
            return Err(PoolError::NoDepositors);
        }
        SafeMath::div(SafeMath::mul(amount, principal)?, total)
    }

    /// Split `amount` across `holders` in proportion to their principal.
    ///
    /// Shares are truncated, so their sum can fall short of `amount` by at
    /// most `holders.len() - 1`. The shortfall is left to the caller. Output
    /// order matches input order.
    pub fn split<K: Copy>(
        amount: U512,
        holders: &[(K, U512)],
        total: U512,
    ) -> Result<Vec<(K, U512)>, PoolError> {
        if amount.is_zero() {
            return Err(PoolError::InvalidAmount);
        }
        if total.is_zero() || holders.is_empty() {
            return Err(PoolError::NoDepositors);
        }

        let mut shares = Vec::with_capacity(holders.len());
        let mut distributed = U512::zero();
        for (key, principal) in holders {
            let share = Self::share_of(amount, *principal, total)?;
            distributed = SafeMath::add(distributed, share)?;
            shares.push((*key, share));
        }

        // Holders whose principal exceeds `total` would overpay
        if distributed > amount {
            return Err(PoolError::ArithmeticOverflow);
        }

        Ok(shares)
    }

    /// Sum of the shares produced by `split`
    pub fn total_of<K>(shares: &[(K, U512)]) -> Result<U512, PoolError> {
        shares
            .iter()
            .try_fold(U512::zero(), |acc, (_, share)| SafeMath::add(acc, *share))
    }
}
