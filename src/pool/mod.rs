//! Reward Pool - pooled native deposits with proportional reward sharing
//! 
//! Participants deposit CSPR, anyone can inject rewards that are split across
//! current depositors by principal share, and a withdrawal settles principal
//! plus accrued rewards in one payment.

pub mod reward_pool;
pub mod events;


pub use reward_pool::{Participant, RewardPool};
pub use crate::errors::PoolError;
pub use events::*;
