#![cfg_attr(not(test), no_std)]
#![cfg_attr(not(test), no_main)]
extern crate alloc;

pub mod errors;
pub mod math;

// Pooled deposits with proportional reward distribution
pub mod pool;
