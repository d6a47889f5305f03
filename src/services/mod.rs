//! Service layer for the budget distributor
//!
//! The allocation engine holds the business logic on top of the storage
//! layer: validation, distribution math, and persistence sequencing.

pub mod allocation;

pub use allocation::{AddFundsOutcome, AllocationEngine, WithdrawReceipt};
