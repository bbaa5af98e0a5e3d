//! Denomination selection.
//!
//! Pure, stateless logic that turns an amount and a snapshot of available
//! notes into the notes to dispense. No locking and no shared state; callers
//! own the snapshot they pass in.

pub mod greedy;
pub mod strategy;

pub use greedy::{GreedySelector, select};
pub use strategy::DispenseStrategy;
