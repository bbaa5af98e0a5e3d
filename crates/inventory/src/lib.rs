//! Note inventory of a cash machine.
//!
//! Owns the authoritative [`Stock`](cashpoint_core::Stock) and applies every
//! withdrawal, load, snapshot and reset as a single serialized transaction.

pub mod inventory;

pub use inventory::Inventory;
