//! `cashpoint-core` — value types shared by the selector and the inventory.
//!
//! This crate contains **pure domain** primitives (no locking, no logging).

pub mod denomination;
pub mod error;
pub mod payout;
pub mod stock;
pub mod value_object;

pub use denomination::{Denomination, UNIT};
pub use error::{CashError, CashResult};
pub use payout::Payout;
pub use stock::{Sanitized, Stock};
pub use value_object::ValueObject;
