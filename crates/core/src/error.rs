//! Error model for dispensing and stock management.

use thiserror::Error;

use crate::denomination::{Denomination, UNIT};

/// Result type used across the cashpoint crates.
pub type CashResult<T> = Result<T, CashError>;

/// Failure of a selection or inventory operation.
///
/// None of these leave the stock mutated. `InvalidAmount` and `InvalidInput`
/// are caller errors; `Infeasible` and `InsufficientStock` are domain outcomes
/// a host may answer by asking for a different amount.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CashError {
    /// The amount is non-positive or not a multiple of the smallest unit.
    #[error("invalid amount {0}: must be a positive multiple of {}", UNIT)]
    InvalidAmount(i64),

    /// No combination of the available notes sums to the amount.
    #[error("cannot dispense {amount} with the available denominations")]
    Infeasible { amount: i64 },

    /// A proposed payout asks for more notes than are held.
    #[error(
        "insufficient notes of {denomination}: requested {requested}, available {available}"
    )]
    InsufficientStock {
        denomination: Denomination,
        requested: u32,
        available: u32,
    },

    /// Malformed argument (bad denomination, non-positive count, overflow).
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl CashError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn infeasible(amount: i64) -> Self {
        Self::Infeasible { amount }
    }

    /// Bad arguments supplied by the caller.
    pub fn is_caller_error(&self) -> bool {
        matches!(self, Self::InvalidAmount(_) | Self::InvalidInput(_))
    }

    /// Outcomes caused by what the machine currently holds.
    pub fn is_domain_outcome(&self) -> bool {
        matches!(self, Self::Infeasible { .. } | Self::InsufficientStock { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_errors() {
        assert!(CashError::InvalidAmount(125).is_caller_error());
        assert!(CashError::invalid_input("count must be positive").is_caller_error());
        assert!(CashError::infeasible(150).is_domain_outcome());

        let short = CashError::InsufficientStock {
            denomination: Denomination::new(100).unwrap(),
            requested: 3,
            available: 2,
        };
        assert!(short.is_domain_outcome());
        assert!(!short.is_caller_error());
    }

    #[test]
    fn messages_name_the_offending_values() {
        assert_eq!(
            CashError::InvalidAmount(125).to_string(),
            "invalid amount 125: must be a positive multiple of 10"
        );
        let short = CashError::InsufficientStock {
            denomination: Denomination::new(500).unwrap(),
            requested: 4,
            available: 1,
        };
        assert_eq!(
            short.to_string(),
            "insufficient notes of 500: requested 4, available 1"
        );
    }
}
