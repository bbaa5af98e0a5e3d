//! Note face values.

use serde::{Deserialize, Serialize};

use crate::error::{CashError, CashResult};
use crate::value_object::ValueObject;

/// Smallest currency unit; every denomination and amount is a multiple of it.
pub const UNIT: i64 = 10;

/// Face value of a note, in the smallest currency unit.
///
/// The derived `Ord` is ascending by value and only serves as a map key order.
/// Dispensing order is chosen explicitly by the selector.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "i64", try_from = "i64")]
pub struct Denomination(u32);

impl Denomination {
    /// Validate a raw face value.
    pub fn new(value: i64) -> CashResult<Self> {
        if value <= 0 || value % UNIT != 0 {
            return Err(CashError::invalid_input(format!(
                "invalid denomination {value}: must be a positive multiple of {UNIT}"
            )));
        }
        let value = u32::try_from(value).map_err(|_| {
            CashError::invalid_input(format!("denomination {value} is out of range"))
        })?;
        Ok(Self(value))
    }

    pub fn value(self) -> i64 {
        i64::from(self.0)
    }
}

impl ValueObject for Denomination {}

impl core::fmt::Display for Denomination {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<i64> for Denomination {
    type Error = CashError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Denomination> for i64 {
    fn from(value: Denomination) -> Self {
        value.value()
    }
}

impl core::str::FromStr for Denomination {
    type Err = CashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|e| CashError::invalid_input(format!("denomination '{s}': {e}")))?;
        Self::new(value)
    }
}
