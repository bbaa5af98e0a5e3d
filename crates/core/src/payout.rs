//! Notes handed out for a single withdrawal.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::denomination::Denomination;
use crate::error::CashError;
use crate::stock::write_notes;
use crate::value_object::ValueObject;

/// Notes to dispense for one withdrawal.
///
/// Every entry has a positive count. Produced fresh per request and owned by
/// the caller; the weighted sum equals the amount that was requested.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "BTreeMap<Denomination, u32>", try_from = "BTreeMap<Denomination, u32>")]
pub struct Payout {
    notes: BTreeMap<Denomination, u32>,
}

impl Payout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` notes of `denomination`; zero counts are ignored.
    pub fn record(&mut self, denomination: Denomination, count: u32) {
        if count > 0 {
            *self.notes.entry(denomination).or_insert(0) += count;
        }
    }

    pub fn count(&self, denomination: Denomination) -> u32 {
        self.notes.get(&denomination).copied().unwrap_or(0)
    }

    /// Entries in descending denomination order.
    pub fn iter(&self) -> impl Iterator<Item = (Denomination, u32)> + '_ {
        self.notes.iter().rev().map(|(d, c)| (*d, *c))
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn total_notes(&self) -> u64 {
        self.notes.values().map(|c| u64::from(*c)).sum()
    }

    /// Weighted sum of the payout.
    pub fn total_value(&self) -> i64 {
        self.notes
            .iter()
            .map(|(d, c)| d.value() * i64::from(*c))
            .sum()
    }
}

impl ValueObject for Payout {}

impl FromIterator<(Denomination, u32)> for Payout {
    fn from_iter<T: IntoIterator<Item = (Denomination, u32)>>(iter: T) -> Self {
        let mut payout = Self::new();
        for (d, c) in iter {
            payout.record(d, c);
        }
        payout
    }
}

impl TryFrom<BTreeMap<Denomination, u32>> for Payout {
    type Error = CashError;

    fn try_from(notes: BTreeMap<Denomination, u32>) -> Result<Self, Self::Error> {
        if let Some((denomination, _)) = notes.iter().find(|(_, c)| **c == 0) {
            return Err(CashError::invalid_input(format!(
                "payout lists zero notes of {denomination}"
            )));
        }
        Ok(Self { notes })
    }
}

impl From<Payout> for BTreeMap<Denomination, u32> {
    fn from(payout: Payout) -> Self {
        payout.notes
    }
}

impl core::fmt::Display for Payout {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write_notes(f, self.notes.iter().rev())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(value: i64) -> Denomination {
        Denomination::new(value).unwrap()
    }

    #[test]
    fn record_skips_zero_and_accumulates() {
        let mut payout = Payout::new();
        payout.record(d(500), 0);
        assert!(payout.is_empty());

        payout.record(d(500), 1);
        payout.record(d(500), 2);
        assert_eq!(payout.count(d(500)), 3);
        assert_eq!(payout.len(), 1);
    }

    #[test]
    fn totals_and_order() {
        let payout: Payout = [(d(100), 1), (d(2000), 1), (d(500), 1)]
            .into_iter()
            .collect();
        assert_eq!(payout.total_value(), 2600);
        assert_eq!(payout.total_notes(), 3);

        let order: Vec<i64> = payout.iter().map(|(d, _)| d.value()).collect();
        assert_eq!(order, vec![2000, 500, 100]);
        assert_eq!(payout.to_string(), "2000x1, 500x1, 100x1");
    }

    #[test]
    fn deserializes_positive_counts() {
        let payout: Payout = serde_json::from_str(r#"{"100":1,"50":2}"#).unwrap();
        assert_eq!(payout.count(d(100)), 1);
        assert_eq!(payout.count(d(50)), 2);
        assert_eq!(payout.total_value(), 200);
        assert_eq!(serde_json::to_string(&payout).unwrap(), r#"{"50":2,"100":1}"#);
    }

    #[test]
    fn rejects_zero_counts_when_deserializing() {
        assert!(serde_json::from_str::<Payout>(r#"{"100":0}"#).is_err());
        assert!(serde_json::from_str::<Payout>(r#"{"100":0,"50":2}"#).is_err());
    }
}
