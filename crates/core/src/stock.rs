//! Note counts held by a machine.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::denomination::Denomination;
use crate::error::{CashError, CashResult};
use crate::value_object::ValueObject;

/// Mapping from denomination to the number of notes held.
///
/// A denomination without an entry holds zero notes. Entries with a zero count
/// are kept so a configured-but-empty cassette still shows up in snapshots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stock {
    notes: BTreeMap<Denomination, u32>,
}

/// Outcome of building a [`Stock`] from raw, unvalidated entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sanitized {
    pub stock: Stock,
    /// Number of entries discarded by the sanitization policy.
    pub dropped: usize,
}

impl Stock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a stock from raw `(face value, count)` entries.
    ///
    /// Entries whose value is not a valid denomination, or whose count is
    /// negative or exceeds the per-denomination counter, are dropped rather than
    /// reported as errors. A later entry for the same denomination replaces an
    /// earlier one.
    pub fn sanitize<I>(entries: I) -> Sanitized
    where
        I: IntoIterator<Item = (i64, i64)>,
    {
        let mut notes = BTreeMap::new();
        let mut dropped = 0;
        for (value, count) in entries {
            let Ok(denomination) = Denomination::new(value) else {
                dropped += 1;
                continue;
            };
            let Ok(count) = u32::try_from(count) else {
                dropped += 1;
                continue;
            };
            notes.insert(denomination, count);
        }
        Sanitized {
            stock: Self { notes },
            dropped,
        }
    }

    /// Number of notes held for `denomination`.
    pub fn count(&self, denomination: Denomination) -> u32 {
        self.notes.get(&denomination).copied().unwrap_or(0)
    }

    /// Entries in ascending denomination order, zero counts included.
    pub fn iter(&self) -> impl Iterator<Item = (Denomination, u32)> + '_ {
        self.notes.iter().map(|(d, c)| (*d, *c))
    }

    /// Number of denominations configured, including those with zero notes.
    pub fn denomination_count(&self) -> usize {
        self.notes.len()
    }

    /// `true` when no notes are held at all.
    pub fn is_empty(&self) -> bool {
        self.total_notes() == 0
    }

    pub fn total_notes(&self) -> u64 {
        self.notes.values().map(|c| u64::from(*c)).sum()
    }

    /// Combined face value of every note held (saturating).
    pub fn total_value(&self) -> u64 {
        self.notes.iter().fold(0u64, |acc, (d, c)| {
            acc.saturating_add((d.value() as u64).saturating_mul(u64::from(*c)))
        })
    }

    /// Add notes, creating the entry if needed.
    pub fn credit(&mut self, denomination: Denomination, count: u32) -> CashResult<()> {
        let slot = self.notes.entry(denomination).or_insert(0);
        *slot = slot.checked_add(count).ok_or_else(|| {
            CashError::invalid_input(format!(
                "loading {count} notes of {denomination} overflows the counter"
            ))
        })?;
        Ok(())
    }

    /// Remove notes; fails without touching the entry when too few are held.
    pub fn debit(&mut self, denomination: Denomination, count: u32) -> CashResult<()> {
        let available = self.count(denomination);
        if count > available {
            return Err(CashError::InsufficientStock {
                denomination,
                requested: count,
                available,
            });
        }
        if let Some(slot) = self.notes.get_mut(&denomination) {
            *slot = available - count;
        }
        Ok(())
    }
}

impl ValueObject for Stock {}

impl FromIterator<(Denomination, u32)> for Stock {
    fn from_iter<T: IntoIterator<Item = (Denomination, u32)>>(iter: T) -> Self {
        Self {
            notes: iter.into_iter().collect(),
        }
    }
}

impl core::fmt::Display for Stock {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write_notes(f, self.notes.iter().rev())
    }
}

/// Render `value x count` pairs separated by commas, largest note first.
pub(crate) fn write_notes<'a>(
    f: &mut core::fmt::Formatter<'_>,
    notes: impl Iterator<Item = (&'a Denomination, &'a u32)>,
) -> core::fmt::Result {
    let mut first = true;
    for (d, c) in notes {
        if !first {
            f.write_str(", ")?;
        }
        write!(f, "{d}x{c}")?;
        first = false;
    }
    if first {
        f.write_str("(none)")?;
    }
    Ok(())
}
