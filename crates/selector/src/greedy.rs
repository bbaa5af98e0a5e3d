use std::cmp::Reverse;

use cashpoint_core::{CashError, CashResult, Denomination, Payout, Stock, UNIT};

use crate::strategy::DispenseStrategy;

/// Largest-note-first selection.
///
/// Yields the minimal note count for canonical note sets (each denomination a
/// multiple of the next smaller one, e.g. 2000/500/100/50/10). For other sets
/// it can report `Infeasible` even though some combination exists: with
/// `{40: 1, 30: 2}`, 60 is rejected because 40 is taken first.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedySelector;

impl GreedySelector {
    pub fn new() -> Self {
        Self
    }
}

impl DispenseStrategy for GreedySelector {
    fn select(&self, amount: i64, available: &Stock) -> CashResult<Payout> {
        select(amount, available)
    }
}

/// Greedy selection over a snapshot; see [`GreedySelector`].
pub fn select(amount: i64, available: &Stock) -> CashResult<Payout> {
    if amount <= 0 || amount % UNIT != 0 {
        tracing::warn!(amount, "invalid amount requested");
        return Err(CashError::InvalidAmount(amount));
    }

    let mut denominations: Vec<(Denomination, u32)> = available.iter().collect();
    denominations.sort_by_key(|(d, _)| Reverse(d.value()));

    let mut payout = Payout::new();
    let mut remaining = amount;

    for (denomination, count) in denominations {
        let value = denomination.value();
        if value <= 0 || value % UNIT != 0 {
            continue;
        }

        let take = (remaining / value).min(i64::from(count));
        if take > 0 {
            // take <= count, which is a u32
            payout.record(denomination, take as u32);
            remaining -= take * value;
        }
    }

    if remaining != 0 {
        tracing::warn!(amount, remaining, available = %available, "amount cannot be dispensed");
        return Err(CashError::infeasible(amount));
    }

    tracing::debug!(amount, payout = %payout, "selected notes");
    Ok(payout)
}
