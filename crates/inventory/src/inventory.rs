use parking_lot::{Mutex, MutexGuard};

use cashpoint_core::{CashError, CashResult, Denomination, Payout, Sanitized, Stock};
use cashpoint_selector::{DispenseStrategy, GreedySelector};

/// Notes held by one machine, guarded by a single lock.
///
/// Every public operation takes the lock for its whole duration, so operations
/// are totally ordered and a withdrawal either debits the full payout or leaves
/// the stock untouched. The lock is released with a fair hand-off: when callers
/// are queued, the longest waiter runs next.
///
/// Share between threads with `Arc<Inventory>`.
#[derive(Debug)]
pub struct Inventory<S = GreedySelector> {
    stock: Mutex<Stock>,
    strategy: S,
}

impl Inventory<GreedySelector> {
    /// Create an inventory from raw `(face value, count)` entries.
    ///
    /// Malformed entries (invalid denomination, negative count) are dropped.
    pub fn new<I>(initial: I) -> Self
    where
        I: IntoIterator<Item = (i64, i64)>,
    {
        Self::with_strategy(initial, GreedySelector::new())
    }

    /// Inventory holding no notes.
    pub fn empty() -> Self {
        Self::new(std::iter::empty::<(i64, i64)>())
    }
}

impl<S: DispenseStrategy> Inventory<S> {
    pub fn with_strategy<I>(initial: I, strategy: S) -> Self
    where
        I: IntoIterator<Item = (i64, i64)>,
    {
        let stock = sanitize(initial);
        tracing::info!(stock = %stock, "inventory created");
        Self {
            stock: Mutex::new(stock),
            strategy,
        }
    }

    /// Dispense `amount` using the fewest notes the strategy can find.
    ///
    /// On failure the stock is left exactly as it was.
    pub fn withdraw(&self, amount: i64) -> CashResult<Payout> {
        self.exclusive(|stock| {
            let snapshot = stock.clone();
            let payout = self.strategy.select(amount, &snapshot)?;

            // Guard: the proposal must fit what is actually held.
            for (denomination, requested) in payout.iter() {
                let available = stock.count(denomination);
                if requested > available {
                    tracing::error!(
                        amount,
                        %denomination,
                        requested,
                        available,
                        "insufficient notes for proposed payout"
                    );
                    return Err(CashError::InsufficientStock {
                        denomination,
                        requested,
                        available,
                    });
                }
            }

            for (denomination, count) in payout.iter() {
                stock.debit(denomination, count)?;
            }

            tracing::info!(amount, payout = %payout, "dispensed");
            Ok(payout)
        })
    }

    /// Add `count` notes of face value `denomination`.
    pub fn load(&self, denomination: i64, count: i64) -> CashResult<()> {
        let (denomination, count) = validate_load(denomination, count).inspect_err(|e| {
            tracing::warn!(denomination, count, error = %e, "rejected load");
        })?;

        self.exclusive(|stock| stock.credit(denomination, count))
            .inspect_err(|e| tracing::warn!(%denomination, count, error = %e, "rejected load"))?;

        tracing::info!(%denomination, count, "loaded notes");
        Ok(())
    }

    /// Independent copy of the current stock.
    pub fn snapshot(&self) -> Stock {
        self.exclusive(|stock| stock.clone())
    }

    /// Replace the whole stock; malformed entries are dropped as in [`Inventory::new`].
    ///
    /// Meant for administrative reloads and test setup.
    pub fn reset<I>(&self, entries: I)
    where
        I: IntoIterator<Item = (i64, i64)>,
    {
        let fresh = sanitize(entries);
        let summary = fresh.to_string();
        self.exclusive(|stock| *stock = fresh);
        tracing::info!(stock = %summary, "inventory reset");
    }

    fn exclusive<R>(&self, op: impl FnOnce(&mut Stock) -> R) -> R {
        let mut guard = self.stock.lock();
        let out = op(&mut guard);
        MutexGuard::unlock_fair(guard);
        out
    }
}

fn sanitize<I>(entries: I) -> Stock
where
    I: IntoIterator<Item = (i64, i64)>,
{
    let Sanitized { stock, dropped } = Stock::sanitize(entries);
    if dropped > 0 {
        tracing::warn!(dropped, "dropped malformed stock entries");
    }
    stock
}

fn validate_load(denomination: i64, count: i64) -> CashResult<(Denomination, u32)> {
    let denomination = Denomination::new(denomination)?;
    if count <= 0 {
        return Err(CashError::invalid_input(format!(
            "note count must be positive, got {count}"
        )));
    }
    let count = u32::try_from(count)
        .map_err(|_| CashError::invalid_input(format!("note count {count} is out of range")))?;
    Ok((denomination, count))
}
