use cashpoint_core::{CashResult, Payout, Stock};

/// Decides which notes make up an amount.
///
/// Implementations must be pure: the same amount and snapshot always yield the
/// same payout, and nothing outside the arguments is read or written.
pub trait DispenseStrategy: Send + Sync {
    /// Compute the notes to hand out for `amount` from `available`.
    ///
    /// Fails with `InvalidAmount` for non-positive or off-unit amounts and with
    /// `Infeasible` when the snapshot cannot cover the amount exactly.
    fn select(&self, amount: i64, available: &Stock) -> CashResult<Payout>;
}
