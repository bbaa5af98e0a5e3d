//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Denominations, stock snapshots and payouts carry no identity: two of them
/// holding the same values are the same thing. They are handed across thread
/// boundaries as owned copies, so implementors must also be `Send + Sync`.
///
/// ```
/// use cashpoint_core::{Denomination, ValueObject};
///
/// fn same<V: ValueObject>(a: &V, b: &V) -> bool {
///     a == b
/// }
///
/// let a = Denomination::new(500).unwrap();
/// let b = Denomination::new(500).unwrap();
/// assert!(same(&a, &b));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug + Send + Sync {}
