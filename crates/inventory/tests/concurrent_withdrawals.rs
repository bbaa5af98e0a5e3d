use std::sync::{Arc, Barrier};
use std::thread;

use cashpoint_core::{CashError, Denomination, Payout};
use cashpoint_inventory::Inventory;

fn d(value: i64) -> Denomination {
    Denomination::new(value).unwrap()
}

/// Run `clients` threads that each withdraw `amount` once, all released together.
fn withdraw_concurrently(
    inventory: &Arc<Inventory>,
    clients: usize,
    amount: i64,
) -> Vec<Result<Payout, CashError>> {
    let start = Arc::new(Barrier::new(clients));
    let handles: Vec<_> = (0..clients)
        .map(|_| {
            let inventory = Arc::clone(inventory);
            let start = Arc::clone(&start);
            thread::spawn(move || {
                start.wait();
                inventory.withdraw(amount)
            })
        })
        .collect();

    handles
        .into_iter()
        .map(|h| h.join().expect("withdrawal thread panicked"))
        .collect()
}

#[test]
fn parallel_withdrawals_within_capacity_all_succeed() {
    let inventory = Arc::new(Inventory::new([(100, 100)]));

    let results = withdraw_concurrently(&inventory, 10, 500);

    assert!(results.iter().all(Result::is_ok));
    assert_eq!(inventory.snapshot().count(d(100)), 50);
}

#[test]
fn parallel_withdrawals_beyond_capacity_never_double_dispense() {
    // Room for exactly 7 withdrawals of 300.
    let inventory = Arc::new(Inventory::new([(100, 21)]));

    let results = withdraw_concurrently(&inventory, 16, 300);

    let successes = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 7);
    for failure in results.iter().filter_map(|r| r.as_ref().err()) {
        assert!(
            matches!(
                failure,
                CashError::Infeasible { .. } | CashError::InsufficientStock { .. }
            ),
            "unexpected failure: {failure:?}"
        );
    }
    assert_eq!(inventory.snapshot().count(d(100)), 0);
}

#[test]
fn parallel_mixed_denominations_debit_exactly_what_was_paid() {
    let inventory = Arc::new(Inventory::new([(2000, 3), (500, 5), (100, 20)]));
    let before = inventory.snapshot();

    let results = withdraw_concurrently(&inventory, 12, 2600);

    let after = inventory.snapshot();
    let mut paid = Payout::new();
    for payout in results.iter().filter_map(|r| r.as_ref().ok()) {
        assert_eq!(payout.total_value(), 2600);
        for (denomination, count) in payout.iter() {
            paid.record(denomination, count);
        }
    }
    for (denomination, held) in before.iter() {
        assert_eq!(after.count(denomination), held - paid.count(denomination));
    }
    assert_eq!(
        before.total_value() - after.total_value(),
        paid.total_value() as u64
    );
}

#[test]
fn loads_and_withdrawals_interleave_consistently() {
    let inventory = Arc::new(Inventory::new([(100, 0)]));
    let rounds: u32 = 200;

    let taken: u32 = thread::scope(|scope| {
        let loader = Arc::clone(&inventory);
        scope.spawn(move || {
            for _ in 0..rounds {
                loader.load(100, 1).unwrap();
            }
        });

        let withdrawers: Vec<_> = (0..4)
            .map(|_| {
                let inventory = Arc::clone(&inventory);
                scope.spawn(move || {
                    (0..rounds)
                        .filter(|_| inventory.withdraw(100).is_ok())
                        .count() as u32
                })
            })
            .collect();

        withdrawers
            .into_iter()
            .map(|h| h.join().expect("withdrawer panicked"))
            .sum()
    });

    // Every loaded note was either paid out or is still held.
    assert_eq!(taken + inventory.snapshot().count(d(100)), rounds);
}

#[test]
fn snapshots_during_contention_are_always_consistent() {
    let inventory = Arc::new(Inventory::new([(500, 40), (100, 200)]));
    let initial_value = inventory.snapshot().total_value();

    thread::scope(|scope| {
        for _ in 0..4 {
            let inventory = Arc::clone(&inventory);
            scope.spawn(move || {
                for _ in 0..20 {
                    let _ = inventory.withdraw(700);
                }
            });
        }

        let observer = Arc::clone(&inventory);
        scope.spawn(move || {
            for _ in 0..100 {
                let value = observer.snapshot().total_value();
                assert!(value <= initial_value);
                assert_eq!(value % 700, initial_value % 700);
            }
        });
    });
}
