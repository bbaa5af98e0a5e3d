//! Concurrent withdrawal simulation.

use std::sync::Barrier;
use std::thread;

use serde::Serialize;

use cashpoint_core::{Payout, Stock};
use cashpoint_inventory::Inventory;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationReport {
    pub clients: usize,
    pub amount: i64,
    pub succeeded: usize,
    pub failed: usize,
    /// All notes handed out, summed across clients.
    pub dispensed: Payout,
    pub remaining: Stock,
}

/// Release `clients` threads at once, each withdrawing `amount` a single time.
pub fn simulate(inventory: &Inventory, clients: usize, amount: i64) -> SimulationReport {
    let start = Barrier::new(clients);

    let results: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = (0..clients)
            .map(|_| {
                scope.spawn(|| {
                    start.wait();
                    inventory.withdraw(amount)
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join()).collect()
    });

    let mut dispensed = Payout::new();
    let mut succeeded = 0;
    for result in results {
        match result {
            Ok(Ok(payout)) => {
                succeeded += 1;
                for (denomination, count) in payout.iter() {
                    dispensed.record(denomination, count);
                }
            }
            Ok(Err(_)) => {}
            Err(_) => tracing::error!("simulation client panicked"),
        }
    }

    let report = SimulationReport {
        clients,
        amount,
        succeeded,
        failed: clients - succeeded,
        dispensed,
        remaining: inventory.snapshot(),
    };
    tracing::info!(
        clients,
        amount,
        succeeded = report.succeeded,
        failed = report.failed,
        "simulation finished"
    );
    report
}
