use std::io::BufRead;

use anyhow::Result;

use cashpoint_core::{CashResult, Payout, Stock};
use cashpoint_inventory::Inventory;

use crate::format::{OutputMode, format_error, format_outcome};
use crate::parse::{Operation, parse_line};

/// Result of one successfully executed operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Dispensed { amount: i64, payout: Payout },
    Loaded { denomination: i64, count: i64 },
    Stock(Stock),
    Reset(Stock),
}

pub fn execute(inventory: &Inventory, op: Operation) -> CashResult<Outcome> {
    match op {
        Operation::Withdraw(amount) => inventory
            .withdraw(amount)
            .map(|payout| Outcome::Dispensed { amount, payout }),
        Operation::Load {
            denomination,
            count,
        } => inventory.load(denomination, count).map(|()| Outcome::Loaded {
            denomination,
            count,
        }),
        Operation::Stock => Ok(Outcome::Stock(inventory.snapshot())),
        Operation::Reset(entries) => {
            inventory.reset(entries);
            Ok(Outcome::Reset(inventory.snapshot()))
        }
    }
}

/// Execute operations read line by line, printing each result.
///
/// Returns the number of lines that failed to parse or execute.
pub fn run_lines(inventory: &Inventory, input: impl BufRead, mode: OutputMode) -> Result<usize> {
    let mut failures = 0;
    for (idx, line) in input.lines().enumerate() {
        let line = line?;
        let lineno = idx + 1;
        match parse_line(&line) {
            Ok(None) => {}
            Ok(Some(op)) => match execute(inventory, op) {
                Ok(outcome) => println!("{}", format_outcome(&outcome, mode)),
                Err(e) => {
                    failures += 1;
                    eprintln!("{}", format_error(&e, mode));
                }
            },
            Err(e) => {
                failures += 1;
                tracing::warn!(line = lineno, error = %e, "unparseable operation");
                eprintln!("line {lineno}: {e:#}");
            }
        }
    }
    Ok(failures)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cashpoint_core::{CashError, Denomination};

    fn d(value: i64) -> Denomination {
        Denomination::new(value).unwrap()
    }

    #[test]
    fn executes_against_shared_inventory() {
        let inventory = Inventory::new([(100, 5)]);

        let load = Operation::Load {
            denomination: 50,
            count: 10,
        };
        let loaded = execute(&inventory, load).unwrap();
        assert_eq!(
            loaded,
            Outcome::Loaded {
                denomination: 50,
                count: 10
            }
        );

        match execute(&inventory, Operation::Withdraw(150)).unwrap() {
            Outcome::Dispensed { amount, payout } => {
                assert_eq!(amount, 150);
                assert_eq!(payout.count(d(100)), 1);
                assert_eq!(payout.count(d(50)), 1);
            }
            other => panic!("Expected Dispensed, got {other:?}"),
        }

        match execute(&inventory, Operation::Reset(vec![(20, 3)])).unwrap() {
            Outcome::Reset(stock) => assert_eq!(stock.count(d(20)), 3),
            other => panic!("Expected Reset, got {other:?}"),
        }
    }

    #[test]
    fn surfaces_domain_errors() {
        let inventory = Inventory::new([(100, 2)]);
        assert_eq!(
            execute(&inventory, Operation::Withdraw(150)).unwrap_err(),
            CashError::Infeasible { amount: 150 }
        );
    }

    #[test]
    fn counts_failed_lines() {
        let inventory = Inventory::new([(100, 5)]);
        let script = "# demo\nwithdraw 200\nwithdraw 125\nbogus\n\nload 50 2\nstock\n";

        let failures = run_lines(&inventory, script.as_bytes(), OutputMode::Human).unwrap();

        assert_eq!(failures, 2);
        let stock = inventory.snapshot();
        assert_eq!(stock.count(d(100)), 3);
        assert_eq!(stock.count(d(50)), 2);
    }
}
