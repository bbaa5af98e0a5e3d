//! `cashpoint` — command-line host for the note inventory.
//!
//! Modes:
//! - **Shell mode**: `cashpoint [flags] withdraw 2600 500` runs the listed
//!   withdrawals in order and prints the remaining stock
//! - **Simulation**: `cashpoint [flags] simulate --clients 16 --amount 300`
//! - **Pipe mode**: `echo "withdraw 2600" | cashpoint [flags]`, one operation per line

mod commands;
mod config;
mod format;
mod parse;
mod session;
mod simulate;

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use clap::ArgMatches;

use cashpoint_inventory::Inventory;
use cashpoint_observability::LogFormat;

use commands::build_cli;
use format::{OutputMode, format_error, format_outcome, format_report};
use parse::Operation;
use session::execute;

fn main() -> ExitCode {
    let matches = build_cli().get_matches();

    match matches.get_one::<LogFormat>("log-format").copied() {
        Some(format) => cashpoint_observability::init_with(format),
        None => cashpoint_observability::init(),
    }

    match run(&matches) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "cashpoint failed");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(matches: &ArgMatches) -> Result<ExitCode> {
    let mode = if matches.get_flag("json") {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let inventory = open_inventory(matches)?;

    let failures = match matches.subcommand() {
        Some(("withdraw", sub)) => {
            let mut failures = 0;
            for amount in sub.get_many::<i64>("amount").into_iter().flatten() {
                if !print_result(&inventory, Operation::Withdraw(*amount), mode) {
                    failures += 1;
                }
            }
            print_result(&inventory, Operation::Stock, mode);
            failures
        }
        Some(("stock", _)) => {
            print_result(&inventory, Operation::Stock, mode);
            0
        }
        Some(("simulate", sub)) => {
            let clients = sub.get_one::<usize>("clients").copied().unwrap_or(8);
            let amount = sub.get_one::<i64>("amount").copied().unwrap_or_default();
            let report = simulate::simulate(&inventory, clients, amount);
            println!("{}", format_report(&report, mode));
            0
        }
        _ => session::run_lines(&inventory, std::io::stdin().lock(), mode)?,
    };

    Ok(if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn open_inventory(matches: &ArgMatches) -> Result<Inventory> {
    let flags: Vec<String> = matches
        .get_many::<String>("stock")
        .into_iter()
        .flatten()
        .cloned()
        .collect();
    let file = matches.get_one::<String>("stock-file").map(Path::new);
    let env = std::env::var(config::STOCK_ENV).ok();

    let stock = config::resolve(&flags, file, env.as_deref())?;
    if stock.source == config::StockSource::Empty {
        tracing::warn!("no stock configured; starting with an empty machine");
    } else {
        tracing::info!(source = %stock.source, entries = stock.entries.len(), "stock configured");
    }

    Ok(Inventory::new(stock.entries))
}

/// Execute and print one operation; `false` when it failed.
fn print_result(inventory: &Inventory, op: Operation, mode: OutputMode) -> bool {
    match execute(inventory, op) {
        Ok(outcome) => {
            println!("{}", format_outcome(&outcome, mode));
            true
        }
        Err(e) => {
            eprintln!("{}", format_error(&e, mode));
            false
        }
    }
}
