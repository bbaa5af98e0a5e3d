//! Output formatting.

use serde_json::json;

use cashpoint_core::CashError;

use crate::session::Outcome;
use crate::simulate::SimulationReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

pub fn format_outcome(outcome: &Outcome, mode: OutputMode) -> String {
    match mode {
        OutputMode::Human => match outcome {
            Outcome::Dispensed { amount, payout } => format!("dispensed {amount}: {payout}"),
            Outcome::Loaded {
                denomination,
                count,
            } => format!("loaded {count} notes of {denomination}"),
            Outcome::Stock(stock) => {
                format!("stock: {stock} (total {})", stock.total_value())
            }
            Outcome::Reset(stock) => format!("reset: {stock}"),
        },
        OutputMode::Json => match outcome {
            Outcome::Dispensed { amount, payout } => {
                json!({ "dispensed": amount, "notes": payout })
            }
            Outcome::Loaded {
                denomination,
                count,
            } => json!({ "loaded": denomination, "count": count }),
            Outcome::Stock(stock) => {
                json!({ "stock": stock, "total": stock.total_value() })
            }
            Outcome::Reset(stock) => json!({ "reset": stock }),
        }
        .to_string(),
    }
}

pub fn format_error(err: &CashError, mode: OutputMode) -> String {
    match mode {
        OutputMode::Human => format!("error: {err}"),
        OutputMode::Json => {
            json!({ "error": error_kind(err), "message": err.to_string() }).to_string()
        }
    }
}

pub fn format_report(report: &SimulationReport, mode: OutputMode) -> String {
    match mode {
        OutputMode::Human => format!(
            "{} clients withdrawing {}: {} succeeded, {} failed\ndispensed: {}\nremaining: {}",
            report.clients,
            report.amount,
            report.succeeded,
            report.failed,
            report.dispensed,
            report.remaining
        ),
        OutputMode::Json => serde_json::to_string(report).unwrap_or_else(|e| {
            json!({ "error": "serialization", "message": e.to_string() }).to_string()
        }),
    }
}

fn error_kind(err: &CashError) -> &'static str {
    match err {
        CashError::InvalidAmount(_) => "invalid_amount",
        CashError::Infeasible { .. } => "infeasible",
        CashError::InsufficientStock { .. } => "insufficient_stock",
        CashError::InvalidInput(_) => "invalid_input",
    }
}
