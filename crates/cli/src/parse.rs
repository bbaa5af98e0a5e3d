//! Line-oriented operation parsing for pipe mode.

use anyhow::{Context, Result, bail};

use crate::config::parse_entries;

/// One operation against the inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Withdraw(i64),
    Load { denomination: i64, count: i64 },
    Stock,
    Reset(Vec<(i64, i64)>),
}

/// Parse one input line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str) -> Result<Option<Operation>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut words = line.split_whitespace();
    let verb = words.next().unwrap_or_default().to_ascii_lowercase();
    let args: Vec<&str> = words.collect();

    let op = match (verb.as_str(), args.as_slice()) {
        ("withdraw", [amount]) => Operation::Withdraw(parse_int(amount, "amount")?),
        ("load", [denomination, count]) => Operation::Load {
            denomination: parse_int(denomination, "denomination")?,
            count: parse_int(count, "count")?,
        },
        ("stock", []) => Operation::Stock,
        ("reset", entries) => Operation::Reset(parse_entries(&entries.join(" "))?),
        ("withdraw", _) => bail!("usage: withdraw AMOUNT"),
        ("load", _) => bail!("usage: load VALUE COUNT"),
        ("stock", _) => bail!("usage: stock"),
        (other, _) => bail!("unknown operation '{other}'"),
    };
    Ok(Some(op))
}

fn parse_int(text: &str, what: &str) -> Result<i64> {
    text.parse()
        .with_context(|| format!("{what} '{text}' is not an integer"))
}
