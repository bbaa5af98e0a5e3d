//! Initial stock configuration.
//!
//! Sources, highest precedence first: `--stock` flags, `--stock-file`, the
//! `CASHPOINT_STOCK` environment variable. Entries are passed through raw; the
//! inventory drops the malformed ones.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

pub const STOCK_ENV: &str = "CASHPOINT_STOCK";

/// Where the initial stock came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StockSource {
    Flags,
    File(PathBuf),
    Env,
    Empty,
}

impl core::fmt::Display for StockSource {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StockSource::Flags => f.write_str("--stock flags"),
            StockSource::File(path) => write!(f, "file {}", path.display()),
            StockSource::Env => f.write_str(STOCK_ENV),
            StockSource::Empty => f.write_str("nothing (empty stock)"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockConfig {
    pub entries: Vec<(i64, i64)>,
    pub source: StockSource,
}

/// On-disk layout of `--stock-file`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct StockFile {
    notes: BTreeMap<i64, i64>,
}

/// Pick the first configured source and parse it.
pub fn resolve(flags: &[String], file: Option<&Path>, env: Option<&str>) -> Result<StockConfig> {
    if !flags.is_empty() {
        let entries = flags
            .iter()
            .map(|flag| parse_entry(flag))
            .collect::<Result<Vec<_>>>()?;
        return Ok(StockConfig {
            entries,
            source: StockSource::Flags,
        });
    }

    if let Some(path) = file {
        return Ok(StockConfig {
            entries: load_file(path)?,
            source: StockSource::File(path.to_path_buf()),
        });
    }

    if let Some(text) = env.filter(|t| !t.trim().is_empty()) {
        let entries = parse_entries(text).with_context(|| format!("parsing {STOCK_ENV}"))?;
        return Ok(StockConfig {
            entries,
            source: StockSource::Env,
        });
    }

    Ok(StockConfig {
        entries: Vec::new(),
        source: StockSource::Empty,
    })
}

/// Read a JSON stock file.
pub fn load_file(path: &Path) -> Result<Vec<(i64, i64)>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading stock file {}", path.display()))?;
    let parsed: StockFile = serde_json::from_str(&raw)
        .with_context(|| format!("parsing stock file {}", path.display()))?;
    Ok(parsed.notes.into_iter().collect())
}

/// Parse a list of `VALUE:COUNT` entries separated by commas or whitespace.
pub fn parse_entries(text: &str) -> Result<Vec<(i64, i64)>> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(parse_entry)
        .collect()
}

/// Parse a single `VALUE:COUNT` entry.
pub fn parse_entry(text: &str) -> Result<(i64, i64)> {
    let Some((value, count)) = text.trim().split_once(':') else {
        bail!("stock entry '{text}' must look like VALUE:COUNT");
    };
    let value = value
        .trim()
        .parse()
        .with_context(|| format!("denomination in stock entry '{text}'"))?;
    let count = count
        .trim()
        .parse()
        .with_context(|| format!("count in stock entry '{text}'"))?;
    Ok((value, count))
}
