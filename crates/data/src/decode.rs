use anyhow::Context;
use dilemmo_core::{parse_rows, ParseReport, RawRow};
use std::fs;
use std::path::Path;

/// Decodes delimited feed text into raw rows keyed by the header line.
/// Hand-maintained sheets drift, so records are read in flexible mode and
/// short rows simply leave their trailing columns absent.
pub fn decode_rows(raw: &str) -> anyhow::Result<Vec<RawRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(raw.as_bytes());
    let headers = reader.headers().context("read feed header line")?.clone();

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("read feed row {}", index + 1))?;
        let row: RawRow = headers
            .iter()
            .zip(record.iter())
            .map(|(header, value)| (header.to_string(), value.to_string()))
            .collect();
        rows.push(row);
    }
    Ok(rows)
}

pub fn load_catalog_from_str(raw: &str) -> anyhow::Result<ParseReport> {
    let rows = decode_rows(raw)?;
    let report = parse_rows(&rows);
    log::info!(
        "loaded {} info / {} dilemma cards, {} rows skipped",
        report.catalog.info.len(),
        report.catalog.dilemma.len(),
        report.skipped
    );
    Ok(report)
}

pub fn load_catalog_from_path(path: &Path) -> anyhow::Result<ParseReport> {
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    load_catalog_from_str(&raw).with_context(|| format!("parse {}", path.display()))
}
