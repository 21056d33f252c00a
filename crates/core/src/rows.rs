use crate::{Card, CardKind, Catalog, OTHER_CATEGORY};
use std::collections::HashMap;

/// One raw feed row, keyed by the column headers as they appear in the feed.
pub type RawRow = HashMap<String, String>;

pub const TYPE_COLUMN: &str = "type";
pub const CATEGORY_COLUMN: &str = "category";
pub const QUESTION_COLUMN: &str = "question";
pub const GUIDE_COLUMN: &str = "guide";
pub const SOURCE_COLUMN: &str = "source";

/// The prompt column is matched by marker rather than exact name: the feed
/// header literally contains "info / situation".
pub const PROMPT_COLUMN_MARKER: &str = "info / situation";

#[derive(Debug, Clone)]
pub struct ParseReport {
    pub catalog: Catalog,
    /// Rows dropped because `type` was blank or unrecognized.
    pub skipped: usize,
}

/// Builds a catalog from raw rows. Malformed rows are skipped, never an
/// error: the feed is a hand-maintained spreadsheet and blank or stray rows
/// are expected. Ids are derived from the source row position so they stay
/// stable across filtering, but not across a refetch.
pub fn parse_rows(rows: &[RawRow]) -> ParseReport {
    let mut info = Vec::new();
    let mut dilemma = Vec::new();
    let mut skipped = 0;

    for (index, row) in rows.iter().enumerate() {
        let raw_kind = field(row, TYPE_COLUMN);
        if raw_kind.is_empty() {
            skipped += 1;
            continue;
        }
        let Some(kind) = CardKind::from_label(raw_kind) else {
            skipped += 1;
            continue;
        };

        let category = field(row, CATEGORY_COLUMN);
        let card = Card {
            id: format!("{}-{}", raw_kind, index),
            kind,
            category: if category.is_empty() {
                OTHER_CATEGORY.to_string()
            } else {
                category.to_string()
            },
            prompt: prompt_field(row).to_string(),
            question: field(row, QUESTION_COLUMN).to_string(),
            guide: field(row, GUIDE_COLUMN).to_string(),
            source_refs: field(row, SOURCE_COLUMN).to_string(),
        };
        match kind {
            CardKind::Info => info.push(card),
            CardKind::Dilemma => dilemma.push(card),
        }
    }

    ParseReport {
        catalog: Catalog::new(info, dilemma),
        skipped,
    }
}

fn field<'a>(row: &'a RawRow, name: &str) -> &'a str {
    row.get(name).map(|value| value.trim()).unwrap_or("")
}

fn prompt_field(row: &RawRow) -> &str {
    row.iter()
        .find(|(key, _)| key.to_lowercase().contains(PROMPT_COLUMN_MARKER))
        .map(|(_, value)| value.trim())
        .unwrap_or("")
}
