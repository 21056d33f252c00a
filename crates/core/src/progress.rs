use crate::Card;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

/// One row of the "played/total" table shown next to each category chip.
/// Totals are counted against the full effective list, not the filtered
/// pool, so chips keep their true denominator while a filter is active.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CategoryProgress {
    pub category: String,
    pub played: usize,
    pub total: usize,
}

pub fn per_category_total(list: &[&Card]) -> BTreeMap<String, usize> {
    let mut totals = BTreeMap::new();
    for card in list {
        *totals.entry(card.category.clone()).or_insert(0) += 1;
    }
    totals
}

pub fn per_category_played(list: &[&Card], played: &HashSet<String>) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for card in list {
        if played.contains(&card.id) {
            *counts.entry(card.category.clone()).or_insert(0) += 1;
        }
    }
    counts
}

pub fn progress_table(list: &[&Card], played: &HashSet<String>) -> Vec<CategoryProgress> {
    let totals = per_category_total(list);
    let counts = per_category_played(list, played);
    totals
        .into_iter()
        .map(|(category, total)| CategoryProgress {
            played: counts.get(&category).copied().unwrap_or(0),
            category,
            total,
        })
        .collect()
}
