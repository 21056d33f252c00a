use crate::{Card, Mode};
use serde::Serialize;

/// The full card set for one loaded feed, partitioned by kind. Built once per
/// successful load and replaced wholesale on reload, never patched in place.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    pub info: Vec<Card>,
    pub dilemma: Vec<Card>,
    categories: Vec<String>,
}

impl Catalog {
    pub fn new(info: Vec<Card>, dilemma: Vec<Card>) -> Self {
        let mut categories: Vec<String> = info
            .iter()
            .chain(dilemma.iter())
            .map(|card| card.category.clone())
            .collect();
        categories.sort();
        categories.dedup();
        Self {
            info,
            dilemma,
            categories,
        }
    }

    /// Distinct categories across both kinds, sorted ascending.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Cards eligible under `mode`, info first for Auto, source order kept.
    pub fn effective(&self, mode: Mode) -> Vec<&Card> {
        match mode {
            Mode::Auto => self.info.iter().chain(self.dilemma.iter()).collect(),
            Mode::Info => self.info.iter().collect(),
            Mode::Dilemma => self.dilemma.iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.info.len() + self.dilemma.len()
    }

    pub fn is_empty(&self) -> bool {
        self.info.is_empty() && self.dilemma.is_empty()
    }

    pub fn snapshot(&self) -> CatalogSnapshot<'_> {
        CatalogSnapshot {
            info: &self.info,
            dilemme: &self.dilemma,
            categories: &self.categories,
        }
    }
}

/// Shape handed to the view layer; field names follow the feed vocabulary.
#[derive(Debug, Serialize)]
pub struct CatalogSnapshot<'a> {
    pub info: &'a [Card],
    pub dilemme: &'a [Card],
    pub categories: &'a [String],
}
