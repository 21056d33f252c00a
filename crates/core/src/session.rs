use crate::Card;
use serde::Serialize;
use std::collections::HashSet;

/// Mutable draw progress for one mode + category-filter combination.
/// Discarded, not merged, whenever that combination changes.
#[derive(Debug, Default, Clone)]
pub struct Session {
    pub played: HashSet<String>,
    pub current: Option<Card>,
    pub exhausted: bool,
    pub guide_visible: bool,
}

impl Session {
    pub fn reset(&mut self) {
        self.played.clear();
        self.current = None;
        self.exhausted = false;
        self.guide_visible = false;
    }

    pub fn snapshot(&self) -> SessionSnapshot<'_> {
        SessionSnapshot {
            current: self.current.as_ref(),
            played_count: self.played.len(),
            exhausted: self.exhausted,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SessionSnapshot<'a> {
    pub current: Option<&'a Card>,
    pub played_count: usize,
    pub exhausted: bool,
}
