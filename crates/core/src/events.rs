use crate::CardKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ResetReason {
    ModeChanged,
    FilterChanged,
    Manual,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    CatalogLoaded {
        info: usize,
        dilemmas: usize,
        categories: usize,
        skipped: usize,
    },
    CardDrawn {
        id: String,
        kind: CardKind,
        category: String,
        remaining: usize,
    },
    PoolExhausted {
        played: usize,
        pool: usize,
    },
    SessionReset {
        reason: ResetReason,
    },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }
}
