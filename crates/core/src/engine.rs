use crate::{
    pool::select_pool, progress::progress_table, Card, Catalog, CategoryProgress, Event, EventBus,
    Mode, ResetReason, RngState, Session,
};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOutcome {
    Drawn(Card),
    /// Every card of the active pool has been played. A normal terminal
    /// state, recovered by reset or by changing mode/filter.
    Exhausted,
}

/// Owns the catalog and the session and is the only mutation path for the
/// latter. Changing mode or the category filter discards the session: draw
/// progress against a different pool is never carried over.
#[derive(Debug)]
pub struct DrawEngine {
    catalog: Catalog,
    mode: Mode,
    selected_categories: BTreeSet<String>,
    session: Session,
    rng: RngState,
}

impl DrawEngine {
    pub fn new(catalog: Catalog, rng: RngState) -> Self {
        Self {
            catalog,
            mode: Mode::default(),
            selected_categories: BTreeSet::new(),
            session: Session::default(),
            rng,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn selected_categories(&self) -> &BTreeSet<String> {
        &self.selected_categories
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The currently drawable card list: effective list under the active
    /// mode, narrowed to the selected categories.
    pub fn pool(&self) -> Vec<&Card> {
        let effective = self.catalog.effective(self.mode);
        select_pool(&effective, &self.selected_categories)
    }

    /// Played/total per category, counted against the full effective list.
    pub fn progress(&self) -> Vec<CategoryProgress> {
        let effective = self.catalog.effective(self.mode);
        progress_table(&effective, &self.session.played)
    }

    pub fn draw(&mut self, events: &mut EventBus) -> DrawOutcome {
        let (chosen, pool_len, available_len) = {
            let effective = self.catalog.effective(self.mode);
            let pool = select_pool(&effective, &self.selected_categories);
            let available: Vec<&Card> = pool
                .iter()
                .copied()
                .filter(|card| !self.session.played.contains(&card.id))
                .collect();
            let chosen = self.rng.pick(&available).map(|card| (*card).clone());
            (chosen, pool.len(), available.len())
        };

        match chosen {
            None => {
                self.session.exhausted = true;
                events.push(Event::PoolExhausted {
                    played: self.session.played.len(),
                    pool: pool_len,
                });
                DrawOutcome::Exhausted
            }
            Some(card) => {
                self.session.played.insert(card.id.clone());
                self.session.current = Some(card.clone());
                self.session.guide_visible = false;
                self.session.exhausted = false;
                events.push(Event::CardDrawn {
                    id: card.id.clone(),
                    kind: card.kind,
                    category: card.category.clone(),
                    remaining: available_len - 1,
                });
                DrawOutcome::Drawn(card)
            }
        }
    }

    /// Explicit restart requested by the user. Keeps mode and filter.
    pub fn reset(&mut self, events: &mut EventBus) {
        self.reset_session(events, ResetReason::Manual);
    }

    pub fn set_mode(&mut self, mode: Mode, events: &mut EventBus) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        self.reset_session(events, ResetReason::ModeChanged);
    }

    pub fn set_categories(&mut self, selected: BTreeSet<String>, events: &mut EventBus) {
        if self.selected_categories == selected {
            return;
        }
        self.selected_categories = selected;
        self.reset_session(events, ResetReason::FilterChanged);
    }

    pub fn toggle_category(&mut self, category: &str, events: &mut EventBus) {
        if !self.selected_categories.remove(category) {
            self.selected_categories.insert(category.to_string());
        }
        self.reset_session(events, ResetReason::FilterChanged);
    }

    pub fn reveal_guide(&mut self) {
        if self.session.current.is_some() {
            self.session.guide_visible = true;
        }
    }

    fn reset_session(&mut self, events: &mut EventBus, reason: ResetReason) {
        self.session.reset();
        events.push(Event::SessionReset { reason });
    }
}
