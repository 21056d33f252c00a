use crate::{Catalog, DrawEngine, Event, EventBus, ParseReport, RngState};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("catalog is still loading")]
    Loading,
    #[error("catalog load failed: {0}")]
    LoadFailed(String),
}

/// Load lifecycle for the one-shot fetch. `Failed` is distinct from
/// `Loading` so the view layer can offer a retry instead of spinning.
#[derive(Debug)]
pub enum LoadState {
    Loading,
    Failed(String),
    Ready(DrawEngine),
}

/// Top-level state: the load lifecycle plus the event queue the view layer
/// drains. Session operations are only reachable once the catalog is ready.
#[derive(Debug)]
pub struct App {
    state: LoadState,
    pub events: EventBus,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            state: LoadState::Loading,
            events: EventBus::default(),
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, LoadState::Ready(_))
    }

    /// Installs a freshly parsed catalog. Replaces any previous engine
    /// wholesale: ids derive from source row positions, so a reloaded feed
    /// invalidates every prior session.
    pub fn catalog_ready(&mut self, report: ParseReport, rng: RngState) {
        let ParseReport { catalog, skipped } = report;
        self.push_loaded_event(&catalog, skipped);
        self.state = LoadState::Ready(DrawEngine::new(catalog, rng));
    }

    pub fn load_failed(&mut self, message: impl Into<String>) {
        self.state = LoadState::Failed(message.into());
    }

    /// Returns to `Loading` for a retry after a failed fetch.
    pub fn begin_reload(&mut self) {
        self.state = LoadState::Loading;
    }

    pub fn engine(&mut self) -> Result<&mut DrawEngine, AppError> {
        match &mut self.state {
            LoadState::Ready(engine) => Ok(engine),
            LoadState::Loading => Err(AppError::Loading),
            LoadState::Failed(message) => Err(AppError::LoadFailed(message.clone())),
        }
    }

    fn push_loaded_event(&mut self, catalog: &Catalog, skipped: usize) {
        self.events.push(Event::CatalogLoaded {
            info: catalog.info.len(),
            dilemmas: catalog.dilemma.len(),
            categories: catalog.categories().len(),
            skipped,
        });
    }
}
