//! In-memory connector for tests and demos.
//!
//! [`MockConnector`] maps paths to [`MockStore`] templates. Each open hands
//! out a fresh handle sharing the template's [`StoreProbe`], so tests can
//! check that every opened store was closed.
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use fameframe_core::{DataStore, FameConnector, FameError};

mod calendar;
/// Deterministic fixture stores.
pub mod fixtures;
mod series;
mod store;

pub use calendar::MonthlyCalendar;
pub use series::{MockBehavior, MockSeries};
pub use store::{MockStore, OpenStore, StoreProbe};

/// Connector serving in-memory stores keyed by path.
#[derive(Clone, Debug, Default)]
pub struct MockConnector {
    stores: HashMap<PathBuf, MockStore>,
    open_failures: HashMap<PathBuf, FameError>,
}

impl MockConnector {
    /// A connector with no stores; every open fails.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A connector serving the three fixture stores at their fixture paths.
    #[must_use]
    pub fn with_fixtures() -> Self {
        Self::new()
            .with_store(fixtures::MACRO_PATH, fixtures::macro_store())
            .with_store(fixtures::MACRO_REVISED_PATH, fixtures::macro_revised_store())
            .with_store(fixtures::LABOUR_PATH, fixtures::labour_store())
    }

    /// Serve `store` at `path`.
    #[must_use]
    pub fn with_store(mut self, path: impl Into<PathBuf>, store: MockStore) -> Self {
        self.stores.insert(path.into(), store);
        self
    }

    /// Make opening `path` fail with `err`.
    #[must_use]
    pub fn fail_open(mut self, path: impl Into<PathBuf>, err: FameError) -> Self {
        self.open_failures.insert(path.into(), err);
        self
    }

    /// Usage counters of the store at `path`.
    #[must_use]
    pub fn probe(&self, path: impl AsRef<Path>) -> Option<StoreProbe> {
        self.stores.get(path.as_ref()).map(MockStore::probe)
    }

    /// True if every store served by this connector is currently closed.
    #[must_use]
    pub fn all_closed(&self) -> bool {
        self.stores.values().all(|s| !s.probe().is_open())
    }
}

#[async_trait]
impl FameConnector for MockConnector {
    fn name(&self) -> &'static str {
        "fameframe-mock"
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    async fn open(&self, path: &Path) -> Result<Box<dyn DataStore>, FameError> {
        if let Some(err) = self.open_failures.get(path) {
            return Err(err.clone());
        }
        let store = self.stores.get(path).ok_or_else(|| {
            FameError::store(path.display().to_string(), "cannot open database")
        })?;
        Ok(Box::new(store.open(path.display().to_string())))
    }
}
