use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use fameframe_core::{DataStore, FameError, NativeIndex, ObservationList};

use crate::calendar::MonthlyCalendar;
use crate::series::{MockBehavior, MockSeries};

/// Shared counters describing how a store was used.
///
/// Cloned handles observe the same counters, so tests can keep a probe
/// while the loader owns the opened store.
#[derive(Clone, Debug, Default)]
pub struct StoreProbe {
    inner: Arc<ProbeState>,
}

#[derive(Debug, Default)]
struct ProbeState {
    opens: AtomicUsize,
    closes: AtomicUsize,
    fetches: AtomicUsize,
    open_now: AtomicBool,
}

impl StoreProbe {
    /// Number of times the store was opened.
    #[must_use]
    pub fn opens(&self) -> usize {
        self.inner.opens.load(Ordering::SeqCst)
    }

    /// Number of `close` calls received.
    #[must_use]
    pub fn closes(&self) -> usize {
        self.inner.closes.load(Ordering::SeqCst)
    }

    /// Number of fetch calls (full and ranged) received.
    #[must_use]
    pub fn fetches(&self) -> usize {
        self.inner.fetches.load(Ordering::SeqCst)
    }

    /// True if the store was opened and not closed since.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.inner.open_now.load(Ordering::SeqCst)
    }

    pub(crate) fn record_open(&self) {
        self.inner.opens.fetch_add(1, Ordering::SeqCst);
        self.inner.open_now.store(true, Ordering::SeqCst);
    }
}

/// Template for an in-memory database.
///
/// The connector hands out a fresh [`OpenStore`] built from this template on
/// each open.
#[derive(Clone, Debug, Default)]
pub struct MockStore {
    series: BTreeMap<String, MockBehavior<MockSeries>>,
    latency: Option<Duration>,
    close_error: Option<FameError>,
    probe: StoreProbe,
}

impl MockStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a series.
    #[must_use]
    pub fn with_series(mut self, name: impl Into<String>, series: MockSeries) -> Self {
        self.series.insert(name.into(), MockBehavior::Return(series));
        self
    }

    /// Script the fetch behavior of a series by name.
    #[must_use]
    pub fn with_behavior(
        mut self,
        name: impl Into<String>,
        behavior: MockBehavior<MockSeries>,
    ) -> Self {
        self.series.insert(name.into(), behavior);
        self
    }

    /// Delay every fetch by `latency`.
    #[must_use]
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Make `close` fail with `err`.
    #[must_use]
    pub fn with_close_error(mut self, err: FameError) -> Self {
        self.close_error = Some(err);
        self
    }

    /// Usage counters shared with every handle opened from this store.
    #[must_use]
    pub fn probe(&self) -> StoreProbe {
        self.probe.clone()
    }

    pub(crate) fn open(&self, label: String) -> OpenStore {
        self.probe.record_open();
        OpenStore {
            label,
            template: self.clone(),
            closed: AtomicBool::new(false),
        }
    }
}

/// An opened handle on a [`MockStore`].
pub struct OpenStore {
    label: String,
    template: MockStore,
    closed: AtomicBool,
}

impl OpenStore {
    fn probe(&self) -> &StoreProbe {
        &self.template.probe
    }

    fn ensure_open(&self) -> Result<(), FameError> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(FameError::store(&self.label, "handle is closed"));
        }
        Ok(())
    }

    async fn lookup(&self, name: &str) -> Result<MockSeries, FameError> {
        self.ensure_open()?;
        self.probe().inner.fetches.fetch_add(1, Ordering::SeqCst);
        if let Some(latency) = self.template.latency {
            tokio::time::sleep(latency).await;
        }
        match self.template.series.get(name) {
            Some(MockBehavior::Return(s)) => Ok(s.clone()),
            Some(MockBehavior::Fail(e)) => Err(e.clone()),
            Some(MockBehavior::Hang) => std::future::pending().await,
            None => Err(FameError::not_found(format!("series {name}"))),
        }
    }

    fn observations(series: &MockSeries, obs: Vec<(NativeIndex, f64)>) -> ObservationList {
        ObservationList {
            first_index: obs.first().map(|(i, _)| *i),
            last_index: obs.last().map(|(i, _)| *i),
            values: obs.into_iter().map(|(_, v)| v).collect(),
            frequency: series.frequency().to_string(),
            calendar: Arc::new(MonthlyCalendar),
        }
    }
}

/// Glob match supporting `*` (any run of characters); everything else is literal.
fn wildcard_match(pattern: &str, name: &str) -> bool {
    let mut parts = pattern.split('*');
    let Some(head) = parts.next() else {
        return true;
    };
    let Some(mut rest) = name.strip_prefix(head) else {
        return false;
    };
    let tail: Vec<&str> = parts.collect();
    let Some((last, middle)) = tail.split_last() else {
        return rest.is_empty();
    };
    for part in middle {
        match rest.find(part) {
            Some(pos) => rest = &rest[pos + part.len()..],
            None => return false,
        }
    }
    rest.len() >= last.len() && rest.ends_with(last)
}

#[async_trait]
impl DataStore for OpenStore {
    async fn match_wildcard(&self, pattern: &str) -> Result<Vec<String>, FameError> {
        self.ensure_open()?;
        Ok(self
            .template
            .series
            .keys()
            .filter(|name| wildcard_match(pattern, name))
            .cloned()
            .collect())
    }

    async fn fetch(&self, name: &str) -> Result<ObservationList, FameError> {
        let series = self.lookup(name).await?;
        let obs = series.observations();
        Ok(Self::observations(&series, obs))
    }

    async fn fetch_range(
        &self,
        name: &str,
        start: NativeIndex,
        end: NativeIndex,
    ) -> Result<ObservationList, FameError> {
        let series = self.lookup(name).await?;
        let obs = series
            .observations()
            .into_iter()
            .filter(|(i, _)| *i >= start && *i <= end)
            .collect();
        Ok(Self::observations(&series, obs))
    }

    fn ymd_to_index(&self, year: i32, month: u32) -> Result<NativeIndex, FameError> {
        if !(1..=12).contains(&month) {
            return Err(FameError::InvalidArg(format!("invalid month number: {month}")));
        }
        Ok(MonthlyCalendar::index_of(year, month))
    }

    async fn close(&self) -> Result<(), FameError> {
        self.probe().inner.closes.fetch_add(1, Ordering::SeqCst);
        self.probe().inner.open_now.store(false, Ordering::SeqCst);
        if self.closed.swap(true, Ordering::SeqCst) {
            return Err(FameError::store(&self.label, "handle already closed"));
        }
        match &self.template.close_error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}
