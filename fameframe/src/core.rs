use std::path::PathBuf;

use fameframe_core::{
    DataStore, FameConnector, FameData, FameError, LoadConfig, OneOrMany, PeriodRange,
    SourceStrategy, assign_mnemonics, normalize_dates,
};

/// A validated load request: sources, series selection and date bounds.
///
/// Building the loader performs every check that does not need a store, so a
/// reversed date range fails before any database is opened.
#[derive(Debug, Clone)]
pub struct FameLoader {
    pub(crate) paths: Vec<PathBuf>,
    pub(crate) mnemonics: Vec<String>,
    pub(crate) series: Option<Vec<String>>,
    pub(crate) range: PeriodRange,
    pub(crate) wildcard: String,
    pub(crate) strategy: SourceStrategy,
}

/// Builder for constructing a [`FameLoader`].
#[derive(Debug, Clone, Default)]
pub struct FameLoaderBuilder {
    cfg: LoadConfig,
}

impl FameLoaderBuilder {
    /// Create a new builder with no sources, every series, and open date bounds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one database path.
    #[must_use]
    pub fn source(mut self, path: impl Into<PathBuf>) -> Self {
        let mut paths = std::mem::take(&mut self.cfg.sources).into_vec();
        paths.push(path.into());
        self.cfg.sources = OneOrMany::Many(paths);
        self
    }

    /// Replace the database paths with a scalar or a list.
    #[must_use]
    pub fn sources(mut self, paths: impl Into<OneOrMany<PathBuf>>) -> Self {
        self.cfg.sources = paths.into();
        self
    }

    /// Restrict the load to the given series names.
    ///
    /// Without this, every series matching the wildcard is loaded.
    #[must_use]
    pub fn series(mut self, names: impl Into<OneOrMany<String>>) -> Self {
        self.cfg.series = Some(names.into());
        self
    }

    /// Start bound as `YYYY` (expanded to `YYYYQ1`) or `YYYYQ#`.
    #[must_use]
    pub fn start(mut self, start: impl Into<String>) -> Self {
        self.cfg.start = Some(start.into());
        self
    }

    /// End bound as `YYYY` (expanded to `YYYYQ4`) or `YYYYQ#`.
    #[must_use]
    pub fn end(mut self, end: impl Into<String>) -> Self {
        self.cfg.end = Some(end.into());
        self
    }

    /// Label sources explicitly instead of deriving names from file names.
    #[must_use]
    pub fn mnemonics(mut self, names: impl Into<OneOrMany<String>>) -> Self {
        self.cfg.mnemonics = Some(names.into());
        self
    }

    /// Pattern used to enumerate series when no list is given.
    #[must_use]
    pub fn wildcard(mut self, pattern: impl Into<String>) -> Self {
        self.cfg.wildcard = pattern.into();
        self
    }

    /// Sequential (default) or concurrent retrieval across sources.
    #[must_use]
    pub const fn source_strategy(mut self, strategy: SourceStrategy) -> Self {
        self.cfg.source_strategy = strategy;
        self
    }

    /// Validate the request and build the loader.
    ///
    /// # Errors
    /// - `InvalidArg` if no sources were given, a date is malformed, or the
    ///   number of explicit mnemonics does not match the number of sources.
    /// - `DateOrder` if the start falls after the end.
    pub fn build(self) -> Result<FameLoader, FameError> {
        let LoadConfig {
            sources,
            series,
            start,
            end,
            mnemonics,
            wildcard,
            source_strategy,
        } = self.cfg;

        let paths = sources.into_vec();
        if paths.is_empty() {
            return Err(FameError::InvalidArg(
                "no sources given; add at least one via source(...)".to_string(),
            ));
        }
        let range = normalize_dates(start.as_deref(), end.as_deref())?;
        let mnemonics = assign_mnemonics(&paths, mnemonics.map(OneOrMany::into_vec))?;

        Ok(FameLoader {
            paths,
            mnemonics,
            series: series.map(OneOrMany::into_vec),
            range,
            wildcard,
            strategy: source_strategy,
        })
    }
}

/// Attribute a store failure to the source it came from.
///
/// Errors that already name their origin pass through unchanged.
pub fn tag_err(store: &str, e: FameError) -> FameError {
    match e {
        e @ (FameError::NotFound { .. } | FameError::Store { .. }) => e,
        other => FameError::Store {
            store: store.to_string(),
            msg: other.to_string(),
        },
    }
}

impl FameLoader {
    /// Start building a new loader.
    ///
    /// ```rust,ignore
    /// let loader = FameLoader::builder()
    ///     .source("/data/us/macro.db")
    ///     .series(["GDP", "CPI"])
    ///     .start("2019")
    ///     .end("2021Q2")
    ///     .build()?;
    /// let data = loader.load(&connector).await?;
    /// ```
    #[must_use]
    pub fn builder() -> FameLoaderBuilder {
        FameLoaderBuilder::new()
    }

    /// Build a loader from a deserialized configuration.
    ///
    /// # Errors
    /// Same as [`FameLoaderBuilder::build`].
    pub fn from_config(cfg: LoadConfig) -> Result<Self, FameError> {
        FameLoaderBuilder { cfg }.build()
    }

    /// Source paths in input order.
    #[must_use]
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Mnemonics aligned with [`paths`](Self::paths).
    #[must_use]
    pub fn mnemonics(&self) -> &[String] {
        &self.mnemonics
    }

    /// Normalized requested bounds.
    #[must_use]
    pub const fn range(&self) -> PeriodRange {
        self.range
    }

    /// True when either bound was requested, selecting ranged retrieval.
    pub(crate) const fn is_ranged(&self) -> bool {
        self.range.start.is_some() || self.range.end.is_some()
    }

    /// Open every source, run the pipeline and close every opened store.
    ///
    /// Stores are closed on all paths once opened, including when a later
    /// open or a retrieval step fails. Close failures after a successful
    /// load are reported in [`FameData::warnings`].
    ///
    /// # Errors
    /// - Open failures, tagged with the source mnemonic.
    /// - Store failures other than a missing series.
    /// - `Data`/`Unsupported` errors raised while building tables.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "fameframe::core::load",
            skip(self, connector),
            fields(connector = connector.name(), sources = self.paths.len(), strategy = ?self.strategy),
        )
    )]
    pub async fn load(&self, connector: &dyn FameConnector) -> Result<FameData, FameError> {
        let mut stores: Vec<Box<dyn DataStore>> = Vec::with_capacity(self.paths.len());
        for (path, label) in self.paths.iter().zip(&self.mnemonics) {
            match connector.open(path).await {
                Ok(store) => stores.push(store),
                Err(e) => {
                    let err = tag_err(label, e);
                    let failures = close_all(&stores, &self.mnemonics).await;
                    #[cfg(feature = "tracing")]
                    tracing::warn!(
                        error = %err,
                        close_failures = failures.len(),
                        "load aborted after open failure"
                    );
                    #[cfg(not(feature = "tracing"))]
                    let _ = failures;
                    return Err(err);
                }
            }
        }

        let outcome = self.run(&stores).await;
        let close_warnings = close_all(&stores, &self.mnemonics).await;

        let mut data = outcome?;
        data.warnings.extend(close_warnings);
        Ok(data)
    }
}

/// Close every store, returning the failures tagged with their mnemonic.
async fn close_all(stores: &[Box<dyn DataStore>], labels: &[String]) -> Vec<FameError> {
    let mut failures = Vec::new();
    for (store, label) in stores.iter().zip(labels) {
        if let Err(e) = store.close().await {
            #[cfg(feature = "tracing")]
            tracing::warn!(store = %label, error = %e, "failed to close store");
            failures.push(tag_err(label, e));
        }
    }
    failures
}
