//! Per-source load pipeline.
//!
//! Stages, in order:
//! - `resolve`: decide which series a store contributes
//! - `retrieve`: read observations, whole or between bounds
//! - tabulate (in `fameframe-core`): reconcile bounds and build one table per series
//! - `assemble`: combine tables per source and across sources
use std::collections::BTreeMap;

use fameframe_core::{
    DataStore, FameData, FameError, Frequency, PeriodRange, PeriodTable, SourceStrategy,
    reconcile, tabularize,
};

use crate::FameLoader;

/// Combining tables into the result layout.
pub mod assemble;
/// Series resolution and frequency lookup.
pub mod resolve;
/// Observation retrieval.
pub mod retrieve;

/// Everything one source contributed to a load.
#[derive(Debug, Clone, Default)]
pub struct SourceOutcome {
    /// Source mnemonic.
    pub label: String,
    /// Resolved series, sorted.
    pub series: Vec<String>,
    /// Actual coverage per series.
    pub ranges: BTreeMap<String, PeriodRange>,
    /// Frequency per series.
    pub frequencies: BTreeMap<String, Frequency>,
    /// Combined table, `None` when no series resolved.
    pub table: Option<PeriodTable>,
    /// Non-fatal issues raised while processing this source.
    pub warnings: Vec<FameError>,
}

impl FameLoader {
    /// Run the pipeline over already opened stores, aligned with the mnemonics.
    pub(crate) async fn run(&self, stores: &[Box<dyn DataStore>]) -> Result<FameData, FameError> {
        let pairs = stores.iter().zip(&self.mnemonics);
        let outcomes: Vec<SourceOutcome> = match self.strategy {
            SourceStrategy::Concurrent => futures::future::join_all(
                pairs.map(|(store, label)| self.process_source(store.as_ref(), label)),
            )
            .await
            .into_iter()
            .collect::<Result<_, _>>()?,
            _ => {
                let mut out = Vec::with_capacity(stores.len());
                for (store, label) in pairs {
                    out.push(self.process_source(store.as_ref(), label).await?);
                }
                out
            }
        };

        let (data, compare) = assemble::assemble(&outcomes)?;
        let mut result = FameData {
            paths: self.paths.clone(),
            mnemonics: self.mnemonics.clone(),
            series: BTreeMap::new(),
            ranges: BTreeMap::new(),
            frequencies: BTreeMap::new(),
            data,
            compare,
            warnings: Vec::new(),
        };
        for o in outcomes {
            result.series.insert(o.label.clone(), o.series);
            result.ranges.insert(o.label.clone(), o.ranges);
            result.frequencies.insert(o.label, o.frequencies);
            result.warnings.extend(o.warnings);
        }
        Ok(result)
    }

    /// Resolve, retrieve, reconcile and tabulate every series of one source.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "fameframe::pipeline::process_source",
            skip(self, store),
            fields(ranged = self.is_ranged()),
        )
    )]
    async fn process_source(
        &self,
        store: &dyn DataStore,
        label: &str,
    ) -> Result<SourceOutcome, FameError> {
        let resolution =
            resolve::resolve_series(store, self.series.as_deref(), label, &self.wildcard).await?;

        let mut outcome = SourceOutcome {
            label: label.to_string(),
            warnings: resolution.rejected,
            ..SourceOutcome::default()
        };
        let mut tables = Vec::with_capacity(resolution.series.len());
        for name in &resolution.series {
            let frequency = resolve::series_frequency(store, name, label).await?;
            let (requested, obs) = if self.is_ranged() {
                let obs =
                    retrieve::copy_range(store, name, self.range.start, self.range.end, label)
                        .await?;
                (self.range, obs)
            } else {
                (PeriodRange::default(), retrieve::copy_all(store, name, label).await?)
            };
            let actual = reconcile(requested, obs.first, obs.last)?;
            tables.push(tabularize(&obs.values, name, actual, &frequency)?);
            outcome.ranges.insert(name.clone(), actual);
            outcome.frequencies.insert(name.clone(), frequency);
        }
        outcome.table = assemble::combine(tables)?;
        outcome.series = resolution.series;
        Ok(outcome)
    }
}
