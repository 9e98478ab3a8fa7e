//! Seed enumeration and pipeline driving.
//!
//! The enumerator maps scan indices to seeds `z = ±k·2^v − 1`, a pure
//! function, so a run is restartable from any index. For each index it
//! evaluates the polynomials, runs the filter cascade, and forwards accepted
//! candidates to the report sink; a `Terminate` outcome ends enumeration
//! immediately because every later seed is strictly larger.

use std::ops::Range;

use num_bigint::BigInt;

use crate::filter::{self, Outcome};
use crate::params;
use crate::primality::PrimalityOracle;
use crate::report::ReportSink;
use crate::Error;

/// Build-time search configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Power-of-two shift `v` of the seed family; also the guaranteed
    /// 2-adicity of `r − 1` and `re − 1`.
    pub two_adicity: u32,
    /// Scan the negative branch of the family.
    pub negative: bool,
    /// Scan indices `k`, half-open.
    pub range: Range<u64>,
    /// Terminate once the base-field candidate reaches this many bits.
    pub max_field_bits: u64,
}

impl SearchConfig {
    /// Seed for scan index `k`.
    pub fn seed(&self, k: u64) -> BigInt {
        let mut magnitude = BigInt::from(k) << self.two_adicity;
        if self.negative {
            magnitude = -magnitude;
        }
        magnitude - 1
    }
}

/// Accounting for one finished run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchSummary {
    /// Seeds actually evaluated.
    pub scanned: u64,
    /// Candidates that reached the partial tier, full acceptances included.
    pub partial: u64,
    /// Fully accepted candidates.
    pub full: u64,
    /// Scan index that tripped the field-size bound, if any.
    pub terminated_at: Option<u64>,
}

/// Drives evaluate → filter → report over the configured range.
pub struct Search<O> {
    config: SearchConfig,
    oracle: O,
}

impl<O: PrimalityOracle> Search<O> {
    pub fn new(config: SearchConfig, oracle: O) -> Self {
        Search { config, oracle }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Sequential search in ascending index order. No index past the
    /// terminating one is evaluated.
    ///
    /// A full acceptance emits its partial record first and then the full
    /// record, preserving the two-tier visibility of the cascade.
    pub fn run<R: ReportSink>(&self, sink: &mut R) -> Result<SearchSummary, Error> {
        let mut summary = SearchSummary::default();
        for k in self.config.range.clone() {
            let z = self.config.seed(k);
            summary.scanned += 1;
            match filter::assess(params::evaluate(&z)?, &self.config, &self.oracle)? {
                Outcome::Rejected => {}
                Outcome::Terminate => {
                    summary.terminated_at = Some(k);
                    break;
                }
                Outcome::PartialAccept(params) => {
                    summary.partial += 1;
                    sink.partial(&params)?;
                }
                Outcome::FullAccept(params, metrics) => {
                    summary.partial += 1;
                    summary.full += 1;
                    sink.partial(&params)?;
                    sink.full(&params, &metrics)?;
                }
            }
        }
        Ok(summary)
    }
}

#[cfg(feature = "multicore")]
impl<O: PrimalityOracle + Sync> Search<O> {
    /// Parallel search over the same range. Workers share a stop flag for a
    /// best-effort early exit once the field-size bound trips; accepted
    /// records are sorted by scan index before emission, so the output is
    /// identical to [`Search::run`].
    pub fn run_parallel<R: ReportSink>(&self, sink: &mut R) -> Result<SearchSummary, Error> {
        use crate::multicore::{IntoParallelIterator, ParallelIterator};
        use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

        let stop = AtomicBool::new(false);
        let scanned = AtomicU64::new(0);
        let mut hits = self
            .config
            .range
            .clone()
            .into_par_iter()
            .filter_map(|k| {
                if stop.load(Ordering::Relaxed) {
                    return None;
                }
                scanned.fetch_add(1, Ordering::Relaxed);
                let z = self.config.seed(k);
                let outcome = match params::evaluate(&z)
                    .and_then(|evaluation| filter::assess(evaluation, &self.config, &self.oracle))
                {
                    Ok(outcome) => outcome,
                    Err(violation) => return Some(Err(violation)),
                };
                match outcome {
                    Outcome::Rejected => None,
                    Outcome::Terminate => {
                        stop.store(true, Ordering::Relaxed);
                        Some(Ok((k, Outcome::Terminate)))
                    }
                    accepted => Some(Ok((k, accepted))),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        hits.sort_by_key(|(k, _)| *k);

        let mut summary = SearchSummary {
            scanned: scanned.load(Ordering::Relaxed),
            ..SearchSummary::default()
        };
        for (k, outcome) in hits {
            match outcome {
                Outcome::Rejected => {}
                Outcome::Terminate => {
                    summary.terminated_at = Some(k);
                    break;
                }
                Outcome::PartialAccept(params) => {
                    summary.partial += 1;
                    sink.partial(&params)?;
                }
                Outcome::FullAccept(params, metrics) => {
                    summary.partial += 1;
                    summary.full += 1;
                    sink.partial(&params)?;
                    sink.full(&params, &metrics)?;
                }
            }
        }
        Ok(summary)
    }
}
