//! Standalone scanner for ~384-bit BLS12 base fields.
//!
//! Configuration is fixed at build time; records stream to stdout as plain
//! text. The process exits non-zero only when an internal invariant is
//! violated, never for an empty search.

use std::io::{self, Write};
use std::time::Instant;

use anyhow::Result;
use bls12_paramgen::{GmpOracle, Search, SearchConfig, TextReporter};

/// Power-of-two shift of the seed family; the guaranteed 2-adicity of r − 1.
const TWO_ADICITY: u32 = 24;
/// Scan the negative branch of the family.
const NEGATIVE: bool = true;
/// Scan-index window.
const RANGE_START: u64 = 598_249_620_352;
const RANGE_END: u64 = 1 << 41;
/// Stop once the base-field candidate reaches this size.
const MAX_FIELD_BITS: u64 = 384;
/// Miller-Rabin repetitions for the probabilistic oracle.
const MR_REPS: u32 = 25;

fn main() -> Result<()> {
    let config = SearchConfig {
        two_adicity: TWO_ADICITY,
        negative: NEGATIVE,
        range: RANGE_START..RANGE_END,
        max_field_bits: MAX_FIELD_BITS,
    };

    let mut reporter = TextReporter::new(io::stdout().lock());
    reporter.preamble(&config)?;

    let search = Search::new(config, GmpOracle::new(MR_REPS));
    let start = Instant::now();
    #[cfg(feature = "multicore")]
    let summary = search.run_parallel(&mut reporter)?;
    #[cfg(not(feature = "multicore"))]
    let summary = search.run(&mut reporter)?;

    reporter.summary(&summary)?;
    let mut out = reporter.into_inner();
    writeln!(out, "elapsed: {:.2?}", start.elapsed())?;
    Ok(())
}
