//! Plain-text reporting of accepted seeds.
//!
//! The filter never prints; it tags. Implementations of [`ReportSink`]
//! receive the tagged candidates and must not influence control flow.

use std::io::{self, Write};

use num_bigint::BigInt;
use num_traits::One;

use crate::naf::CostMetrics;
use crate::params::{two_adic_valuation, DerivedParameters};
use crate::search::{SearchConfig, SearchSummary};

/// Destination for accepted candidates.
pub trait ReportSink {
    /// A candidate at the weaker acceptance tier.
    fn partial(&mut self, params: &DerivedParameters) -> io::Result<()>;
    /// A fully accepted candidate. The driver emits the partial record for
    /// the same seed first.
    fn full(&mut self, params: &DerivedParameters, metrics: &CostMetrics) -> io::Result<()>;
}

/// Human-readable line format over any writer.
#[derive(Debug)]
pub struct TextReporter<W> {
    out: W,
}

impl<W: Write> TextReporter<W> {
    pub fn new(out: W) -> Self {
        TextReporter { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Run header: seed family and bounds.
    pub fn preamble(&mut self, config: &SearchConfig) -> io::Result<()> {
        writeln!(
            self.out,
            "seed family: z = {}k*2^{} - 1, k in [{}, {})",
            if config.negative { "-" } else { "" },
            config.two_adicity,
            config.range.start,
            config.range.end,
        )?;
        writeln!(self.out, "field-size bound: q < 2^{}", config.max_field_bits)?;
        writeln!(self.out, "-----------------------")
    }

    /// Closing accounting line.
    pub fn summary(&mut self, summary: &SearchSummary) -> io::Result<()> {
        match summary.terminated_at {
            Some(k) => writeln!(
                self.out,
                "scanned {} seeds, field-size bound reached at k = {}",
                summary.scanned, k
            )?,
            None => writeln!(self.out, "scanned {} seeds, range exhausted", summary.scanned)?,
        }
        writeln!(
            self.out,
            "{} partial, {} full acceptances",
            summary.partial, summary.full
        )
    }

    fn value_line(&mut self, label: &str, value: &BigInt) -> io::Result<()> {
        writeln!(self.out, "{} = {:#x} ({} bits)", label, value, value.bits())
    }
}

impl<W: Write> ReportSink for TextReporter<W> {
    fn partial(&mut self, params: &DerivedParameters) -> io::Result<()> {
        self.value_line("z", &params.z)
    }

    fn full(&mut self, params: &DerivedParameters, metrics: &CostMetrics) -> io::Result<()> {
        self.value_line("z", &params.z)?;
        self.value_line("r", &params.r)?;
        self.value_line("re", &params.re)?;
        self.value_line("q", &params.q)?;
        self.value_line("h2", &params.h2)?;
        self.value_line("hT", &params.ht)?;
        writeln!(
            self.out,
            "NAF weight(|z|) = {}, Hamming weight(|z|) = {}",
            metrics.naf_weight, metrics.hamming_weight
        )?;
        writeln!(
            self.out,
            "v2(z + 1) = {}, v2(r - 1) = {}, v2(re - 1) = {}",
            two_adic_valuation(&(&params.z + BigInt::one())),
            two_adic_valuation(&(&params.r - BigInt::one())),
            two_adic_valuation(&(&params.re - BigInt::one())),
        )?;
        writeln!(self.out, "-----------------------")
    }
}
