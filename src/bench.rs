//! Benchmark orchestrator
//!
//! Generates one seeded workload per scenario, drives every registered
//! implementation over the identical pairs, reduces the timing column to
//! mean and standard deviation, and writes the summary lines. Persistence
//! and plotting are optional branches; the console report never depends on
//! them.

use std::fmt;
use std::io::Write;
use std::path::PathBuf;

use crate::common::{BenchError, BenchResult, QueryPair};
use crate::driver::{run_operation, Operation, SteeringRegistry};
use crate::sampler::{OperatingRegion, StateSampler};
use crate::stats;
use crate::steering::SteeringId;
use crate::timing::ClockSource;
use crate::utils::TimingPlot;
use crate::writer::RecordWriter;

/// Run parameters of the benchmark harness
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Number of query pairs per scenario
    pub samples: usize,
    /// Seed for the workload generator; both scenarios reseed with this
    /// value so they see comparable workloads
    pub seed: u64,
    /// Operating region the query poses are drawn from
    pub region: OperatingRegion,
    /// Clock the elapsed-time samples come from
    pub clock: ClockSource,
    /// Directory for per-pair record files; `None` disables persistence
    pub output_dir: Option<PathBuf>,
    /// Render timing histograms after each scenario
    pub plot: bool,
    /// Histogram bin count when plotting
    pub histogram_bins: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            samples: 100_000,
            seed: 0,
            region: OperatingRegion::default(),
            clock: ClockSource::Monotonic,
            output_dir: None,
            plot: false,
            histogram_bins: 50,
        }
    }
}

/// Aggregate result of one implementation in one scenario
#[derive(Debug, Clone, Copy)]
pub struct ImplSummary {
    pub id: SteeringId,
    pub operation: Operation,
    /// Mean elapsed time [s]
    pub mean: f64,
    /// Population standard deviation of the elapsed time [s]
    pub std_dev: f64,
}

impl fmt::Display for ImplSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} mean [s] +/- std [s]: {} +/- {}",
            self.id, self.mean, self.std_dev
        )
    }
}

/// Run one scenario: a fresh seeded workload through every registered
/// implementation.
///
/// A failure inside a single implementation's run is reported to stderr and
/// aborts only that implementation; the others still complete.
pub fn run_scenario(
    op: Operation,
    registry: &SteeringRegistry,
    config: &BenchConfig,
    out: &mut dyn Write,
) -> BenchResult<Vec<ImplSummary>> {
    if config.samples == 0 {
        return Err(BenchError::InvalidParameter(
            "samples must be at least 1".to_string(),
        ));
    }
    let mut sampler = StateSampler::new(config.region, config.seed);
    let pairs = sampler.sample_pairs(config.samples);
    let writer = config.output_dir.clone().map(RecordWriter::new);
    let mut plot = if config.plot {
        Some(TimingPlot::new(&format!("{} timing", op)))
    } else {
        None
    };

    let mut summaries = Vec::with_capacity(registry.len());
    for id in registry.ids() {
        match bench_one(op, id, registry, &pairs, config, writer.as_ref(), plot.as_mut()) {
            Ok(summary) => {
                writeln!(out, "{}", summary)?;
                summaries.push(summary);
            }
            Err(err) => eprintln!("{} {} benchmark failed: {}", id, op, err),
        }
    }

    if let Some(plot) = plot.as_mut() {
        plot.show();
    }
    Ok(summaries)
}

fn bench_one(
    op: Operation,
    id: SteeringId,
    registry: &SteeringRegistry,
    pairs: &[QueryPair],
    config: &BenchConfig,
    writer: Option<&RecordWriter>,
    plot: Option<&mut TimingPlot>,
) -> BenchResult<ImplSummary> {
    let records = run_operation(op, id, registry, pairs, config.clock)?;
    let times: Vec<f64> = records.iter().map(|r| r.computation_time).collect();
    let mean = stats::mean(&times)?;
    let std_dev = stats::std_dev(&times)?;
    if let Some(writer) = writer {
        writer.write(id, &records)?;
    }
    if let Some(plot) = plot {
        plot.add_series(id.label(), &times, config.histogram_bins)?;
    }
    Ok(ImplSummary {
        id,
        operation: op,
        mean,
        std_dev,
    })
}

/// Run both scenarios, control computation first, then full path
/// construction, and write one summary line per implementation per scenario.
pub fn run(
    registry: &SteeringRegistry,
    config: &BenchConfig,
    out: &mut dyn Write,
) -> BenchResult<Vec<ImplSummary>> {
    writeln!(out, "timing of control computation")?;
    let mut summaries = run_scenario(Operation::Controls, registry, config, out)?;
    writeln!(out, "timing of full path construction")?;
    summaries.extend(run_scenario(Operation::Path, registry, config, out)?);
    Ok(summaries)
}
