//! Timing benchmark for steering-function implementations
//!
//! Runs the two benchmark scenarios (control computation, full path
//! construction) over every registered identity and prints one summary line
//! per implementation per scenario. The Dubins identities run on the
//! `dubins_paths` crate; the curvature-continuous and Reeds-Shepp identities
//! fall back to a straight-line placeholder until those libraries are linked.

use std::f64::consts::PI;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;

use steering_bench::steering::{DubinsSteering, LineSteering};
use steering_bench::{bench, BenchConfig, ClockSource, OperatingRegion, SteeringId, SteeringRegistry};

#[derive(Parser, Debug)]
#[command(name = "timing_benchmark", about = "Benchmark steering-function implementations")]
struct Args {
    /// Number of query pairs per scenario
    #[arg(long, default_value_t = 100_000)]
    samples: usize,

    /// Seed for the workload generator
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Maximum curvature magnitude [1/m]
    #[arg(long, default_value_t = 1.0)]
    kappa_max: f64,

    /// Maximum curvature rate [1/m^2]. Recorded in the run header for
    /// reproducibility but inert until a clothoid-capable collaborator is
    /// linked; the current placeholders take no curvature rate
    #[arg(long, default_value_t = 1.0)]
    sigma_max: f64,

    /// Path sampling step [m]
    #[arg(long, default_value_t = 0.1)]
    discretization: f64,

    /// Operating region width [m]
    #[arg(long, default_value_t = 20.0)]
    region_x: f64,

    /// Operating region height [m]
    #[arg(long, default_value_t = 20.0)]
    region_y: f64,

    /// Operating region heading span [rad]
    #[arg(long, default_value_t = 2.0 * PI)]
    region_theta: f64,

    /// Time with the process CPU clock instead of the monotonic wall clock
    #[arg(long)]
    cpu_clock: bool,

    /// Directory for per-pair CSV records; omit to disable persistence
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Render per-scenario timing histograms with gnuplot
    #[arg(long)]
    plot: bool,

    /// Histogram bin count
    #[arg(long, default_value_t = 50)]
    bins: usize,
}

fn build_registry(args: &Args) -> SteeringRegistry {
    let mut registry = SteeringRegistry::new();
    // Curvature-continuous Dubins runs on the plain Dubins adapter until a
    // clothoid library is linked.
    registry.register(
        SteeringId::CcDubins,
        Box::new(DubinsSteering::new(args.kappa_max, args.discretization, true)),
    );
    registry.register(
        SteeringId::Dubins,
        Box::new(DubinsSteering::new(args.kappa_max, args.discretization, true)),
    );
    for id in [
        SteeringId::CcReedsShepp,
        SteeringId::Hc00,
        SteeringId::Hc0pm,
        SteeringId::Hcpm0,
        SteeringId::Hcpmpm,
        SteeringId::ReedsShepp,
    ]
    .iter()
    {
        registry.register(*id, Box::new(LineSteering::new(args.discretization)));
    }
    registry
}

fn run(args: &Args) -> steering_bench::BenchResult<()> {
    let clock = if args.cpu_clock {
        ClockSource::ProcessCpu
    } else {
        ClockSource::Monotonic
    };
    let config = BenchConfig {
        samples: args.samples,
        seed: args.seed,
        region: OperatingRegion {
            x: args.region_x,
            y: args.region_y,
            theta: args.region_theta,
        },
        clock,
        output_dir: args.output_dir.clone(),
        plot: args.plot,
        histogram_bins: args.bins,
    };
    let registry = build_registry(args);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(
        out,
        "samples: {}, seed: {}, clock: {}, kappa_max: {}, sigma_max: {}, step: {}",
        args.samples,
        args.seed,
        clock.label(),
        args.kappa_max,
        args.sigma_max,
        args.discretization
    )?;
    bench::run(&registry, &config, &mut out)?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("timing_benchmark: {}", err);
        std::process::exit(1);
    }
}
