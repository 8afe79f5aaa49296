//! Visualization utilities for steering_bench
//!
//! Renders per-implementation timing distributions as histograms using
//! gnuplot. Opt-in from the benchmark binary; the console report never
//! depends on it.

use gnuplot::{AutoOption, AxesCommon, Caption, Color, Figure};
use itertools::{Itertools, MinMaxResult};
use ordered_float::OrderedFloat;

use crate::common::{BenchError, BenchResult};

/// Series colors, cycled per implementation
const PALETTE: [&str; 8] = [
    "#35C788", "#DD3355", "#0000FF", "#FFA500", "#800080", "#00FFFF", "#808080", "#000000",
];

/// Bin the samples into `bins` equal-width buckets over their extent.
///
/// Returns (bin center, count) per bucket. Fails on an empty sample set or a
/// zero bin count. A constant sample set collapses into the first bucket.
pub fn histogram(samples: &[f64], bins: usize) -> BenchResult<Vec<(f64, usize)>> {
    if bins == 0 {
        return Err(BenchError::InvalidParameter(
            "histogram needs at least one bin".to_string(),
        ));
    }
    let (min, max) = match samples.iter().copied().map(OrderedFloat).minmax() {
        MinMaxResult::NoElements => return Err(BenchError::EmptySampleSet),
        MinMaxResult::OneElement(v) => (v.0, v.0),
        MinMaxResult::MinMax(lo, hi) => (lo.0, hi.0),
    };
    let width = if max > min {
        (max - min) / bins as f64
    } else {
        1.0
    };
    let mut counts = vec![0usize; bins];
    for &sample in samples {
        let mut index = ((sample - min) / width) as usize;
        if index >= bins {
            index = bins - 1;
        }
        counts[index] += 1;
    }
    Ok(counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| (min + (i as f64 + 0.5) * width, count))
        .collect())
}

/// Histogram plot of per-call timings, one series per implementation
pub struct TimingPlot {
    figure: Figure,
    title: String,
    series: usize,
}

impl TimingPlot {
    pub fn new(title: &str) -> Self {
        Self {
            figure: Figure::new(),
            title: title.to_string(),
            series: 0,
        }
    }

    /// Add one implementation's timing samples as a histogram series
    pub fn add_series(
        &mut self,
        label: &str,
        samples: &[f64],
        bins: usize,
    ) -> BenchResult<&mut Self> {
        let hist = histogram(samples, bins)?;
        let centers: Vec<f64> = hist.iter().map(|(center, _)| *center).collect();
        let counts: Vec<f64> = hist.iter().map(|(_, count)| *count as f64).collect();
        let color = PALETTE[self.series % PALETTE.len()];
        self.series += 1;

        self.figure
            .axes2d()
            .set_title(&self.title, &[])
            .set_x_label("computation time [s]", &[])
            .set_y_label("count", &[])
            .set_y_range(AutoOption::Fix(0.0), AutoOption::Auto)
            .boxes(&centers, &counts, &[Caption(label), Color(color)]);
        Ok(self)
    }

    /// Open the gnuplot window
    pub fn show(&mut self) {
        self.figure.show().unwrap();
    }
}
