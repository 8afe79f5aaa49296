//! Clock sources for per-call timing
//!
//! The contract is to time exactly one collaborator call: the stamp is taken
//! immediately before and after the closure, and all bookkeeping happens
//! outside the interval. The closure's return value is dropped inside the
//! interval, like the discarded temporary in the original harness.
//!
//! Monotonic wall-clock and process-CPU time are not interchangeable for
//! multi-core attribution; reports should state which one produced the
//! numbers.

use std::time::Instant;

/// Which clock produces the elapsed-time samples
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockSource {
    /// `std::time::Instant`, monotonic wall clock
    Monotonic,
    /// Per-process CPU time (`CLOCK_PROCESS_CPUTIME_ID`); falls back to the
    /// monotonic clock on non-unix targets
    ProcessCpu,
}

impl ClockSource {
    /// Run `f` and return the elapsed time in seconds
    pub fn time<F: FnOnce()>(self, f: F) -> f64 {
        match self {
            ClockSource::Monotonic => time_monotonic(f),
            ClockSource::ProcessCpu => time_process_cpu(f),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ClockSource::Monotonic => "monotonic",
            ClockSource::ProcessCpu => "process-cpu",
        }
    }
}

fn time_monotonic<F: FnOnce()>(f: F) -> f64 {
    let start = Instant::now();
    f();
    start.elapsed().as_secs_f64()
}

#[cfg(unix)]
fn time_process_cpu<F: FnOnce()>(f: F) -> f64 {
    let start = cpu_time_s();
    f();
    let finish = cpu_time_s();
    (finish - start).max(0.0)
}

#[cfg(not(unix))]
fn time_process_cpu<F: FnOnce()>(f: F) -> f64 {
    time_monotonic(f)
}

#[cfg(unix)]
fn cpu_time_s() -> f64 {
    let mut ts = libc::timespec {
        tv_sec: 0,
        tv_nsec: 0,
    };
    // Cannot fail for a valid clock id and timespec pointer.
    unsafe {
        libc::clock_gettime(libc::CLOCK_PROCESS_CPUTIME_ID, &mut ts);
    }
    ts.tv_sec as f64 + ts.tv_nsec as f64 * 1e-9
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_non_negative() {
        for clock in [ClockSource::Monotonic, ClockSource::ProcessCpu].iter() {
            let elapsed = clock.time(|| {
                let mut acc = 0u64;
                for i in 0..1000u64 {
                    acc = acc.wrapping_add(i * i);
                }
                std::hint::black_box(acc);
            });
            assert!(elapsed >= 0.0);
        }
    }

    #[test]
    fn test_closure_runs_once() {
        let mut calls = 0;
        ClockSource::Monotonic.time(|| calls += 1);
        assert_eq!(calls, 1);
    }
}
