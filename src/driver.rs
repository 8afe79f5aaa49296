//! Workload driver
//!
//! Runs one registered implementation over a shared workload, timing exactly
//! one collaborator call per query pair and recording the outcome in input
//! order.

use std::collections::BTreeMap;
use std::fmt;

use crate::common::{BenchError, BenchResult, QueryPair, SampleRecord, SteeringFunction};
use crate::steering::SteeringId;
use crate::timing::ClockSource;

/// Which collaborator call is under measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Time `get_controls`; the path length is obtained afterwards through
    /// `get_distance`, outside the timed interval
    Controls,
    /// Time `get_path`; the produced path is discarded and no length is
    /// recorded
    Path,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Controls => f.write_str("controls"),
            Operation::Path => f.write_str("path"),
        }
    }
}

/// Closed dispatch table from identity to collaborator instance.
///
/// Keyed by [`SteeringId`], so a truly unknown name cannot reach the driver;
/// a registered-but-missing identity is still a runtime configuration error
/// surfaced through [`BenchError::UnknownImplementation`].
#[derive(Default)]
pub struct SteeringRegistry {
    entries: BTreeMap<SteeringId, Box<dyn SteeringFunction>>,
}

impl SteeringRegistry {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Register a collaborator under an identity, replacing any previous one
    pub fn register(&mut self, id: SteeringId, imp: Box<dyn SteeringFunction>) {
        self.entries.insert(id, imp);
    }

    pub fn get(&self, id: SteeringId) -> BenchResult<&dyn SteeringFunction> {
        self.entries
            .get(&id)
            .map(|imp| imp.as_ref())
            .ok_or_else(|| BenchError::UnknownImplementation(id.label().to_string()))
    }

    /// Registered identities, in report order
    pub fn ids(&self) -> Vec<SteeringId> {
        self.entries.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Drive one implementation over the workload.
///
/// Results preserve the input ordering: record `i` belongs to `pairs[i]`.
/// Pair lookups and result pushes happen outside the timed interval.
pub fn run_operation(
    op: Operation,
    id: SteeringId,
    registry: &SteeringRegistry,
    pairs: &[QueryPair],
    clock: ClockSource,
) -> BenchResult<Vec<SampleRecord>> {
    let imp = registry.get(id)?;
    let mut records = Vec::with_capacity(pairs.len());
    for pair in pairs {
        let record = match op {
            Operation::Controls => {
                let elapsed = clock.time(|| drop(imp.get_controls(&pair.start, &pair.goal)));
                let length = imp.get_distance(&pair.start, &pair.goal);
                SampleRecord {
                    pair: *pair,
                    computation_time: elapsed,
                    path_length: Some(length),
                }
            }
            Operation::Path => {
                let elapsed = clock.time(|| drop(imp.get_path(&pair.start, &pair.goal)));
                SampleRecord {
                    pair: *pair,
                    computation_time: elapsed,
                    path_length: None,
                }
            }
        };
        records.push(record);
    }
    Ok(records)
}
