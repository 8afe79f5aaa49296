//! Record persistence
//!
//! Serializes raw per-pair results to one delimited text file per
//! implementation for offline analysis. The row format is the historical one:
//! two space-separated five-field pose groups, then the elapsed time and the
//! path length, comma-separated. The pose sub-fields are intentionally left
//! unquoted.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::common::{BenchResult, SampleRecord};
use crate::steering::SteeringId;

pub const HEADER: &str = "start,goal,computation_time,path_length";

/// Writes per-pair sample records under a configured output directory
pub struct RecordWriter {
    output_dir: PathBuf,
}

impl RecordWriter {
    pub fn new<P: Into<PathBuf>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Destination file for one implementation's records
    pub fn output_path(&self, id: SteeringId) -> PathBuf {
        self.output_dir.join(format!("{}_stats.csv", id.label()))
    }

    /// Write all records for `id`, replacing any previous file.
    ///
    /// On failure the partially written file is removed so downstream tooling
    /// cannot mistake it for a complete run with fewer samples.
    pub fn write(&self, id: SteeringId, records: &[SampleRecord]) -> BenchResult<PathBuf> {
        fs::create_dir_all(&self.output_dir)?;
        let path = self.output_path(id);
        if let Err(e) = write_records(&path, records) {
            let _ = fs::remove_file(&path);
            return Err(e.into());
        }
        Ok(path)
    }
}

fn write_records(path: &Path, records: &[SampleRecord]) -> io::Result<()> {
    // File::create truncates the previous run's file
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "{}", HEADER)?;
    for record in records {
        write!(
            w,
            "{},{},{},",
            record.pair.start, record.pair.goal, record.computation_time
        )?;
        match record.path_length {
            Some(length) => writeln!(w, "{}", length)?,
            None => writeln!(w)?,
        }
    }
    w.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{QueryPair, State};

    fn test_records(n: usize) -> Vec<SampleRecord> {
        (0..n)
            .map(|i| SampleRecord {
                pair: QueryPair::new(
                    State::new(i as f64, 0.0, 0.5, 0.0, 0),
                    State::new(0.0, i as f64, -0.5, 0.0, 0),
                ),
                computation_time: 0.01,
                path_length: Some(5.0),
            })
            .collect()
    }

    fn temp_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("steering_bench_{}_{}", name, std::process::id()))
    }

    #[test]
    fn test_header_and_rows() {
        let dir = temp_dir("header_and_rows");
        let writer = RecordWriter::new(&dir);
        let path = writer.write(SteeringId::Dubins, &test_records(3)).unwrap();
        assert!(path.ends_with("Dubins_stats.csv"));

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], HEADER);
        for line in &lines[1..] {
            assert!(line.ends_with(",0.01,5"), "unexpected row: {}", line);
            assert_eq!(line.matches(',').count(), 3);
        }

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_rewrite_truncates() {
        let dir = temp_dir("rewrite_truncates");
        let writer = RecordWriter::new(&dir);
        writer.write(SteeringId::ReedsShepp, &test_records(5)).unwrap();
        let path = writer.write(SteeringId::ReedsShepp, &test_records(1)).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_length_renders_empty_field() {
        let dir = temp_dir("missing_length");
        let writer = RecordWriter::new(&dir);
        let mut records = test_records(1);
        records[0].path_length = None;
        let path = writer.write(SteeringId::Hc00, &records).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let row = content.lines().nth(1).unwrap();
        assert!(row.ends_with(",0.01,"), "unexpected row: {}", row);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_pose_groups_have_five_fields() {
        let dir = temp_dir("pose_groups");
        let writer = RecordWriter::new(&dir);
        let path = writer.write(SteeringId::CcDubins, &test_records(1)).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let row = content.lines().nth(1).unwrap();
        let groups: Vec<&str> = row.split(',').collect();
        assert_eq!(groups.len(), 4);
        assert_eq!(groups[0].split(' ').count(), 5);
        assert_eq!(groups[1].split(' ').count(), 5);

        let _ = fs::remove_dir_all(&dir);
    }
}
