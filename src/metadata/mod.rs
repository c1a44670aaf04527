//! Covariance metadata intake.
//!
//! Feature metadata carries per-tile positional covariance as four scalar
//! fields: `c0_0`, `c1_0`, `c1_1` (the symmetric horizontal block) and
//! `c2_2` (the vertical variance). This module deserializes those records
//! and evaluates them to CE90/LE90 summaries for the rendering layer.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use nalgebra::Matrix2;
use serde::Deserialize;
use tracing::warn;

use crate::accuracy::{DomainError, ce90, le90};

/// Positional-error covariance components of one metadata record.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CovarianceRecord {
    pub c0_0: f64,
    pub c1_0: f64,
    pub c1_1: f64,
    pub c2_2: f64,
}

impl CovarianceRecord {
    /// The symmetric horizontal covariance block.
    pub fn horizontal(&self) -> Matrix2<f64> {
        Matrix2::new(self.c0_0, self.c1_0, self.c1_0, self.c1_1)
    }

    /// Horizontal circular error of this record.
    pub fn ce90(&self) -> Result<f64, DomainError> {
        ce90(self.c0_0, self.c1_0, self.c1_1)
    }

    /// Vertical linear error of this record.
    pub fn le90(&self) -> Result<f64, DomainError> {
        le90(self.c2_2)
    }

    pub fn evaluate(&self) -> Result<AccuracySummary, DomainError> {
        Ok(AccuracySummary {
            ce90: self.ce90()?,
            le90: self.le90()?,
        })
    }
}

/// Scalar error bounds for one record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccuracySummary {
    pub ce90: f64,
    pub le90: f64,
}

/// Loads a JSON array of covariance records.
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<CovarianceRecord>> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("opening covariance records at {}", path.display()))?;
    let records = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing covariance records at {}", path.display()))?;
    Ok(records)
}

/// Evaluates each record, skipping malformed ones.
///
/// A record whose covariance falls outside the metric domain yields `None`;
/// the caller picks a fallback color for those.
pub fn evaluate_records(records: &[CovarianceRecord]) -> Vec<Option<AccuracySummary>> {
    records
        .iter()
        .enumerate()
        .map(|(i, rec)| match rec.evaluate() {
            Ok(summary) => Some(summary),
            Err(err) => {
                warn!("skipping covariance record {}: {}", i, err);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_record() -> CovarianceRecord {
        CovarianceRecord {
            c0_0: 0.08187296986579895,
            c1_0: -0.000011274002645222936,
            c1_1: 0.08102615922689438,
            c2_2: 0.16099649667739868,
        }
    }

    #[test]
    fn evaluate_reference_record() {
        let summary = reference_record().evaluate().unwrap();
        assert_eq!(summary.ce90, 0.5989373493306599);
        assert_eq!(summary.le90, 0.6620119598393063);
    }

    #[test]
    fn horizontal_block_is_symmetric() {
        let m = reference_record().horizontal();
        assert_eq!(m[(0, 1)], m[(1, 0)]);
        assert_eq!(m[(0, 0)], 0.08187296986579895);
        assert_eq!(m[(1, 1)], 0.08102615922689438);
    }

    #[test]
    fn deserialize_from_json() {
        let json = r#"[
            {"c0_0": 0.12492009997367859, "c1_0": -0.03651577606797218,
             "c1_1": 0.1556130051612854, "c2_2": 1.41}
        ]"#;
        let records: Vec<CovarianceRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records.len(), 1);
        let summary = records[0].evaluate().unwrap();
        assert_eq!(summary.ce90, 0.7899198029969414);
        assert_eq!(summary.le90, 1.9591477009403857);
    }

    #[test]
    fn malformed_records_are_skipped() {
        let good = reference_record();
        let degenerate = CovarianceRecord {
            c0_0: 0.0,
            c1_0: 0.0,
            c1_1: 0.0,
            c2_2: 0.0,
        };
        let negative = CovarianceRecord {
            c2_2: -1.0,
            ..reference_record()
        };

        let results = evaluate_records(&[good, degenerate, negative]);
        assert!(results[0].is_some());
        assert!(results[1].is_none());
        assert!(results[2].is_none());
    }

    #[test]
    fn load_records_from_file() {
        let path = std::env::temp_dir().join("geo_accuracy_records_test.json");
        std::fs::write(
            &path,
            r#"[{"c0_0": 0.1, "c1_0": 0.0, "c1_1": 0.1, "c2_2": 0.2},
                {"c0_0": 0.3, "c1_0": 0.01, "c1_1": 0.2, "c2_2": 0.4}]"#,
        )
        .unwrap();

        let records = load_records(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].c1_0, 0.01);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn load_records_missing_file_fails() {
        assert!(load_records("/nonexistent/records.json").is_err());
    }
}
