//! Solve output containers.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::PkError;

/// Drug amounts in every pool at a single evaluation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    time: f64,
    state: Vec<f64>,
}

impl Sample {
    pub(crate) fn new(time: f64, state: Vec<f64>) -> Self {
        Self { time, state }
    }

    /// Evaluation time of this sample.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Drug amount per pool, in state-layout order.
    pub fn state(&self) -> &[f64] {
        &self.state
    }

    /// Drug amount in pool `idx`, if present.
    pub fn amount(&self, idx: usize) -> Option<f64> {
        self.state.get(idx).copied()
    }

    /// Total drug mass summed over all pools.
    pub fn total(&self) -> f64 {
        self.state.iter().sum()
    }
}

/// The full time series produced by one solve.
///
/// Immutable after creation and owned by the caller that requested the
/// solve. Times are exactly the requested evaluation grid, strictly
/// increasing from 0 to `tmax`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    labels: Vec<String>,
    samples: Vec<Sample>,
}

impl Trajectory {
    pub(crate) fn new(labels: Vec<String>, times: Vec<f64>, states: Vec<Vec<f64>>) -> Self {
        let samples = times
            .into_iter()
            .zip(states)
            .map(|(time, state)| Sample::new(time, state))
            .collect();
        Self { labels, samples }
    }

    /// Compartment labels matching the state layout (`depot`, `central`,
    /// `peripheral_i`).
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// All samples, in time order.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Number of evaluation points.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// First sample (the initial state, at time 0).
    pub fn first(&self) -> Option<&Sample> {
        self.samples.first()
    }

    /// Last sample (at time `tmax`).
    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    /// The evaluation times.
    pub fn times(&self) -> Vec<f64> {
        self.samples.iter().map(Sample::time).collect()
    }

    /// Number of pools in the state layout.
    pub fn ncompartments(&self) -> usize {
        self.labels.len()
    }

    /// The time series of a single pool, if `idx` is in range.
    pub fn compartment(&self, idx: usize) -> Option<Vec<f64>> {
        if idx >= self.ncompartments() {
            return None;
        }
        Some(self.samples.iter().filter_map(|s| s.amount(idx)).collect())
    }

    /// Area under the curve of pool `idx` over the sampled interval,
    /// by the linear trapezoid rule.
    pub fn auc(&self, idx: usize) -> Option<f64> {
        let series = self.compartment(idx)?;
        let mut auc = 0.0;
        for (pair_t, pair_c) in self.samples.windows(2).zip(series.windows(2)) {
            let dt = pair_t[1].time() - pair_t[0].time();
            if dt <= 0.0 {
                continue;
            }
            auc += (pair_c[0] + pair_c[1]) / 2.0 * dt;
        }
        Some(auc)
    }

    /// Write the trajectory as CSV: a header of `time` plus the
    /// compartment labels, then one row per sample.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), PkError> {
        let mut wtr = csv::Writer::from_writer(writer);
        let mut header = vec!["time".to_string()];
        header.extend(self.labels.iter().cloned());
        wtr.write_record(&header)?;
        for sample in &self.samples {
            let mut record = vec![sample.time().to_string()];
            record.extend(sample.state().iter().map(|v| v.to_string()));
            wtr.write_record(&record)?;
        }
        wtr.flush()?;
        Ok(())
    }
}
