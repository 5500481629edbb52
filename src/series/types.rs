//! Record and series types
//!
//! Records are the shapes embedded by the server; a [`Series`] is what every
//! record sequence is projected into.

use serde::{Deserialize, Serialize};

/// Labels and values of a single chart series, index-aligned
///
/// The fields are private so that the two vectors only ever grow together.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Series {
    labels: Vec<String>,
    values: Vec<f64>,
}

impl Series {
    /// Create an empty series
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty series with room for `capacity` points
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            labels: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    /// Project typed records in order
    pub fn from_records<R: ChartRecord>(records: &[R]) -> Self {
        records
            .iter()
            .map(|r| (r.label().to_string(), r.value()))
            .collect()
    }

    /// Append one point
    pub fn push(&mut self, label: impl Into<String>, value: f64) {
        self.labels.push(label.into());
        self.values.push(value);
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterate over `(label, value)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    /// Split into the labels and values vectors
    pub fn into_parts(self) -> (Vec<String>, Vec<f64>) {
        (self.labels, self.values)
    }
}

impl FromIterator<(String, f64)> for Series {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        let mut series = Series::new();
        for (label, value) in iter {
            series.push(label, value);
        }
        series
    }
}

/// A record that can be projected onto a chart
pub trait ChartRecord {
    fn label(&self) -> &str;
    fn value(&self) -> f64;
}

/// Monthly revenue as embedded in `datos-ingresos-json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenuePoint {
    /// Calendar-month label
    #[serde(rename = "mes")]
    pub period: String,
    /// Currency units; expected non-negative but not enforced
    #[serde(rename = "monto")]
    pub amount: f64,
}

impl RevenuePoint {
    pub fn new(period: impl Into<String>, amount: f64) -> Self {
        Self {
            period: period.into(),
            amount,
        }
    }
}

impl ChartRecord for RevenuePoint {
    fn label(&self) -> &str {
        &self.period
    }

    fn value(&self) -> f64 {
        self.amount
    }
}

/// Appointments handled per provider as embedded in `datos-desempeno-json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformancePoint {
    #[serde(rename = "doctor")]
    pub provider: String,
    #[serde(rename = "citas_atendidas")]
    pub handled_count: u32,
}

impl PerformancePoint {
    pub fn new(provider: impl Into<String>, handled_count: u32) -> Self {
        Self {
            provider: provider.into(),
            handled_count,
        }
    }
}

impl ChartRecord for PerformancePoint {
    fn label(&self) -> &str {
        &self.provider
    }

    fn value(&self) -> f64 {
        f64::from(self.handled_count)
    }
}
