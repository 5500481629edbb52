//! Payload extraction
//!
//! Projects each record of an embedded JSON array onto a label and a value.
//! Missing or mistyped fields are hard failures; nothing is defaulted.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::types::Series;
use crate::error::{DashboardError, DashboardResult};

/// Names of the label and value fields inside each record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSelector {
    pub label: String,
    pub value: String,
}

impl FieldSelector {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// `mes` / `monto`
    pub fn revenue() -> Self {
        Self::new("mes", "monto")
    }

    /// `doctor` / `citas_atendidas`
    pub fn performance() -> Self {
        Self::new("doctor", "citas_atendidas")
    }
}

/// Extract a series from a JSON array payload
pub fn extract_series(payload: &str, fields: &FieldSelector) -> DashboardResult<Series> {
    let document: Value = serde_json::from_str(payload)?;
    let records = document.as_array().ok_or(DashboardError::NotAnArray)?;

    let mut series = Series::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let object = record
            .as_object()
            .ok_or(DashboardError::NotARecord { index })?;

        let label = lookup(object, index, &fields.label)?
            .as_str()
            .ok_or_else(|| wrong_type(index, &fields.label, "string"))?;
        let value = numeric(lookup(object, index, &fields.value)?, index, &fields.value)?;

        series.push(label, value);
    }

    Ok(series)
}

/// Deserialize a payload into typed records
pub fn extract_records<R: DeserializeOwned>(payload: &str) -> DashboardResult<Vec<R>> {
    Ok(serde_json::from_str(payload)?)
}

fn lookup<'a>(
    object: &'a Map<String, Value>,
    index: usize,
    field: &str,
) -> DashboardResult<&'a Value> {
    object
        .get(field)
        .ok_or_else(|| DashboardError::MissingField {
            index,
            field: field.to_string(),
        })
}

// Decimal amounts serialized by Django arrive as strings like "1500.00".
fn numeric(value: &Value, index: usize, field: &str) -> DashboardResult<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    parsed
        .filter(|v| v.is_finite())
        .ok_or_else(|| wrong_type(index, field, "number"))
}

fn wrong_type(index: usize, field: &str, expected: &'static str) -> DashboardError {
    DashboardError::WrongFieldType {
        index,
        field: field.to_string(),
        expected,
    }
}
