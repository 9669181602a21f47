//! Metric value data types.

use ng_core::Id;
use serde::{Deserialize, Serialize};

/// A computed scalar destined for one output slot.
///
/// `Empty` is the explicit placeholder: the only valid way to "skip" an
/// entity in an ordered sequence without shifting every later value to the
/// wrong slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Empty,
    Int(i64),
    Number(f64),
    Text(String),
}

impl From<f64> for MetricValue {
    fn from(value: f64) -> Self {
        MetricValue::Number(value)
    }
}

impl From<i64> for MetricValue {
    fn from(value: i64) -> Self {
        MetricValue::Int(value)
    }
}

impl From<usize> for MetricValue {
    fn from(value: usize) -> Self {
        MetricValue::Int(value as i64)
    }
}

impl From<String> for MetricValue {
    fn from(value: String) -> Self {
        MetricValue::Text(value)
    }
}

/// A metric value explicitly addressed to a target entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphMetricValue {
    pub target: Id,
    pub value: MetricValue,
}

impl GraphMetricValue {
    pub fn new(target: Id, value: impl Into<MetricValue>) -> Self {
        Self {
            target,
            value: value.into(),
        }
    }
}

/// A metric value whose destination is implied by its position in the
/// emitted sequence: the first value maps to the first free destination row,
/// the second to the second, and so on.
///
/// Reordering a sequence of these corrupts the row-to-entity correspondence
/// in the consuming sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GraphMetricValueOrdered {
    pub value: MetricValue,
}

impl GraphMetricValueOrdered {
    pub fn new(value: impl Into<MetricValue>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// One computation pass's output: a named, ordered sequence of values, one
/// per enumerated entity, no gaps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricColumn {
    pub name: String,
    pub values: Vec<GraphMetricValueOrdered>,
}

impl MetricColumn {
    pub fn new(name: impl Into<String>, values: Vec<GraphMetricValueOrdered>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
