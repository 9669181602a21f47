//! Row emission for the consuming sink.
//!
//! The sink maps sequence position to its destination row; this module only
//! flattens a column into position-tagged records and writes them one value
//! per row (JSON lines).

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::MetricsResult;
use crate::types::{MetricColumn, MetricValue};

/// One output row: the value plus its 0-based sequence position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRow {
    pub row: usize,
    pub value: MetricValue,
}

/// Flatten a column into position-tagged rows.
pub fn column_rows(column: &MetricColumn) -> Vec<MetricRow> {
    column
        .values
        .iter()
        .enumerate()
        .map(|(row, ordered)| MetricRow {
            row,
            value: ordered.value.clone(),
        })
        .collect()
}

/// Write a column as JSON lines, one value per row, in emission order.
pub fn write_rows<W: Write>(writer: &mut W, column: &MetricColumn) -> MetricsResult<()> {
    for row in column_rows(column) {
        let line = serde_json::to_string(&row)?;
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}
