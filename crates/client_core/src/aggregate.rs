//! Display-only totals derived from the last fetched collection.
//!
//! Nothing here is cached: every summary is a single pass over the slice it is given.

use std::{collections::HashSet, hash::Hash};

use shared::{
    domain::{AssignmentStatus, InventoryRow, QaRecord, Shipment, StorageAssignment},
    serde_helpers::LooseNumber,
};

/// Quantity resolution used everywhere a quantity may arrive under two names:
/// the primary field if it holds a number, else the secondary one, else 0.
pub fn resolve_quantity(primary: Option<&LooseNumber>, secondary: Option<&LooseNumber>) -> f64 {
    primary
        .and_then(LooseNumber::as_f64)
        .or_else(|| secondary.and_then(LooseNumber::as_f64))
        .unwrap_or(0.0)
}

pub fn row_quantity(row: &InventoryRow) -> f64 {
    resolve_quantity(row.quantity.as_ref(), row.qty.as_ref())
}

pub fn total_quantity(rows: &[InventoryRow]) -> f64 {
    rows.iter().map(row_quantity).sum()
}

/// Number of distinct present keys; records without a key are not counted.
pub fn distinct_count<T, K, F>(records: &[T], key: F) -> usize
where
    K: Eq + Hash,
    F: Fn(&T) -> Option<K>,
{
    records.iter().filter_map(key).collect::<HashSet<_>>().len()
}

/// Mean of a rating field; unparseable ratings count as 0 and an empty slice yields 0.
pub fn average_rating<T, F>(records: &[T], rating: F) -> f64
where
    F: Fn(&T) -> Option<&LooseNumber>,
{
    if records.is_empty() {
        return 0.0;
    }
    let sum: f64 = records
        .iter()
        .map(|record| rating(record).and_then(LooseNumber::as_f64).unwrap_or(0.0))
        .sum();
    sum / records.len() as f64
}

/// One decimal place, or a bare `0` when there was nothing to average.
pub fn format_average(count: usize, value: f64) -> String {
    if count == 0 {
        "0".to_string()
    } else {
        format!("{value:.1}")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InventorySummary {
    pub rows: usize,
    pub total_quantity: f64,
    pub distinct_items: usize,
    pub distinct_locations: usize,
}

impl InventorySummary {
    pub fn from_rows(rows: &[InventoryRow]) -> Self {
        Self {
            rows: rows.len(),
            total_quantity: total_quantity(rows),
            distinct_items: distinct_count(rows, |r| present_label(r.item_label())),
            distinct_locations: distinct_count(rows, |r| present_label(r.location_label())),
        }
    }
}

fn present_label(label: String) -> Option<String> {
    (label != "-").then_some(label)
}

#[derive(Debug, Clone, PartialEq)]
pub struct QaSummary {
    pub inspections: usize,
    pub average_driver_rating: f64,
    pub average_item_quality_rating: f64,
    pub distinct_gate_ins: usize,
}

impl QaSummary {
    pub fn from_records(records: &[QaRecord]) -> Self {
        Self {
            inspections: records.len(),
            average_driver_rating: average_rating(records, |r| r.driver_rating.as_ref()),
            average_item_quality_rating: average_rating(records, |r| {
                r.item_quality_rating.as_ref()
            }),
            distinct_gate_ins: distinct_count(records, |r| r.gate_in_id),
        }
    }

    pub fn driver_rating_display(&self) -> String {
        format_average(self.inspections, self.average_driver_rating)
    }

    pub fn item_quality_rating_display(&self) -> String {
        format_average(self.inspections, self.average_item_quality_rating)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShipmentSummary {
    pub shipments: usize,
    pub total_lines: usize,
    pub total_expected_quantity: f64,
}

impl ShipmentSummary {
    pub fn from_shipments(shipments: &[Shipment]) -> Self {
        let lines = shipments.iter().flat_map(|s| s.lines.iter());
        Self {
            shipments: shipments.len(),
            total_lines: shipments.iter().map(|s| s.lines.len()).sum(),
            total_expected_quantity: lines
                .map(|line| resolve_quantity(line.expected_quantity.as_ref(), None))
                .sum(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignmentSummary {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub in_progress: usize,
}

impl AssignmentSummary {
    /// Completed vs. everything else; `pending` includes unknown statuses.
    pub fn from_assignments(assignments: &[StorageAssignment]) -> Self {
        let completed = assignments.iter().filter(|a| a.status.is_completed()).count();
        let in_progress = assignments
            .iter()
            .filter(|a| a.status == AssignmentStatus::InProgress)
            .count();
        Self {
            total: assignments.len(),
            completed,
            pending: assignments.len() - completed,
            in_progress,
        }
    }
}

#[cfg(test)]
#[path = "tests/aggregate_tests.rs"]
mod tests;
