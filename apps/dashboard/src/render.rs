//! Plain-text rendering of page sessions.

use std::fmt::Write as _;

use chrono::{DateTime, Local};
use client_core::{
    aggregate::row_quantity, InventoryPage, QaPage, RequestState, RequestStatus, ShipmentsPage,
    StorageAssignmentsPage, WarehouseApi,
};
use shared::{
    domain::{QaRecord, Shipment},
    serde_helpers::LooseNumber,
};

use crate::clock;

const EMPTY: &str = "-";

pub fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, headers.iter().copied(), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, rule.iter().map(String::as_str), &widths);
    for row in rows {
        push_row(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn push_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect();
    let _ = writeln!(out, "{}", line.join("  ").trim_end());
}

fn opt<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| EMPTY.to_string(), |v| v.to_string())
}

fn text(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => EMPTY.to_string(),
    }
}

fn number(value: Option<&LooseNumber>) -> String {
    match value {
        Some(LooseNumber::Number(n)) => n.to_string(),
        Some(LooseNumber::Text(t)) => t.clone(),
        None => EMPTY.to_string(),
    }
}

fn status_line(state: &RequestState) -> Option<String> {
    match state.status() {
        RequestStatus::Idle => None,
        RequestStatus::Loading => Some("Loading...".to_string()),
        RequestStatus::Error(message) => Some(format!("Error: {message}")),
        RequestStatus::Success(message) => Some(message.clone()),
    }
}

fn push_status(out: &mut String, state: &RequestState) {
    if let Some(line) = status_line(state) {
        let _ = writeln!(out, "{line}");
    }
}

pub fn inventory<A: WarehouseApi>(page: &InventoryPage<A>, now: DateTime<Local>) -> String {
    let mut out = clock::header("Inventory", now);
    out.push('\n');
    push_status(&mut out, page.state());
    if page.is_empty_result() {
        out.push_str("No inventory found.\n");
        return out;
    }
    if page.rows().is_empty() {
        return out;
    }

    let rows: Vec<Vec<String>> = page
        .rows()
        .iter()
        .map(|row| {
            vec![
                row.item_label(),
                text(row.item_name.as_deref()),
                row.location_label(),
                text(row.location_name.as_deref()),
                row_quantity(row).to_string(),
            ]
        })
        .collect();
    out.push_str(&table(
        &["Item", "Name", "Location", "Location name", "Quantity"],
        &rows,
    ));
    let summary = page.summary();
    let _ = writeln!(
        out,
        "{} rows, total quantity {}, {} items across {} locations",
        summary.rows, summary.total_quantity, summary.distinct_items, summary.distinct_locations
    );
    out
}

fn qa_rows(records: &[QaRecord]) -> Vec<Vec<String>> {
    records
        .iter()
        .map(|r| {
            vec![
                opt(r.id),
                opt(r.gate_in_id),
                number(r.driver_rating.as_ref()),
                number(r.item_quality_rating.as_ref()),
                opt(r.inspected_by_id),
                text(r.qa_remarks.as_deref()),
            ]
        })
        .collect()
}

const QA_HEADERS: [&str; 6] = ["ID", "Gate-in", "Driver", "Quality", "Inspector", "Remarks"];

pub fn qa<A: WarehouseApi>(page: &QaPage<A>, now: DateTime<Local>) -> String {
    let mut out = clock::header("QA inspections", now);
    out.push('\n');
    push_status(&mut out, page.state());
    if page.records().is_empty() {
        out.push_str("No QA records yet.\n");
    } else {
        out.push_str(&table(&QA_HEADERS, &qa_rows(page.records())));
    }
    let summary = page.summary();
    let _ = writeln!(
        out,
        "{} inspections, avg driver rating {}, avg item quality {}, {} gate-ins inspected",
        summary.inspections,
        summary.driver_rating_display(),
        summary.item_quality_rating_display(),
        summary.distinct_gate_ins
    );
    out
}

pub fn qa_lookup<A: WarehouseApi>(page: &QaPage<A>, now: DateTime<Local>) -> String {
    let mut out = clock::header("QA by gate-in", now);
    out.push('\n');
    push_status(&mut out, page.lookup_state());
    match page.selected() {
        Some(record) => out.push_str(&table(&QA_HEADERS, &qa_rows(std::slice::from_ref(record)))),
        None if page.lookup_state().error().is_none() => out.push_str("No QA record.\n"),
        None => {}
    }
    out
}

fn shipment_rows(shipments: &[Shipment]) -> Vec<Vec<String>> {
    shipments
        .iter()
        .map(|s| {
            vec![
                opt(s.id),
                text(s.expected_arrival_date.as_deref()),
                text(s.supplier_name.as_deref()),
                text(s.driver_name.as_deref()),
                text(s.truck_number.as_deref()),
                opt(s.warehouse_id),
                s.lines.len().to_string(),
                text(s.status.as_deref()),
                opt(s.gate_in_id),
            ]
        })
        .collect()
}

const SHIPMENT_HEADERS: [&str; 9] = [
    "ID", "Arrival", "Supplier", "Driver", "Truck", "Warehouse", "Lines", "Status", "Gate-in",
];

pub fn shipments<A: WarehouseApi>(page: &ShipmentsPage<A>, now: DateTime<Local>) -> String {
    let mut out = clock::header("Inbound shipments", now);
    out.push('\n');
    push_status(&mut out, page.state());
    if page.shipments().is_empty() {
        out.push_str("No shipments yet.\n");
    } else {
        out.push_str(&table(&SHIPMENT_HEADERS, &shipment_rows(page.shipments())));
    }
    let summary = page.summary();
    let _ = writeln!(
        out,
        "{} shipments, {} lines, {} units expected",
        summary.shipments, summary.total_lines, summary.total_expected_quantity
    );
    out
}

pub fn shipment_detail<A: WarehouseApi>(page: &ShipmentsPage<A>, now: DateTime<Local>) -> String {
    let mut out = clock::header("Shipment", now);
    out.push('\n');
    push_status(&mut out, page.lookup_state());
    let Some(shipment) = page.selected() else {
        if page.lookup_state().error().is_none() {
            out.push_str("Shipment not found.\n");
        }
        return out;
    };
    out.push_str(&table(
        &SHIPMENT_HEADERS,
        &shipment_rows(std::slice::from_ref(shipment)),
    ));
    let _ = writeln!(out, "Remarks: {}", text(shipment.remarks.as_deref()));
    let lines: Vec<Vec<String>> = shipment
        .lines
        .iter()
        .map(|line| vec![opt(line.item_id), number(line.expected_quantity.as_ref())])
        .collect();
    out.push_str(&table(&["Item", "Expected"], &lines));
    out
}

pub fn assignments<A: WarehouseApi>(
    page: &StorageAssignmentsPage<A>,
    now: DateTime<Local>,
) -> String {
    let mut out = clock::header("Storage assignments", now);
    out.push('\n');
    if let Some(status) = page.status_filter() {
        let _ = writeln!(out, "Filter: {status}");
    }
    push_status(&mut out, page.state());
    if page.assignments().is_empty() {
        out.push_str("No storage assignments.\n");
    } else {
        let rows: Vec<Vec<String>> = page
            .assignments()
            .iter()
            .map(|a| {
                vec![
                    opt(a.id),
                    opt(a.gate_in_line_id),
                    match (a.assigned_to_name.as_deref(), a.assigned_to_id) {
                        (Some(name), _) if !name.trim().is_empty() => name.trim().to_string(),
                        (_, Some(id)) => format!("Storekeeper {id}"),
                        _ => "Unassigned".to_string(),
                    },
                    opt(a.target_location_id),
                    number(a.quantity_to_store.as_ref()),
                    a.status.to_string(),
                ]
            })
            .collect();
        out.push_str(&table(
            &["ID", "Gate-in line", "Assigned to", "Location", "Quantity", "Status"],
            &rows,
        ));
    }
    let summary = page.summary();
    let _ = writeln!(
        out,
        "{} assignments: {} completed, {} pending ({} in progress)",
        summary.total, summary.completed, summary.pending, summary.in_progress
    );
    out
}

pub fn storekeepers<A: WarehouseApi>(
    page: &StorageAssignmentsPage<A>,
    now: DateTime<Local>,
) -> String {
    let mut out = clock::header("Available storekeepers", now);
    out.push('\n');
    push_status(&mut out, page.storekeepers_state());
    if page.storekeepers().is_empty() {
        out.push_str("No storekeepers available.\n");
        return out;
    }
    let rows: Vec<Vec<String>> = page
        .storekeepers()
        .iter()
        .map(|k| vec![k.id.to_string(), k.display_name()])
        .collect();
    out.push_str(&table(&["ID", "Name"], &rows));
    out
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
