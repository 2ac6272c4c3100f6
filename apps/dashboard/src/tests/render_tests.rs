use chrono::TimeZone;
use client_core::{QaPage, StorageAssignmentsPage, WarehouseClient};

use super::*;

fn offline_client() -> WarehouseClient {
    WarehouseClient::new("http://127.0.0.1:9/api".parse().expect("url"))
}

fn fixed_now() -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2024, 5, 1, 8, 30, 0)
        .single()
        .expect("unambiguous local time")
}

#[test]
fn table_pads_columns_to_widest_cell() {
    let rendered = table(
        &["ID", "Name"],
        &[
            vec!["1".to_string(), "Bolt".to_string()],
            vec!["22".to_string(), "Nut".to_string()],
        ],
    );
    assert_eq!(rendered, "ID  Name\n--  ----\n1   Bolt\n22  Nut\n");
}

#[test]
fn qa_page_without_records_reports_zero_average() {
    let page = QaPage::new(offline_client());
    let rendered = qa(&page, fixed_now());
    assert!(rendered.contains("No QA records yet."), "{rendered}");
    assert!(
        rendered.contains("0 inspections, avg driver rating 0,"),
        "{rendered}"
    );
}

#[test]
fn storage_page_shows_filter_and_empty_state() {
    let mut page = StorageAssignmentsPage::new(offline_client());
    page.set_status_filter(Some(shared::domain::AssignmentStatus::Completed));
    let rendered = assignments(&page, fixed_now());
    assert!(rendered.starts_with("== Storage assignments ==  (last updated 2024-05-01 08:30)"));
    assert!(rendered.contains("Filter: COMPLETED"));
    assert!(rendered.contains("0 assignments: 0 completed, 0 pending"));
}

#[test]
fn loose_numbers_render_without_trailing_zero() {
    assert_eq!(number(Some(&LooseNumber::Number(12.0))), "12");
    assert_eq!(number(Some(&LooseNumber::Text("7".into()))), "7");
    assert_eq!(number(None), "-");
}
