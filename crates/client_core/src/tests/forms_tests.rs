use super::*;
use crate::request_state::RequestStatus;

#[test]
fn last_shipment_line_cannot_be_removed() {
    let mut state = RequestState::new();
    let mut form = ShipmentForm::default();
    assert_eq!(form.lines().len(), 1);
    assert!(!form.can_remove_line());

    assert!(!form.remove_line(0, &mut state));
    assert_eq!(form.lines().len(), 1);

    form.add_line(&mut state);
    form.add_line(&mut state);
    assert_eq!(form.lines().len(), 3);
    for _ in 0..5 {
        form.remove_line(0, &mut state);
        assert!(!form.lines().is_empty());
    }
    assert_eq!(form.lines().len(), 1);
}

#[test]
fn added_lines_start_from_item_one_quantity_zero() {
    let mut state = RequestState::new();
    let mut form = ShipmentForm::default();
    form.add_line(&mut state);
    assert_eq!(
        form.lines()[1],
        LineDraft {
            item_id: "1".into(),
            expected_quantity: "0".into()
        }
    );
}

#[test]
fn shipment_numbers_are_converted_at_submit() {
    let mut state = RequestState::new();
    let mut form = ShipmentForm::default();
    form.set(ShipmentField::DriverName, "Ana", &mut state);
    form.set(ShipmentField::WarehouseId, " 3 ", &mut state);
    form.set(ShipmentField::ExpectedArrivalDate, "2024-06-01", &mut state);
    form.set_line(0, LineField::ItemId, "42", &mut state);
    form.set_line(0, LineField::ExpectedQuantity, "120", &mut state);

    let request = form.to_request().expect("valid draft");
    assert_eq!(request.warehouse_id, WarehouseId(3));
    assert_eq!(
        request.lines,
        vec![ShipmentLineRequest {
            item_id: ItemId(42),
            expected_quantity: 120
        }]
    );
    assert_eq!(
        serde_json::to_value(&request).expect("json")["lines"][0]["expectedQuantity"],
        serde_json::json!(120)
    );
}

#[test]
fn bad_line_quantity_names_the_line() {
    let mut state = RequestState::new();
    let mut form = ShipmentForm::default();
    form.add_line(&mut state);
    form.set_line(1, LineField::ExpectedQuantity, "ten", &mut state);
    assert_eq!(
        form.to_request(),
        Err(FormError::InvalidNumber {
            field: "lines[1].expectedQuantity".into(),
            value: "ten".into()
        })
    );
    assert!(!form.set_line(7, LineField::ItemId, "1", &mut state));
}

#[test]
fn ratings_outside_hint_are_still_sent() {
    let mut state = RequestState::new();
    let mut form = QaForm::default();
    assert_eq!(form.get(QaField::DriverRating), "5");
    form.set(QaField::GateInId, "8", &mut state);
    form.set(QaField::DriverRating, "9", &mut state);
    form.set(QaField::InspectedById, "2", &mut state);

    let request = form.to_request().expect("valid");
    assert_eq!(request.driver_rating, 9);
    assert!(!RATING_HINT.contains(&request.driver_rating));
    assert_eq!(request.gate_in_id, GateInId(8));
}

#[test]
fn field_edit_clears_feedback() {
    let mut state = RequestState::new();
    state.fail("Failed to create QA record");
    let mut form = QaForm::default();
    form.set(QaField::QaRemarks, "ok", &mut state);
    assert_eq!(state.status(), &RequestStatus::Idle);

    state.succeed("Storage assignment created");
    let mut storage = StorageAssignmentForm::default();
    storage.set(StorageField::QuantityToStore, "4", &mut state);
    assert_eq!(state.status(), &RequestStatus::Idle);
}

#[test]
fn blank_assignee_is_sent_as_null() {
    let mut state = RequestState::new();
    let mut form = StorageAssignmentForm::default();
    form.set(StorageField::GateInLineId, "11", &mut state);
    form.set(StorageField::TargetLocationId, "5", &mut state);
    form.set(StorageField::QuantityToStore, "30", &mut state);

    let request = form.to_request().expect("valid");
    assert_eq!(request.assigned_to_id, None);

    form.set(StorageField::AssignedToId, "6", &mut state);
    assert_eq!(form.to_request().expect("valid").assigned_to_id, Some(UserId(6)));

    form.set(StorageField::QuantityToStore, "", &mut state);
    assert!(form.to_request().is_err());
}

#[test]
fn completion_form_defaults_blank_remarks() {
    let mut state = RequestState::new();
    let mut form = CompletionForm::default();
    assert_eq!(
        form.to_request().completion_remarks,
        shared::protocol::DEFAULT_COMPLETION_REMARKS
    );
    form.set_remarks("Bin A-3", &mut state);
    assert_eq!(form.to_request().completion_remarks, "Bin A-3");
}
