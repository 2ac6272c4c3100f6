//! Draft records edited as text and converted to typed requests at submit time.

use std::ops::RangeInclusive;

use shared::{
    domain::{GateInId, GateInLineId, ItemId, LocationId, UserId, WarehouseId},
    protocol::{
        CompleteAssignmentRequest, CreateQaRecordRequest, CreateShipmentRequest,
        CreateStorageAssignmentRequest, ShipmentLineRequest,
    },
};
use thiserror::Error;

use crate::request_state::RequestState;

/// Shown next to rating inputs. Not enforced before submission.
pub const RATING_HINT: RangeInclusive<i64> = 1..=5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{field} must be a whole number, got '{value}'")]
    InvalidNumber { field: String, value: String },
}

fn parse_number(field: impl Into<String>, raw: &str) -> Result<i64, FormError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| FormError::InvalidNumber {
            field: field.into(),
            value: raw.to_string(),
        })
}

fn parse_optional_number(field: &str, raw: &str) -> Result<Option<i64>, FormError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    parse_number(field, raw).map(Some)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QaField {
    GateInId,
    DriverRating,
    ItemQualityRating,
    QaRemarks,
    InspectedById,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QaForm {
    gate_in_id: String,
    driver_rating: String,
    item_quality_rating: String,
    qa_remarks: String,
    inspected_by_id: String,
}

impl Default for QaForm {
    fn default() -> Self {
        Self {
            gate_in_id: String::new(),
            driver_rating: RATING_HINT.end().to_string(),
            item_quality_rating: RATING_HINT.end().to_string(),
            qa_remarks: String::new(),
            inspected_by_id: String::new(),
        }
    }
}

impl QaForm {
    pub fn get(&self, field: QaField) -> &str {
        match field {
            QaField::GateInId => &self.gate_in_id,
            QaField::DriverRating => &self.driver_rating,
            QaField::ItemQualityRating => &self.item_quality_rating,
            QaField::QaRemarks => &self.qa_remarks,
            QaField::InspectedById => &self.inspected_by_id,
        }
    }

    pub fn set(&mut self, field: QaField, value: impl Into<String>, state: &mut RequestState) {
        let slot = match field {
            QaField::GateInId => &mut self.gate_in_id,
            QaField::DriverRating => &mut self.driver_rating,
            QaField::ItemQualityRating => &mut self.item_quality_rating,
            QaField::QaRemarks => &mut self.qa_remarks,
            QaField::InspectedById => &mut self.inspected_by_id,
        };
        *slot = value.into();
        state.clear_feedback();
    }

    pub fn to_request(&self) -> Result<CreateQaRecordRequest, FormError> {
        Ok(CreateQaRecordRequest {
            gate_in_id: GateInId(parse_number("gateInId", &self.gate_in_id)?),
            driver_rating: parse_number("driverRating", &self.driver_rating)?,
            item_quality_rating: parse_number("itemQualityRating", &self.item_quality_rating)?,
            qa_remarks: self.qa_remarks.clone(),
            inspected_by_id: UserId(parse_number("inspectedById", &self.inspected_by_id)?),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipmentField {
    ExpectedArrivalDate,
    DriverName,
    TruckNumber,
    SupplierName,
    WarehouseId,
    Remarks,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineField {
    ItemId,
    ExpectedQuantity,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDraft {
    pub item_id: String,
    pub expected_quantity: String,
}

impl Default for LineDraft {
    fn default() -> Self {
        Self {
            item_id: "1".into(),
            expected_quantity: "0".into(),
        }
    }
}

/// Shipment draft. Always carries at least one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipmentForm {
    expected_arrival_date: String,
    driver_name: String,
    truck_number: String,
    supplier_name: String,
    warehouse_id: String,
    remarks: String,
    lines: Vec<LineDraft>,
}

impl Default for ShipmentForm {
    fn default() -> Self {
        Self {
            expected_arrival_date: String::new(),
            driver_name: String::new(),
            truck_number: String::new(),
            supplier_name: String::new(),
            warehouse_id: "1".into(),
            remarks: String::new(),
            lines: vec![LineDraft::default()],
        }
    }
}

impl ShipmentForm {
    pub fn get(&self, field: ShipmentField) -> &str {
        match field {
            ShipmentField::ExpectedArrivalDate => &self.expected_arrival_date,
            ShipmentField::DriverName => &self.driver_name,
            ShipmentField::TruckNumber => &self.truck_number,
            ShipmentField::SupplierName => &self.supplier_name,
            ShipmentField::WarehouseId => &self.warehouse_id,
            ShipmentField::Remarks => &self.remarks,
        }
    }

    pub fn set(
        &mut self,
        field: ShipmentField,
        value: impl Into<String>,
        state: &mut RequestState,
    ) {
        let slot = match field {
            ShipmentField::ExpectedArrivalDate => &mut self.expected_arrival_date,
            ShipmentField::DriverName => &mut self.driver_name,
            ShipmentField::TruckNumber => &mut self.truck_number,
            ShipmentField::SupplierName => &mut self.supplier_name,
            ShipmentField::WarehouseId => &mut self.warehouse_id,
            ShipmentField::Remarks => &mut self.remarks,
        };
        *slot = value.into();
        state.clear_feedback();
    }

    pub fn lines(&self) -> &[LineDraft] {
        &self.lines
    }

    /// Returns `false` when `index` is out of range.
    pub fn set_line(
        &mut self,
        index: usize,
        field: LineField,
        value: impl Into<String>,
        state: &mut RequestState,
    ) -> bool {
        let Some(line) = self.lines.get_mut(index) else {
            return false;
        };
        match field {
            LineField::ItemId => line.item_id = value.into(),
            LineField::ExpectedQuantity => line.expected_quantity = value.into(),
        }
        state.clear_feedback();
        true
    }

    pub fn add_line(&mut self, state: &mut RequestState) {
        self.lines.push(LineDraft::default());
        state.clear_feedback();
    }

    pub fn can_remove_line(&self) -> bool {
        self.lines.len() > 1
    }

    /// No-op on the last remaining line or an out-of-range index.
    pub fn remove_line(&mut self, index: usize, state: &mut RequestState) -> bool {
        if !self.can_remove_line() || index >= self.lines.len() {
            return false;
        }
        self.lines.remove(index);
        state.clear_feedback();
        true
    }

    pub fn to_request(&self) -> Result<CreateShipmentRequest, FormError> {
        let lines = self
            .lines
            .iter()
            .enumerate()
            .map(|(index, line)| {
                Ok(ShipmentLineRequest {
                    item_id: ItemId(parse_number(format!("lines[{index}].itemId"), &line.item_id)?),
                    expected_quantity: parse_number(
                        format!("lines[{index}].expectedQuantity"),
                        &line.expected_quantity,
                    )?,
                })
            })
            .collect::<Result<Vec<_>, FormError>>()?;

        Ok(CreateShipmentRequest {
            expected_arrival_date: self.expected_arrival_date.trim().to_string(),
            driver_name: self.driver_name.clone(),
            truck_number: self.truck_number.clone(),
            supplier_name: self.supplier_name.clone(),
            warehouse_id: WarehouseId(parse_number("warehouseId", &self.warehouse_id)?),
            remarks: self.remarks.clone(),
            lines,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageField {
    GateInLineId,
    AssignedToId,
    TargetLocationId,
    QuantityToStore,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorageAssignmentForm {
    gate_in_line_id: String,
    assigned_to_id: String,
    target_location_id: String,
    quantity_to_store: String,
}

impl StorageAssignmentForm {
    pub fn get(&self, field: StorageField) -> &str {
        match field {
            StorageField::GateInLineId => &self.gate_in_line_id,
            StorageField::AssignedToId => &self.assigned_to_id,
            StorageField::TargetLocationId => &self.target_location_id,
            StorageField::QuantityToStore => &self.quantity_to_store,
        }
    }

    pub fn set(&mut self, field: StorageField, value: impl Into<String>, state: &mut RequestState) {
        let slot = match field {
            StorageField::GateInLineId => &mut self.gate_in_line_id,
            StorageField::AssignedToId => &mut self.assigned_to_id,
            StorageField::TargetLocationId => &mut self.target_location_id,
            StorageField::QuantityToStore => &mut self.quantity_to_store,
        };
        *slot = value.into();
        state.clear_feedback();
    }

    pub fn to_request(&self) -> Result<CreateStorageAssignmentRequest, FormError> {
        Ok(CreateStorageAssignmentRequest {
            gate_in_line_id: GateInLineId(parse_number("gateInLineId", &self.gate_in_line_id)?),
            assigned_to_id: parse_optional_number("assignedToId", &self.assigned_to_id)?
                .map(UserId),
            target_location_id: LocationId(parse_number(
                "targetLocationId",
                &self.target_location_id,
            )?),
            quantity_to_store: parse_number("quantityToStore", &self.quantity_to_store)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionForm {
    remarks: String,
}

impl CompletionForm {
    pub fn remarks(&self) -> &str {
        &self.remarks
    }

    pub fn set_remarks(&mut self, value: impl Into<String>, state: &mut RequestState) {
        self.remarks = value.into();
        state.clear_feedback();
    }

    pub fn to_request(&self) -> CompleteAssignmentRequest {
        CompleteAssignmentRequest::from_remarks(&self.remarks)
    }
}

#[cfg(test)]
#[path = "tests/forms_tests.rs"]
mod tests;
