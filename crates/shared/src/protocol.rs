//! Write-request bodies. Every numeric field is a real JSON number.

use serde::{Deserialize, Serialize};

use crate::domain::{GateInId, GateInLineId, ItemId, LocationId, UserId, WarehouseId};

pub const DEFAULT_COMPLETION_REMARKS: &str = "Stored at target location";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQaRecordRequest {
    pub gate_in_id: GateInId,
    pub driver_rating: i64,
    pub item_quality_rating: i64,
    pub qa_remarks: String,
    pub inspected_by_id: UserId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentLineRequest {
    pub item_id: ItemId,
    pub expected_quantity: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShipmentRequest {
    pub expected_arrival_date: String,
    pub driver_name: String,
    pub truck_number: String,
    pub supplier_name: String,
    pub warehouse_id: WarehouseId,
    pub remarks: String,
    pub lines: Vec<ShipmentLineRequest>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStorageAssignmentRequest {
    pub gate_in_line_id: GateInLineId,
    /// Serialized as `null` when nobody is picked yet.
    pub assigned_to_id: Option<UserId>,
    pub target_location_id: LocationId,
    pub quantity_to_store: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteAssignmentRequest {
    pub completion_remarks: String,
}

impl CompleteAssignmentRequest {
    pub fn from_remarks(remarks: &str) -> Self {
        let remarks = remarks.trim();
        let completion_remarks = if remarks.is_empty() {
            DEFAULT_COMPLETION_REMARKS.to_string()
        } else {
            remarks.to_string()
        };
        Self { completion_remarks }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn unassigned_storage_request_serializes_null_assignee() {
        let body = CreateStorageAssignmentRequest {
            gate_in_line_id: GateInLineId(4),
            assigned_to_id: None,
            target_location_id: LocationId(12),
            quantity_to_store: 30,
        };
        assert_eq!(
            serde_json::to_value(&body).expect("serialize"),
            json!({
                "gateInLineId": 4,
                "assignedToId": null,
                "targetLocationId": 12,
                "quantityToStore": 30
            })
        );
    }

    #[test]
    fn blank_completion_remarks_use_default() {
        assert_eq!(
            CompleteAssignmentRequest::from_remarks("   ").completion_remarks,
            DEFAULT_COMPLETION_REMARKS
        );
        assert_eq!(
            CompleteAssignmentRequest::from_remarks(" shelf B2 ").completion_remarks,
            "shelf B2"
        );
    }
}
