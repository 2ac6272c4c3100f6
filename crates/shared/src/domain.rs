use std::fmt;

use serde::{Deserialize, Serialize};

use crate::serde_helpers::{null_as_default, LooseNumber};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(ItemId);
id_newtype!(LocationId);
id_newtype!(GateInId);
id_newtype!(GateInLineId);
id_newtype!(ShipmentId);
id_newtype!(WarehouseId);
id_newtype!(AssignmentId);
id_newtype!(QaRecordId);
id_newtype!(UserId);

/// One stock position. Endpoints disagree on field names, so both spellings are kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRow {
    #[serde(default)]
    pub item_id: Option<ItemId>,
    #[serde(default)]
    pub item_code: Option<String>,
    #[serde(default)]
    pub item_name: Option<String>,
    #[serde(default)]
    pub location_id: Option<LocationId>,
    #[serde(default)]
    pub location_code: Option<String>,
    #[serde(default)]
    pub location_name: Option<String>,
    #[serde(default)]
    pub quantity: Option<LooseNumber>,
    #[serde(default)]
    pub qty: Option<LooseNumber>,
}

impl InventoryRow {
    pub fn item_label(&self) -> String {
        label(self.item_code.as_deref(), self.item_id.map(|id| id.0))
    }

    pub fn location_label(&self) -> String {
        label(self.location_code.as_deref(), self.location_id.map(|id| id.0))
    }
}

fn label(code: Option<&str>, id: Option<i64>) -> String {
    match (code.map(str::trim).filter(|c| !c.is_empty()), id) {
        (Some(code), _) => code.to_string(),
        (None, Some(id)) => id.to_string(),
        (None, None) => "-".to_string(),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QaRecord {
    #[serde(default)]
    pub id: Option<QaRecordId>,
    #[serde(default)]
    pub gate_in_id: Option<GateInId>,
    #[serde(default)]
    pub driver_rating: Option<LooseNumber>,
    #[serde(default)]
    pub item_quality_rating: Option<LooseNumber>,
    #[serde(default)]
    pub qa_remarks: Option<String>,
    #[serde(default)]
    pub inspected_by_id: Option<UserId>,
    #[serde(default)]
    pub inspected_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentLine {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub item_id: Option<ItemId>,
    #[serde(default)]
    pub expected_quantity: Option<LooseNumber>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    #[serde(default)]
    pub id: Option<ShipmentId>,
    #[serde(default)]
    pub expected_arrival_date: Option<String>,
    #[serde(default)]
    pub driver_name: Option<String>,
    #[serde(default)]
    pub truck_number: Option<String>,
    #[serde(default)]
    pub supplier_name: Option<String>,
    #[serde(default)]
    pub warehouse_id: Option<WarehouseId>,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub gate_in_id: Option<GateInId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub lines: Vec<ShipmentLine>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssignmentStatus {
    Assigned,
    InProgress,
    Completed,
    #[default]
    #[serde(other)]
    Unknown,
}

impl AssignmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Assigned => "ASSIGNED",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
            Self::Unknown => "UNKNOWN",
        }
    }

    pub fn is_completed(&self) -> bool {
        *self == Self::Completed
    }
}

impl fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageAssignment {
    #[serde(default)]
    pub id: Option<AssignmentId>,
    #[serde(default)]
    pub gate_in_line_id: Option<GateInLineId>,
    #[serde(default)]
    pub assigned_to_id: Option<UserId>,
    #[serde(default)]
    pub assigned_to_name: Option<String>,
    #[serde(default)]
    pub target_location_id: Option<LocationId>,
    #[serde(default)]
    pub quantity_to_store: Option<LooseNumber>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: AssignmentStatus,
    #[serde(default)]
    pub completion_remarks: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Storekeeper {
    pub id: UserId,
    #[serde(default)]
    pub name: Option<String>,
}

impl Storekeeper {
    pub fn display_name(&self) -> String {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("Storekeeper {}", self.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_missing_and_null_status_display_as_unknown() {
        let rows: Vec<StorageAssignment> = serde_json::from_str(
            r#"[{"id":1,"status":"PAUSED"},{"id":2},{"id":3,"status":null},{"id":4,"status":"IN_PROGRESS"}]"#,
        )
        .expect("parse");
        let labels: Vec<String> = rows.iter().map(|r| r.status.to_string()).collect();
        assert_eq!(labels, vec!["UNKNOWN", "UNKNOWN", "UNKNOWN", "IN_PROGRESS"]);
    }

    #[test]
    fn shipment_with_null_lines_has_empty_lines() {
        let shipment: Shipment =
            serde_json::from_str(r#"{"id":9,"driverName":"Ana","lines":null}"#).expect("parse");
        assert_eq!(shipment.id, Some(ShipmentId(9)));
        assert!(shipment.lines.is_empty());
    }

    #[test]
    fn storekeeper_name_falls_back_to_id() {
        let named = Storekeeper {
            id: UserId(3),
            name: Some("Ravi".into()),
        };
        let blank = Storekeeper {
            id: UserId(4),
            name: Some("  ".into()),
        };
        let missing = Storekeeper {
            id: UserId(5),
            name: None,
        };
        assert_eq!(named.display_name(), "Ravi");
        assert_eq!(blank.display_name(), "Storekeeper 4");
        assert_eq!(missing.display_name(), "Storekeeper 5");
    }

    #[test]
    fn inventory_labels_prefer_codes() {
        let row: InventoryRow = serde_json::from_str(
            r#"{"itemId":7,"itemCode":"SKU-7","locationId":2,"itemName":"Bolt","qty":"5"}"#,
        )
        .expect("parse");
        assert_eq!(row.item_label(), "SKU-7");
        assert_eq!(row.location_label(), "2");
        assert_eq!(InventoryRow::default().item_label(), "-");
    }
}
