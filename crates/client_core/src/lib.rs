//! Client side of the warehouse operations dashboard: the REST client, request
//! state, form drafts, derived aggregates and one session per page.

use std::sync::Arc;

use async_trait::async_trait;
use shared::{
    domain::{
        AssignmentId, AssignmentStatus, InventoryRow, QaRecord, Shipment, StorageAssignment,
        Storekeeper,
    },
    protocol::{
        CompleteAssignmentRequest, CreateQaRecordRequest, CreateShipmentRequest,
        CreateStorageAssignmentRequest,
    },
};

pub mod aggregate;
pub mod client;
pub mod config;
pub mod error;
pub mod forms;
pub mod pages;
pub mod request_state;

pub use client::WarehouseClient;
pub use config::{load_settings, Settings};
pub use error::ClientError;
pub use pages::{InventoryPage, QaPage, ShipmentsPage, StorageAssignmentsPage};
pub use request_state::{RequestState, RequestStatus};

/// Every endpoint the dashboard talks to. Lookup ids are passed through as typed
/// by the user; collection reads yield an empty `Vec` for empty or `null` bodies.
#[async_trait]
pub trait WarehouseApi: Send + Sync {
    async fn inventory_by_location(
        &self,
        location_id: &str,
    ) -> Result<Vec<InventoryRow>, ClientError>;
    async fn inventory_by_item(&self, item_id: &str) -> Result<Vec<InventoryRow>, ClientError>;

    async fn list_qa_records(&self) -> Result<Vec<QaRecord>, ClientError>;
    async fn create_qa_record(&self, request: &CreateQaRecordRequest) -> Result<(), ClientError>;
    async fn qa_by_gate_in(&self, gate_in_id: &str) -> Result<Option<QaRecord>, ClientError>;

    async fn list_shipments(&self) -> Result<Vec<Shipment>, ClientError>;
    async fn create_shipment(&self, request: &CreateShipmentRequest) -> Result<(), ClientError>;
    async fn shipment_by_id(&self, shipment_id: &str) -> Result<Option<Shipment>, ClientError>;
    async fn link_gate_in(&self, shipment_id: &str, gate_in_id: &str) -> Result<(), ClientError>;

    async fn list_storage_assignments(
        &self,
        status: Option<AssignmentStatus>,
    ) -> Result<Vec<StorageAssignment>, ClientError>;
    async fn available_storekeepers(&self) -> Result<Vec<Storekeeper>, ClientError>;
    async fn create_storage_assignment(
        &self,
        request: &CreateStorageAssignmentRequest,
    ) -> Result<(), ClientError>;
    async fn complete_assignment(
        &self,
        assignment_id: AssignmentId,
        request: &CompleteAssignmentRequest,
    ) -> Result<(), ClientError>;
}

#[async_trait]
impl<T> WarehouseApi for Arc<T>
where
    T: WarehouseApi + ?Sized,
{
    async fn inventory_by_location(
        &self,
        location_id: &str,
    ) -> Result<Vec<InventoryRow>, ClientError> {
        (**self).inventory_by_location(location_id).await
    }

    async fn inventory_by_item(&self, item_id: &str) -> Result<Vec<InventoryRow>, ClientError> {
        (**self).inventory_by_item(item_id).await
    }

    async fn list_qa_records(&self) -> Result<Vec<QaRecord>, ClientError> {
        (**self).list_qa_records().await
    }

    async fn create_qa_record(&self, request: &CreateQaRecordRequest) -> Result<(), ClientError> {
        (**self).create_qa_record(request).await
    }

    async fn qa_by_gate_in(&self, gate_in_id: &str) -> Result<Option<QaRecord>, ClientError> {
        (**self).qa_by_gate_in(gate_in_id).await
    }

    async fn list_shipments(&self) -> Result<Vec<Shipment>, ClientError> {
        (**self).list_shipments().await
    }

    async fn create_shipment(&self, request: &CreateShipmentRequest) -> Result<(), ClientError> {
        (**self).create_shipment(request).await
    }

    async fn shipment_by_id(&self, shipment_id: &str) -> Result<Option<Shipment>, ClientError> {
        (**self).shipment_by_id(shipment_id).await
    }

    async fn link_gate_in(&self, shipment_id: &str, gate_in_id: &str) -> Result<(), ClientError> {
        (**self).link_gate_in(shipment_id, gate_in_id).await
    }

    async fn list_storage_assignments(
        &self,
        status: Option<AssignmentStatus>,
    ) -> Result<Vec<StorageAssignment>, ClientError> {
        (**self).list_storage_assignments(status).await
    }

    async fn available_storekeepers(&self) -> Result<Vec<Storekeeper>, ClientError> {
        (**self).available_storekeepers().await
    }

    async fn create_storage_assignment(
        &self,
        request: &CreateStorageAssignmentRequest,
    ) -> Result<(), ClientError> {
        (**self).create_storage_assignment(request).await
    }

    async fn complete_assignment(
        &self,
        assignment_id: AssignmentId,
        request: &CompleteAssignmentRequest,
    ) -> Result<(), ClientError> {
        (**self).complete_assignment(assignment_id, request).await
    }
}

#[cfg(test)]
#[path = "tests/support.rs"]
mod test_support;

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests/pages_tests.rs"]
mod pages_tests;
