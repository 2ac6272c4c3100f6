use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client};
use serde::{de::DeserializeOwned, Serialize};
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
use tracing::{debug, warn};
use url::Url;

use crate::{
    config::Settings,
    error::{ClientError, ResponseExt},
    WarehouseApi,
};

const JSON: &str = "application/json";

/// HTTP client for the warehouse operations REST API.
#[derive(Debug, Clone)]
pub struct WarehouseClient {
    http: Client,
    base_url: Url,
}

impl WarehouseClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            http: Client::new(),
            base_url,
        }
    }

    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        Ok(Self::new(settings.validated_base_url()?))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends path segments to the base url; each segment is percent-encoded.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::Url(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_collection<T: DeserializeOwned>(&self, url: Url) -> Result<Vec<T>, ClientError> {
        Ok(self.get_optional::<Vec<T>>(url).await?.unwrap_or_default())
    }

    async fn get_optional<T: DeserializeOwned>(&self, url: Url) -> Result<Option<T>, ClientError> {
        debug!(%url, "GET");
        let response = self.http.get(url.clone()).send().await.map_client_error().await;
        let response = match response {
            Ok(response) => response,
            Err(err) => {
                warn!(%url, error = %err, "GET failed");
                return Err(err);
            }
        };
        let bytes = response.bytes().await?;
        decode_optional(url.as_str(), &bytes).inspect_err(|err| {
            warn!(%url, error = %err, "GET returned an undecodable body");
        })
    }

    async fn post_json<B: Serialize + Sync>(&self, url: Url, body: &B) -> Result<(), ClientError> {
        debug!(%url, "POST");
        self.http
            .post(url.clone())
            .header(CONTENT_TYPE, JSON)
            .json(body)
            .send()
            .await
            .map_client_error()
            .await
            .inspect_err(|err| warn!(%url, error = %err, "POST failed"))?;
        Ok(())
    }

    async fn post_empty(&self, url: Url) -> Result<(), ClientError> {
        debug!(%url, "POST (empty body)");
        self.http
            .post(url.clone())
            .header(CONTENT_TYPE, JSON)
            .send()
            .await
            .map_client_error()
            .await
            .inspect_err(|err| warn!(%url, error = %err, "POST failed"))?;
        Ok(())
    }
}

/// An empty body and a literal `null` both mean "nothing".
pub(crate) fn decode_optional<T: DeserializeOwned>(
    endpoint: &str,
    bytes: &[u8],
) -> Result<Option<T>, ClientError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice::<Option<T>>(bytes).map_err(|err| ClientError::Decode {
        endpoint: endpoint.to_string(),
        message: err.to_string(),
    })
}

#[async_trait]
impl WarehouseApi for WarehouseClient {
    async fn inventory_by_location(
        &self,
        location_id: &str,
    ) -> Result<Vec<InventoryRow>, ClientError> {
        let url = self.endpoint(&["inventory", "location", location_id])?;
        self.get_collection(url).await
    }

    async fn inventory_by_item(&self, item_id: &str) -> Result<Vec<InventoryRow>, ClientError> {
        let url = self.endpoint(&["inventory", "item", item_id])?;
        self.get_collection(url).await
    }

    async fn list_qa_records(&self) -> Result<Vec<QaRecord>, ClientError> {
        let url = self.endpoint(&["qa"])?;
        self.get_collection(url).await
    }

    async fn create_qa_record(&self, request: &CreateQaRecordRequest) -> Result<(), ClientError> {
        let url = self.endpoint(&["qa"])?;
        self.post_json(url, request).await
    }

    async fn qa_by_gate_in(&self, gate_in_id: &str) -> Result<Option<QaRecord>, ClientError> {
        let url = self.endpoint(&["qa", "gate-in", gate_in_id])?;
        self.get_optional(url).await
    }

    async fn list_shipments(&self) -> Result<Vec<Shipment>, ClientError> {
        let url = self.endpoint(&["shipments"])?;
        self.get_collection(url).await
    }

    async fn create_shipment(&self, request: &CreateShipmentRequest) -> Result<(), ClientError> {
        let url = self.endpoint(&["shipments"])?;
        self.post_json(url, request).await
    }

    async fn shipment_by_id(&self, shipment_id: &str) -> Result<Option<Shipment>, ClientError> {
        let url = self.endpoint(&["shipments", shipment_id])?;
        self.get_optional(url).await
    }

    async fn link_gate_in(&self, shipment_id: &str, gate_in_id: &str) -> Result<(), ClientError> {
        let url = self.endpoint(&["shipments", shipment_id, "link-gate-in", gate_in_id])?;
        self.post_empty(url).await
    }

    async fn list_storage_assignments(
        &self,
        status: Option<AssignmentStatus>,
    ) -> Result<Vec<StorageAssignment>, ClientError> {
        let mut url = self.endpoint(&["storage-assignments"])?;
        if let Some(status) = status {
            url.query_pairs_mut().append_pair("status", status.as_str());
        }
        self.get_collection(url).await
    }

    async fn available_storekeepers(&self) -> Result<Vec<Storekeeper>, ClientError> {
        let url = self.endpoint(&["storage-assignments", "available-storekeepers"])?;
        self.get_collection(url).await
    }

    async fn create_storage_assignment(
        &self,
        request: &CreateStorageAssignmentRequest,
    ) -> Result<(), ClientError> {
        let url = self.endpoint(&["storage-assignments"])?;
        self.post_json(url, request).await
    }

    async fn complete_assignment(
        &self,
        assignment_id: AssignmentId,
        request: &CompleteAssignmentRequest,
    ) -> Result<(), ClientError> {
        let id = assignment_id.to_string();
        let url = self.endpoint(&["storage-assignments", &id, "complete"])?;
        self.post_json(url, request).await
    }
}
