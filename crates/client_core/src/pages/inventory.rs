use shared::{domain::InventoryRow, error::ActionFailure};
use tracing::debug;

use crate::{aggregate::InventorySummary, request_state::RequestState, WarehouseApi};

use super::{lookup_key, settle_collection};

pub const LOCATION_FETCH_FAILED: &str = "Failed to fetch inventory for this location";
pub const ITEM_FETCH_FAILED: &str = "Failed to fetch inventory for this item";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryQuery {
    Location(String),
    Item(String),
}

pub struct InventoryPage<A> {
    api: A,
    state: RequestState,
    rows: Vec<InventoryRow>,
    last_query: Option<InventoryQuery>,
}

impl<A: WarehouseApi> InventoryPage<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: RequestState::new(),
            rows: Vec::new(),
            last_query: None,
        }
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn rows(&self) -> &[InventoryRow] {
        &self.rows
    }

    pub fn last_query(&self) -> Option<&InventoryQuery> {
        self.last_query.as_ref()
    }

    /// A search ran, succeeded and found nothing.
    pub fn is_empty_result(&self) -> bool {
        self.last_query.is_some()
            && self.rows.is_empty()
            && !self.state.is_loading()
            && self.state.error().is_none()
    }

    pub fn summary(&self) -> InventorySummary {
        InventorySummary::from_rows(&self.rows)
    }

    pub async fn search_by_location(&mut self, location_id: &str) -> Result<(), ActionFailure> {
        let Some(key) = lookup_key(location_id) else {
            debug!("inventory: blank location id, nothing to search");
            return Ok(());
        };
        self.state.begin();
        self.last_query = Some(InventoryQuery::Location(key.to_string()));
        let result = self.api.inventory_by_location(key).await;
        settle_collection(&mut self.state, &mut self.rows, result, LOCATION_FETCH_FAILED)
    }

    pub async fn search_by_item(&mut self, item_id: &str) -> Result<(), ActionFailure> {
        let Some(key) = lookup_key(item_id) else {
            debug!("inventory: blank item id, nothing to search");
            return Ok(());
        };
        self.state.begin();
        self.last_query = Some(InventoryQuery::Item(key.to_string()));
        let result = self.api.inventory_by_item(key).await;
        settle_collection(&mut self.state, &mut self.rows, result, ITEM_FETCH_FAILED)
    }
}
