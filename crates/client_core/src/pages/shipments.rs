use shared::{domain::Shipment, error::ActionFailure};
use tracing::{debug, info};

use crate::{
    aggregate::ShipmentSummary,
    forms::{LineField, ShipmentField, ShipmentForm},
    request_state::RequestState,
    WarehouseApi,
};

use super::{lookup_key, report, settle_collection, settle_record};

pub const LIST_FAILED: &str = "Failed to fetch shipments";
pub const CREATE_FAILED: &str = "Failed to create shipment";
pub const CREATED: &str = "Shipment created successfully";
pub const LOOKUP_FAILED: &str = "Shipment not found";
pub const LINK_FAILED: &str = "Failed to link shipment to gate-in";
pub const LINKED: &str = "Shipment linked to gate-in successfully";

pub struct ShipmentsPage<A> {
    api: A,
    state: RequestState,
    lookup_state: RequestState,
    shipments: Vec<Shipment>,
    selected: Option<Shipment>,
    form: ShipmentForm,
}

impl<A: WarehouseApi> ShipmentsPage<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: RequestState::new(),
            lookup_state: RequestState::new(),
            shipments: Vec::new(),
            selected: None,
            form: ShipmentForm::default(),
        }
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn lookup_state(&self) -> &RequestState {
        &self.lookup_state
    }

    pub fn shipments(&self) -> &[Shipment] {
        &self.shipments
    }

    pub fn selected(&self) -> Option<&Shipment> {
        self.selected.as_ref()
    }

    pub fn form(&self) -> &ShipmentForm {
        &self.form
    }

    pub fn edit(&mut self, field: ShipmentField, value: impl Into<String>) {
        self.form.set(field, value, &mut self.state);
    }

    pub fn edit_line(&mut self, index: usize, field: LineField, value: impl Into<String>) -> bool {
        self.form.set_line(index, field, value, &mut self.state)
    }

    pub fn add_line(&mut self) {
        self.form.add_line(&mut self.state);
    }

    pub fn remove_line(&mut self, index: usize) -> bool {
        self.form.remove_line(index, &mut self.state)
    }

    pub fn summary(&self) -> ShipmentSummary {
        ShipmentSummary::from_shipments(&self.shipments)
    }

    pub async fn load(&mut self) -> Result<(), ActionFailure> {
        self.state.begin();
        self.refresh().await
    }

    async fn refresh(&mut self) -> Result<(), ActionFailure> {
        let result = self.api.list_shipments().await;
        settle_collection(&mut self.state, &mut self.shipments, result, LIST_FAILED)
    }

    pub async fn submit(&mut self) -> Result<(), ActionFailure> {
        if !self.state.can_submit() {
            debug!("shipments: submit ignored while a request is in flight");
            return Ok(());
        }
        self.state.begin();

        let request = match self.form.to_request() {
            Ok(request) => request,
            Err(err) => {
                return Err(report(&mut self.state, ActionFailure::submit(CREATE_FAILED), &err))
            }
        };
        if let Err(err) = self.api.create_shipment(&request).await {
            return Err(report(&mut self.state, ActionFailure::submit(CREATE_FAILED), &err));
        }
        info!(lines = request.lines.len(), supplier = %request.supplier_name, "shipment created");

        self.form = ShipmentForm::default();
        self.refresh().await?;
        self.state.succeed(CREATED);
        Ok(())
    }

    pub async fn lookup(&mut self, shipment_id: &str) -> Result<(), ActionFailure> {
        let Some(key) = lookup_key(shipment_id) else {
            debug!("shipments: blank shipment id, nothing to look up");
            return Ok(());
        };
        self.lookup_state.begin();
        let result = self.api.shipment_by_id(key).await;
        settle_record(&mut self.lookup_state, &mut self.selected, result, LOOKUP_FAILED)
    }

    pub async fn link_gate_in(
        &mut self,
        shipment_id: &str,
        gate_in_id: &str,
    ) -> Result<(), ActionFailure> {
        let (Some(shipment_id), Some(gate_in_id)) =
            (lookup_key(shipment_id), lookup_key(gate_in_id))
        else {
            debug!("shipments: link needs both a shipment id and a gate-in id");
            return Ok(());
        };
        if !self.state.can_submit() {
            debug!("shipments: link ignored while a request is in flight");
            return Ok(());
        }
        self.state.begin();

        if let Err(err) = self.api.link_gate_in(shipment_id, gate_in_id).await {
            return Err(report(&mut self.state, ActionFailure::submit(LINK_FAILED), &err));
        }
        info!(shipment_id, gate_in_id, "shipment linked to gate-in");

        self.refresh().await?;
        self.state.succeed(LINKED);
        Ok(())
    }
}
