use shared::{domain::QaRecord, error::ActionFailure};
use tracing::{debug, info};

use crate::{
    aggregate::QaSummary,
    forms::{QaField, QaForm},
    request_state::RequestState,
    WarehouseApi,
};

use super::{lookup_key, report, settle_collection, settle_record};

pub const LIST_FAILED: &str = "Failed to fetch QA records";
pub const CREATE_FAILED: &str = "Failed to create QA record";
pub const CREATED: &str = "QA record created successfully";
pub const LOOKUP_FAILED: &str = "No QA record found for this gate-in";

pub struct QaPage<A> {
    api: A,
    state: RequestState,
    lookup_state: RequestState,
    records: Vec<QaRecord>,
    selected: Option<QaRecord>,
    form: QaForm,
}

impl<A: WarehouseApi> QaPage<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: RequestState::new(),
            lookup_state: RequestState::new(),
            records: Vec::new(),
            selected: None,
            form: QaForm::default(),
        }
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn lookup_state(&self) -> &RequestState {
        &self.lookup_state
    }

    pub fn records(&self) -> &[QaRecord] {
        &self.records
    }

    pub fn selected(&self) -> Option<&QaRecord> {
        self.selected.as_ref()
    }

    pub fn form(&self) -> &QaForm {
        &self.form
    }

    pub fn edit(&mut self, field: QaField, value: impl Into<String>) {
        self.form.set(field, value, &mut self.state);
    }

    pub fn summary(&self) -> QaSummary {
        QaSummary::from_records(&self.records)
    }

    pub async fn load(&mut self) -> Result<(), ActionFailure> {
        self.state.begin();
        self.refresh().await
    }

    async fn refresh(&mut self) -> Result<(), ActionFailure> {
        let result = self.api.list_qa_records().await;
        settle_collection(&mut self.state, &mut self.records, result, LIST_FAILED)
    }

    pub async fn submit(&mut self) -> Result<(), ActionFailure> {
        if !self.state.can_submit() {
            debug!("qa: submit ignored while a request is in flight");
            return Ok(());
        }
        self.state.begin();

        let request = match self.form.to_request() {
            Ok(request) => request,
            Err(err) => {
                return Err(report(&mut self.state, ActionFailure::submit(CREATE_FAILED), &err))
            }
        };
        if let Err(err) = self.api.create_qa_record(&request).await {
            return Err(report(&mut self.state, ActionFailure::submit(CREATE_FAILED), &err));
        }
        info!(gate_in_id = %request.gate_in_id, "qa record created");

        self.form = QaForm::default();
        self.refresh().await?;
        self.state.succeed(CREATED);
        Ok(())
    }

    pub async fn lookup_by_gate_in(&mut self, gate_in_id: &str) -> Result<(), ActionFailure> {
        let Some(key) = lookup_key(gate_in_id) else {
            debug!("qa: blank gate-in id, nothing to look up");
            return Ok(());
        };
        self.lookup_state.begin();
        let result = self.api.qa_by_gate_in(key).await;
        settle_record(&mut self.lookup_state, &mut self.selected, result, LOOKUP_FAILED)
    }
}
