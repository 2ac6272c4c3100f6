use shared::{
    domain::{AssignmentId, AssignmentStatus, StorageAssignment, Storekeeper},
    error::ActionFailure,
};
use tracing::{debug, info};

use crate::{
    aggregate::AssignmentSummary,
    forms::{CompletionForm, StorageAssignmentForm, StorageField},
    request_state::RequestState,
    WarehouseApi,
};

use super::{report, settle_collection};

pub const LIST_FAILED: &str = "Failed to fetch storage assignments";
pub const STOREKEEPERS_FAILED: &str = "Failed to fetch available storekeepers";
pub const CREATE_FAILED: &str = "Failed to create storage assignment";
pub const CREATED: &str = "Storage assignment created successfully";
pub const COMPLETE_FAILED: &str = "Failed to complete storage assignment";
pub const COMPLETED: &str = "Storage assignment marked as completed";

pub struct StorageAssignmentsPage<A> {
    api: A,
    state: RequestState,
    storekeepers_state: RequestState,
    status_filter: Option<AssignmentStatus>,
    assignments: Vec<StorageAssignment>,
    storekeepers: Vec<Storekeeper>,
    form: StorageAssignmentForm,
    completion: CompletionForm,
}

impl<A: WarehouseApi> StorageAssignmentsPage<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: RequestState::new(),
            storekeepers_state: RequestState::new(),
            status_filter: None,
            assignments: Vec::new(),
            storekeepers: Vec::new(),
            form: StorageAssignmentForm::default(),
            completion: CompletionForm::default(),
        }
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn storekeepers_state(&self) -> &RequestState {
        &self.storekeepers_state
    }

    pub fn assignments(&self) -> &[StorageAssignment] {
        &self.assignments
    }

    pub fn storekeepers(&self) -> &[Storekeeper] {
        &self.storekeepers
    }

    pub fn status_filter(&self) -> Option<AssignmentStatus> {
        self.status_filter
    }

    /// Takes effect on the next load or refresh.
    pub fn set_status_filter(&mut self, status: Option<AssignmentStatus>) {
        self.status_filter = status;
    }

    pub fn form(&self) -> &StorageAssignmentForm {
        &self.form
    }

    pub fn edit(&mut self, field: StorageField, value: impl Into<String>) {
        self.form.set(field, value, &mut self.state);
    }

    pub fn completion(&self) -> &CompletionForm {
        &self.completion
    }

    pub fn edit_completion_remarks(&mut self, value: impl Into<String>) {
        self.completion.set_remarks(value, &mut self.state);
    }

    pub fn summary(&self) -> AssignmentSummary {
        AssignmentSummary::from_assignments(&self.assignments)
    }

    pub async fn load(&mut self) -> Result<(), ActionFailure> {
        self.state.begin();
        self.refresh().await
    }

    async fn refresh(&mut self) -> Result<(), ActionFailure> {
        let result = self.api.list_storage_assignments(self.status_filter).await;
        settle_collection(&mut self.state, &mut self.assignments, result, LIST_FAILED)
    }

    pub async fn load_storekeepers(&mut self) -> Result<(), ActionFailure> {
        self.storekeepers_state.begin();
        let result = self.api.available_storekeepers().await;
        settle_collection(
            &mut self.storekeepers_state,
            &mut self.storekeepers,
            result,
            STOREKEEPERS_FAILED,
        )
    }

    pub async fn submit(&mut self) -> Result<(), ActionFailure> {
        if !self.state.can_submit() {
            debug!("storage: submit ignored while a request is in flight");
            return Ok(());
        }
        self.state.begin();

        let request = match self.form.to_request() {
            Ok(request) => request,
            Err(err) => {
                return Err(report(&mut self.state, ActionFailure::submit(CREATE_FAILED), &err))
            }
        };
        if let Err(err) = self.api.create_storage_assignment(&request).await {
            return Err(report(&mut self.state, ActionFailure::submit(CREATE_FAILED), &err));
        }
        info!(
            gate_in_line_id = %request.gate_in_line_id,
            target_location_id = %request.target_location_id,
            "storage assignment created"
        );

        self.form = StorageAssignmentForm::default();
        self.refresh().await?;
        self.state.succeed(CREATED);
        Ok(())
    }

    pub async fn complete(&mut self, assignment_id: AssignmentId) -> Result<(), ActionFailure> {
        if !self.state.can_submit() {
            debug!("storage: complete ignored while a request is in flight");
            return Ok(());
        }
        self.state.begin();

        let request = self.completion.to_request();
        if let Err(err) = self.api.complete_assignment(assignment_id, &request).await {
            return Err(report(&mut self.state, ActionFailure::submit(COMPLETE_FAILED), &err));
        }
        info!(%assignment_id, "storage assignment completed");

        self.completion = CompletionForm::default();
        self.refresh().await?;
        self.state.succeed(COMPLETED);
        Ok(())
    }
}
