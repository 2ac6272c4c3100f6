//! Loading / error / success bookkeeping for one page.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Error(String),
    Success(String),
}

/// Exactly one status is visible at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestState {
    status: RequestStatus,
}

impl RequestState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &RequestStatus {
        &self.status
    }

    /// Starts an action: any previous error or success message is dropped.
    pub fn begin(&mut self) {
        self.status = RequestStatus::Loading;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.status = RequestStatus::Error(message.into());
    }

    pub fn succeed(&mut self, message: impl Into<String>) {
        self.status = RequestStatus::Success(message.into());
    }

    /// Ends a loading phase that has nothing to report.
    pub fn finish(&mut self) {
        if self.is_loading() {
            self.status = RequestStatus::Idle;
        }
    }

    /// Field edits drop stale feedback but never interrupt a running action.
    pub fn clear_feedback(&mut self) {
        if matches!(
            self.status,
            RequestStatus::Error(_) | RequestStatus::Success(_)
        ) {
            self.status = RequestStatus::Idle;
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == RequestStatus::Loading
    }

    pub fn can_submit(&self) -> bool {
        !self.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            RequestStatus::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn success(&self) -> Option<&str> {
        match &self.status {
            RequestStatus::Success(message) => Some(message),
            _ => None,
        }
    }
}
