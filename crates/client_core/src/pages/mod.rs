//! Per-page sessions. Each owns its request state, last fetched data and drafts;
//! nothing is shared between pages.

pub mod inventory;
pub mod qa;
pub mod shipments;
pub mod storage;

pub use inventory::{InventoryPage, InventoryQuery};
pub use qa::QaPage;
pub use shipments::ShipmentsPage;
pub use storage::StorageAssignmentsPage;

use std::fmt::Display;

use shared::error::ActionFailure;
use tracing::warn;

use crate::{error::ClientError, request_state::RequestState};

/// Stores a fetched collection. Failure leaves the collection empty, never stale.
pub(crate) fn settle_collection<T>(
    state: &mut RequestState,
    target: &mut Vec<T>,
    result: Result<Vec<T>, ClientError>,
    failure_message: &str,
) -> Result<(), ActionFailure> {
    match result {
        Ok(items) => {
            *target = items;
            state.finish();
            Ok(())
        }
        Err(err) => {
            target.clear();
            Err(report(state, ActionFailure::fetch(failure_message), &err))
        }
    }
}

/// Stores a fetched single record. Failure clears whatever was shown before.
pub(crate) fn settle_record<T>(
    state: &mut RequestState,
    target: &mut Option<T>,
    result: Result<Option<T>, ClientError>,
    failure_message: &str,
) -> Result<(), ActionFailure> {
    match result {
        Ok(record) => {
            *target = record;
            state.finish();
            Ok(())
        }
        Err(err) => {
            *target = None;
            Err(report(state, ActionFailure::fetch(failure_message), &err))
        }
    }
}

/// Logs the underlying cause and shows only the fixed message.
pub(crate) fn report(
    state: &mut RequestState,
    failure: ActionFailure,
    cause: &dyn Display,
) -> ActionFailure {
    warn!(kind = ?failure.kind, message = %failure.message, cause = %cause, "page action failed");
    state.fail(failure.message.clone());
    failure
}

/// Trimmed lookup input, or `None` when there is nothing to look up.
pub(crate) fn lookup_key(raw: &str) -> Option<&str> {
    let key = raw.trim();
    (!key.is_empty()).then_some(key)
}
