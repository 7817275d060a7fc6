//! Backend commands queued from UI to backend worker.

use shared::domain::{Customer, CustomerDraft, SortField};

#[derive(Debug, Clone)]
pub enum BackendCommand {
    Refresh,
    /// Carries the form as typed; the worker copies it into the console draft first.
    Submit {
        draft: CustomerDraft,
    },
    BeginEdit {
        customer: Customer,
    },
    CancelEdit,
    Delete {
        email: String,
    },
    ToggleActive {
        email: String,
        current_active: bool,
    },
    Search {
        term: String,
    },
    Sort {
        field: SortField,
    },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::Refresh => "refresh",
            BackendCommand::Submit { .. } => "submit",
            BackendCommand::BeginEdit { .. } => "begin_edit",
            BackendCommand::CancelEdit => "cancel_edit",
            BackendCommand::Delete { .. } => "delete",
            BackendCommand::ToggleActive { .. } => "toggle_active",
            BackendCommand::Search { .. } => "search",
            BackendCommand::Sort { .. } => "sort",
        }
    }

    /// Whether the form buffers should be replaced by the console draft afterwards.
    pub fn syncs_form(&self) -> bool {
        matches!(
            self,
            BackendCommand::Submit { .. } | BackendCommand::BeginEdit { .. } | BackendCommand::CancelEdit
        )
    }
}
