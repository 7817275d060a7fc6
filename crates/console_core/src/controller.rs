use shared::domain::{Customer, DraftEdit, SortField};
use tracing::{error, info, warn};

use crate::{
    directory::CustomerDirectory,
    notify::{Notification, Notifier},
    outcome::RequestOutcome,
    state::ConsoleState,
};

pub const MSG_ADDED: &str = "Customer added successfully!";
pub const MSG_DUPLICATE: &str = "Error adding customer: Duplicate customer email.";
pub const MSG_UPDATED: &str = "Customer updated successfully!";
pub const MSG_DELETED: &str = "Customer deleted successfully!";
pub const MSG_NO_EDIT_TARGET: &str = "Error updating customer: no customer selected for editing";

pub fn toggled_message(now_active: bool) -> String {
    format!(
        "Customer status updated to {}",
        if now_active { "active" } else { "inactive" }
    )
}

/// Customer list controller: owns the console state and drives the directory.
///
/// Every successful mutation is followed by a full re-fetch; the list is never
/// patched locally.
pub struct CustomerConsole<D, N> {
    directory: D,
    notifier: N,
    state: ConsoleState,
}

impl<D: CustomerDirectory, N: Notifier> CustomerConsole<D, N> {
    pub fn new(directory: D, notifier: N) -> Self {
        Self {
            directory,
            notifier,
            state: ConsoleState::default(),
        }
    }

    pub fn state(&self) -> &ConsoleState {
        &self.state
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }

    fn transition(&mut self, f: impl FnOnce(ConsoleState) -> ConsoleState) {
        let current = std::mem::take(&mut self.state);
        self.state = f(current);
    }

    /// Initial load.
    pub async fn mount(&mut self) -> RequestOutcome<()> {
        self.fetch_all().await
    }

    pub async fn fetch_all(&mut self) -> RequestOutcome<()> {
        match self.directory.list().await {
            RequestOutcome::Success(customers) => {
                info!(count = customers.len(), "console: customers fetched");
                self.transition(|state| state.refreshed(customers));
                RequestOutcome::Success(())
            }
            failed => {
                let message = failed.error_message().unwrap_or_default().to_string();
                error!(error = %message, "Error fetching customers");
                self.notifier.notify(Notification::error(format!(
                    "Error fetching customers: {message}"
                )));
                failed.map(|_| ())
            }
        }
    }

    /// The form's submit button: update while editing, create otherwise.
    pub async fn submit(&mut self) -> RequestOutcome<()> {
        if self.state.is_editing() {
            self.update().await
        } else {
            self.create().await
        }
    }

    pub async fn create(&mut self) -> RequestOutcome<()> {
        let draft = self.state.draft().clone();
        let outcome = self.directory.create(&draft).await;
        match &outcome {
            RequestOutcome::Success(()) => {
                info!(email = %draft.email, "console: customer created");
                self.fetch_all().await;
                self.transition(ConsoleState::form_reset);
                self.notifier.notify(Notification::success(MSG_ADDED));
            }
            RequestOutcome::Conflict(message) => {
                warn!(email = %draft.email, error = %message, "Error adding customer: duplicate email");
                self.notifier.notify(Notification::error(MSG_DUPLICATE));
            }
            RequestOutcome::Failure(message) => {
                error!(email = %draft.email, error = %message, "Error adding customer");
                self.notifier.notify(Notification::error(format!(
                    "Error adding customer: {message}"
                )));
            }
        }
        outcome
    }

    pub fn begin_edit(&mut self, customer: &Customer) {
        self.transition(|state| state.editing(customer));
    }

    pub fn cancel_edit(&mut self) {
        self.transition(ConsoleState::form_reset);
    }

    pub fn edit_draft(&mut self, edit: DraftEdit) {
        self.transition(|state| state.draft_edited(edit));
    }

    /// Submits the draft against the edit target's email, not the draft's.
    pub async fn update(&mut self) -> RequestOutcome<()> {
        let Some(target) = self.state.edit_target().cloned() else {
            warn!("console: update requested without an edit target");
            self.notifier.notify(Notification::error(MSG_NO_EDIT_TARGET));
            return RequestOutcome::Failure(MSG_NO_EDIT_TARGET.to_string());
        };
        let draft = self.state.draft().clone();
        let outcome = self.directory.update(&target.email, &draft).await;
        match outcome.error_message() {
            None => {
                info!(email = %target.email, "console: customer updated");
                self.fetch_all().await;
                self.transition(ConsoleState::form_reset);
                self.notifier.notify(Notification::success(MSG_UPDATED));
            }
            Some(message) => {
                error!(email = %target.email, error = %message, "Error updating customer");
                self.notifier.notify(Notification::error(format!(
                    "Error updating customer: {message}"
                )));
            }
        }
        outcome
    }

    pub async fn delete(&mut self, email: &str) -> RequestOutcome<()> {
        let outcome = self.directory.delete(email).await;
        match outcome.error_message() {
            None => {
                info!(email = %email, "console: customer deleted");
                self.fetch_all().await;
                self.notifier.notify(Notification::success(MSG_DELETED));
            }
            Some(message) => {
                error!(email = %email, error = %message, "Error deleting customer");
                self.notifier.notify(Notification::error(format!(
                    "Error deleting customer: {message}"
                )));
            }
        }
        outcome
    }

    /// `current_active` is the flag as displayed when the toggle was clicked;
    /// the directory decides the new value.
    pub async fn toggle_active(&mut self, email: &str, current_active: bool) -> RequestOutcome<()> {
        let outcome = self.directory.toggle_active(email).await;
        match outcome.error_message() {
            None => {
                info!(email = %email, "console: customer status toggled");
                self.fetch_all().await;
                self.notifier
                    .notify(Notification::success(toggled_message(!current_active)));
            }
            Some(message) => {
                error!(email = %email, error = %message, "Error toggling customer status");
                self.notifier.notify(Notification::error(format!(
                    "Error toggling customer status: {message}"
                )));
            }
        }
        outcome
    }

    pub fn search(&mut self, term: impl Into<String>) {
        let term = term.into();
        self.transition(|state| state.searched(term));
    }

    pub fn sort(&mut self, field: SortField) {
        self.transition(|state| state.sorted(field));
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
