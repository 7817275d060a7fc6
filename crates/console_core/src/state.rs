use shared::domain::{Customer, CustomerDraft, DraftEdit, SortField, SortSpec};

use crate::view::ViewDerivation;

/// Everything the console renders. Changed only through the transitions below,
/// each of which consumes the previous state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsoleState {
    customers: Vec<Customer>,
    draft: CustomerDraft,
    edit_target: Option<Customer>,
    search_term: String,
    sort: SortSpec,
    view: ViewDerivation,
    displayed: Vec<Customer>,
}

impl ConsoleState {
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn displayed(&self) -> &[Customer] {
        &self.displayed
    }

    pub fn draft(&self) -> &CustomerDraft {
        &self.draft
    }

    pub fn edit_target(&self) -> Option<&Customer> {
        self.edit_target.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.edit_target.is_some()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    pub fn view(&self) -> &ViewDerivation {
        &self.view
    }

    /// Replaces the authoritative list and shows all of it, unsorted.
    ///
    /// The search term is kept as typed even though it no longer filters.
    pub fn refreshed(self, customers: Vec<Customer>) -> Self {
        Self {
            customers,
            view: ViewDerivation::unfiltered(),
            ..self
        }
        .rederived()
    }

    /// Filters the authoritative list by `term`; earlier sorts are not re-applied.
    pub fn searched(self, term: impl Into<String>) -> Self {
        let search_term = term.into();
        Self {
            view: ViewDerivation::filtered(search_term.clone()),
            search_term,
            ..self
        }
        .rederived()
    }

    /// Re-sorts what is currently displayed by `field`.
    pub fn sorted(self, field: SortField) -> Self {
        let sort = self.sort.clicked(field);
        let view = self.view.clone().then_sorted(sort);
        Self { sort, view, ..self }.rederived()
    }

    pub fn editing(self, customer: &Customer) -> Self {
        Self {
            draft: CustomerDraft::from(customer),
            edit_target: Some(customer.clone()),
            ..self
        }
    }

    pub fn draft_edited(mut self, edit: DraftEdit) -> Self {
        self.draft.set(edit);
        self
    }

    /// Default draft, no edit target.
    pub fn form_reset(self) -> Self {
        Self {
            draft: CustomerDraft::default(),
            edit_target: None,
            ..self
        }
    }

    fn rederived(self) -> Self {
        let displayed = self.view.derive(&self.customers);
        Self { displayed, ..self }
    }
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod tests;
