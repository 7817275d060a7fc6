//! Derived view over the authoritative customer list.

use shared::domain::{Customer, SortSpec};

/// Case-insensitive substring match against name, email and favorite number.
pub fn matches_search(customer: &Customer, term: &str) -> bool {
    let needle = term.to_lowercase();
    [&customer.name, &customer.email, &customer.fav_number]
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

pub fn filter_customers(customers: &[Customer], term: &str) -> Vec<Customer> {
    customers
        .iter()
        .filter(|customer| matches_search(customer, term))
        .cloned()
        .collect()
}

/// Stable: rows that compare equal keep their current relative order.
pub fn sort_customers(customers: &mut [Customer], spec: SortSpec) {
    customers.sort_by(|a, b| spec.compare(a, b));
}

/// Records how the displayed list was produced from the authoritative list.
///
/// A refresh produces [`ViewDerivation::unfiltered`], a search produces
/// [`ViewDerivation::filtered`]; both drop any sorts applied earlier. Sort
/// clicks stack on top of whatever is displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewDerivation {
    filter: Option<String>,
    sorts: Vec<SortSpec>,
}

impl ViewDerivation {
    pub fn unfiltered() -> Self {
        Self::default()
    }

    pub fn filtered(term: impl Into<String>) -> Self {
        Self {
            filter: Some(term.into()),
            sorts: Vec::new(),
        }
    }

    pub fn then_sorted(mut self, spec: SortSpec) -> Self {
        // Re-sorting by a field fully determines the grouping by it, so the
        // earlier pass on the same field has no remaining effect.
        self.sorts.retain(|applied| applied.field != spec.field);
        self.sorts.push(spec);
        self
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    pub fn sorts(&self) -> &[SortSpec] {
        &self.sorts
    }

    pub fn derive(&self, customers: &[Customer]) -> Vec<Customer> {
        let mut displayed = match &self.filter {
            Some(term) => filter_customers(customers, term),
            None => customers.to_vec(),
        };
        for spec in &self.sorts {
            sort_customers(&mut displayed, *spec);
        }
        displayed
    }
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
