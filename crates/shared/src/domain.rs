use std::{cmp::Ordering, fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ParseSortFieldError;

/// A record owned by the customer directory service. `email` is the natural key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub email: String,
    #[serde(deserialize_with = "fav_number_from_wire")]
    pub fav_number: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

impl Customer {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        fav_number: impl Into<String>,
        active: bool,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            fav_number: fav_number.into(),
            active,
        }
    }
}

/// In-progress form state shared by the create and update flows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDraft {
    pub name: String,
    pub email: String,
    #[serde(deserialize_with = "fav_number_from_wire")]
    pub fav_number: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

impl Default for CustomerDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            fav_number: String::new(),
            active: default_active(),
        }
    }
}

impl From<&Customer> for CustomerDraft {
    fn from(customer: &Customer) -> Self {
        Self {
            name: customer.name.clone(),
            email: customer.email.clone(),
            fav_number: customer.fav_number.clone(),
            active: customer.active,
        }
    }
}

impl CustomerDraft {
    pub fn set(&mut self, edit: DraftEdit) {
        match edit {
            DraftEdit::Name(name) => self.name = name,
            DraftEdit::Email(email) => self.email = email,
            DraftEdit::FavNumber(fav_number) => self.fav_number = fav_number,
            DraftEdit::Active(active) => self.active = active,
        }
    }
}

/// A single form input change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftEdit {
    Name(String),
    Email(String),
    FavNumber(String),
    Active(bool),
}

fn default_active() -> bool {
    true
}

// The reference service stores fav_number as an integer, the form keeps it as text.
fn fav_number_from_wire<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Wire {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Wire::deserialize(deserializer)? {
        Wire::Text(text) => text,
        Wire::Number(number) => number.to_string(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Name,
    Email,
    FavNumber,
    Active,
}

impl SortField {
    pub const ALL: [SortField; 4] = [
        SortField::Name,
        SortField::Email,
        SortField::FavNumber,
        SortField::Active,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Email => "email",
            SortField::FavNumber => "fav_number",
            SortField::Active => "active",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortField::Name => "Name",
            SortField::Email => "Email",
            SortField::FavNumber => "Favorite Number",
            SortField::Active => "Active",
        }
    }

    /// Native ordering of the field: strings lexicographic, `false < true`.
    pub fn compare(self, a: &Customer, b: &Customer) -> Ordering {
        match self {
            SortField::Name => a.name.cmp(&b.name),
            SortField::Email => a.email.cmp(&b.email),
            SortField::FavNumber => a.fav_number.cmp(&b.fav_number),
            SortField::Active => a.active.cmp(&b.active),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = ParseSortFieldError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
        SortField::ALL
            .into_iter()
            .find(|field| field.as_str() == normalized)
            .ok_or_else(|| ParseSortFieldError(raw.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn ascending(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Descending,
        }
    }

    /// Sort produced by clicking `field` while `self` is current.
    ///
    /// Two-state: the same field always lands on descending, any other field
    /// starts over at ascending.
    pub fn clicked(self, field: SortField) -> Self {
        if self.field == field {
            Self::descending(field)
        } else {
            Self::ascending(field)
        }
    }

    pub fn compare(self, a: &Customer, b: &Customer) -> Ordering {
        self.direction.apply(self.field.compare(a, b))
    }
}

impl Default for SortSpec {
    fn default() -> Self {
        Self::ascending(SortField::Name)
    }
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
