//! Directory service endpoints.

pub const CUSTOMERS_SEGMENT: &str = "customers";
pub const TOGGLE_SEGMENT: &str = "toggle";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerEndpoint<'a> {
    List,
    Create,
    Update { email: &'a str },
    Delete { email: &'a str },
    Toggle { email: &'a str },
}

impl<'a> CustomerEndpoint<'a> {
    pub fn method(&self) -> Method {
        match self {
            CustomerEndpoint::List => Method::Get,
            CustomerEndpoint::Create => Method::Post,
            CustomerEndpoint::Update { .. } | CustomerEndpoint::Toggle { .. } => Method::Put,
            CustomerEndpoint::Delete { .. } => Method::Delete,
        }
    }

    /// Unencoded path segments below the service root.
    pub fn segments(&self) -> Vec<&'a str> {
        match *self {
            CustomerEndpoint::List | CustomerEndpoint::Create => vec![CUSTOMERS_SEGMENT],
            CustomerEndpoint::Update { email } | CustomerEndpoint::Delete { email } => {
                vec![CUSTOMERS_SEGMENT, email]
            }
            CustomerEndpoint::Toggle { email } => vec![CUSTOMERS_SEGMENT, TOGGLE_SEGMENT, email],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CustomerEndpoint::List => "list",
            CustomerEndpoint::Create => "create",
            CustomerEndpoint::Update { .. } => "update",
            CustomerEndpoint::Delete { .. } => "delete",
            CustomerEndpoint::Toggle { .. } => "toggle",
        }
    }
}
