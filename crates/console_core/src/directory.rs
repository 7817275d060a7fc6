use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use shared::{
    domain::{Customer, CustomerDraft},
    error::ErrorDetail,
    protocol::{CustomerEndpoint, Method},
};
use tracing::{debug, warn};
use url::Url;

use crate::outcome::{DirectoryError, RequestOutcome};

/// The remote customer directory.
///
/// Mutations report success without inspecting the response body.
#[async_trait]
pub trait CustomerDirectory: Send + Sync {
    async fn list(&self) -> RequestOutcome<Vec<Customer>>;
    async fn create(&self, draft: &CustomerDraft) -> RequestOutcome<()>;
    async fn update(&self, email: &str, draft: &CustomerDraft) -> RequestOutcome<()>;
    async fn delete(&self, email: &str) -> RequestOutcome<()>;
    /// The service flips the flag itself; no body is sent.
    async fn toggle_active(&self, email: &str) -> RequestOutcome<()>;
}

pub struct HttpCustomerDirectory {
    http: Client,
    base_url: Url,
}

impl HttpCustomerDirectory {
    pub fn new(base_url: &str) -> Result<Self, DirectoryError> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: &str) -> Result<Self, DirectoryError> {
        let parsed =
            Url::parse(base_url).map_err(|_| DirectoryError::InvalidBaseUrl(base_url.to_string()))?;
        if parsed.cannot_be_a_base() {
            return Err(DirectoryError::InvalidBaseUrl(base_url.to_string()));
        }
        Ok(Self {
            http,
            base_url: parsed,
        })
    }

    pub fn endpoint_url(&self, endpoint: CustomerEndpoint<'_>) -> Result<Url, DirectoryError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| DirectoryError::InvalidBaseUrl(self.base_url.to_string()))?;
            segments.pop_if_empty();
            segments.extend(endpoint.segments());
        }
        Ok(url)
    }

    async fn send(
        &self,
        endpoint: CustomerEndpoint<'_>,
        body: Option<&CustomerDraft>,
    ) -> Result<Response, DirectoryError> {
        let url = self.endpoint_url(endpoint)?;
        debug!(operation = endpoint.name(), url = %url, "directory: sending request");
        let request = match endpoint.method() {
            Method::Get => self.http.get(url),
            Method::Post => self.http.post(url),
            Method::Put => self.http.put(url),
            Method::Delete => self.http.delete(url),
        };
        let request = match body {
            Some(draft) => request.json(draft),
            None => request,
        };

        let response = request.send().await.map_err(DirectoryError::Transport)?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let detail = response
            .json::<ErrorDetail>()
            .await
            .ok()
            .map(|detail| detail.message());
        warn!(
            operation = endpoint.name(),
            status = status.as_u16(),
            detail = detail.as_deref().unwrap_or(""),
            "directory: request rejected"
        );
        Err(DirectoryError::Status {
            status: status.as_u16(),
            detail,
        })
    }

    async fn mutate(
        &self,
        endpoint: CustomerEndpoint<'_>,
        body: Option<&CustomerDraft>,
    ) -> RequestOutcome<()> {
        classify_mutation(endpoint, self.send(endpoint, body).await.map(|_| ()))
    }
}

/// Maps a transport result onto the closed outcome set. Only a create can conflict.
pub fn classify_mutation(
    endpoint: CustomerEndpoint<'_>,
    result: Result<(), DirectoryError>,
) -> RequestOutcome<()> {
    match result {
        Ok(()) => RequestOutcome::Success(()),
        Err(err)
            if endpoint == CustomerEndpoint::Create
                && err.status() == Some(StatusCode::BAD_REQUEST.as_u16()) =>
        {
            RequestOutcome::Conflict(err.to_string())
        }
        Err(err) => RequestOutcome::Failure(err.to_string()),
    }
}

#[async_trait]
impl CustomerDirectory for HttpCustomerDirectory {
    async fn list(&self) -> RequestOutcome<Vec<Customer>> {
        let response = match self.send(CustomerEndpoint::List, None).await {
            Ok(response) => response,
            Err(err) => return RequestOutcome::Failure(err.to_string()),
        };
        match response.json::<Vec<Customer>>().await {
            Ok(customers) => RequestOutcome::Success(customers),
            Err(err) => RequestOutcome::Failure(DirectoryError::Decode(err.to_string()).to_string()),
        }
    }

    async fn create(&self, draft: &CustomerDraft) -> RequestOutcome<()> {
        self.mutate(CustomerEndpoint::Create, Some(draft)).await
    }

    async fn update(&self, email: &str, draft: &CustomerDraft) -> RequestOutcome<()> {
        self.mutate(CustomerEndpoint::Update { email }, Some(draft))
            .await
    }

    async fn delete(&self, email: &str) -> RequestOutcome<()> {
        self.mutate(CustomerEndpoint::Delete { email }, None).await
    }

    async fn toggle_active(&self, email: &str) -> RequestOutcome<()> {
        self.mutate(CustomerEndpoint::Toggle { email }, None).await
    }
}

#[cfg(test)]
#[path = "tests/directory_tests.rs"]
mod tests;
