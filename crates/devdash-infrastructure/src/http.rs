//! HTTP gateway to the remote dashboard API.
//!
//! One configured `reqwest` client serves every endpoint. Each request
//! attaches `Authorization: Bearer <token>` when the shared [`TokenCell`]
//! holds a credential; the session store keeps that cell in lockstep with
//! durable storage, so the gateway never reads disk itself.
//!
//! Timeout is fixed at 30 seconds and requests are never retried; a failed
//! call surfaces to the user, who resubmits manually.

use async_trait::async_trait;
use devdash_core::collection::CollectionApi;
use devdash_core::error::{DevdashError, Result};
use devdash_core::gateway::{AuthApi, AuthPayload, RepoMirrorApi};
use devdash_core::github::RepoSummary;
use devdash_core::goal::{Goal, GoalDraft};
use devdash_core::resource::{Resource, ResourceDraft};
use devdash_core::session::TokenCell;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Configured HTTP client for the remote API.
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: TokenCell,
}

impl ApiClient {
    /// Creates a client against the given base URL.
    ///
    /// The token cell is shared with the session store; whatever credential
    /// it holds at send time is attached as a bearer token.
    pub fn new(base_url: impl Into<String>, token: TokenCell) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| DevdashError::internal(format!("Failed to build HTTP client: {err}")))?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            client,
            base_url,
            token,
        })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.request(method, url);
        if let Some(token) = self.token.get() {
            request = request.bearer_auth(token);
        }
        request
    }

    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request
            .send()
            .await
            .map_err(|err| DevdashError::network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = error_from_response(status, &body);
            tracing::debug!(status = status.as_u16(), %err, "request failed");
            return Err(err);
        }

        response
            .json::<T>()
            .await
            .map_err(|err| DevdashError::internal(format!("Failed to parse response body: {err}")))
    }
}

/// Error shape the API uses for non-2xx responses.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Maps a non-2xx response to a transport error, preferring the server's
/// `{"error": ...}` message over the raw body.
fn error_from_response(status: StatusCode, body: &str) -> DevdashError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .map(|wrapper| wrapper.error)
        .unwrap_or_else(|_| body.to_string());
    DevdashError::transport(status.as_u16(), message)
}

#[async_trait]
impl AuthApi for ApiClient {
    async fn login(&self, email: &str, password: &str) -> Result<AuthPayload> {
        let request = self
            .request(Method::POST, "/auth/login")
            .json(&json!({ "email": email, "password": password }));
        self.execute(request).await
    }

    async fn signup(&self, name: &str, email: &str, password: &str) -> Result<AuthPayload> {
        let request = self
            .request(Method::POST, "/auth/signup")
            .json(&json!({ "name": name, "email": email, "password": password }));
        self.execute(request).await
    }
}

#[async_trait]
impl RepoMirrorApi for ApiClient {
    async fn repos(&self, username: &str) -> Result<Vec<RepoSummary>> {
        let request = self
            .request(Method::GET, "/github/repos")
            .query(&[("username", username)]);
        self.execute(request).await
    }
}

#[derive(Deserialize)]
struct ResourceEnvelope {
    #[allow(dead_code)]
    message: String,
    resource: Resource,
}

#[derive(Deserialize)]
struct GoalEnvelope {
    #[allow(dead_code)]
    message: String,
    goal: Goal,
}

#[derive(Deserialize)]
struct MessageOnly {
    #[allow(dead_code)]
    message: String,
}

/// The `/resources` endpoint set.
pub struct ResourceEndpoint {
    client: Arc<ApiClient>,
}

impl ResourceEndpoint {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CollectionApi for ResourceEndpoint {
    type Record = Resource;
    type Draft = ResourceDraft;

    async fn list(&self) -> Result<Vec<Resource>> {
        let request = self.client.request(Method::GET, "/resources");
        self.client.execute(request).await
    }

    async fn create(&self, draft: &ResourceDraft) -> Result<Resource> {
        let request = self.client.request(Method::POST, "/resources").json(draft);
        let envelope: ResourceEnvelope = self.client.execute(request).await?;
        Ok(envelope.resource)
    }

    async fn update(&self, id: i64, draft: &ResourceDraft) -> Result<Resource> {
        let request = self
            .client
            .request(Method::PATCH, &format!("/resources/{id}"))
            .json(draft);
        let envelope: ResourceEnvelope = self.client.execute(request).await?;
        Ok(envelope.resource)
    }

    async fn remove(&self, id: i64) -> Result<()> {
        let request = self
            .client
            .request(Method::DELETE, &format!("/resources/{id}"));
        let _: MessageOnly = self.client.execute(request).await?;
        Ok(())
    }
}

/// The `/goals` endpoint set.
pub struct GoalEndpoint {
    client: Arc<ApiClient>,
}

impl GoalEndpoint {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CollectionApi for GoalEndpoint {
    type Record = Goal;
    type Draft = GoalDraft;

    async fn list(&self) -> Result<Vec<Goal>> {
        let request = self.client.request(Method::GET, "/goals");
        self.client.execute(request).await
    }

    async fn create(&self, draft: &GoalDraft) -> Result<Goal> {
        let request = self.client.request(Method::POST, "/goals").json(draft);
        let envelope: GoalEnvelope = self.client.execute(request).await?;
        Ok(envelope.goal)
    }

    async fn update(&self, id: i64, draft: &GoalDraft) -> Result<Goal> {
        let request = self
            .client
            .request(Method::PATCH, &format!("/goals/{id}"))
            .json(draft);
        let envelope: GoalEnvelope = self.client.execute(request).await?;
        Ok(envelope.goal)
    }

    async fn remove(&self, id: i64) -> Result<()> {
        let request = self.client.request(Method::DELETE, &format!("/goals/{id}"));
        let _: MessageOnly = self.client.execute(request).await?;
        Ok(())
    }
}
