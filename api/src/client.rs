//! # CatalogClient — HTTP access to the remote Catalog Service
//!
//! All persistence, validation, and authorization live in the remote service;
//! this client only issues requests and maps failures to [`ApiError`].
//!
//! The [`Session`] is injected at construction. Every authenticated call
//! attaches it as a bearer credential and fails fast with
//! [`ApiError::MissingCredential`] when no token is present. Each call is an
//! independent async operation: no retries, no cancellation, no coordination
//! between in-flight requests.

use reqwest::header::AUTHORIZATION;

use crate::error::ApiError;
use crate::models::{
    Category, CategoryDetail, CategoryPatch, LoginResponse, NewCategory, UserInfo,
};
use crate::session::Session;

/// Client configuration. The base path defaults to `/api`, which resolves
/// against the page origin in the browser; deployments that host the service
/// elsewhere pass an absolute URL.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "/api".to_string(),
        }
    }
}

/// HTTP client for the Catalog Service.
pub struct CatalogClient {
    http: reqwest::Client,
    config: ClientConfig,
    session: Session,
}

impl CatalogClient {
    /// Build a client for the default base path with the given session.
    pub fn new(session: Session) -> Self {
        Self::with_config(session, ClientConfig::default())
    }

    pub fn with_config(session: Session, config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// The `Authorization` header value, or `MissingCredential` when the
    /// session holds no token.
    fn bearer(&self) -> Result<String, ApiError> {
        let token = self.session.token().ok_or(ApiError::MissingCredential)?;
        Ok(format!("Bearer {token}"))
    }

    /// Exchange credentials for a session token (`POST /session`).
    ///
    /// On success the new session is persisted, installed on this client, and
    /// returned so the caller can update its context.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<Session, ApiError> {
        let response = self
            .http
            .post(self.url("/session"))
            .json(&serde_json::json!({
                "username": username,
                "password": password,
            }))
            .send()
            .await?;
        let response = check(response)?;
        let body: LoginResponse = response.json().await?;

        let session = Session::authenticated(body.session_token);
        session.persist();
        self.session = session.clone();
        tracing::info!("Logged in as {username}");
        Ok(session)
    }

    /// Fetch the authenticated user (`GET /user`).
    pub async fn current_user(&self) -> Result<UserInfo, ApiError> {
        let response = self
            .http
            .get(self.url("/user"))
            .header(AUTHORIZATION, self.bearer()?)
            .send()
            .await?;
        Ok(check(response)?.json().await?)
    }

    /// Fetch the root category list (`GET /categories`).
    pub async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        let response = self
            .http
            .get(self.url("/categories"))
            .header(AUTHORIZATION, self.bearer()?)
            .send()
            .await?;
        Ok(check(response)?.json().await?)
    }

    /// Fetch one category with its products and subcategories
    /// (`GET /categories/{id}`).
    pub async fn category(&self, id: u64) -> Result<CategoryDetail, ApiError> {
        let response = self
            .http
            .get(self.url(&format!("/categories/{id}")))
            .header(AUTHORIZATION, self.bearer()?)
            .send()
            .await?;
        Ok(check(response)?.json().await?)
    }

    /// Create a category (`POST /categories`).
    pub async fn create_category(&self, category: &NewCategory) -> Result<Category, ApiError> {
        let response = self
            .http
            .post(self.url("/categories"))
            .header(AUTHORIZATION, self.bearer()?)
            .json(category)
            .send()
            .await?;
        Ok(check(response)?.json().await?)
    }

    /// Partially update a category (`PATCH /categories/{id}`).
    pub async fn update_category(
        &self,
        id: u64,
        patch: &CategoryPatch,
    ) -> Result<Category, ApiError> {
        let response = self
            .http
            .patch(self.url(&format!("/categories/{id}")))
            .header(AUTHORIZATION, self.bearer()?)
            .json(patch)
            .send()
            .await?;
        Ok(check(response)?.json().await?)
    }

    /// Delete a category (`DELETE /categories/{id}`; service answers 204).
    pub async fn delete_category(&self, id: u64) -> Result<(), ApiError> {
        let response = self
            .http
            .delete(self.url(&format!("/categories/{id}")))
            .header(AUTHORIZATION, self.bearer()?)
            .send()
            .await?;
        check(response)?;
        tracing::info!("Deleted category {id}");
        Ok(())
    }
}

/// Pass a successful response through, map anything else to [`ApiError`].
fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        tracing::error!("Catalog service answered {status}");
        Err(ApiError::from_status(status))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
