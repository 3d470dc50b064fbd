//! HTTP client for the task-management backend.
//!
//! Thin wrapper over reqwest: JSON in/out, a bearer token attached when the
//! user is signed in, and uniform error mapping. The client holds no other
//! state; collection data lives in the screens that requested it.

use std::time::Duration;

use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error::ApiError;
use super::models::{
    LoginRequest, Project, ProjectCreate, ProjectUpdate, Task, TaskCreate, TaskUpdate,
    TokenResponse, User, UserSettings,
};

/// Wrapper for the session token that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display; use `expose()`
/// when actually building the Authorization header.
#[derive(Clone)]
pub struct BearerToken(String);

impl BearerToken {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BearerToken(••••••••)")
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    token: Option<BearerToken>,
}

impl ApiClient {
    /// Build a client for the given base URL.
    ///
    /// A trailing slash on `base_url` is tolerated and stripped.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Transport {
                url: base_url.to_string(),
                source: e,
            })?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
            token: None,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn set_token(&mut self, token: BearerToken) {
        self.token = Some(token);
    }

    pub fn clear_token(&mut self) {
        self.token = None;
    }

    // -- Authentication ----------------------------------------------------

    /// Sign in and remember the returned token for subsequent requests.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<TokenResponse, ApiError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response: TokenResponse = self.post("/api/auth/login", &body).await?;
        self.set_token(BearerToken::new(response.access_token.clone()));
        tracing::debug!("signed in as {}", email);
        Ok(response)
    }

    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.get("/api/auth/me").await
    }

    /// Forget the session token. Purely client-side, like the original.
    pub fn logout(&mut self) {
        self.clear_token();
    }

    // -- Tasks -------------------------------------------------------------

    pub async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        self.get("/api/tasks/").await
    }

    pub async fn create_task(&self, task: &TaskCreate) -> Result<Task, ApiError> {
        self.post("/api/tasks/", task).await
    }

    pub async fn update_task(&self, id: i64, update: &TaskUpdate) -> Result<Task, ApiError> {
        self.put(&format!("/api/tasks/{}", id), update).await
    }

    pub async fn delete_task(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/api/tasks/{}", id)).await
    }

    // -- Projects ----------------------------------------------------------

    pub async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.get("/api/projects/").await
    }

    pub async fn create_project(&self, project: &ProjectCreate) -> Result<Project, ApiError> {
        self.post("/api/projects/", project).await
    }

    pub async fn update_project(
        &self,
        id: i64,
        update: &ProjectUpdate,
    ) -> Result<Project, ApiError> {
        self.put(&format!("/api/projects/{}", id), update).await
    }

    pub async fn delete_project(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/api/projects/{}", id)).await
    }

    // -- Settings ----------------------------------------------------------

    pub async fn get_settings(&self) -> Result<UserSettings, ApiError> {
        self.get("/api/settings/").await
    }

    pub async fn update_settings(&self, settings: &UserSettings) -> Result<UserSettings, ApiError> {
        self.put("/api/settings/", settings).await
    }

    // -- Request plumbing --------------------------------------------------

    fn request(&self, method: Method, endpoint: &str) -> (String, RequestBuilder) {
        let url = format!("{}{}", self.base_url, endpoint);
        let mut builder = self.http.request(method, &url);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token.expose());
        }
        (url, builder)
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let (url, builder) = self.request(Method::GET, endpoint);
        Self::execute(url, builder).await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let (url, builder) = self.request(Method::POST, endpoint);
        Self::execute(url, builder.json(body)).await
    }

    async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let (url, builder) = self.request(Method::PUT, endpoint);
        Self::execute(url, builder.json(body)).await
    }

    async fn delete(&self, endpoint: &str) -> Result<(), ApiError> {
        let (url, builder) = self.request(Method::DELETE, endpoint);
        let response = builder.send().await.map_err(|e| ApiError::Transport {
            url: url.clone(),
            source: e,
        })?;
        Self::check_status(&url, response).await.map(|_| ())
    }

    async fn execute<T: DeserializeOwned>(
        url: String,
        builder: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = builder.send().await.map_err(|e| ApiError::Transport {
            url: url.clone(),
            source: e,
        })?;
        let response = Self::check_status(&url, response).await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::Decode { url, source: e })
    }

    async fn check_status(
        url: &str,
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, url, "backend returned an error");
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_token_does_not_leak() {
        let token = BearerToken::new("super-secret".to_string());
        let debug_output = format!("{:?}", token);
        assert!(!debug_output.contains("super-secret"));
        assert!(debug_output.contains("••••••••"));
        assert_eq!(token.expose(), "super-secret");
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = ApiClient::new("http://localhost:8000/", Duration::from_secs(5)).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
    }
}
