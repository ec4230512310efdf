// src/client/api.rs

use reqwest::StatusCode;
use thiserror::Error;

use crate::models::comment::{
    CommentCreatedResponse, CommentListResponse, CommentResponse, CreateCommentRequest,
};
use crate::models::user::{AuthResponse, LoginRequest, RegisterRequest, RegisterResponse};

/// Errors surfaced by [`ApiClient`] calls.
///
/// Body decode failures come out of reqwest as well, so they land in
/// `Transport` alongside connection errors.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned {0}")]
    Status(StatusCode),
}

/// Thin HTTP client for the REST API.
///
/// Holds the base URL and, after login, the bearer token attached to
/// authenticated requests.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
            token: None,
        }
    }

    /// Replaces the bearer token used by authenticated requests.
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Maps any non-2xx response to `ClientError::Status`.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(ClientError::Status(response.status()))
        }
    }

    pub async fn register(
        &self,
        name: Option<&str>,
        email: &str,
        password: &str,
    ) -> Result<RegisterResponse, ClientError> {
        let body = RegisterRequest {
            name: name.map(str::to_string),
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        };

        let response = self
            .http
            .post(self.url("/api/auth/register"))
            .json(&body)
            .send()
            .await?;

        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ClientError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = self
            .http
            .post(self.url("/api/auth/login"))
            .json(&body)
            .send()
            .await?;

        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn fetch_comments(&self, article_id: i64) -> Result<Vec<CommentResponse>, ClientError> {
        let response = self
            .http
            .get(self.url(&format!("/api/articles/{article_id}/comments")))
            .send()
            .await?;

        let list: CommentListResponse = Self::check(response).await?.json().await?;
        Ok(list.comments)
    }

    pub async fn create_comment(
        &self,
        article_id: i64,
        content: &str,
    ) -> Result<CommentResponse, ClientError> {
        let body = CreateCommentRequest {
            content: content.to_string(),
        };

        let mut request = self
            .http
            .post(self.url(&format!("/api/articles/{article_id}/comments")))
            .json(&body);

        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let created: CommentCreatedResponse = Self::check(response).await?.json().await?;
        Ok(created.comment)
    }
}
