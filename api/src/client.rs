//! HTTP client for the listing API.

use crate::config::ApiConfig;
use crate::error::{message_from_body, ApiError};
use crate::models::{LoginResponse, Place, Review};
use crate::review::NewReview;

/// Client for the rental listing REST API.
///
/// Thin wrapper over [`reqwest::Client`]; cheap to clone and share through
/// context. One method per API operation, all returning [`ApiError`] on
/// failure; callers decide whether a failure degrades silently (listings)
/// or is surfaced to the user (login, review submission).
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `POST /auth/login`: exchange credentials for a bearer token.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        let response = self
            .http
            .post(self.url("/auth/login"))
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;
        let response = check_status(response).await?;
        let body: LoginResponse = response.json().await?;
        Ok(body.access_token)
    }

    /// `GET /places`: all place summaries. The token is attached when the
    /// visitor has a session.
    pub async fn list_places(&self, token: Option<&str>) -> Result<Vec<Place>, ApiError> {
        let mut request = self.http.get(self.url("/places"));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        let response = check_status(request.send().await?).await?;
        Ok(response.json().await?)
    }

    /// `GET /places/{id}`: one full place record.
    pub async fn get_place(&self, token: Option<&str>, place_id: &str) -> Result<Place, ApiError> {
        let mut request = self.http.get(self.url(&format!("/places/{place_id}")));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        let response = check_status(request.send().await?).await?;
        Ok(response.json().await?)
    }

    /// `GET /places/{id}/reviews`: reviews for a place; no auth required.
    pub async fn list_reviews(&self, place_id: &str) -> Result<Vec<Review>, ApiError> {
        let response = self
            .http
            .get(self.url(&format!("/places/{place_id}/reviews")))
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    /// `POST /reviews`: submit a validated review as the current user.
    pub async fn submit_review(&self, token: &str, review: &NewReview) -> Result<Review, ApiError> {
        let response = self
            .http
            .post(self.url("/reviews"))
            .bearer_auth(token)
            .json(review)
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }
}

/// Turn a non-success response into [`ApiError::Api`] carrying the
/// server's message.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let reason = status.canonical_reason().unwrap_or_default();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Api {
        status: status.as_u16(),
        message: message_from_body(status.as_u16(), reason, &body),
    })
}
