/// REST client for the recommendation backend
///
/// Endpoints (relative to the configured base URL, which includes `/api`):
/// - GET  /recommendations/{user_id}
/// - GET  /user/interests/{user_id}
/// - GET  /trending
/// - GET  /history/{user_id}
/// - GET  /movies?genre={genre}
/// - POST /track/search
/// - POST /interact
use crate::{
    error::{AppError, AppResult},
    models::{InteractionEvent, Movie, SearchEvent, UserId},
    services::backend::Backend,
};
use reqwest::{Client as HttpClient, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;

#[derive(Clone)]
pub struct HttpBackend {
    http_client: HttpClient,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(HttpClient::new(), base_url)
    }

    /// Creates a backend whose requests give up after `timeout`
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;
        Ok(Self::with_client(http_client, base_url))
    }

    pub fn with_client(http_client: HttpClient, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http_client,
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> AppResult<T> {
        let response = ensure_success(request.send().await?).await?;
        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(error = %e, body = %body, "Failed to decode backend response");
            AppError::MalformedResponse(e.to_string())
        })
    }

    async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> AppResult<()> {
        let response = self
            .http_client
            .post(self.url(path))
            .json(body)
            .send()
            .await?;

        ensure_success(response).await?;
        Ok(())
    }
}

async fn ensure_success(response: Response) -> AppResult<Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let url = response.url().to_string();
    let body = response.text().await.unwrap_or_default();
    tracing::warn!(status = %status, url = %url, body = %body, "Backend request failed");

    Err(AppError::BackendStatus { status, body })
}

#[async_trait::async_trait]
impl Backend for HttpBackend {
    async fn recommendations(&self, user_id: UserId) -> AppResult<Vec<Movie>> {
        let request = self
            .http_client
            .get(self.url(&format!("recommendations/{}", user_id)));
        self.get_json(request).await
    }

    async fn interests(&self, user_id: UserId) -> AppResult<Vec<String>> {
        let request = self
            .http_client
            .get(self.url(&format!("user/interests/{}", user_id)));
        self.get_json(request).await
    }

    async fn trending(&self) -> AppResult<Vec<Movie>> {
        let request = self.http_client.get(self.url("trending"));
        self.get_json(request).await
    }

    async fn history(&self, user_id: UserId) -> AppResult<Vec<Movie>> {
        let request = self
            .http_client
            .get(self.url(&format!("history/{}", user_id)));
        self.get_json(request).await
    }

    async fn movies_by_genre(&self, genre: &str) -> AppResult<Vec<Movie>> {
        let request = self
            .http_client
            .get(self.url("movies"))
            .query(&[("genre", genre)]);
        let movies: Vec<Movie> = self.get_json(request).await?;

        tracing::debug!(genre = %genre, results = movies.len(), "Genre movies fetched");

        Ok(movies)
    }

    async fn track_search(&self, event: &SearchEvent) -> AppResult<()> {
        self.post_json("track/search", event).await
    }

    async fn track_interaction(&self, event: &InteractionEvent) -> AppResult<()> {
        self.post_json("interact", event).await
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
