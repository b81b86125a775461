use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::posts::{RawPost, SavedPost};

use super::error::ApiError;
use super::wire::{DraftPost, WirePost};

/// Longest slice of an error body kept in [`ApiError::Status`].
const ERROR_BODY_LIMIT: usize = 200;

/// Remote source of posts.
#[async_trait]
pub trait PostsApi: Send + Sync {
    /// List every post. Identifiers come back normalised.
    async fn list_posts(&self) -> Result<Vec<RawPost>, ApiError>;

    /// Create a post. The returned id is whatever the server echoed and
    /// must not be trusted.
    async fn create_post(&self, draft: &DraftPost) -> Result<SavedPost, ApiError>;
}

/// [`PostsApi`] over HTTP against a `jsonplaceholder`-style `/posts` URL.
pub struct HttpPostsApi {
    client: Client,
    base_url: String,
}

impl HttpPostsApi {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds.into()))
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn read_json<T: DeserializeOwned>(&self, response: Response) -> Result<T, ApiError> {
        let status = response.status();
        let body = response.text().await.map_err(|e| ApiError::Request {
            url: self.base_url.clone(),
            source: e,
        })?;

        if !status.is_success() {
            return Err(ApiError::Status {
                url: self.base_url.clone(),
                status: status.as_u16(),
                message: truncate(&body, ERROR_BODY_LIMIT),
            });
        }

        serde_json::from_str(&body).map_err(|e| ApiError::Decode {
            url: self.base_url.clone(),
            source: e,
        })
    }
}

#[async_trait]
impl PostsApi for HttpPostsApi {
    async fn list_posts(&self) -> Result<Vec<RawPost>, ApiError> {
        let response = self
            .client
            .get(&self.base_url)
            .send()
            .await
            .map_err(|e| ApiError::Request {
                url: self.base_url.clone(),
                source: e,
            })?;

        let posts: Vec<WirePost> = self.read_json(response).await?;
        tracing::debug!(url = %self.base_url, count = posts.len(), "Listed posts");

        posts.into_iter().map(WirePost::into_raw).collect()
    }

    async fn create_post(&self, draft: &DraftPost) -> Result<SavedPost, ApiError> {
        let response = self
            .client
            .post(&self.base_url)
            .json(draft)
            .send()
            .await
            .map_err(|e| ApiError::Request {
                url: self.base_url.clone(),
                source: e,
            })?;

        let echoed: WirePost = self.read_json(response).await?;
        echoed.into_saved()
    }
}

fn truncate(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((end, _)) => format!("{}...", &text[..end]),
        None => text.to_string(),
    }
}
