//! REST client for the content backend.
//!
//! Wraps the backend's HTTP surface (client records, categories, topics,
//! post generation, finalization, image upload) using [`reqwest`]. Every
//! method resolves its path against the configured base URL, and every
//! response passes through one shared status check before any decode.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::multipart;
use serde::Deserialize;

use postforge_core::generation::GenerationRequest;
use postforge_core::intake::ClientPayload;
use postforge_core::types::EntityId;

use crate::config::BackendConfig;
use crate::error::BackendError;
use crate::models::{Category, ClientRecord, Post, Topic};

/// Bypass header the tunneling layer in front of the backend requires.
const TUNNEL_BYPASS_HEADER: &str = "ngrok-skip-browser-warning";
/// Any non-browser value satisfies the tunnel; this one is the deployed
/// contract.
const TUNNEL_BYPASS_VALUE: &str = "69420";

/// HTTP request timeout for a single call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/* --------------------------------------------------------------------------
   Response envelopes
   -------------------------------------------------------------------------- */

/// `GET /clients/all-clients` envelope. A missing field means no clients.
#[derive(Debug, Deserialize)]
struct ClientsEnvelope {
    #[serde(default)]
    clients: Vec<ClientRecord>,
}

#[derive(Debug, Deserialize)]
struct CategoriesEnvelope {
    #[serde(default)]
    categories: Vec<Category>,
}

#[derive(Debug, Deserialize)]
struct TopicsEnvelope {
    #[serde(default)]
    topics: Vec<Topic>,
}

#[derive(Debug, Deserialize)]
struct PostsEnvelope {
    #[serde(default)]
    posts: Vec<Post>,
}

/// `POST /create` success body.
#[derive(Debug, Deserialize)]
struct CreateClientResponse {
    client_id: EntityId,
}

/// `POST /images/upload` success body.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    url: String,
}

/* --------------------------------------------------------------------------
   ContentApi
   -------------------------------------------------------------------------- */

/// HTTP client for the content backend.
pub struct ContentApi {
    client: reqwest::Client,
    base_url: String,
}

impl ContentApi {
    /// Create a new API client against the configured base URL.
    pub fn new(config: &BackendConfig) -> Self {
        let client = reqwest::Client::builder()
            .default_headers(Self::fixed_headers())
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self {
            client,
            base_url: config.base_url.clone(),
        }
    }

    /// Create an API client reusing an existing [`reqwest::Client`].
    ///
    /// The caller is responsible for having configured the fixed headers.
    pub fn with_client(client: reqwest::Client, config: &BackendConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
        }
    }

    /// Headers attached to every request: the tunnel bypass plus a JSON
    /// `Accept`. `Content-Type` is set per request only when a body is
    /// present (`.json(..)` / multipart).
    fn fixed_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            TUNNEL_BYPASS_HEADER,
            HeaderValue::from_static(TUNNEL_BYPASS_VALUE),
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    // ---- clients ----

    /// List all business clients.
    ///
    /// Sends `GET /clients/all-clients` and unwraps the `clients` field,
    /// defaulting to an empty list when absent.
    pub async fn list_clients(&self) -> Result<Vec<ClientRecord>, BackendError> {
        let response = self
            .client
            .get(format!("{}/clients/all-clients", self.base_url))
            .send()
            .await?;

        let envelope: ClientsEnvelope = Self::parse_response(response).await?;
        Ok(envelope.clients)
    }

    /// Create a client from an assembled intake payload.
    ///
    /// Sends `POST /create` and returns the server-assigned client id.
    pub async fn create_client(&self, payload: &ClientPayload) -> Result<EntityId, BackendError> {
        let response = self
            .client
            .post(format!("{}/create", self.base_url))
            .json(payload)
            .send()
            .await?;

        let created: CreateClientResponse = Self::parse_response(response).await?;
        tracing::info!(client_id = %created.client_id, "Client created");
        Ok(created.client_id)
    }

    /// Delete a client and cascade-delete all its associated data.
    ///
    /// Sends `DELETE /clients/remove?client_id=..&delete_all_data=true`.
    pub async fn remove_client(&self, client_id: &str) -> Result<(), BackendError> {
        let response = self
            .client
            .delete(format!("{}/clients/remove", self.base_url))
            .query(&[("client_id", client_id), ("delete_all_data", "true")])
            .send()
            .await?;

        Self::check_status(response).await
    }

    // ---- categories ----

    /// List all content categories.
    pub async fn list_categories(&self) -> Result<Vec<Category>, BackendError> {
        let response = self
            .client
            .get(format!("{}/get-all-categories", self.base_url))
            .send()
            .await?;

        let envelope: CategoriesEnvelope = Self::parse_response(response).await?;
        Ok(envelope.categories)
    }

    /// Create a category by name.
    ///
    /// The backend returns no created-entity body; callers re-fetch to
    /// learn the assigned id.
    pub async fn create_category(&self, category_name: &str) -> Result<(), BackendError> {
        let body = serde_json::json!({ "category_name": category_name });

        let response = self
            .client
            .post(format!("{}/create-category", self.base_url))
            .json(&body)
            .send()
            .await?;

        Self::check_status(response).await
    }

    // ---- topics ----

    /// List all content topics.
    pub async fn list_topics(&self) -> Result<Vec<Topic>, BackendError> {
        let response = self
            .client
            .get(format!("{}/get-all-topics", self.base_url))
            .send()
            .await?;

        let envelope: TopicsEnvelope = Self::parse_response(response).await?;
        Ok(envelope.topics)
    }

    /// Create a topic under a category.
    pub async fn create_topic(
        &self,
        category_id: &str,
        title: &str,
        description: &str,
    ) -> Result<(), BackendError> {
        let body = serde_json::json!({
            "category_id": category_id,
            "title": title,
            "description": description,
        });

        let response = self
            .client
            .post(format!("{}/create-topic", self.base_url))
            .json(&body)
            .send()
            .await?;

        Self::check_status(response).await
    }

    /// Delete a topic by id.
    ///
    /// Sends `DELETE /remove-topic?topic_id=..`.
    pub async fn remove_topic(&self, topic_id: &str) -> Result<(), BackendError> {
        let response = self
            .client
            .delete(format!("{}/remove-topic", self.base_url))
            .query(&[("topic_id", topic_id)])
            .send()
            .await?;

        Self::check_status(response).await
    }

    // ---- posts ----

    /// List all saved posts.
    pub async fn list_posts(&self) -> Result<Vec<Post>, BackendError> {
        let response = self
            .client
            .get(format!("{}/posts/get-all-posts", self.base_url))
            .send()
            .await?;

        let envelope: PostsEnvelope = Self::parse_response(response).await?;
        Ok(envelope.posts)
    }

    /// Generate posts from an assembled request body.
    ///
    /// Sends `POST /posts/create`. The backend returns the freshly
    /// generated posts in the `posts` field.
    pub async fn generate_posts(
        &self,
        request: &GenerationRequest,
    ) -> Result<Vec<Post>, BackendError> {
        let response = self
            .client
            .post(format!("{}/posts/create", self.base_url))
            .json(request)
            .send()
            .await?;

        let envelope: PostsEnvelope = Self::parse_response(response).await?;
        tracing::info!(
            client_id = %request.client_id,
            count = envelope.posts.len(),
            "Posts generated"
        );
        Ok(envelope.posts)
    }

    /// Finalize posts for a client.
    ///
    /// Sends `POST /posts/finalize-post` with the owning client id and the
    /// post ids to lock.
    pub async fn finalize_posts(
        &self,
        client_id: &str,
        post_ids: &[EntityId],
    ) -> Result<(), BackendError> {
        let body = serde_json::json!({
            "client_id": client_id,
            "post_ids": post_ids,
        });

        let response = self
            .client
            .post(format!("{}/posts/finalize-post", self.base_url))
            .json(&body)
            .send()
            .await?;

        Self::check_status(response).await
    }

    /// Delete a post by id.
    ///
    /// Sends `DELETE /posts/remove` with a JSON body.
    pub async fn remove_post(&self, post_id: &str) -> Result<(), BackendError> {
        let body = serde_json::json!({ "post_id": post_id });

        let response = self
            .client
            .delete(format!("{}/posts/remove", self.base_url))
            .json(&body)
            .send()
            .await?;

        Self::check_status(response).await
    }

    // ---- images ----

    /// Upload a reference image and return its hosted URL.
    ///
    /// Sends a multipart `POST /images/upload` with the file bytes, the
    /// original file name, and the owning client id.
    pub async fn upload_reference_image(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        client_id: &str,
    ) -> Result<String, BackendError> {
        let part = multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = multipart::Form::new()
            .part("file", part)
            .text("image_name", file_name.to_string())
            .text("client_id", client_id.to_string());

        let response = self
            .client
            .post(format!("{}/images/upload", self.base_url))
            .multipart(form)
            .send()
            .await?;

        let uploaded: UploadResponse = Self::parse_response(response).await?;
        Ok(uploaded.url)
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the response
    /// unchanged on success, or a [`BackendError::Api`] carrying the status
    /// and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, BackendError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(BackendError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, BackendError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    /// Assert the response has a success status code, discarding the body.
    async fn check_status(response: reqwest::Response) -> Result<(), BackendError> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}

/* --------------------------------------------------------------------------
   Tests
   -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clients_envelope_defaults_to_empty_on_missing_field() {
        let envelope: ClientsEnvelope = serde_json::from_str("{}").unwrap();
        assert!(envelope.clients.is_empty());
    }

    #[test]
    fn posts_envelope_decodes_populated_list() {
        let envelope: PostsEnvelope = serde_json::from_value(serde_json::json!({
            "posts": [{
                "post_id": "PST-1",
                "client_id": "CLT-1",
                "category_id": "CAT-1",
                "topics": ["TOP-1"],
                "caption": "Hello",
                "hashtags": "",
                "image_url": "https://cdn.example/p1.png",
                "visual_style": null,
                "finalized": "False",
            }]
        }))
        .unwrap();
        assert_eq!(envelope.posts.len(), 1);
        assert!(!envelope.posts[0].finalized.is_final());
    }

    #[test]
    fn fixed_headers_carry_tunnel_bypass_and_accept() {
        let headers = ContentApi::fixed_headers();
        assert_eq!(
            headers.get(TUNNEL_BYPASS_HEADER).unwrap(),
            TUNNEL_BYPASS_VALUE
        );
        assert_eq!(headers.get(ACCEPT).unwrap(), "application/json");
    }

    #[test]
    fn new_does_not_panic() {
        let _api = ContentApi::new(&BackendConfig::new("http://localhost:8000"));
    }
}
