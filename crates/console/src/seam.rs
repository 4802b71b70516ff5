//! Backend seam for the view controllers.
//!
//! [`ContentBackend`] mirrors the REST operations of
//! [`postforge_backend::ContentApi`] one-for-one. Controllers depend on
//! the trait, never the concrete client, so every flow can run against an
//! in-memory fake in tests.

use async_trait::async_trait;

use postforge_backend::models::{Category, ClientRecord, Post, Topic};
use postforge_backend::{BackendError, ContentApi};
use postforge_core::generation::GenerationRequest;
use postforge_core::intake::ClientPayload;
use postforge_core::types::EntityId;

/// The backend operations the console consumes.
#[async_trait]
pub trait ContentBackend: Send + Sync {
    async fn list_clients(&self) -> Result<Vec<ClientRecord>, BackendError>;
    async fn create_client(&self, payload: &ClientPayload) -> Result<EntityId, BackendError>;
    async fn remove_client(&self, client_id: &str) -> Result<(), BackendError>;

    async fn list_categories(&self) -> Result<Vec<Category>, BackendError>;
    async fn create_category(&self, category_name: &str) -> Result<(), BackendError>;

    async fn list_topics(&self) -> Result<Vec<Topic>, BackendError>;
    async fn create_topic(
        &self,
        category_id: &str,
        title: &str,
        description: &str,
    ) -> Result<(), BackendError>;
    async fn remove_topic(&self, topic_id: &str) -> Result<(), BackendError>;

    async fn list_posts(&self) -> Result<Vec<Post>, BackendError>;
    async fn generate_posts(&self, request: &GenerationRequest)
        -> Result<Vec<Post>, BackendError>;
    async fn finalize_posts(
        &self,
        client_id: &str,
        post_ids: &[EntityId],
    ) -> Result<(), BackendError>;
    async fn remove_post(&self, post_id: &str) -> Result<(), BackendError>;

    async fn upload_reference_image(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        client_id: &str,
    ) -> Result<String, BackendError>;
}

#[async_trait]
impl ContentBackend for ContentApi {
    async fn list_clients(&self) -> Result<Vec<ClientRecord>, BackendError> {
        ContentApi::list_clients(self).await
    }

    async fn create_client(&self, payload: &ClientPayload) -> Result<EntityId, BackendError> {
        ContentApi::create_client(self, payload).await
    }

    async fn remove_client(&self, client_id: &str) -> Result<(), BackendError> {
        ContentApi::remove_client(self, client_id).await
    }

    async fn list_categories(&self) -> Result<Vec<Category>, BackendError> {
        ContentApi::list_categories(self).await
    }

    async fn create_category(&self, category_name: &str) -> Result<(), BackendError> {
        ContentApi::create_category(self, category_name).await
    }

    async fn list_topics(&self) -> Result<Vec<Topic>, BackendError> {
        ContentApi::list_topics(self).await
    }

    async fn create_topic(
        &self,
        category_id: &str,
        title: &str,
        description: &str,
    ) -> Result<(), BackendError> {
        ContentApi::create_topic(self, category_id, title, description).await
    }

    async fn remove_topic(&self, topic_id: &str) -> Result<(), BackendError> {
        ContentApi::remove_topic(self, topic_id).await
    }

    async fn list_posts(&self) -> Result<Vec<Post>, BackendError> {
        ContentApi::list_posts(self).await
    }

    async fn generate_posts(
        &self,
        request: &GenerationRequest,
    ) -> Result<Vec<Post>, BackendError> {
        ContentApi::generate_posts(self, request).await
    }

    async fn finalize_posts(
        &self,
        client_id: &str,
        post_ids: &[EntityId],
    ) -> Result<(), BackendError> {
        ContentApi::finalize_posts(self, client_id, post_ids).await
    }

    async fn remove_post(&self, post_id: &str) -> Result<(), BackendError> {
        ContentApi::remove_post(self, post_id).await
    }

    async fn upload_reference_image(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        client_id: &str,
    ) -> Result<String, BackendError> {
        ContentApi::upload_reference_image(self, file_name, bytes, client_id).await
    }
}
