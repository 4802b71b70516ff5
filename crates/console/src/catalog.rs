//! Category and topic catalog view.
//!
//! Categories and topics are account-global; the selected category only
//! gates topic creation and filters the topic grid. Creations re-fetch
//! their collection (the backend returns no created-entity body), while
//! deletions patch the local list directly.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use postforge_backend::models::{Category, Topic};
use postforge_core::collection::remove_by_key;
use postforge_core::error::CoreError;
use postforge_core::types::EntityId;

use crate::error::ConsoleResult;
use crate::lifecycle::run_or_cancelled;
use crate::notify::NotificationCenter;
use crate::seam::ContentBackend;

/// View controller for the category/topic catalog.
pub struct Catalog {
    backend: Arc<dyn ContentBackend>,
    notifier: Arc<NotificationCenter>,
    cancel: CancellationToken,
    categories: Vec<Category>,
    topics: Vec<Topic>,
    selected_category: Option<EntityId>,
}

impl Catalog {
    pub fn new(backend: Arc<dyn ContentBackend>, notifier: Arc<NotificationCenter>) -> Self {
        Self {
            backend,
            notifier,
            cancel: CancellationToken::new(),
            categories: Vec::new(),
            topics: Vec::new(),
            selected_category: None,
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn selected_category(&self) -> Option<&str> {
        self.selected_category.as_deref()
    }

    /// Topics under the currently selected category, in fetch order.
    pub fn topics_in_selected(&self) -> Vec<&Topic> {
        match self.selected_category.as_deref() {
            Some(category_id) => self
                .topics
                .iter()
                .filter(|topic| topic.category_id == category_id)
                .collect(),
            None => Vec::new(),
        }
    }

    /// Select the category that gates topic creation and filtering.
    pub fn select_category(&mut self, category_id: impl Into<EntityId>) {
        self.selected_category = Some(category_id.into());
    }

    /// Tear the view down, cancelling any in-flight request.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }

    /// Fetch both collections.
    pub async fn refresh(&mut self) -> ConsoleResult<()> {
        self.refresh_categories().await?;
        self.refresh_topics().await
    }

    /// Fetch the category list. On failure the list keeps its previous value.
    pub async fn refresh_categories(&mut self) -> ConsoleResult<()> {
        let outcome = run_or_cancelled(&self.cancel, self.backend.list_categories()).await?;
        match outcome {
            Ok(categories) => {
                self.categories = categories;
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to fetch categories");
                self.notifier.error("Load Failed", "Could not load categories.");
                Err(err.into())
            }
        }
    }

    /// Fetch the topic list. On failure the list keeps its previous value.
    pub async fn refresh_topics(&mut self) -> ConsoleResult<()> {
        let outcome = run_or_cancelled(&self.cancel, self.backend.list_topics()).await?;
        match outcome {
            Ok(topics) => {
                self.topics = topics;
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to fetch topics");
                self.notifier.error("Load Failed", "Could not load topics.");
                Err(err.into())
            }
        }
    }

    /// Create a category by name, then re-fetch the category list to learn
    /// the server-assigned id.
    pub async fn add_category(&mut self, name: &str) -> ConsoleResult<()> {
        let name = name.trim();
        if name.is_empty() {
            let err = CoreError::Validation("Category name is required".to_string());
            self.notifier.error("Missing Information", err.to_string());
            return Err(err.into());
        }

        let outcome = run_or_cancelled(&self.cancel, self.backend.create_category(name)).await?;
        match outcome {
            Ok(()) => {
                self.refresh_categories().await?;
                self.notifier
                    .success("Category Created", format!("\"{name}\" has been added."));
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to create category");
                self.notifier
                    .error("Creation Failed", "Failed to create category. Please try again.");
                Err(err.into())
            }
        }
    }

    /// Create a topic under the selected category, then re-fetch topics.
    ///
    /// Blocked with a validation notification when no category is selected
    /// or when title/description are blank; no request is issued.
    pub async fn add_topic(&mut self, title: &str, description: &str) -> ConsoleResult<()> {
        let Some(category_id) = self.selected_category.clone() else {
            let err = CoreError::Validation(
                "Select a category before adding a topic".to_string(),
            );
            self.notifier.error("Missing Information", err.to_string());
            return Err(err.into());
        };

        let title = title.trim();
        let description = description.trim();
        if title.is_empty() || description.is_empty() {
            let err =
                CoreError::Validation("Topic title and description are required".to_string());
            self.notifier.error("Missing Information", err.to_string());
            return Err(err.into());
        }

        let outcome = run_or_cancelled(
            &self.cancel,
            self.backend.create_topic(&category_id, title, description),
        )
        .await?;
        match outcome {
            Ok(()) => {
                self.refresh_topics().await?;
                self.notifier
                    .success("Topic Created", format!("\"{title}\" has been added."));
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to create topic");
                self.notifier
                    .error("Creation Failed", "Failed to create topic. Please try again.");
                Err(err.into())
            }
        }
    }

    /// Delete a topic by id; on success the entry is removed locally.
    pub async fn delete_topic(&mut self, topic_id: &str) -> ConsoleResult<()> {
        let outcome = run_or_cancelled(&self.cancel, self.backend.remove_topic(topic_id)).await?;
        match outcome {
            Ok(()) => {
                let title = self
                    .topics
                    .iter()
                    .find(|topic| topic.topic_id == topic_id)
                    .map(|topic| topic.title.clone())
                    .unwrap_or_else(|| topic_id.to_string());
                remove_by_key(&mut self.topics, topic_id);
                self.notifier
                    .success("Topic Removed", format!("\"{title}\" has been deleted."));
                Ok(())
            }
            Err(err) => {
                tracing::error!(topic_id, error = %err, "Failed to delete topic");
                self.notifier
                    .error("Deletion Failed", "Failed to delete topic. Please try again.");
                Err(err.into())
            }
        }
    }
}
