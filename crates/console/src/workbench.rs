//! Post-generation workbench view.
//!
//! Holds the generation form (four selections, optional custom prompt and
//! reference image), the single "current" post from the active session,
//! and the saved-posts collection. Finalization must land on every
//! in-memory copy of a post id: the current slot and the saved grid stay
//! in sync whenever the same identifier appears in both.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use postforge_backend::models::Post;
use postforge_core::caption::seed_caption;
use postforge_core::collection::{patch_by_key, remove_by_key};
use postforge_core::error::CoreError;
use postforge_core::finalized::Finalized;
use postforge_core::generation::{build_request, GenerationSelection};
use postforge_core::types::EntityId;

use crate::error::{ConsoleError, ConsoleResult};
use crate::lifecycle::run_or_cancelled;
use crate::notify::NotificationCenter;
use crate::seam::ContentBackend;

/// A reference image the operator attached, pending upload.
#[derive(Debug, Clone)]
pub struct ReferenceImage {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// View controller for the post-generation workbench.
pub struct Workbench {
    backend: Arc<dyn ContentBackend>,
    notifier: Arc<NotificationCenter>,
    cancel: CancellationToken,
    selection: GenerationSelection,
    custom_prompt: String,
    reference_image: Option<ReferenceImage>,
    uploaded_image_url: Option<String>,
    generating: bool,
    current: Option<Post>,
    caption_draft: String,
    saved: Vec<Post>,
}

impl Workbench {
    pub fn new(backend: Arc<dyn ContentBackend>, notifier: Arc<NotificationCenter>) -> Self {
        Self {
            backend,
            notifier,
            cancel: CancellationToken::new(),
            selection: GenerationSelection::default(),
            custom_prompt: String::new(),
            reference_image: None,
            uploaded_image_url: None,
            generating: false,
            current: None,
            caption_draft: String::new(),
            saved: Vec::new(),
        }
    }

    // ---- form state ----

    pub fn selection(&self) -> &GenerationSelection {
        &self.selection
    }

    pub fn select_client(&mut self, client_id: impl Into<EntityId>) {
        self.selection.client_id = Some(client_id.into());
    }

    pub fn select_category(&mut self, category_id: impl Into<EntityId>) {
        self.selection.category_id = Some(category_id.into());
    }

    pub fn select_topic(&mut self, topic_id: impl Into<EntityId>) {
        self.selection.topic_id = Some(topic_id.into());
    }

    pub fn select_style(&mut self, visual_style: impl Into<String>) {
        self.selection.visual_style = Some(visual_style.into());
    }

    pub fn set_custom_prompt(&mut self, prompt: impl Into<String>) {
        self.custom_prompt = prompt.into();
    }

    /// Attach a reference image to steer the next generation.
    pub fn attach_reference_image(&mut self, file_name: impl Into<String>, bytes: Vec<u8>) {
        self.reference_image = Some(ReferenceImage {
            file_name: file_name.into(),
            bytes,
        });
    }

    /// Detach the reference image and forget any previously uploaded URL.
    pub fn remove_reference_image(&mut self) {
        self.reference_image = None;
        self.uploaded_image_url = None;
    }

    // ---- view state ----

    pub fn is_generating(&self) -> bool {
        self.generating
    }

    /// The post generated in the active session, if any.
    pub fn current(&self) -> Option<&Post> {
        self.current.as_ref()
    }

    /// The editable caption draft for the current post.
    pub fn caption_draft(&self) -> &str {
        &self.caption_draft
    }

    /// The full server-side collection of previously generated posts.
    pub fn saved_posts(&self) -> &[Post] {
        &self.saved
    }

    /// URL of the most recently uploaded reference image, if any.
    pub fn uploaded_image_url(&self) -> Option<&str> {
        self.uploaded_image_url.as_deref()
    }

    /// Tear the view down, cancelling any in-flight request.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }

    /// Edit the caption draft. Rejected once the current post is finalized.
    pub fn set_caption(&mut self, caption: impl Into<String>) -> ConsoleResult<()> {
        if self.current_is_finalized() {
            return Err(
                CoreError::Validation("Finalized posts cannot be edited".to_string()).into(),
            );
        }
        self.caption_draft = caption.into();
        Ok(())
    }

    // ---- operations ----

    /// Fetch the saved-posts collection.
    ///
    /// On failure the list keeps its previous value.
    pub async fn refresh_saved(&mut self) -> ConsoleResult<()> {
        let outcome = run_or_cancelled(&self.cancel, self.backend.list_posts()).await?;
        match outcome {
            Ok(posts) => {
                self.saved = posts;
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to fetch posts");
                self.notifier.error("Load Failed", "Could not load saved posts.");
                Err(err.into())
            }
        }
    }

    /// Generate a fresh post from the current selections.
    ///
    /// Clears the current slot first; a missing selection or an in-flight
    /// request aborts before any network call.
    pub async fn generate(&mut self) -> ConsoleResult<()> {
        self.begin_generation()?;
        self.current = None;
        self.caption_draft.clear();

        let outcome = self.run_generation().await;
        self.generating = false;
        outcome
    }

    /// Re-run the identical generation contract, replacing the current
    /// post in place. Rejected once the current post is finalized.
    pub async fn regenerate(&mut self) -> ConsoleResult<()> {
        if self.current_is_finalized() {
            let err =
                CoreError::Validation("Finalized posts cannot be regenerated".to_string());
            self.notifier.error("Post Finalized", err.to_string());
            return Err(err.into());
        }

        self.begin_generation()?;
        let outcome = self.run_generation().await;
        self.generating = false;
        outcome
    }

    /// Finalize the current post: lock it on the backend, then flip the
    /// flag on every in-memory copy without re-fetching.
    pub async fn finalize_current(&mut self) -> ConsoleResult<()> {
        let Some(post) = &self.current else {
            let err = CoreError::Validation("No generated post to finalize".to_string());
            self.notifier.error("Nothing To Finalize", err.to_string());
            return Err(err.into());
        };
        if post.finalized.is_final() {
            let err = CoreError::Validation("Post is already finalized".to_string());
            self.notifier.error("Post Finalized", err.to_string());
            return Err(err.into());
        }

        let client_id = post.client_id.clone();
        let post_id = post.post_id.clone();
        self.finalize(&client_id, &post_id).await
    }

    /// Finalize a post from the saved grid by id.
    pub async fn finalize_saved(&mut self, post_id: &str) -> ConsoleResult<()> {
        let Some(post) = self.saved.iter().find(|post| post.post_id == post_id) else {
            let err = CoreError::NotFound {
                entity: "Post",
                id: post_id.to_string(),
            };
            self.notifier.error("Not Found", err.to_string());
            return Err(err.into());
        };
        if post.finalized.is_final() {
            let err = CoreError::Validation("Post is already finalized".to_string());
            self.notifier.error("Post Finalized", err.to_string());
            return Err(err.into());
        }

        let client_id = post.client_id.clone();
        let post_id = post.post_id.clone();
        self.finalize(&client_id, &post_id).await
    }

    /// Delete a saved post. The current slot is cleared when it held the
    /// same id; every other entry keeps its position.
    pub async fn delete_saved(&mut self, post_id: &str) -> ConsoleResult<()> {
        let outcome = run_or_cancelled(&self.cancel, self.backend.remove_post(post_id)).await?;
        match outcome {
            Ok(()) => {
                remove_by_key(&mut self.saved, post_id);
                if self
                    .current
                    .as_ref()
                    .is_some_and(|post| post.post_id == post_id)
                {
                    self.current = None;
                    self.caption_draft.clear();
                }
                self.notifier.success("Post Deleted", "Post has been removed.");
                Ok(())
            }
            Err(err) => {
                tracing::error!(post_id, error = %err, "Failed to delete post");
                self.notifier
                    .error("Deletion Failed", "Failed to delete post. Please try again.");
                Err(err.into())
            }
        }
    }

    // ---- private helpers ----

    fn current_is_finalized(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|post| post.finalized.is_final())
    }

    /// Shared pre-flight for generate/regenerate: the busy guard lives in
    /// state, not in the trigger control, so a repeat call before the
    /// first resolves is rejected without a request.
    fn begin_generation(&mut self) -> ConsoleResult<()> {
        if self.generating {
            self.notifier.error(
                "Generation In Progress",
                "Wait for the current request to finish.",
            );
            return Err(ConsoleError::Busy);
        }
        if let Err(err) = self.selection.validate() {
            self.notifier.error("Missing Information", err.to_string());
            return Err(err.into());
        }
        self.generating = true;
        Ok(())
    }

    async fn run_generation(&mut self) -> ConsoleResult<()> {
        let reference_url = self.upload_attached_image().await?;
        let request = build_request(&self.selection, &self.custom_prompt, reference_url)?;

        let outcome = run_or_cancelled(&self.cancel, self.backend.generate_posts(&request)).await?;
        match outcome {
            Ok(posts) => {
                let Some(post) = posts.into_iter().next() else {
                    tracing::warn!("Generation succeeded but returned no posts");
                    self.notifier
                        .error("Generation Failed", "The backend returned no posts.");
                    return Ok(());
                };

                self.caption_draft = seed_caption(&post.caption, &post.hashtags);
                self.current = Some(post);

                // Refresh the saved grid; a refresh failure does not undo
                // the successful generation.
                let refreshed = run_or_cancelled(&self.cancel, self.backend.list_posts()).await?;
                match refreshed {
                    Ok(posts) => self.saved = posts,
                    Err(err) => {
                        tracing::error!(error = %err, "Failed to refresh posts after generation");
                        self.notifier
                            .error("Refresh Failed", "Could not refresh saved posts.");
                    }
                }

                self.notifier
                    .success("Post Generated", "Your post has been created successfully.");
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to generate post");
                self.notifier
                    .error("Generation Failed", "Failed to generate post. Please try again.");
                Err(err.into())
            }
        }
    }

    /// Upload the attached reference image, if any.
    ///
    /// An upload failure is not fatal; generation proceeds without the
    /// reference image.
    async fn upload_attached_image(&mut self) -> ConsoleResult<Option<String>> {
        let Some(image) = self.reference_image.clone() else {
            return Ok(None);
        };
        // Selections were validated in begin_generation.
        let Some(client_id) = self.selection.client_id.clone() else {
            return Ok(None);
        };

        let outcome = run_or_cancelled(
            &self.cancel,
            self.backend
                .upload_reference_image(&image.file_name, image.bytes, &client_id),
        )
        .await?;
        match outcome {
            Ok(url) => {
                self.uploaded_image_url = Some(url.clone());
                self.notifier
                    .success("Image Uploaded", "Reference image uploaded successfully.");
                Ok(Some(url))
            }
            Err(err) => {
                tracing::warn!(error = %err, "Reference image upload failed, generating without it");
                self.notifier
                    .error("Upload Failed", "Generating without the reference image.");
                Ok(None)
            }
        }
    }

    async fn finalize(&mut self, client_id: &str, post_id: &str) -> ConsoleResult<()> {
        let post_ids = [post_id.to_string()];
        let outcome = run_or_cancelled(
            &self.cancel,
            self.backend.finalize_posts(client_id, &post_ids),
        )
        .await?;
        match outcome {
            Ok(()) => {
                self.apply_finalized(post_id);
                self.notifier
                    .success("Post Finalized", "Post finalized and sent for review.");
                Ok(())
            }
            Err(err) => {
                tracing::error!(post_id, error = %err, "Failed to finalize post");
                self.notifier
                    .error("Finalization Failed", "Failed to finalize post. Please try again.");
                Err(err.into())
            }
        }
    }

    /// Flip the finalized flag on every in-memory copy of `post_id`.
    fn apply_finalized(&mut self, post_id: &str) {
        if let Some(current) = self.current.as_mut() {
            if current.post_id == post_id {
                current.finalized = Finalized::YES;
            }
        }
        patch_by_key(&mut self.saved, post_id, |post| {
            post.finalized = Finalized::YES;
        });
    }
}

/* --------------------------------------------------------------------------
   Tests
   -------------------------------------------------------------------------- */
