//! Generation request assembly and selection validation.
//!
//! A generation request needs four selections: client, category, topic,
//! and visual style. Validation happens before any network call: a missing
//! selection aborts the whole operation with a message naming every gap.

use serde::Serialize;

use crate::error::CoreError;
use crate::types::EntityId;

/// Posts requested per generation call. The console works one post at a
/// time; regeneration issues a fresh request rather than mutating.
pub const POSTS_PER_REQUEST: u32 = 1;

/* --------------------------------------------------------------------------
   Selections
   -------------------------------------------------------------------------- */

/// The four dropdown selections the generation form requires.
#[derive(Debug, Clone, Default)]
pub struct GenerationSelection {
    pub client_id: Option<EntityId>,
    pub category_id: Option<EntityId>,
    pub topic_id: Option<EntityId>,
    pub visual_style: Option<String>,
}

impl GenerationSelection {
    /// Validate that all four selections are present.
    ///
    /// The error message names every missing selection so the operator can
    /// fix the form in one pass.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut missing = Vec::new();
        if self.client_id.is_none() {
            missing.push("client");
        }
        if self.category_id.is_none() {
            missing.push("category");
        }
        if self.topic_id.is_none() {
            missing.push("topic");
        }
        if self.visual_style.is_none() {
            missing.push("visual style");
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation(format!(
                "Select all options before generating. Missing: {}",
                missing.join(", ")
            )))
        }
    }
}

/* --------------------------------------------------------------------------
   Wire body
   -------------------------------------------------------------------------- */

/// Wire body for `POST /posts/create`.
///
/// `custom_prompt` and `reference_image` are omitted from the JSON
/// entirely when absent; the backend distinguishes a missing key from an
/// empty value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationRequest {
    pub client_id: EntityId,
    pub category_id: EntityId,
    pub topics: Vec<EntityId>,
    pub number_of_posts: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_prompt: Option<String>,
    pub visual_style: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_image: Option<Vec<String>>,
}

/// Build the generation body from validated selections.
///
/// A blank `custom_prompt` is treated as absent. `reference_image` becomes
/// a single-element array only when an upload produced a URL.
pub fn build_request(
    selection: &GenerationSelection,
    custom_prompt: &str,
    reference_image_url: Option<String>,
) -> Result<GenerationRequest, CoreError> {
    selection.validate()?;

    let (Some(client_id), Some(category_id), Some(topic_id), Some(visual_style)) = (
        selection.client_id.as_deref(),
        selection.category_id.as_deref(),
        selection.topic_id.as_deref(),
        selection.visual_style.as_deref(),
    ) else {
        // validate() already rejected incomplete selections.
        return Err(CoreError::Validation("Incomplete selection".to_string()));
    };

    let prompt = custom_prompt.trim();

    Ok(GenerationRequest {
        client_id: client_id.to_string(),
        category_id: category_id.to_string(),
        topics: vec![topic_id.to_string()],
        number_of_posts: POSTS_PER_REQUEST,
        custom_prompt: (!prompt.is_empty()).then(|| prompt.to_string()),
        visual_style: visual_style.to_string(),
        reference_image: reference_image_url.map(|url| vec![url]),
    })
}

/* --------------------------------------------------------------------------
   Tests
   -------------------------------------------------------------------------- */
