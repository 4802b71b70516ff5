//! Client intake form: flat field capture and wire-payload assembly.
//!
//! The console captures the multi-section business form as one flat
//! key-value struct, mutated field-by-field as the operator types. The
//! nested shape the backend expects is assembled exclusively at
//! submission time: comma-separated fields become trimmed arrays,
//! newline-separated fields become blank-line-filtered arrays, and the
//! design fields nest under a `design_guide` sub-object.

use serde::Serialize;
use validator::{Validate, ValidationErrors};

use crate::error::CoreError;

/* --------------------------------------------------------------------------
   List-field splitting
   -------------------------------------------------------------------------- */

/// Split a comma-separated field into trimmed, non-empty items.
///
/// Trailing commas and surrounding whitespace never produce empty
/// elements: `"A, B, C,"` yields `["A", "B", "C"]`.
pub fn split_comma_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split a newline-separated field into trimmed, non-empty lines.
pub fn split_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/* --------------------------------------------------------------------------
   Flat intake form
   -------------------------------------------------------------------------- */

/// Flat client-intake form, one field per console input.
///
/// Every field is required. Comma-separated list fields:
/// `call_to_actions`, `brand_colors`, `format_preferences`.
/// Newline-separated list fields: `writing_samples`, `reference_links`,
/// `logo_urls`. All others are forwarded as free text.
#[derive(Debug, Clone, Default, Validate)]
pub struct ClientIntake {
    #[validate(length(min = 1, message = "client_name is required"))]
    pub client_name: String,
    #[validate(length(min = 1, message = "focus is required"))]
    pub focus: String,
    #[validate(length(min = 1, message = "services is required"))]
    pub services: String,
    #[validate(length(min = 1, message = "business_description is required"))]
    pub business_description: String,
    #[validate(length(min = 1, message = "audience is required"))]
    pub audience: String,
    #[validate(length(min = 1, message = "writing_instructions is required"))]
    pub writing_instructions: String,
    #[validate(length(min = 1, message = "tagline is required"))]
    pub tagline: String,
    #[validate(length(min = 1, message = "call_to_actions is required"))]
    pub call_to_actions: String,
    #[validate(length(min = 1, message = "caption_ending is required"))]
    pub caption_ending: String,
    #[validate(length(min = 1, message = "writing_samples is required"))]
    pub writing_samples: String,
    #[validate(length(min = 1, message = "contact_info is required"))]
    pub contact_info: String,
    #[validate(length(min = 1, message = "website is required"))]
    pub website: String,
    #[validate(length(min = 1, message = "number is required"))]
    pub number: String,
    #[validate(length(min = 1, message = "mail is required"))]
    pub mail: String,
    #[validate(length(min = 1, message = "brand_colors is required"))]
    pub brand_colors: String,
    #[validate(length(min = 1, message = "typography is required"))]
    pub typography: String,
    #[validate(length(min = 1, message = "design_style is required"))]
    pub design_style: String,
    #[validate(length(min = 1, message = "image_mood is required"))]
    pub image_mood: String,
    #[validate(length(min = 1, message = "dos_donts is required"))]
    pub dos_donts: String,
    #[validate(length(min = 1, message = "reference_links is required"))]
    pub reference_links: String,
    #[validate(length(min = 1, message = "asset_notes is required"))]
    pub asset_notes: String,
    #[validate(length(min = 1, message = "format_preferences is required"))]
    pub format_preferences: String,
    #[validate(length(min = 1, message = "design_checkpoints is required"))]
    pub design_checkpoints: String,
    #[validate(length(min = 1, message = "logo_urls is required"))]
    pub logo_urls: String,
}

impl ClientIntake {
    /// Validate required fields and assemble the nested wire payload.
    ///
    /// No field is mutated on failure; the operator stays on the form
    /// with everything they typed intact.
    pub fn to_payload(&self) -> Result<ClientPayload, CoreError> {
        self.validate()
            .map_err(|errors| CoreError::Validation(validation_message(&errors)))?;

        Ok(ClientPayload {
            client_name: self.client_name.clone(),
            focus: self.focus.clone(),
            services: self.services.clone(),
            business_description: self.business_description.clone(),
            audience: self.audience.clone(),
            writing_instructions: self.writing_instructions.clone(),
            tagline: self.tagline.clone(),
            call_to_actions: split_comma_list(&self.call_to_actions),
            caption_ending: self.caption_ending.clone(),
            writing_samples: split_lines(&self.writing_samples),
            contact_info: self.contact_info.clone(),
            website: self.website.clone(),
            number: self.number.clone(),
            mail: self.mail.clone(),
            design_guide: DesignGuide {
                brand_colors: split_comma_list(&self.brand_colors),
                typography: self.typography.clone(),
                design_style: self.design_style.clone(),
                image_mood: self.image_mood.clone(),
                dos_donts: self.dos_donts.clone(),
                design_checkpoints: self.design_checkpoints.clone(),
            },
            reference_links: split_lines(&self.reference_links),
            asset_notes: self.asset_notes.clone(),
            format_preferences: split_comma_list(&self.format_preferences),
            logo_urls: split_lines(&self.logo_urls),
        })
    }
}

/// Flatten validator output into one deterministic message.
fn validation_message(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .values()
        .flat_map(|field_errors| field_errors.iter())
        .map(|error| match &error.message {
            Some(message) => message.to_string(),
            None => error.code.to_string(),
        })
        .collect();
    messages.sort();
    messages.join("; ")
}

/* --------------------------------------------------------------------------
   Wire payload
   -------------------------------------------------------------------------- */

/// Design-guide sub-object nested inside the client payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesignGuide {
    pub brand_colors: Vec<String>,
    pub typography: String,
    pub design_style: String,
    pub image_mood: String,
    pub dos_donts: String,
    pub design_checkpoints: String,
}

/// Nested wire payload for `POST /create`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientPayload {
    pub client_name: String,
    pub focus: String,
    pub services: String,
    pub business_description: String,
    pub audience: String,
    pub writing_instructions: String,
    pub tagline: String,
    pub call_to_actions: Vec<String>,
    pub caption_ending: String,
    pub writing_samples: Vec<String>,
    pub contact_info: String,
    pub website: String,
    pub number: String,
    pub mail: String,
    pub design_guide: DesignGuide,
    pub reference_links: Vec<String>,
    pub asset_notes: String,
    pub format_preferences: Vec<String>,
    pub logo_urls: Vec<String>,
}

/* --------------------------------------------------------------------------
   Tests
   -------------------------------------------------------------------------- */
