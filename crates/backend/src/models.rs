//! Wire models for the content backend's REST surface.
//!
//! All entities are externally owned: the backend is authoritative and
//! the console holds transient, re-fetchable copies. Identifiers are
//! server-assigned strings throughout.

use serde::{Deserialize, Serialize};

use postforge_core::collection::Keyed;
use postforge_core::finalized::Finalized;
use postforge_core::types::EntityId;

/// A business client, as returned by `GET /clients/all-clients`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientRecord {
    /// Server-assigned id in the form `CLT-<date>-<time>`.
    pub id: EntityId,
    pub name: String,
    pub focus: String,
    pub services: String,
    pub business_description: String,
    pub contact_info: String,
    pub website: String,
    pub number: String,
    pub mail: String,
}

/// A content category, as returned by `GET /get-all-categories`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub category_id: EntityId,
    pub category_name: String,
}

/// A content topic under a category, as returned by `GET /get-all-topics`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub topic_id: EntityId,
    pub category_id: EntityId,
    pub title: String,
    pub description: String,
}

/// A generated post, as returned by `POST /posts/create` and
/// `GET /posts/get-all-posts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub post_id: EntityId,
    pub client_id: EntityId,
    pub category_id: EntityId,
    pub topics: Vec<EntityId>,
    pub caption: String,
    pub hashtags: String,
    pub image_url: String,
    pub visual_style: Option<String>,
    /// Reference image URLs forwarded to generation, when any were given.
    #[serde(default)]
    pub reference_image: Option<Vec<String>>,
    /// `"True"` / `"False"` on the wire; a real boolean everywhere else.
    pub finalized: Finalized,
}

impl Keyed for ClientRecord {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Category {
    fn key(&self) -> &str {
        &self.category_id
    }
}

impl Keyed for Topic {
    fn key(&self) -> &str {
        &self.topic_id
    }
}

impl Keyed for Post {
    fn key(&self) -> &str {
        &self.post_id
    }
}

/* --------------------------------------------------------------------------
   Tests
   -------------------------------------------------------------------------- */
