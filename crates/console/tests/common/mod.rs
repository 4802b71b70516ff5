//! Shared test fixtures: an in-memory fake of the content backend.
//!
//! [`FakeBackend`] implements the [`ContentBackend`] seam over plain
//! vectors, logs every operation it receives, and can be told to fail or
//! hang specific operations, enough to exercise every controller flow
//! without a network.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::broadcast::error::TryRecvError;
use tokio::sync::broadcast::Receiver;

use postforge_backend::models::{Category, ClientRecord, Post, Topic};
use postforge_backend::BackendError;
use postforge_console::notify::Notification;
use postforge_console::seam::ContentBackend;
use postforge_core::finalized::Finalized;
use postforge_core::generation::GenerationRequest;
use postforge_core::intake::{ClientIntake, ClientPayload};
use postforge_core::types::EntityId;

/// Mutable server-side state of the fake.
#[derive(Default)]
pub struct FakeState {
    pub clients: Vec<ClientRecord>,
    pub categories: Vec<Category>,
    pub topics: Vec<Topic>,
    pub posts: Vec<Post>,
    /// Posts the next generation call returns (and saves).
    pub next_generation: Vec<Post>,
    /// URL returned by image uploads.
    pub upload_url: String,
    /// Operations forced to fail with an injected 500.
    pub fail: HashSet<&'static str>,
    /// Operations that never resolve (cancellation tests).
    pub hang: HashSet<&'static str>,
    /// Chronological log of operations that reached the backend.
    pub calls: Vec<&'static str>,
    /// Body of the most recent generation request.
    pub last_generation: Option<GenerationRequest>,
    counter: u32,
}

/// In-memory stand-in for the content backend.
pub struct FakeBackend {
    pub state: Mutex<FakeState>,
}

impl FakeBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(FakeState {
                upload_url: "https://cdn.example/uploads/ref.png".to_string(),
                ..FakeState::default()
            }),
        })
    }

    /// Force `op` to fail with an injected 500.
    pub fn fail_op(&self, op: &'static str) {
        self.state.lock().unwrap().fail.insert(op);
    }

    /// Make `op` hang forever.
    pub fn hang_op(&self, op: &'static str) {
        self.state.lock().unwrap().hang.insert(op);
    }

    /// Operations that reached the backend, in order.
    pub fn calls(&self) -> Vec<&'static str> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Record the call, then apply any configured failure or hang.
    async fn enter(&self, op: &'static str) -> Result<(), BackendError> {
        let hang = {
            let mut state = self.state.lock().unwrap();
            state.calls.push(op);
            if state.fail.contains(op) {
                return Err(BackendError::Api {
                    status: 500,
                    body: "injected failure".to_string(),
                });
            }
            state.hang.contains(op)
        };
        if hang {
            std::future::pending::<()>().await;
        }
        Ok(())
    }

    fn next_id(&self, prefix: &str) -> String {
        let mut state = self.state.lock().unwrap();
        state.counter += 1;
        format!("{prefix}-{:04}", state.counter)
    }
}

#[async_trait]
impl ContentBackend for FakeBackend {
    async fn list_clients(&self) -> Result<Vec<ClientRecord>, BackendError> {
        self.enter("list_clients").await?;
        Ok(self.state.lock().unwrap().clients.clone())
    }

    async fn create_client(&self, payload: &ClientPayload) -> Result<EntityId, BackendError> {
        self.enter("create_client").await?;
        let id = self.next_id("CLT-TEST");
        let mut state = self.state.lock().unwrap();
        state.clients.push(ClientRecord {
            id: id.clone(),
            name: payload.client_name.clone(),
            focus: payload.focus.clone(),
            services: payload.services.clone(),
            business_description: payload.business_description.clone(),
            contact_info: payload.contact_info.clone(),
            website: payload.website.clone(),
            number: payload.number.clone(),
            mail: payload.mail.clone(),
        });
        Ok(id)
    }

    async fn remove_client(&self, client_id: &str) -> Result<(), BackendError> {
        self.enter("remove_client").await?;
        let mut state = self.state.lock().unwrap();
        state.clients.retain(|client| client.id != client_id);
        Ok(())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, BackendError> {
        self.enter("list_categories").await?;
        Ok(self.state.lock().unwrap().categories.clone())
    }

    async fn create_category(&self, category_name: &str) -> Result<(), BackendError> {
        self.enter("create_category").await?;
        let id = self.next_id("CAT");
        self.state.lock().unwrap().categories.push(Category {
            category_id: id,
            category_name: category_name.to_string(),
        });
        Ok(())
    }

    async fn list_topics(&self) -> Result<Vec<Topic>, BackendError> {
        self.enter("list_topics").await?;
        Ok(self.state.lock().unwrap().topics.clone())
    }

    async fn create_topic(
        &self,
        category_id: &str,
        title: &str,
        description: &str,
    ) -> Result<(), BackendError> {
        self.enter("create_topic").await?;
        let id = self.next_id("TOP");
        self.state.lock().unwrap().topics.push(Topic {
            topic_id: id,
            category_id: category_id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        });
        Ok(())
    }

    async fn remove_topic(&self, topic_id: &str) -> Result<(), BackendError> {
        self.enter("remove_topic").await?;
        let mut state = self.state.lock().unwrap();
        state.topics.retain(|topic| topic.topic_id != topic_id);
        Ok(())
    }

    async fn list_posts(&self) -> Result<Vec<Post>, BackendError> {
        self.enter("list_posts").await?;
        Ok(self.state.lock().unwrap().posts.clone())
    }

    async fn generate_posts(
        &self,
        request: &GenerationRequest,
    ) -> Result<Vec<Post>, BackendError> {
        self.enter("generate_posts").await?;
        let mut state = self.state.lock().unwrap();
        state.last_generation = Some(request.clone());
        let generated = state.next_generation.clone();
        state.posts.extend(generated.iter().cloned());
        Ok(generated)
    }

    async fn finalize_posts(
        &self,
        _client_id: &str,
        post_ids: &[EntityId],
    ) -> Result<(), BackendError> {
        self.enter("finalize_posts").await?;
        let mut state = self.state.lock().unwrap();
        for post in state.posts.iter_mut() {
            if post_ids.contains(&post.post_id) {
                post.finalized = Finalized::YES;
            }
        }
        Ok(())
    }

    async fn remove_post(&self, post_id: &str) -> Result<(), BackendError> {
        self.enter("remove_post").await?;
        let mut state = self.state.lock().unwrap();
        state.posts.retain(|post| post.post_id != post_id);
        Ok(())
    }

    async fn upload_reference_image(
        &self,
        _file_name: &str,
        _bytes: Vec<u8>,
        _client_id: &str,
    ) -> Result<String, BackendError> {
        self.enter("upload_reference_image").await?;
        Ok(self.state.lock().unwrap().upload_url.clone())
    }
}

/* --------------------------------------------------------------------------
   Fixtures
   -------------------------------------------------------------------------- */

pub fn client(id: &str, name: &str) -> ClientRecord {
    ClientRecord {
        id: id.to_string(),
        name: name.to_string(),
        focus: "Cosmetic Dentistry".to_string(),
        services: "Teeth Whitening, Veneers, Smile Design".to_string(),
        business_description: "A luxury dental clinic.".to_string(),
        contact_info: "Downtown, LA".to_string(),
        website: "https://example.com".to_string(),
        number: "+1 (555) 123-4567".to_string(),
        mail: "care@example.com".to_string(),
    }
}

pub fn category(id: &str, name: &str) -> Category {
    Category {
        category_id: id.to_string(),
        category_name: name.to_string(),
    }
}

pub fn topic(id: &str, category_id: &str, title: &str) -> Topic {
    Topic {
        topic_id: id.to_string(),
        category_id: category_id.to_string(),
        title: title.to_string(),
        description: "A content topic.".to_string(),
    }
}

pub fn post(id: &str, caption: &str, hashtags: &str) -> Post {
    Post {
        post_id: id.to_string(),
        client_id: "CLT-1".to_string(),
        category_id: "CAT-1".to_string(),
        topics: vec!["TOP-1".to_string()],
        caption: caption.to_string(),
        hashtags: hashtags.to_string(),
        image_url: format!("https://cdn.example/{id}.png"),
        visual_style: Some("minimal".to_string()),
        reference_image: None,
        finalized: Finalized::NO,
    }
}

/// A fully populated intake form for submission tests.
pub fn filled_intake() -> ClientIntake {
    ClientIntake {
        client_name: "Zuhd Dental".into(),
        focus: "Cosmetic Dentistry".into(),
        services: "Teeth Whitening, Veneers, Smile Design".into(),
        business_description: "A luxury dental clinic.".into(),
        audience: "High-income professionals".into(),
        writing_instructions: "Use a luxury and clean tone".into(),
        tagline: "@zuhddental".into(),
        call_to_actions: "Book Now, Get a Consultation".into(),
        caption_ending: "Experience refined dental artistry.".into(),
        writing_samples: "https://example.com/sample1".into(),
        contact_info: "Zuhd Dental Care, Downtown, LA".into(),
        website: "https://zuhddental.com".into(),
        number: "+1 (872) 258-9898".into(),
        mail: "care@zuhddental.com".into(),
        brand_colors: "#E9E6DF, #7DA89A".into(),
        typography: "Sans-serif".into(),
        design_style: "Luxury, Minimalist".into(),
        image_mood: "Bright, airy".into(),
        dos_donts: "Avoid clutter".into(),
        reference_links: "https://example.com/reference".into(),
        asset_notes: "Use natural textures".into(),
        format_preferences: "1:1 square".into(),
        design_checkpoints: "Spacing, shadows".into(),
        logo_urls: "https://imgbb.com/logo.png".into(),
    }
}

/// Drain all buffered notifications from a subscriber.
pub fn drain(rx: &mut Receiver<Notification>) -> Vec<Notification> {
    let mut drained = Vec::new();
    loop {
        match rx.try_recv() {
            Ok(notification) => drained.push(notification),
            Err(TryRecvError::Empty | TryRecvError::Closed) => break,
            Err(TryRecvError::Lagged(_)) => continue,
        }
    }
    drained
}
