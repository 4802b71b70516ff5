//! Client directory view: list, intake submission, confirmed deletion.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use postforge_backend::models::ClientRecord;
use postforge_core::collection::{remove_by_key, upsert_by_key};
use postforge_core::error::CoreError;
use postforge_core::intake::ClientIntake;
use postforge_core::types::EntityId;

use crate::error::ConsoleResult;
use crate::lifecycle::run_or_cancelled;
use crate::notify::NotificationCenter;
use crate::seam::ContentBackend;

/// The client a pending deletion is aimed at.
///
/// Deleting a client cascades server-side, so the console names the
/// target in an explicit confirmation step before issuing anything.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingDelete {
    pub client_id: EntityId,
    pub client_name: String,
}

/// View controller for the client directory.
pub struct ClientDirectory {
    backend: Arc<dyn ContentBackend>,
    notifier: Arc<NotificationCenter>,
    cancel: CancellationToken,
    clients: Vec<ClientRecord>,
    pending_delete: Option<PendingDelete>,
}

impl ClientDirectory {
    pub fn new(backend: Arc<dyn ContentBackend>, notifier: Arc<NotificationCenter>) -> Self {
        Self {
            backend,
            notifier,
            cancel: CancellationToken::new(),
            clients: Vec::new(),
            pending_delete: None,
        }
    }

    /// The current in-memory client list.
    pub fn clients(&self) -> &[ClientRecord] {
        &self.clients
    }

    /// The client currently awaiting delete confirmation, if any.
    pub fn pending_delete(&self) -> Option<&PendingDelete> {
        self.pending_delete.as_ref()
    }

    /// Tear the view down, cancelling any in-flight request.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }

    /// Fetch the client list from the backend.
    ///
    /// On failure the list keeps its previous value.
    pub async fn refresh(&mut self) -> ConsoleResult<()> {
        let outcome = run_or_cancelled(&self.cancel, self.backend.list_clients()).await?;
        match outcome {
            Ok(clients) => {
                self.clients = clients;
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to fetch clients");
                self.notifier.error("Load Failed", "Could not load clients.");
                Err(err.into())
            }
        }
    }

    /// Submit the intake form: validate, assemble the nested payload, POST.
    ///
    /// On success the new record is appended locally under its
    /// server-assigned id. On failure the form is untouched: the operator
    /// keeps everything they typed.
    pub async fn submit_intake(&mut self, intake: &ClientIntake) -> ConsoleResult<EntityId> {
        let payload = match intake.to_payload() {
            Ok(payload) => payload,
            Err(err) => {
                self.notifier.error("Missing Information", err.to_string());
                return Err(err.into());
            }
        };

        let outcome = run_or_cancelled(&self.cancel, self.backend.create_client(&payload)).await?;
        match outcome {
            Ok(client_id) => {
                upsert_by_key(
                    &mut self.clients,
                    ClientRecord {
                        id: client_id.clone(),
                        name: payload.client_name.clone(),
                        focus: payload.focus,
                        // The free-text services string round-trips verbatim.
                        services: intake.services.clone(),
                        business_description: payload.business_description,
                        contact_info: payload.contact_info,
                        website: payload.website,
                        number: payload.number,
                        mail: payload.mail,
                    },
                );
                self.notifier.success(
                    "Client Created",
                    format!("\"{}\" has been added.", payload.client_name),
                );
                Ok(client_id)
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to create client");
                self.notifier
                    .error("Creation Failed", "Failed to create client. Please try again.");
                Err(err.into())
            }
        }
    }

    /// Open the delete confirmation for a client.
    pub fn request_delete(&mut self, client_id: impl Into<EntityId>, client_name: impl Into<String>) {
        self.pending_delete = Some(PendingDelete {
            client_id: client_id.into(),
            client_name: client_name.into(),
        });
    }

    /// Dismiss the confirmation. List and server state are untouched.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Confirm the pending deletion.
    ///
    /// Issues the cascade DELETE; on success the entry is removed from the
    /// local list. The confirmation target is cleared on success, failure,
    /// and cancellation alike.
    pub async fn confirm_delete(&mut self) -> ConsoleResult<()> {
        let Some(target) = self.pending_delete.take() else {
            let err = CoreError::Validation("No client is pending deletion".to_string());
            self.notifier.error("Nothing Selected", err.to_string());
            return Err(err.into());
        };

        let outcome =
            run_or_cancelled(&self.cancel, self.backend.remove_client(&target.client_id)).await?;
        match outcome {
            Ok(()) => {
                remove_by_key(&mut self.clients, &target.client_id);
                self.notifier.success(
                    "Client Deleted",
                    format!(
                        "\"{}\" and all associated data were removed.",
                        target.client_name
                    ),
                );
                Ok(())
            }
            Err(err) => {
                tracing::error!(client_id = %target.client_id, error = %err, "Failed to delete client");
                self.notifier
                    .error("Deletion Failed", "Failed to delete client. Please try again.");
                Err(err.into())
            }
        }
    }
}
