//! Integration tests for the client directory flows.

mod common;

use std::sync::Arc;

use assert_matches::assert_matches;
use tokio::sync::broadcast::Receiver;

use common::{client, drain, filled_intake, FakeBackend};
use postforge_console::directory::ClientDirectory;
use postforge_console::notify::{Notification, NotificationCenter, Severity};
use postforge_console::ConsoleError;
use postforge_core::error::CoreError;
use postforge_core::intake::ClientIntake;

fn setup(backend: &Arc<FakeBackend>) -> (ClientDirectory, Receiver<Notification>) {
    let notifier = Arc::new(NotificationCenter::default());
    let rx = notifier.subscribe();
    (ClientDirectory::new(backend.clone(), notifier), rx)
}

// ---------------------------------------------------------------------------
// Fetch-on-mount
// ---------------------------------------------------------------------------

#[tokio::test]
async fn refresh_populates_clients() {
    let backend = FakeBackend::new();
    backend.state.lock().unwrap().clients = vec![client("CLT-1", "Zuhd Dental")];
    let (mut directory, _rx) = setup(&backend);

    directory.refresh().await.unwrap();

    assert_eq!(directory.clients().len(), 1);
    assert_eq!(directory.clients()[0].name, "Zuhd Dental");
}

#[tokio::test]
async fn refresh_twice_without_mutation_is_idempotent() {
    let backend = FakeBackend::new();
    backend.state.lock().unwrap().clients =
        vec![client("CLT-1", "Zuhd Dental"), client("CLT-2", "Sample Business")];
    let (mut directory, _rx) = setup(&backend);

    directory.refresh().await.unwrap();
    let first = directory.clients().to_vec();
    directory.refresh().await.unwrap();

    // Order and contents are identical across re-fetches.
    assert_eq!(directory.clients(), first.as_slice());
}

#[tokio::test]
async fn refresh_failure_keeps_previous_list_and_notifies() {
    let backend = FakeBackend::new();
    backend.state.lock().unwrap().clients = vec![client("CLT-1", "Zuhd Dental")];
    let (mut directory, mut rx) = setup(&backend);
    directory.refresh().await.unwrap();

    backend.fail_op("list_clients");
    drain(&mut rx);

    let err = directory.refresh().await.unwrap_err();
    assert_matches!(err, ConsoleError::Backend(_));
    assert_eq!(directory.clients().len(), 1);

    let notifications = drain(&mut rx);
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].severity, Severity::Error);
    assert_eq!(notifications[0].title, "Load Failed");
}

// ---------------------------------------------------------------------------
// Intake submission
// ---------------------------------------------------------------------------

#[tokio::test]
async fn submit_intake_appends_under_server_id() {
    let backend = FakeBackend::new();
    let (mut directory, mut rx) = setup(&backend);

    let client_id = directory.submit_intake(&filled_intake()).await.unwrap();

    assert!(client_id.starts_with("CLT-TEST"));
    assert_eq!(directory.clients().len(), 1);
    assert_eq!(directory.clients()[0].id, client_id);
    // The free-text services string is displayed exactly as typed.
    assert_eq!(
        directory.clients()[0].services,
        "Teeth Whitening, Veneers, Smile Design"
    );

    let notifications = drain(&mut rx);
    assert_eq!(notifications[0].severity, Severity::Success);
    assert_eq!(notifications[0].title, "Client Created");
}

#[tokio::test]
async fn submit_intake_validation_blocks_request() {
    let backend = FakeBackend::new();
    let (mut directory, mut rx) = setup(&backend);

    let err = directory
        .submit_intake(&ClientIntake::default())
        .await
        .unwrap_err();

    assert_matches!(err, ConsoleError::Core(CoreError::Validation(_)));
    assert!(backend.calls().is_empty(), "no request may be issued");

    let notifications = drain(&mut rx);
    assert_eq!(notifications[0].title, "Missing Information");
}

#[tokio::test]
async fn submit_intake_failure_leaves_list_untouched() {
    let backend = FakeBackend::new();
    backend.fail_op("create_client");
    let (mut directory, mut rx) = setup(&backend);

    let err = directory.submit_intake(&filled_intake()).await.unwrap_err();

    assert_matches!(err, ConsoleError::Backend(_));
    assert!(directory.clients().is_empty());

    let notifications = drain(&mut rx);
    assert_eq!(notifications[0].severity, Severity::Error);
    assert_eq!(notifications[0].title, "Creation Failed");
}

// ---------------------------------------------------------------------------
// Confirmed deletion
// ---------------------------------------------------------------------------

#[tokio::test]
async fn cancel_delete_clears_target_and_nothing_else() {
    let backend = FakeBackend::new();
    backend.state.lock().unwrap().clients = vec![client("CLT-1", "Zuhd Dental")];
    let (mut directory, _rx) = setup(&backend);
    directory.refresh().await.unwrap();

    directory.request_delete("CLT-1", "Zuhd Dental");
    assert!(directory.pending_delete().is_some());

    directory.cancel_delete();

    assert!(directory.pending_delete().is_none());
    assert_eq!(directory.clients().len(), 1);
    assert_eq!(backend.state.lock().unwrap().clients.len(), 1);
    assert!(!backend.calls().contains(&"remove_client"));
}

#[tokio::test]
async fn confirm_delete_removes_and_notifies() {
    let backend = FakeBackend::new();
    backend.state.lock().unwrap().clients =
        vec![client("CLT-1", "Zuhd Dental"), client("CLT-2", "Sample Business")];
    let (mut directory, mut rx) = setup(&backend);
    directory.refresh().await.unwrap();

    directory.request_delete("CLT-1", "Zuhd Dental");
    directory.confirm_delete().await.unwrap();

    assert!(directory.pending_delete().is_none());
    assert_eq!(directory.clients().len(), 1);
    assert_eq!(directory.clients()[0].id, "CLT-2");

    let notifications = drain(&mut rx);
    assert_eq!(notifications[0].severity, Severity::Success);
    assert_eq!(notifications[0].title, "Client Deleted");
}

#[tokio::test]
async fn confirm_delete_failure_keeps_list_but_clears_target() {
    let backend = FakeBackend::new();
    backend.state.lock().unwrap().clients = vec![client("CLT-1", "Zuhd Dental")];
    backend.fail_op("remove_client");
    let (mut directory, mut rx) = setup(&backend);
    directory.refresh().await.unwrap();
    drain(&mut rx);

    directory.request_delete("CLT-1", "Zuhd Dental");
    let err = directory.confirm_delete().await.unwrap_err();

    assert_matches!(err, ConsoleError::Backend(_));
    assert_eq!(directory.clients().len(), 1);
    // The target is cleared on failure as well.
    assert!(directory.pending_delete().is_none());

    let notifications = drain(&mut rx);
    assert_eq!(notifications[0].title, "Deletion Failed");
}

#[tokio::test]
async fn confirm_delete_without_target_is_rejected() {
    let backend = FakeBackend::new();
    let (mut directory, _rx) = setup(&backend);

    let err = directory.confirm_delete().await.unwrap_err();

    assert_matches!(err, ConsoleError::Core(CoreError::Validation(_)));
    assert!(backend.calls().is_empty());
}

// ---------------------------------------------------------------------------
// View teardown
// ---------------------------------------------------------------------------

#[tokio::test]
async fn shutdown_cancels_pending_refresh() {
    let backend = FakeBackend::new();
    backend.state.lock().unwrap().clients = vec![client("CLT-1", "Zuhd Dental")];
    backend.hang_op("list_clients");
    let (mut directory, _rx) = setup(&backend);

    directory.shutdown();
    let err = directory.refresh().await.unwrap_err();

    assert_matches!(err, ConsoleError::Cancelled);
    assert!(directory.clients().is_empty(), "state stays untouched");
}
