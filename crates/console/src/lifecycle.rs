//! View-lifecycle cancellation.
//!
//! Every controller owns a `CancellationToken`; tearing the view down
//! cancels it, and every network call races the token so pending requests
//! resolve deterministically instead of dangling past the view's life.

use std::future::Future;

use tokio_util::sync::CancellationToken;

use crate::error::{ConsoleError, ConsoleResult};

/// Run `fut` unless `token` is (or becomes) cancelled.
///
/// A cancelled token yields [`ConsoleError::Cancelled`]; the caller's
/// state is left exactly as it was.
pub(crate) async fn run_or_cancelled<T>(
    token: &CancellationToken,
    fut: impl Future<Output = T>,
) -> ConsoleResult<T> {
    match token.run_until_cancelled(fut).await {
        Some(value) => Ok(value),
        None => Err(ConsoleError::Cancelled),
    }
}
