use postforge_backend::BackendError;
use postforge_core::error::CoreError;

/// Console-level error type for view-controller operations.
///
/// Wraps [`CoreError`] for local validation failures and [`BackendError`]
/// for anything the REST layer reports. Failures are always scoped to the
/// single user action that triggered them; nothing here is fatal to the
/// process.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// A local validation or lookup failure from `postforge_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A transport or API failure from the backend client.
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// The view was torn down while the request was in flight.
    #[error("Operation cancelled: view torn down")]
    Cancelled,

    /// A generation request is already in flight for this workbench.
    #[error("A generation request is already in flight")]
    Busy,
}

/// Convenience alias for controller return values.
pub type ConsoleResult<T> = Result<T, ConsoleError>;
