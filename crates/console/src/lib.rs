//! View-state controllers for the postforge operator console.
//!
//! Each list-backed view owns its collection as in-memory state seeded by
//! a fetch, applies backend-confirmed mutations as minimal local patches,
//! and reports every outcome through the [`notify::NotificationCenter`].
//! Controllers talk to the backend through the [`seam::ContentBackend`]
//! trait so flows can be exercised against an in-memory fake in tests.

pub mod catalog;
pub mod directory;
pub mod error;
mod lifecycle;
pub mod notify;
pub mod seam;
pub mod workbench;

pub use error::{ConsoleError, ConsoleResult};
