//! Typed HTTP client for the content-generation backend.
//!
//! The backend is an opaque REST service that owns all persistence and
//! business logic; this crate is the one place the console talks to it.
//! Every operation goes through [`client::ContentApi`], which injects the
//! fixed headers the deployment requires and classifies every response
//! into success or [`error::BackendError`] before decoding, so a non-2xx
//! status is never treated as success.

pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::ContentApi;
pub use config::BackendConfig;
pub use error::BackendError;
