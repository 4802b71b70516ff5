//! Pure domain logic for the postforge console.
//!
//! Everything here is I/O-free: payload transforms, selection validation,
//! the wire codec for the backend's stringly-typed finalized flag, and the
//! keyed-collection reducer every list-backed view shares. The HTTP client
//! lives in `postforge-backend`; view state lives in `postforge-console`.

pub mod caption;
pub mod collection;
pub mod error;
pub mod finalized;
pub mod generation;
pub mod intake;
pub mod style;
pub mod types;
