//! Wire codec for the backend's stringly-typed finalized flag.
//!
//! The backend transmits post approval state as the literal strings
//! `"True"` / `"False"`, not a JSON boolean. [`Finalized`] decodes that
//! spelling to a real boolean immediately on receipt and re-encodes it
//! only when serializing back, so the string form never leaks past the
//! serde boundary.

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Wire spelling for a finalized post.
const WIRE_TRUE: &str = "True";
/// Wire spelling for a post that is still editable.
const WIRE_FALSE: &str = "False";

/// Approval state of a generated post.
///
/// Once finalized, a post is locked: caption edits, regeneration, and
/// repeat finalization are all rejected in every view that renders it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Finalized(bool);

impl Finalized {
    /// Still editable.
    pub const NO: Finalized = Finalized(false);
    /// Approved and locked.
    pub const YES: Finalized = Finalized(true);

    /// Whether the post has been approved and locked for further edits.
    pub fn is_final(self) -> bool {
        self.0
    }
}

impl From<bool> for Finalized {
    fn from(value: bool) -> Self {
        Finalized(value)
    }
}

impl Serialize for Finalized {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(if self.0 { WIRE_TRUE } else { WIRE_FALSE })
    }
}

impl<'de> Deserialize<'de> for Finalized {
    /// Exactly `"True"` means finalized; any other string is editable.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Finalized(raw == WIRE_TRUE))
    }
}

/* --------------------------------------------------------------------------
   Tests
   -------------------------------------------------------------------------- */
