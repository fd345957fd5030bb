use derive_more::{AsRef, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};

/// Caller-facing name of a menu entry. The geometry never looks inside it.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct EntryLabel(String);

crate::impl_string_newtype!(EntryLabel);

impl From<&str> for EntryLabel {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
