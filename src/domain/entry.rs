//! Wiki entry value and title rules

use crate::error::{EncycloError, Result};

/// A titled wiki entry as handed out by the store.
///
/// Entries are always copies; mutating one never touches stored content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub title: String,
    pub body: String,
}

impl Entry {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Entry {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Check that a title may be written.
///
/// Titles are compared byte-for-byte everywhere, so the only rejected
/// title is the empty string.
pub fn validate_title(title: &str) -> Result<()> {
    if title.is_empty() {
        return Err(EncycloError::InvalidTitle);
    }
    Ok(())
}
