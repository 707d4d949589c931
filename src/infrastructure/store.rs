//! Title-addressed entry storage

use crate::domain::validate_title;
use crate::error::Result;
use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Durable mapping from entry title to markdown body.
///
/// Absence is a normal outcome: `get` returns `Ok(None)` for unknown
/// titles. Errors are reserved for an unusable storage medium and for
/// writing an empty title.
pub trait EntryStore {
    /// Every stored title, in an order that is stable while no writes happen
    fn list(&self) -> Result<Vec<String>>;

    /// Current body of the entry titled exactly `title`
    fn get(&self, title: &str) -> Result<Option<String>>;

    /// True iff `get(title)` would return a body
    fn exists(&self, title: &str) -> bool;

    /// Create the entry or fully replace its body
    fn put(&self, title: &str, body: &str) -> Result<()>;
}

impl<S: EntryStore + ?Sized> EntryStore for &S {
    fn list(&self) -> Result<Vec<String>> {
        (**self).list()
    }

    fn get(&self, title: &str) -> Result<Option<String>> {
        (**self).get(title)
    }

    fn exists(&self, title: &str) -> bool {
        (**self).exists(title)
    }

    fn put(&self, title: &str, body: &str) -> Result<()> {
        (**self).put(title, body)
    }
}

impl<S: EntryStore + ?Sized> EntryStore for Arc<S> {
    fn list(&self) -> Result<Vec<String>> {
        (**self).list()
    }

    fn get(&self, title: &str) -> Result<Option<String>> {
        (**self).get(title)
    }

    fn exists(&self, title: &str) -> bool {
        (**self).exists(title)
    }

    fn put(&self, title: &str, body: &str) -> Result<()> {
        (**self).put(title, body)
    }
}

/// In-process store; lists titles in byte order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EntryStore for MemoryStore {
    fn list(&self) -> Result<Vec<String>> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.keys().cloned().collect())
    }

    fn get(&self, title: &str) -> Result<Option<String>> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(title).cloned())
    }

    fn exists(&self, title: &str) -> bool {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.contains_key(title)
    }

    fn put(&self, title: &str, body: &str) -> Result<()> {
        validate_title(title)?;
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert(title.to_string(), body.to_string());
        Ok(())
    }
}
