//! Show entry use case

use crate::domain::{Entry, Lookup};
use crate::error::{EncycloError, Result};
use crate::infrastructure::EntryStore;

/// Service resolving a title to its entry
pub struct ShowEntryService<S> {
    lookup: Lookup<S>,
}

impl<S: EntryStore> ShowEntryService<S> {
    pub fn new(store: S) -> Self {
        ShowEntryService {
            lookup: Lookup::new(store),
        }
    }

    /// Fetch the entry titled exactly `title`
    pub fn execute(&self, title: &str) -> Result<Entry> {
        match self.lookup.resolve_exact(title)? {
            Some(body) => Ok(Entry::new(title, body)),
            None => Err(EncycloError::EntryNotFound(title.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::MemoryStore;

    #[test]
    fn test_show_existing_entry() {
        let store = MemoryStore::new();
        store.put("CSS", "# CSS").unwrap();

        let service = ShowEntryService::new(store);
        assert_eq!(service.execute("CSS").unwrap(), Entry::new("CSS", "# CSS"));
    }

    #[test]
    fn test_show_missing_entry() {
        let service = ShowEntryService::new(MemoryStore::new());
        match service.execute("css") {
            Err(EncycloError::EntryNotFound(title)) => assert_eq!(title, "css"),
            other => panic!("Expected EntryNotFound, got {:?}", other),
        }
    }
}
