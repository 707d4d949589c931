//! Search use case

use crate::domain::{Lookup, SearchResult};
use crate::error::Result;
use crate::infrastructure::EntryStore;

/// Service running title searches
pub struct SearchService<S> {
    lookup: Lookup<S>,
}

impl<S: EntryStore> SearchService<S> {
    pub fn new(store: S) -> Self {
        SearchService {
            lookup: Lookup::new(store),
        }
    }

    pub fn execute(&self, query: &str) -> Result<SearchResult> {
        log::debug!("searching for {:?}", query);
        self.lookup.search(query)
    }
}
