//! Title resolution, substring search and random pick over an entry store

use crate::domain::Entry;
use crate::error::{EncycloError, Result};
use crate::infrastructure::EntryStore;
use rand::seq::SliceRandom;
use rand::Rng;

/// Outcome of [`Lookup::search`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    /// A stored title is byte-identical to the query
    ExactHit(Entry),
    /// No exact match; every title containing the query, in store order
    Candidates(Vec<String>),
    /// Neither an exact nor a substring match
    NoMatch,
}

/// Read-side policies over an [`EntryStore`].
///
/// Holds no state of its own between calls.
#[derive(Debug, Clone)]
pub struct Lookup<S> {
    store: S,
}

impl<S: EntryStore> Lookup<S> {
    pub fn new(store: S) -> Self {
        Lookup { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Body of the entry titled exactly `title`, `None` when absent.
    pub fn resolve_exact(&self, title: &str) -> Result<Option<String>> {
        self.store.get(title)
    }

    /// Exact title match first, then case-sensitive substring candidates.
    ///
    /// The empty query is not special: it is a substring of every title.
    pub fn search(&self, query: &str) -> Result<SearchResult> {
        let titles = self.store.list()?;

        if titles.iter().any(|title| title == query) {
            if let Some(body) = self.store.get(query)? {
                return Ok(SearchResult::ExactHit(Entry::new(query, body)));
            }
            log::debug!("exact hit '{}' vanished before read", query);
        }

        let candidates: Vec<String> = titles
            .into_iter()
            .filter(|title| title.contains(query))
            .collect();

        if candidates.is_empty() {
            Ok(SearchResult::NoMatch)
        } else {
            Ok(SearchResult::Candidates(candidates))
        }
    }

    /// Pick one entry uniformly at random from the current listing.
    pub fn random_entry<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Entry> {
        let titles = self.store.list()?;
        let title = titles.choose(rng).ok_or(EncycloError::EmptyStore)?;

        match self.store.get(title)? {
            Some(body) => Ok(Entry::new(title.as_str(), body)),
            None => Err(EncycloError::EntryNotFound(title.clone())),
        }
    }
}
