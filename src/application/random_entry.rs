//! Random entry use case

use crate::domain::{Entry, Lookup};
use crate::error::Result;
use crate::infrastructure::EntryStore;
use rand::Rng;

/// Service picking an entry at random
pub struct RandomEntryService<S> {
    lookup: Lookup<S>,
}

impl<S: EntryStore> RandomEntryService<S> {
    pub fn new(store: S) -> Self {
        RandomEntryService {
            lookup: Lookup::new(store),
        }
    }

    /// Pick using the thread-local generator
    pub fn execute(&self) -> Result<Entry> {
        self.execute_with(&mut rand::thread_rng())
    }

    pub fn execute_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Entry> {
        self.lookup.random_entry(rng)
    }
}
