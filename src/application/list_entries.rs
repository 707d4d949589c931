//! List entries use case

use crate::error::Result;
use crate::infrastructure::EntryStore;

/// All entry titles in store order.
pub fn list_entries<S: EntryStore>(store: &S) -> Result<Vec<String>> {
    store.list()
}
