//! Domain layer - Entries, lookup policies and rendering

pub mod entry;
pub mod lookup;
pub mod render;

pub use entry::{validate_title, Entry};
pub use lookup::{Lookup, SearchResult};
pub use render::render;
