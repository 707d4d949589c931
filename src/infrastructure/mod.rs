//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod editor;
pub mod naming;
pub mod repository;
pub mod store;

pub use config::Config;
pub use editor::EditorSession;
pub use repository::{FileSystemStore, WikiRepository};
pub use store::{EntryStore, MemoryStore};
