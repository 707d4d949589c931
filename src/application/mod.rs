//! Application layer - Use cases and orchestration

pub mod init;
pub mod list_entries;
pub mod manage_config;
pub mod random_entry;
pub mod search;
pub mod show_entry;
pub mod write_entry;

pub use list_entries::list_entries;
pub use manage_config::ConfigService;
pub use random_entry::RandomEntryService;
pub use search::SearchService;
pub use show_entry::ShowEntryService;
pub use write_entry::{BodySource, WriteEntryService};
