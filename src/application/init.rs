//! Initialize wiki use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemStore, WikiRepository};
use std::fs;
use std::path::Path;

/// Initialize a new wiki at the specified path.
pub fn init(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemStore::new(path.to_path_buf());
    repo.initialize()?;
    repo.save_config(&Config::new())?;

    log::info!("initialized wiki at {}", path.display());
    println!("Initialized encyclo wiki at {}", path.display());

    Ok(())
}
