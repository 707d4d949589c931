//! Create and edit entry use cases

use crate::error::{EncycloError, Result};
use crate::infrastructure::{EditorSession, EntryStore, FileSystemStore, WikiRepository};
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Where the new body of an entry comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodySource {
    Text(String),
    File(PathBuf),
    Stdin,
    /// Edit the entry file in the configured editor
    Editor,
}

impl BodySource {
    /// Read the body for every source except [`BodySource::Editor`]
    fn read(&self) -> Result<Option<String>> {
        match self {
            BodySource::Text(text) => Ok(Some(text.clone())),
            BodySource::File(path) => fs::read_to_string(path).map(Some).map_err(|e| {
                EncycloError::Config(format!("Failed to read {}: {}", path.display(), e))
            }),
            BodySource::Stdin => {
                let mut body = String::new();
                std::io::stdin().read_to_string(&mut body)?;
                Ok(Some(body))
            }
            BodySource::Editor => Ok(None),
        }
    }
}

/// Service for creating and overwriting entries
pub struct WriteEntryService {
    store: FileSystemStore,
}

impl WriteEntryService {
    pub fn new(store: FileSystemStore) -> Self {
        WriteEntryService { store }
    }

    /// Create a new entry; refuses titles that already exist.
    ///
    /// With [`BodySource::Editor`] nothing is stored unless the editor
    /// exits successfully.
    pub fn create(&self, title: &str, source: &BodySource) -> Result<()> {
        if title.is_empty() {
            return Err(EncycloError::InvalidTitle);
        }
        if self.store.exists(title) {
            return Err(EncycloError::EntryExists(title.to_string()));
        }

        let body = match source.read()? {
            Some(body) => body,
            None => {
                let body = self.edit_draft("")?;
                if self.store.exists(title) {
                    return Err(EncycloError::EntryExists(title.to_string()));
                }
                body
            }
        };
        self.store.put(title, &body)
    }

    /// Replace the body of an entry, creating it when absent.
    ///
    /// Editing in the editor only works on an existing entry.
    pub fn edit(&self, title: &str, source: &BodySource) -> Result<()> {
        let body = match source.read()? {
            Some(body) => body,
            None => {
                let current = self
                    .store
                    .get(title)?
                    .ok_or_else(|| EncycloError::EntryNotFound(title.to_string()))?;
                self.edit_draft(&current)?
            }
        };
        self.store.put(title, &body)
    }

    /// Let the user edit `initial` in a scratch file and return the result
    fn edit_draft(&self, initial: &str) -> Result<String> {
        let config = self.store.load_config()?;
        let editor = EditorSession::new(config.get_editor());

        let draft = self.store.draft_path();
        fs::write(&draft, initial)?;

        let edited = editor
            .edit(&draft)
            .and_then(|()| fs::read_to_string(&draft).map_err(EncycloError::from));
        if let Err(e) = fs::remove_file(&draft) {
            log::debug!("could not remove draft {}: {}", draft.display(), e);
        }
        edited
    }
}
