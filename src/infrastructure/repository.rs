//! File system wiki repository

use crate::domain::validate_title;
use crate::error::{EncycloError, Result};
use crate::infrastructure::naming::{
    is_hashed_name, names_title, parse_title_header, plain_title, split_hashed_contents,
    title_header, EntryFileName,
};
use crate::infrastructure::{Config, EntryStore};
use std::collections::hash_map::DefaultHasher;
use std::fs::{self, File};
use std::hash::{Hash, Hasher};
use std::io::{self, BufRead, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

const WIKI_DIR: &str = ".encyclo";
const ENTRIES_DIR: &str = "entries";
const LOCK_SHARDS: usize = 64;

static TMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Abstract repository for wiki-level operations
pub trait WikiRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .encyclo/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .encyclo/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .encyclo directory exists
    fn is_initialized(&self) -> bool;

    /// Create .encyclo and entries directories
    fn initialize(&self) -> Result<()>;
}

/// Fixed set of write locks; a title always maps to the same shard
#[derive(Debug)]
struct TitleLocks {
    shards: Vec<Mutex<()>>,
}

impl Default for TitleLocks {
    fn default() -> Self {
        TitleLocks {
            shards: (0..LOCK_SHARDS).map(|_| Mutex::new(())).collect(),
        }
    }
}

impl TitleLocks {
    fn shard_for(&self, title: &str) -> &Mutex<()> {
        let mut hasher = DefaultHasher::new();
        title.hash(&mut hasher);
        &self.shards[(hasher.finish() % self.shards.len() as u64) as usize]
    }
}

/// Entry store keeping one markdown file per title under `<root>/entries`.
///
/// Clones share the same write locks.
#[derive(Debug, Clone)]
pub struct FileSystemStore {
    root: PathBuf,
    locks: Arc<TitleLocks>,
}

impl FileSystemStore {
    /// Create a store handle for the given root directory without touching disk
    pub fn new(root: PathBuf) -> Self {
        FileSystemStore {
            root,
            locks: Arc::default(),
        }
    }

    /// Create a store handle and make sure the entries directory exists
    pub fn open(root: PathBuf) -> Result<Self> {
        let store = Self::new(root);
        fs::create_dir_all(store.entries_dir())?;
        Ok(store)
    }

    /// Discover wiki root by walking up from current directory
    /// First checks ENCYCLO_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("ENCYCLO_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_wiki_dir(&path) {
                return Self::open(path);
            } else {
                return Err(EncycloError::Config(format!(
                    "ENCYCLO_ROOT is set to '{}' but no .encyclo directory found. \
                    Run 'encyclo init' in that directory or unset ENCYCLO_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover wiki root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_wiki_dir(&current) {
                return Self::open(current);
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(EncycloError::NotWikiDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_wiki_dir(path: &Path) -> bool {
        path.join(WIKI_DIR).is_dir()
    }

    pub fn entries_dir(&self) -> PathBuf {
        self.root.join(ENTRIES_DIR)
    }

    fn path_for(&self, name: &EntryFileName) -> PathBuf {
        self.entries_dir().join(name.as_str())
    }

    fn unique_suffix() -> String {
        format!(
            "{}-{}",
            std::process::id(),
            TMP_COUNTER.fetch_add(1, Ordering::Relaxed)
        )
    }

    /// Scratch file for editing a body outside `entries/`
    pub fn draft_path(&self) -> PathBuf {
        self.root
            .join(WIKI_DIR)
            .join(format!("draft-{}.md", Self::unique_suffix()))
    }

    fn write_synced(path: &Path, header: Option<&str>, body: &str) -> io::Result<()> {
        let mut file = File::create(path)?;
        if let Some(header) = header {
            file.write_all(header.as_bytes())?;
        }
        file.write_all(body.as_bytes())?;
        file.sync_all()
    }

    /// Title recorded in the header line of a hashed entry file
    fn read_title_header(path: &Path) -> io::Result<Option<String>> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e),
        };

        let mut line = String::new();
        BufReader::new(file).read_line(&mut line)?;
        Ok(parse_title_header(&line))
    }
}

impl WikiRepository for FileSystemStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_wiki_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let wiki_dir = self.root.join(WIKI_DIR);

        if wiki_dir.exists() {
            return Err(EncycloError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&wiki_dir)?;
        fs::create_dir_all(self.entries_dir())?;
        Ok(())
    }
}

impl EntryStore for FileSystemStore {
    fn list(&self) -> Result<Vec<String>> {
        let mut titles = Vec::new();

        for entry in fs::read_dir(self.entries_dir())? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };

            if let Some(title) = plain_title(name) {
                titles.push(title);
            } else if is_hashed_name(name) {
                match Self::read_title_header(&entry.path())? {
                    Some(title) if names_title(name, &title) => titles.push(title),
                    _ => log::trace!("skipping {} with mismatched title header", name),
                }
            } else {
                log::trace!("skipping non-entry file {}", name);
            }
        }

        titles.sort();
        Ok(titles)
    }

    fn get(&self, title: &str) -> Result<Option<String>> {
        if title.is_empty() {
            return Ok(None);
        }

        let name = EntryFileName::for_title(title);
        let contents = match fs::read_to_string(self.path_for(&name)) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(EncycloError::StorageUnavailable(e)),
        };

        match &name {
            EntryFileName::Plain(_) => Ok(Some(contents)),
            EntryFileName::Hashed(file_name) => match split_hashed_contents(&contents) {
                Some((stored, body)) if stored == title => Ok(Some(body.to_string())),
                Some(_) => Ok(None),
                None => Err(EncycloError::StorageUnavailable(io::Error::new(
                    ErrorKind::InvalidData,
                    format!("entry file {} has no title header", file_name),
                ))),
            },
        }
    }

    fn exists(&self, title: &str) -> bool {
        !title.is_empty() && self.path_for(&EntryFileName::for_title(title)).is_file()
    }

    fn put(&self, title: &str, body: &str) -> Result<()> {
        validate_title(title)?;

        let name = EntryFileName::for_title(title);
        let header = match &name {
            EntryFileName::Plain(_) => None,
            EntryFileName::Hashed(_) => Some(title_header(title)),
        };

        let _guard = self
            .locks
            .shard_for(title)
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        // Readers only ever see a complete file: write aside, then rename over.
        let tmp_path = self
            .entries_dir()
            .join(format!(".tmp-{}", Self::unique_suffix()));
        let path = self.path_for(&name);
        let written = Self::write_synced(&tmp_path, header.as_deref(), body)
            .and_then(|()| fs::rename(&tmp_path, &path));

        if let Err(e) = written {
            let _ = fs::remove_file(&tmp_path);
            return Err(EncycloError::StorageUnavailable(e));
        }

        log::debug!("stored '{}' as {} ({} bytes)", title, name.as_str(), body.len());
        Ok(())
    }
}
