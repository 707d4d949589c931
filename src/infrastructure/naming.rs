//! Mapping between entry titles and file names inside `entries/`
//!
//! Short titles are percent-encoded into the file name itself. Uppercase
//! ASCII letters are escaped too, so two titles never collide on a
//! case-insensitive file system. Titles whose encoding would be too long
//! for a file name are stored under a SHA-256 name and carry their title in
//! a header line.

use sha2::{Digest, Sha256};

pub const ENTRY_EXTENSION: &str = ".md";

/// Longest encoded stem stored as a plain name
pub const MAX_PLAIN_STEM_LEN: usize = 200;

const HASHED_PREFIX: char = '+';
const TITLE_HEADER: &str = "encyclo-title: ";

const RESERVED_DEVICE_NAMES: &[&str] = &[
    "con", "prn", "aux", "nul", "com1", "com2", "com3", "com4", "com5", "com6", "com7", "com8",
    "com9", "lpt1", "lpt2", "lpt3", "lpt4", "lpt5", "lpt6", "lpt7", "lpt8", "lpt9",
];

/// On-disk name of an entry file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryFileName {
    /// The title is recoverable from the name alone
    Plain(String),
    /// The title lives in the first line of the file
    Hashed(String),
}

impl EntryFileName {
    pub fn for_title(title: &str) -> Self {
        let stem = encode_stem(title);
        if stem.len() <= MAX_PLAIN_STEM_LEN {
            EntryFileName::Plain(format!("{}{}", stem, ENTRY_EXTENSION))
        } else {
            EntryFileName::Hashed(hashed_name(title))
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            EntryFileName::Plain(name) | EntryFileName::Hashed(name) => name,
        }
    }
}

/// Percent-encode a title, escaping uppercase ASCII and device names.
fn encode_stem(title: &str) -> String {
    let encoded = urlencoding::encode(title);
    let mut stem = String::with_capacity(encoded.len());
    let mut chars = encoded.chars();

    while let Some(c) = chars.next() {
        match c {
            '%' => {
                stem.push('%');
                stem.extend(chars.by_ref().take(2));
            }
            c if c.is_ascii_uppercase() => stem.push_str(&format!("%{:02X}", c as u32)),
            c => stem.push(c),
        }
    }

    let base = stem.split('.').next().unwrap_or_default();
    if RESERVED_DEVICE_NAMES.contains(&base) {
        // Device names all start with a lowercase ASCII letter.
        let first = stem.remove(0);
        stem.insert_str(0, &format!("%{:02X}", first as u32));
    }
    stem
}

fn hashed_name(title: &str) -> String {
    format!(
        "{}{}{}",
        HASHED_PREFIX,
        hex::encode(Sha256::digest(title.as_bytes())),
        ENTRY_EXTENSION
    )
}

/// Title of a plain entry file; `None` for names the store never writes.
pub fn plain_title(name: &str) -> Option<String> {
    let stem = name.strip_suffix(ENTRY_EXTENSION)?;
    if stem.is_empty() || stem.starts_with(HASHED_PREFIX) || stem.len() > MAX_PLAIN_STEM_LEN {
        return None;
    }

    let title = urlencoding::decode(stem).ok()?.into_owned();
    if encode_stem(&title) != stem {
        return None;
    }
    Some(title)
}

/// True for names of the form `+<sha256 hex>.md`
pub fn is_hashed_name(name: &str) -> bool {
    name.strip_prefix(HASHED_PREFIX)
        .and_then(|rest| rest.strip_suffix(ENTRY_EXTENSION))
        .is_some_and(|hash| hash.len() == 64 && hash.bytes().all(|b| b.is_ascii_hexdigit()))
}

/// Header line stored ahead of the body in hashed entry files
pub fn title_header(title: &str) -> String {
    format!("{}{}\n", TITLE_HEADER, urlencoding::encode(title))
}

/// Title from a header line, with or without its trailing newline
pub fn parse_title_header(line: &str) -> Option<String> {
    let encoded = line.strip_suffix('\n').unwrap_or(line);
    let encoded = encoded.strip_prefix(TITLE_HEADER)?;
    let title = urlencoding::decode(encoded).ok()?.into_owned();
    (!title.is_empty()).then_some(title)
}

/// Split hashed file contents into title and body
pub fn split_hashed_contents(contents: &str) -> Option<(String, &str)> {
    let (header, body) = contents.split_once('\n')?;
    Some((parse_title_header(header)?, body))
}

/// Whether `name` is the file the store would use for `title`
pub fn names_title(name: &str, title: &str) -> bool {
    EntryFileName::for_title(title).as_str() == name
}
