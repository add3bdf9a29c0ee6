// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use crate::btree::Keyed;
use crate::dir;
use crate::entry_type::EntryType;
use crate::error::{Error, Result};

/// Largest file content accepted, in bytes (1 MiB).
pub const MAX_FILE_SIZE: usize = 1024 * 1024;

/// A text file held entirely in memory.
#[derive(Debug)]
pub struct File {
    content: Vec<u8>,
}

/// Payload of an [`Entry`].
#[derive(Debug)]
pub enum EntryKind {
    File(File),
    Directory(dir::Handle),
}

/// A named slot in a directory index.
#[derive(Debug)]
pub struct Entry {
    name: String,
    kind: EntryKind,
}

impl File {
    /// Copies `content` into a new file, rejecting anything larger than
    /// [`MAX_FILE_SIZE`].
    pub fn new(name: &str, content: &[u8]) -> Result<Self> {
        if content.len() > MAX_FILE_SIZE {
            return Err(Error::content_too_large(name, content.len(), MAX_FILE_SIZE));
        }
        let mut copy = Vec::new();
        copy.try_reserve_exact(content.len())
            .map_err(|e| Error::out_of_memory("file content", e))?;
        copy.extend_from_slice(content);
        Ok(Self { content: copy })
    }

    #[must_use]
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.content.len()
    }
}

/// Copies a name into fallibly reserved storage.
pub(crate) fn copy_name(name: &str) -> Result<String> {
    let mut copy = String::new();
    copy.try_reserve_exact(name.len())
        .map_err(|e| Error::out_of_memory("entry name", e))?;
    copy.push_str(name);
    Ok(copy)
}

impl Entry {
    /// Builds a file entry. Nothing is retained if any allocation fails.
    pub fn file(name: &str, content: &[u8]) -> Result<Self> {
        let file = File::new(name, content)?;
        Ok(Self {
            name: copy_name(name)?,
            kind: EntryKind::File(file),
        })
    }

    pub(crate) fn directory(name: String, handle: dir::Handle) -> Self {
        Self {
            name,
            kind: EntryKind::Directory(handle),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn kind(&self) -> &EntryKind {
        &self.kind
    }

    #[must_use]
    pub fn entry_type(&self) -> EntryType {
        match self.kind {
            EntryKind::File(_) => EntryType::File,
            EntryKind::Directory(_) => EntryType::Directory,
        }
    }

    #[must_use]
    pub fn as_file(&self) -> Option<&File> {
        match &self.kind {
            EntryKind::File(f) => Some(f),
            EntryKind::Directory(_) => None,
        }
    }

    #[must_use]
    pub fn as_dir(&self) -> Option<&dir::Handle> {
        match &self.kind {
            EntryKind::Directory(d) => Some(d),
            EntryKind::File(_) => None,
        }
    }

    #[must_use]
    pub fn is_dir(&self) -> bool {
        matches!(self.kind, EntryKind::Directory(_))
    }
}

impl Keyed for Entry {
    fn key(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_entry() {
        let entry = Entry::file("notes.txt", b"hello").unwrap();
        assert_eq!(entry.name(), "notes.txt");
        assert_eq!(entry.key(), "notes.txt");
        assert_eq!(entry.entry_type(), EntryType::File);
        assert!(!entry.is_dir());
        assert!(entry.as_dir().is_none());

        let file = entry.as_file().unwrap();
        assert_eq!(file.content(), b"hello");
        assert_eq!(file.size(), 5);
    }

    #[test]
    fn test_size_limit() {
        let exact = vec![b'x'; MAX_FILE_SIZE];
        assert_eq!(File::new("max.txt", &exact).unwrap().size(), MAX_FILE_SIZE);

        let over = vec![b'x'; MAX_FILE_SIZE + 1];
        match File::new("big.txt", &over) {
            Err(Error::ContentTooLarge { name, size, limit }) => {
                assert_eq!(name, "big.txt");
                assert_eq!(size, MAX_FILE_SIZE + 1);
                assert_eq!(limit, MAX_FILE_SIZE);
            }
            other => panic!("expected ContentTooLarge, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_content() {
        let entry = Entry::file("empty.txt", b"").unwrap();
        assert_eq!(entry.as_file().map(File::size), Some(0));
    }
}
