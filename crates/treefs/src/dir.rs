// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::{Ref, RefCell, RefMut};
use std::rc::{Rc, Weak};

use diagnostics::log_debug;

use crate::btree::BTree;
use crate::entry::{File, Entry, copy_name};
use crate::entry_type::EntryType;
use crate::error::{Error, Result};
use crate::name::{validate_file_name, validate_name};

/// A directory: its B-tree index of entries plus a non-owning link upward.
pub struct Directory {
    name: String,
    parent: Option<Weak<RefCell<Directory>>>,
    entries: BTree<Entry>,
}

/// A handle for a refcounted directory.
///
/// The owning handle lives in the parent's index entry (or in the `FS` for
/// the root); every other clone only borrows that lifetime.
#[derive(Clone)]
pub struct Handle(Rc<RefCell<Directory>>);

/// One row of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct DirEntry {
    pub name: String,
    pub entry_type: EntryType,
    /// Content size for files.
    pub size: Option<usize>,
}

impl Directory {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &BTree<Entry> {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.search(name)
    }
}

impl From<&Entry> for DirEntry {
    fn from(entry: &Entry) -> Self {
        Self {
            name: entry.name().to_string(),
            entry_type: entry.entry_type(),
            size: entry.as_file().map(File::size),
        }
    }
}

impl std::fmt::Display for DirEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.name, self.entry_type.list_suffix())
    }
}

impl Handle {
    /// Creates the namespace root, which has no parent and no index entry.
    pub(crate) fn new_root() -> Self {
        Self(Rc::new(RefCell::new(Directory {
            name: String::new(),
            parent: None,
            entries: BTree::new(),
        })))
    }

    pub fn try_borrow(&self) -> Result<Ref<'_, Directory>> {
        Ok(self.0.try_borrow()?)
    }

    pub fn try_borrow_mut(&self) -> Result<RefMut<'_, Directory>> {
        Ok(self.0.try_borrow_mut()?)
    }

    /// True if both handles refer to the same directory.
    #[must_use]
    pub fn ptr_eq(&self, other: &Handle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub fn name(&self) -> Result<String> {
        Ok(self.try_borrow()?.name.clone())
    }

    pub fn is_root(&self) -> Result<bool> {
        Ok(self.try_borrow()?.is_root())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.try_borrow()?.is_empty())
    }

    /// The parent directory, `None` for the root.
    pub fn parent(&self) -> Result<Option<Handle>> {
        Ok(self
            .try_borrow()?
            .parent
            .as_ref()
            .and_then(Weak::upgrade)
            .map(Handle))
    }

    /// The topmost directory reachable through parent links.
    pub fn root(&self) -> Result<Handle> {
        let mut current = self.clone();
        while let Some(parent) = current.parent()? {
            current = parent;
        }
        Ok(current)
    }

    /// Absolute path of this directory, `/` for the root.
    pub fn path(&self) -> Result<String> {
        let mut names = Vec::new();
        let mut current = self.clone();
        while let Some(parent) = current.parent()? {
            names.push(current.name()?);
            current = parent;
        }
        names.reverse();
        Ok(format!("/{}", names.join("/")))
    }

    /// Kind of the entry called `name`, if present.
    pub fn entry_type(&self, name: &str) -> Result<Option<EntryType>> {
        Ok(self.try_borrow()?.get(name).map(Entry::entry_type))
    }

    /// The child directory called `name`.
    pub fn get_dir(&self, name: &str) -> Result<Handle> {
        let dir = self.try_borrow()?;
        let entry = dir.get(name).ok_or_else(|| Error::not_found(name))?;
        entry
            .as_dir()
            .cloned()
            .ok_or_else(|| Error::not_a_directory(name))
    }

    /// Content of the file called `name`.
    pub fn read_file(&self, name: &str) -> Result<Vec<u8>> {
        let dir = self.try_borrow()?;
        let entry = dir.get(name).ok_or_else(|| Error::not_found(name))?;
        entry
            .as_file()
            .map(|file| file.content().to_vec())
            .ok_or_else(|| Error::not_a_file(name))
    }

    /// Creates a `.txt` file holding `content`.
    pub fn create_file<C: AsRef<[u8]>>(&self, name: &str, content: C) -> Result<()> {
        validate_file_name(name)?;

        let mut dir = self.try_borrow_mut()?;
        if dir.entries.contains(name) {
            return Err(Error::already_exists(name));
        }

        let entry = Entry::file(name, content.as_ref())?;
        let size = content.as_ref().len();
        dir.entries.insert(entry);

        log_debug!("Created file {name} ({size} bytes)", name: name, size: size);
        Ok(())
    }

    /// Creates an empty subdirectory and returns its handle.
    pub fn create_dir(&self, name: &str) -> Result<Handle> {
        validate_name(name)?;

        let mut dir = self.try_borrow_mut()?;
        if dir.entries.contains(name) {
            return Err(Error::already_exists(name));
        }

        let child = Handle(Rc::new(RefCell::new(Directory {
            name: copy_name(name)?,
            parent: Some(Rc::downgrade(&self.0)),
            entries: BTree::new(),
        })));
        dir.entries
            .insert(Entry::directory(copy_name(name)?, child.clone()));

        log_debug!("Created directory {name}", name: name);
        Ok(child)
    }

    /// Removes the file called `name`.
    pub fn remove_file(&self, name: &str) -> Result<()> {
        let mut dir = self.try_borrow_mut()?;
        match dir.get(name) {
            None => return Err(Error::not_found(name)),
            Some(entry) if entry.is_dir() => return Err(Error::not_a_file(name)),
            Some(_) => {}
        }

        dir.entries
            .delete(name)
            .ok_or_else(|| Error::not_found(name))?;

        log_debug!("Removed file {name}", name: name);
        Ok(())
    }

    /// Removes the empty subdirectory called `name`.
    pub fn remove_dir(&self, name: &str) -> Result<()> {
        let mut dir = self.try_borrow_mut()?;
        let child = match dir.get(name) {
            None => return Err(Error::not_found(name)),
            Some(entry) => entry
                .as_dir()
                .cloned()
                .ok_or_else(|| Error::not_a_directory(name))?,
        };

        if !child.is_empty()? {
            return Err(Error::directory_not_empty(name));
        }
        if child.is_root()? {
            return Err(Error::RemoveRoot);
        }

        dir.entries
            .delete(name)
            .ok_or_else(|| Error::not_found(name))?;

        log_debug!("Removed directory {name}", name: name);
        Ok(())
    }

    /// Entries in ascending name order.
    pub fn list(&self) -> Result<Vec<DirEntry>> {
        Ok(self.try_borrow()?.entries.iter().map(DirEntry::from).collect())
    }
}

impl std::fmt::Debug for Handle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0.try_borrow() {
            Ok(dir) => write!(f, "Handle({:?})", dir.name),
            Err(_) => write!(f, "Handle(<borrowed>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_root() {
        let root = Handle::new_root();
        assert!(root.is_root().unwrap());
        assert!(root.is_empty().unwrap());
        assert!(root.parent().unwrap().is_none());
        assert_eq!(root.path().unwrap(), "/");
    }

    #[test]
    fn test_parent_link_is_weak() {
        let root = Handle::new_root();
        let docs = root.create_dir("docs").unwrap();

        assert!(!docs.is_root().unwrap());
        assert!(docs.parent().unwrap().unwrap().ptr_eq(&root));
        // root's own handle plus the clone returned above
        assert_eq!(Rc::strong_count(&root.0), 1);
        assert_eq!(Rc::strong_count(&docs.0), 2);
    }

    #[test]
    fn test_remove_dir_releases_directory() {
        let root = Handle::new_root();
        let docs = root.create_dir("docs").unwrap();
        let weak = Rc::downgrade(&docs.0);
        drop(docs);

        root.remove_dir("docs").unwrap();
        assert!(weak.upgrade().is_none());
    }

    #[test]
    fn test_path() {
        let root = Handle::new_root();
        let a = root.create_dir("a").unwrap();
        let b = a.create_dir("b").unwrap();
        assert_eq!(a.path().unwrap(), "/a");
        assert_eq!(b.path().unwrap(), "/a/b");
        assert!(b.root().unwrap().ptr_eq(&root));
    }

    #[test]
    fn test_read_file() {
        let root = Handle::new_root();
        root.create_file("a.txt", "alpha").unwrap();
        root.create_dir("d").unwrap();
        assert_eq!(root.read_file("a.txt").unwrap(), b"alpha");
        assert!(matches!(root.read_file("d"), Err(Error::NotAFile(_))));
        assert!(matches!(root.read_file("x.txt"), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_borrowed_directory_reports_error() {
        let root = Handle::new_root();
        let _guard = root.try_borrow().unwrap();
        assert!(matches!(
            root.create_file("a.txt", "x"),
            Err(Error::Borrow(_))
        ));
    }

    #[test]
    fn test_list_rows() {
        let root = Handle::new_root();
        root.create_file("b.txt", "bee").unwrap();
        root.create_dir("a").unwrap();

        let rows = root.list().unwrap();
        assert_eq!(
            rows,
            vec![
                DirEntry {
                    name: "a".to_string(),
                    entry_type: EntryType::Directory,
                    size: None,
                },
                DirEntry {
                    name: "b.txt".to_string(),
                    entry_type: EntryType::File,
                    size: Some(3),
                },
            ]
        );
        assert_eq!(rows[0].to_string(), "a/");
        assert_eq!(rows[1].to_string(), "b.txt");

        let json = serde_json::to_string(&rows[1]).unwrap();
        assert_eq!(json, r#"{"name":"b.txt","entry_type":"file","size":3}"#);
    }
}
