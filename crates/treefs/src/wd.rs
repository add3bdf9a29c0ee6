// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use crate::dir::{self, DirEntry};
use crate::error::{Error, Result};

/// Target name that moves to the parent directory.
pub const PARENT_DIR: &str = "..";

/// Target name that moves to the namespace root.
pub const ROOT_DIR: &str = "/";

/// Context for operations within a specific directory
#[derive(Clone, Debug)]
pub struct WD {
    dir: dir::Handle,
}

impl WD {
    pub(crate) fn new(dir: dir::Handle) -> Self {
        Self { dir }
    }

    #[must_use]
    pub fn handle(&self) -> &dir::Handle {
        &self.dir
    }

    pub fn is_root(&self) -> Result<bool> {
        self.dir.is_root()
    }

    /// Absolute path of this directory
    pub fn path(&self) -> Result<String> {
        self.dir.path()
    }

    /// Name shown in prompts: the directory name, or `/` at the root
    pub fn prompt_name(&self) -> Result<String> {
        if self.dir.is_root()? {
            Ok(ROOT_DIR.to_string())
        } else {
            self.dir.name()
        }
    }

    /// Creates a `.txt` file in the current working directory
    pub fn create_file<C: AsRef<[u8]>>(&self, name: &str, content: C) -> Result<()> {
        self.dir.create_file(name, content)
    }

    /// Creates a new directory in the current working directory
    pub fn create_dir(&self, name: &str) -> Result<WD> {
        self.dir.create_dir(name).map(WD::new)
    }

    /// Reads a file in the current working directory
    pub fn read_file(&self, name: &str) -> Result<Vec<u8>> {
        self.dir.read_file(name)
    }

    /// Removes a file from the current working directory
    pub fn remove_file(&self, name: &str) -> Result<()> {
        self.dir.remove_file(name)
    }

    /// Removes an empty directory from the current working directory
    pub fn remove_dir(&self, name: &str) -> Result<()> {
        if name == ROOT_DIR {
            return Err(Error::RemoveRoot);
        }
        self.dir.remove_dir(name)
    }

    /// Resolves a `cd` target: `..` (staying put at the root), `/`, or a
    /// child directory name
    pub fn change_dir(&self, target: &str) -> Result<WD> {
        match target {
            PARENT_DIR => Ok(self
                .dir
                .parent()?
                .map_or_else(|| self.clone(), WD::new)),
            ROOT_DIR => self.dir.root().map(WD::new),
            name => self.dir.get_dir(name).map(WD::new),
        }
    }

    /// Entries of the current working directory, ascending by name
    pub fn list(&self) -> Result<Vec<DirEntry>> {
        self.dir.list()
    }
}
