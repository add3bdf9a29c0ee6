// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use crate::dir;
use crate::wd::WD;

/// Main filesystem structure that owns the root directory
pub struct FS {
    root: dir::Handle,
}

impl FS {
    /// Creates a new filesystem with an empty root directory
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: dir::Handle::new_root(),
        }
    }

    /// Returns a working directory context for the root directory
    #[must_use]
    pub fn root(&self) -> WD {
        WD::new(self.root.clone())
    }

    /// The root directory handle
    #[must_use]
    pub fn root_handle(&self) -> &dir::Handle {
        &self.root
    }
}

impl Default for FS {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FS {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FS").field("root", &self.root).finish()
    }
}
