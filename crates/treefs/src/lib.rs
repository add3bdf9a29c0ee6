// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! In-memory hierarchical namespace whose directories index their children
//! with a B-tree.
//!
//! Set TREEFS_LOG environment variable to control logging (see the
//! `diagnostics` crate).

pub mod btree;
pub mod dir;
pub mod entry;
pub mod entry_type;
pub mod error;
pub mod fs;
pub mod name;
pub mod snapshot;
pub mod wd;

pub use btree::{BTree, Keyed, MAX_CHILDREN, MAX_KEYS, MIN_DEGREE, MIN_KEYS};
pub use dir::{DirEntry, Directory};
pub use entry::{Entry, EntryKind, File, MAX_FILE_SIZE};
pub use entry_type::EntryType;
pub use error::{Error, Result};
pub use fs::FS;
pub use name::TEXT_EXTENSION;
pub use snapshot::{save_image, snapshot_string, write_snapshot};
pub use wd::WD;

#[cfg(test)]
mod tests;
