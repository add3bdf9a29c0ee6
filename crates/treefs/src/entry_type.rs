// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

/// Kind of a directory entry
///
/// Used by listings to tell files from directories without borrowing the
/// entry itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    /// Text file entry
    File,
    /// Directory entry
    Directory,
}

impl EntryType {
    /// Convert EntryType to string
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::File => "file",
            EntryType::Directory => "directory",
        }
    }

    /// Suffix appended to an entry name when listed
    #[must_use]
    pub fn list_suffix(&self) -> &'static str {
        match self {
            EntryType::File => "",
            EntryType::Directory => "/",
        }
    }
}

impl std::fmt::Display for EntryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
