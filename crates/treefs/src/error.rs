// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::{BorrowError, BorrowMutError};
use std::collections::TryReserveError;

pub type Result<T> = std::result::Result<T, Error>;

/// Represents errors that can occur in namespace operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Entry not found: {0}")]
    NotFound(String),

    #[error("Not a file: {0}")]
    NotAFile(String),

    #[error("Not a directory: {0}")]
    NotADirectory(String),

    #[error("Entry already exists: {0}")]
    AlreadyExists(String),

    #[error("Directory not empty: {0}")]
    DirectoryNotEmpty(String),

    #[error("The root directory cannot be removed")]
    RemoveRoot,

    #[error("Only .txt files can be created: {0}")]
    InvalidExtension(String),

    #[error("Content of {name} is {size} bytes, above the {limit} byte limit")]
    ContentTooLarge {
        name: String,
        size: usize,
        limit: usize,
    },

    #[error("Name is empty")]
    EmptyName,

    #[error("Invalid name: {0}")]
    InvalidName(String),

    #[error("Out of memory allocating {what}")]
    OutOfMemory {
        what: &'static str,
        #[source]
        source: TryReserveError,
    },

    #[error("Directory being modified: {0}")]
    Borrow(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn not_found<S: AsRef<str>>(name: S) -> Self {
        Error::NotFound(name.as_ref().to_string())
    }

    pub fn not_a_file<S: AsRef<str>>(name: S) -> Self {
        Error::NotAFile(name.as_ref().to_string())
    }

    pub fn not_a_directory<S: AsRef<str>>(name: S) -> Self {
        Error::NotADirectory(name.as_ref().to_string())
    }

    pub fn already_exists<S: AsRef<str>>(name: S) -> Self {
        Error::AlreadyExists(name.as_ref().to_string())
    }

    pub fn directory_not_empty<S: AsRef<str>>(name: S) -> Self {
        Error::DirectoryNotEmpty(name.as_ref().to_string())
    }

    pub fn invalid_extension<S: AsRef<str>>(name: S) -> Self {
        Error::InvalidExtension(name.as_ref().to_string())
    }

    pub fn content_too_large<S: AsRef<str>>(name: S, size: usize, limit: usize) -> Self {
        Error::ContentTooLarge {
            name: name.as_ref().to_string(),
            size,
            limit,
        }
    }

    pub fn invalid_name<S: AsRef<str>>(name: S) -> Self {
        Error::InvalidName(name.as_ref().to_string())
    }

    pub fn out_of_memory(what: &'static str, source: TryReserveError) -> Self {
        Error::OutOfMemory { what, source }
    }
}

impl From<BorrowMutError> for Error {
    fn from(err: BorrowMutError) -> Error {
        Error::Borrow(err.to_string())
    }
}

impl From<BorrowError> for Error {
    fn from(err: BorrowError) -> Error {
        Error::Borrow(err.to_string())
    }
}
