// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Entry name rules.

use crate::error::{Error, Result};

/// Extension every file name must carry, without the dot.
pub const TEXT_EXTENSION: &str = "txt";

/// Checks that `name` can be stored in a directory index.
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::EmptyName);
    }
    if name == "." || name == ".." || name.contains('/') || name.contains('\0') {
        return Err(Error::invalid_name(name));
    }
    Ok(())
}

/// True if the text after the last `.` is exactly [`TEXT_EXTENSION`].
#[must_use]
pub fn has_text_extension(name: &str) -> bool {
    name.rsplit_once('.')
        .is_some_and(|(_, ext)| ext == TEXT_EXTENSION)
}

/// Checks a file name: a valid entry name ending in `.txt`.
pub fn validate_file_name(name: &str) -> Result<()> {
    validate_name(name)?;
    if !has_text_extension(name) {
        return Err(Error::invalid_extension(name));
    }
    Ok(())
}
