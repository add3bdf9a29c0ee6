// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! One-shot text export of a namespace.
//!
//! ```text
//! /
//!     docs/
//!         notes.txt (tamanho=5 bytes)
//!     todo.txt (tamanho=12 bytes)
//! ```
//!
//! Entries are written in ascending name order at every level, and each
//! directory is expanded right after its own line, one indent deeper. The
//! format is write-only; nothing reads it back.

use std::io::{BufWriter, Write};
use std::path::Path;

use diagnostics::log_info;

use crate::dir;
use crate::entry::EntryKind;
use crate::error::Result;

/// Indentation for one level of nesting
pub const INDENT: &str = "    ";

/// First line of every snapshot
pub const ROOT_LINE: &str = "/";

/// Writes the subtree under `root` to `out`.
pub fn write_snapshot<W: Write>(root: &dir::Handle, out: &mut W) -> Result<()> {
    writeln!(out, "{}", ROOT_LINE)?;
    write_entries(root, 1, out)
}

fn write_entries<W: Write>(dir: &dir::Handle, depth: usize, out: &mut W) -> Result<()> {
    let guard = dir.try_borrow()?;
    for entry in guard.entries() {
        let indent = INDENT.repeat(depth);
        match entry.kind() {
            EntryKind::Directory(child) => {
                writeln!(out, "{}{}/", indent, entry.name())?;
                write_entries(child, depth + 1, out)?;
            }
            EntryKind::File(file) => {
                writeln!(
                    out,
                    "{}{} (tamanho={} bytes)",
                    indent,
                    entry.name(),
                    file.size()
                )?;
            }
        }
    }
    Ok(())
}

/// Renders the subtree under `root` as a string.
pub fn snapshot_string(root: &dir::Handle) -> Result<String> {
    let mut buf = Vec::new();
    write_snapshot(root, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Creates (or truncates) the file at `path` and writes the snapshot to it.
pub fn save_image<P: AsRef<Path>>(root: &dir::Handle, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)?;
    let mut out = BufWriter::new(file);
    write_snapshot(root, &mut out)?;
    out.flush()?;

    let display = path.display().to_string();
    log_info!("Saved namespace image to {path}", path: display);
    Ok(())
}
