use std::io::Write;

use anyhow::Result;

use treefs::WD;

/// Shown by `ls` in a directory with no entries.
pub const EMPTY_DIRECTORY: &str = "[Diretório vazio]";

/// Prints one entry per line in ascending name order, directories with a
/// trailing `/`.
pub fn list_command<W: Write>(cwd: &WD, out: &mut W) -> Result<()> {
    let entries = cwd.list()?;
    if entries.is_empty() {
        writeln!(out, "{}", EMPTY_DIRECTORY)?;
        return Ok(());
    }
    for entry in entries {
        writeln!(out, "{}", entry)?;
    }
    Ok(())
}
