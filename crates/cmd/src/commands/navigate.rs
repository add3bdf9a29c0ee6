use std::io::Write;

use anyhow::Result;

use treefs::WD;

/// Resolves `target` from `cwd`; the caller adopts the returned directory.
pub fn cd_command(cwd: &WD, target: &str) -> Result<WD> {
    Ok(cwd.change_dir(target)?)
}

pub fn pwd_command<W: Write>(cwd: &WD, out: &mut W) -> Result<()> {
    writeln!(out, "{}", cwd.path()?)?;
    Ok(())
}
