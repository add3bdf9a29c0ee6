use anyhow::Result;

use treefs::WD;

pub fn remove_file_command(cwd: &WD, name: &str) -> Result<()> {
    cwd.remove_file(name)?;
    Ok(())
}

pub fn remove_dir_command(cwd: &WD, name: &str) -> Result<()> {
    cwd.remove_dir(name)?;
    Ok(())
}
