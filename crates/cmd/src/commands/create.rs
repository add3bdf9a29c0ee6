use anyhow::Result;

use diagnostics::log_debug;
use treefs::WD;

pub fn create_file_command(cwd: &WD, name: &str, content: &[u8]) -> Result<()> {
    let size = content.len();
    log_debug!("Creating file in session: {name} ({size} bytes)", name: name, size: size);
    cwd.create_file(name, content)?;
    Ok(())
}

pub fn create_dir_command(cwd: &WD, name: &str) -> Result<()> {
    log_debug!("Creating directory in session: {name}", name: name);
    cwd.create_dir(name)?;
    Ok(())
}
