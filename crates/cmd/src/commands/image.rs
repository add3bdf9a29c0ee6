use std::io::Write;
use std::path::Path;

use anyhow::Result;

use diagnostics::{log_error, log_info};
use treefs::FS;

use crate::common::FAREWELL;
use crate::error_utils::ErrorContext;

/// Reported when the image file cannot be written.
pub const IMAGE_FAILED: &str =
    "Erro: não foi possível criar o arquivo de imagem do sistema de arquivos.";

/// Writes the snapshot of `fs` to `path` and prints the closing line. A
/// failed export is reported to the user and does not fail the command.
pub fn save_image_command<W: Write>(fs: &FS, path: &Path, out: &mut W) -> Result<()> {
    let display = path.display().to_string();
    match treefs::save_image(fs.root_handle(), path).file_context("write image", &display) {
        Ok(()) => {
            writeln!(out, "Sistema de arquivos salvo em {}. {}", display, FAREWELL)?;
            log_info!("Session image written: {path}", path: display);
        }
        Err(err) => {
            let message = err.to_string();
            log_error!("{message}", message: message);
            writeln!(out, "{}", IMAGE_FAILED)?;
            writeln!(out, "{}", FAREWELL)?;
        }
    }
    Ok(())
}
