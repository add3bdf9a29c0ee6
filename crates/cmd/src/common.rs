// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

/// Snapshot file written at exit when nothing else is configured
pub const DEFAULT_IMAGE: &str = "fs.img";

/// Environment variable overriding [`DEFAULT_IMAGE`]
pub const IMAGE_ENV: &str = "TREEFS_IMAGE";

/// Shown once when a session starts.
pub const BANNER: &str = "\
Sistema de Arquivos Virtual iniciado. Diretório atual: raiz (/)
Comandos disponíveis: criar_arquivo <nome.txt> <conteudo>, criar_pasta <nome>, \
remover_arquivo <nome.txt>, remover_pasta <nome>, cd <dir>, cd .., ls, pwd, sair";

/// Short command list printed after an unknown command.
pub const COMMAND_LIST: &str =
    "Comandos disponíveis: criar_arquivo, criar_pasta, remover_arquivo, remover_pasta, cd, ls, pwd, sair";

/// Last line of every session.
pub const FAREWELL: &str = "Encerrando.";

/// Resolves where the snapshot goes: `None` disables it, otherwise the
/// explicit path wins over [`DEFAULT_IMAGE`].
#[must_use]
pub fn image_path_with_override(override_path: Option<PathBuf>, disabled: bool) -> Option<PathBuf> {
    if disabled {
        return None;
    }
    Some(override_path.unwrap_or_else(|| PathBuf::from(DEFAULT_IMAGE)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_path_resolution() {
        assert_eq!(
            image_path_with_override(None, false),
            Some(PathBuf::from("fs.img"))
        );
        assert_eq!(
            image_path_with_override(Some(PathBuf::from("/tmp/x.img")), false),
            Some(PathBuf::from("/tmp/x.img"))
        );
        assert_eq!(image_path_with_override(Some(PathBuf::from("a")), true), None);
    }
}
