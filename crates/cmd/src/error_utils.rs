// Error handling utilities shared by the session commands

use anyhow::{Result, anyhow};
use treefs::{EntryType, Error};

/// Extension trait for Results to provide standardized error mapping
pub trait ErrorContext<T> {
    /// Map error with a formatted context message
    fn with_context_fmt(self, msg: &str, args: &dyn std::fmt::Display) -> Result<T>;

    /// Common error mapping for host file operations
    fn file_context(self, operation: &str, path: &str) -> Result<T>;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::fmt::Display,
{
    fn with_context_fmt(self, msg: &str, args: &dyn std::fmt::Display) -> Result<T> {
        self.map_err(|e| anyhow!("{} {}: {}", msg, args, e))
    }

    fn file_context(self, operation: &str, path: &str) -> Result<T> {
        self.with_context_fmt(&format!("Failed to {}", operation), &path)
    }
}

fn noun(kind: Option<EntryType>) -> &'static str {
    match kind {
        Some(EntryType::File) => "arquivo",
        Some(EntryType::Directory) => "diretório",
        None => "item",
    }
}

/// Message shown to the session user for a failed command. `kind` is the
/// entry kind the command was looking for.
#[must_use]
pub fn user_message(err: &anyhow::Error, kind: Option<EntryType>) -> String {
    let Some(err) = err.downcast_ref::<Error>() else {
        return format!("Erro: {}", err);
    };
    match err {
        Error::NotFound(name) => format!("Erro: {} \"{}\" não encontrado.", noun(kind), name),
        Error::NotAFile(name) => format!("Erro: \"{}\" não é um arquivo.", name),
        Error::NotADirectory(name) => format!("Erro: \"{}\" não é um diretório.", name),
        Error::AlreadyExists(name) => {
            format!("Erro: já existe um arquivo ou diretório com o nome \"{}\".", name)
        }
        Error::DirectoryNotEmpty(name) => format!("Erro: diretório \"{}\" não está vazio.", name),
        Error::RemoveRoot => "Erro: não é permitido remover o diretório raiz.".to_string(),
        Error::InvalidExtension(_) => "Erro: apenas arquivos .txt podem ser criados.".to_string(),
        Error::ContentTooLarge { .. } => "Erro: conteúdo excede o tamanho máximo de 1MB.".to_string(),
        Error::EmptyName => "Erro: o nome não pode ser vazio.".to_string(),
        Error::InvalidName(name) => format!("Erro: nome inválido \"{}\".", name),
        Error::OutOfMemory { what, .. } => format!("Erro de alocação de memória ({}).", what),
        other => format!("Erro: {}", other),
    }
}
