// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Session input lines.
//!
//! A line is read as a command word, a first argument word, and the rest of
//! the line (with leading whitespace dropped) as the second argument. Words
//! are separated by any run of ASCII whitespace. File content is therefore
//! the only argument that can contain spaces.
//!
//! Lines are raw bytes. File content is kept byte for byte; the command word
//! and entry names are decoded as UTF-8, with invalid sequences replaced.

use treefs::EntryType;

use crate::common::COMMAND_LIST;

/// One recognized session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    CreateFile { name: String, content: Vec<u8> },
    CreateDir { name: String },
    RemoveFile { name: String },
    RemoveDir { name: String },
    ChangeDir { target: String },
    List,
    Pwd,
    Exit,
}

/// Why a line could not be turned into a [`ShellCommand`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Uso: {0}")]
    Usage(&'static str),

    #[error("Comando não reconhecido: {0}\n{list}", list = COMMAND_LIST)]
    Unknown(String),
}

/// Up to three fields of a line: command, first argument, remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fields<'a> {
    pub command: &'a [u8],
    pub arg1: Option<&'a [u8]>,
    pub arg2: Option<&'a [u8]>,
}

fn next_word(s: &[u8]) -> Option<(&[u8], &[u8])> {
    let s = s.trim_ascii_start();
    if s.is_empty() {
        return None;
    }
    let end = s
        .iter()
        .position(u8::is_ascii_whitespace)
        .unwrap_or(s.len());
    Some(s.split_at(end))
}

/// Splits a line into its fields, `None` for a blank line.
#[must_use]
pub fn split_line(line: &[u8]) -> Option<Fields<'_>> {
    let (command, rest) = next_word(line)?;
    let Some((arg1, rest)) = next_word(rest) else {
        return Some(Fields {
            command,
            arg1: None,
            arg2: None,
        });
    };
    let rest = rest.trim_ascii_start();
    Some(Fields {
        command,
        arg1: Some(arg1),
        arg2: (!rest.is_empty()).then_some(rest),
    })
}

fn decode(word: &[u8]) -> String {
    String::from_utf8_lossy(word).into_owned()
}

impl ShellCommand {
    /// Parses one input line. Blank lines yield `Ok(None)`; extra arguments
    /// are ignored.
    pub fn parse(line: &[u8]) -> Result<Option<Self>, ParseError> {
        let Some(fields) = split_line(line) else {
            return Ok(None);
        };
        let arg1 = |usage| fields.arg1.map(decode).ok_or(ParseError::Usage(usage));

        let command = match fields.command {
            b"sair" | b"exit" => Self::Exit,
            b"ls" => Self::List,
            b"pwd" => Self::Pwd,
            b"cd" => Self::ChangeDir {
                target: arg1("cd <diretorio>")?,
            },
            b"criar_pasta" | b"mkdir" => Self::CreateDir {
                name: arg1("criar_pasta <nome>")?,
            },
            b"remover_pasta" | b"rmdir" => Self::RemoveDir {
                name: arg1("remover_pasta <nome>")?,
            },
            b"criar_arquivo" | b"touch" => {
                const USAGE: &str = "criar_arquivo <nome.txt> <conteudo>";
                let content = fields.arg2.ok_or(ParseError::Usage(USAGE))?;
                Self::CreateFile {
                    name: arg1(USAGE)?,
                    content: content.to_vec(),
                }
            }
            b"remover_arquivo" | b"rm" => Self::RemoveFile {
                name: arg1("remover_arquivo <nome.txt>")?,
            },
            other => return Err(ParseError::Unknown(decode(other))),
        };
        Ok(Some(command))
    }

    /// Name the command operates on, if any.
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::CreateFile { name, .. }
            | Self::CreateDir { name }
            | Self::RemoveFile { name }
            | Self::RemoveDir { name } => Some(name),
            Self::ChangeDir { target } => Some(target),
            Self::List | Self::Pwd | Self::Exit => None,
        }
    }

    /// Kind of entry the target is expected to be.
    #[must_use]
    pub fn target_kind(&self) -> Option<EntryType> {
        match self {
            Self::CreateFile { .. } | Self::RemoveFile { .. } => Some(EntryType::File),
            Self::CreateDir { .. } | Self::RemoveDir { .. } | Self::ChangeDir { .. } => {
                Some(EntryType::Directory)
            }
            Self::List | Self::Pwd | Self::Exit => None,
        }
    }
}
