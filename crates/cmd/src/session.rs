// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Interactive session over a line-oriented reader and writer.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;

use diagnostics::{log_debug, log_info, log_warn};
use treefs::{FS, WD};

use crate::commands;
use crate::common::{BANNER, FAREWELL};
use crate::error_utils::user_message;
use crate::parse::ShellCommand;

/// Whether the session keeps reading after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// A namespace, the current directory within it, and where to export it.
pub struct Session {
    fs: FS,
    cwd: WD,
    image: Option<PathBuf>,
}

impl Session {
    /// Starts at the root of a fresh namespace. With `image` set, the
    /// snapshot is written there when the session ends.
    #[must_use]
    pub fn new(image: Option<PathBuf>) -> Self {
        let fs = FS::new();
        let cwd = fs.root();
        Self { fs, cwd, image }
    }

    #[must_use]
    pub fn fs(&self) -> &FS {
        &self.fs
    }

    #[must_use]
    pub fn cwd(&self) -> &WD {
        &self.cwd
    }

    #[must_use]
    pub fn image(&self) -> Option<&Path> {
        self.image.as_deref()
    }

    /// Reads commands until `exit` or end of input, then exports the
    /// namespace.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> Result<()> {
        log_info!("Session started");
        writeln!(out, "{}", BANNER)?;

        let mut buf = Vec::new();
        loop {
            write!(out, "\n{}> ", self.cwd.prompt_name()?)?;
            out.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                writeln!(out)?;
                break;
            }
            if self.execute(trim_line_end(&buf), out)? == Flow::Exit {
                break;
            }
        }

        self.finish(out)
    }

    /// Runs one input line, given without its line terminator. Command
    /// failures are printed to `out`; only output errors are returned.
    pub fn execute<W: Write>(&mut self, line: &[u8], out: &mut W) -> Result<Flow> {
        let command = match ShellCommand::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(Flow::Continue),
            Err(err) => {
                writeln!(out, "{}", err)?;
                return Ok(Flow::Continue);
            }
        };

        let kind = command.target_kind();
        let target = command.target().unwrap_or_default().to_string();
        match self.dispatch(command, out) {
            Ok(flow) => Ok(flow),
            Err(err) => {
                let message = err.to_string();
                log_warn!("Command on {target} failed: {message}", target: target, message: message);
                writeln!(out, "{}", user_message(&err, kind))?;
                Ok(Flow::Continue)
            }
        }
    }

    fn dispatch<W: Write>(&mut self, command: ShellCommand, out: &mut W) -> Result<Flow> {
        log_debug!("Session command: {command}", command: format!("{:?}", command));
        match command {
            ShellCommand::CreateFile { name, content } => {
                commands::create_file_command(&self.cwd, &name, &content)?;
            }
            ShellCommand::CreateDir { name } => commands::create_dir_command(&self.cwd, &name)?,
            ShellCommand::RemoveFile { name } => commands::remove_file_command(&self.cwd, &name)?,
            ShellCommand::RemoveDir { name } => commands::remove_dir_command(&self.cwd, &name)?,
            ShellCommand::ChangeDir { target } => {
                self.cwd = commands::cd_command(&self.cwd, &target)?;
            }
            ShellCommand::List => commands::list_command(&self.cwd, out)?,
            ShellCommand::Pwd => commands::pwd_command(&self.cwd, out)?,
            ShellCommand::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    fn finish<W: Write>(&self, out: &mut W) -> Result<()> {
        match &self.image {
            Some(path) => commands::save_image_command(&self.fs, path, out)?,
            None => writeln!(out, "{}", FAREWELL)?,
        }
        log_info!("Session ended");
        out.flush()?;
        Ok(())
    }
}

/// Drops any trailing `\n` and `\r` bytes.
fn trim_line_end(line: &[u8]) -> &[u8] {
    let end = line
        .iter()
        .rposition(|b| !matches!(*b, b'\n' | b'\r'))
        .map_or(0, |i| i + 1);
    &line[..end]
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("cwd", &self.cwd)
            .field("image", &self.image)
            .finish()
    }
}
