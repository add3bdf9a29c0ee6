// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::io::Cursor;

use anyhow::Result;
use tempfile::tempdir;

use crate::commands::image::IMAGE_FAILED;
use crate::common::{BANNER, COMMAND_LIST};
use crate::{Flow, Session};

fn run_session<I: AsRef<[u8]>>(image: Option<std::path::PathBuf>, input: I) -> Result<String> {
    let mut session = Session::new(image);
    let mut out = Vec::new();
    session.run(Cursor::new(input.as_ref()), &mut out)?;
    Ok(String::from_utf8(out)?)
}

fn execute(session: &mut Session, line: &str) -> Result<String> {
    let mut out = Vec::new();
    assert_eq!(session.execute(line.as_bytes(), &mut out)?, Flow::Continue);
    Ok(String::from_utf8(out)?)
}

#[test]
fn test_transcript_without_image() -> Result<()> {
    let output = run_session(None, "ls\nexit\n")?;
    assert_eq!(
        output,
        format!("{BANNER}\n\n/> [Diretório vazio]\n\n/> Encerrando.\n")
    );
    Ok(())
}

#[test]
fn test_end_of_input_acts_like_exit() -> Result<()> {
    let output = run_session(None, "ls")?;
    assert!(output.ends_with("\n/> [Diretório vazio]\n\n/> \nEncerrando.\n"));
    Ok(())
}

#[test]
fn test_prompt_follows_current_directory() -> Result<()> {
    let output = run_session(None, "mkdir docs\ncd docs\npwd\ncd ..\nsair\n")?;
    assert!(output.contains("\ndocs> /docs\n"));
    assert!(output.ends_with("\n/> Encerrando.\n"));
    Ok(())
}

#[test]
fn test_image_written_at_exit() -> Result<()> {
    let tmp = tempdir()?;
    let path = tmp.path().join("fs.img");

    let output = run_session(
        Some(path.clone()),
        "criar_pasta docs\ncd docs\ncriar_arquivo notes.txt hello\ncd /\ntouch todo.txt buy some bread\nsair\n",
    )?;
    assert!(output.contains(&format!(
        "Sistema de arquivos salvo em {}. Encerrando.",
        path.display()
    )));

    let image = std::fs::read_to_string(&path)?;
    assert_eq!(
        image,
        "/\n    docs/\n        notes.txt (tamanho=5 bytes)\n    todo.txt (tamanho=14 bytes)\n"
    );
    Ok(())
}

#[test]
fn test_file_content_stored_as_raw_bytes() -> Result<()> {
    let tmp = tempdir()?;
    let path = tmp.path().join("fs.img");

    let mut session = Session::new(Some(path.clone()));
    let mut out = Vec::new();
    session.run(
        Cursor::new(&b"touch a.txt \xe7\xe3o\r\ntouch b.txt caf\xc3\xa9 \xff\nsair\n"[..]),
        &mut out,
    )?;

    let root = session.fs().root();
    assert_eq!(root.read_file("a.txt")?, b"\xe7\xe3o");
    assert_eq!(root.read_file("b.txt")?, b"caf\xc3\xa9 \xff");
    assert_eq!(
        std::fs::read_to_string(&path)?,
        "/\n    a.txt (tamanho=3 bytes)\n    b.txt (tamanho=7 bytes)\n"
    );
    Ok(())
}

#[test]
fn test_image_failure_is_reported() -> Result<()> {
    let tmp = tempdir()?;
    let path = tmp.path().join("missing").join("fs.img");

    let output = run_session(Some(path.clone()), "mkdir a\n")?;
    assert!(output.contains(IMAGE_FAILED));
    assert!(output.ends_with("Encerrando.\n"));
    assert!(!path.exists());
    Ok(())
}

#[test]
fn test_lines_after_exit_are_ignored() -> Result<()> {
    let tmp = tempdir()?;
    let path = tmp.path().join("fs.img");
    run_session(Some(path.clone()), "mkdir kept\nexit\nmkdir dropped\n")?;
    assert_eq!(std::fs::read_to_string(&path)?, "/\n    kept/\n");
    Ok(())
}

#[test]
fn test_user_errors_keep_session_alive() -> Result<()> {
    let mut session = Session::new(None);

    assert_eq!(
        execute(&mut session, "touch readme texto")?,
        "Erro: apenas arquivos .txt podem ser criados.\n"
    );
    assert_eq!(
        execute(&mut session, "rm ghost.txt")?,
        "Erro: arquivo \"ghost.txt\" não encontrado.\n"
    );
    assert_eq!(
        execute(&mut session, "cd nowhere")?,
        "Erro: diretório \"nowhere\" não encontrado.\n"
    );
    assert_eq!(
        execute(&mut session, "rmdir /")?,
        "Erro: não é permitido remover o diretório raiz.\n"
    );

    execute(&mut session, "mkdir docs")?;
    assert_eq!(
        execute(&mut session, "mkdir docs")?,
        "Erro: já existe um arquivo ou diretório com o nome \"docs\".\n"
    );
    assert_eq!(
        execute(&mut session, "touch docs/x.txt a")?,
        "Erro: nome inválido \"docs/x.txt\".\n"
    );

    execute(&mut session, "cd docs")?;
    execute(&mut session, "touch a.txt a")?;
    execute(&mut session, "cd ..")?;
    assert_eq!(
        execute(&mut session, "rmdir docs")?,
        "Erro: diretório \"docs\" não está vazio.\n"
    );
    assert_eq!(
        execute(&mut session, "rm docs")?,
        "Erro: \"docs\" não é um arquivo.\n"
    );
    assert_eq!(execute(&mut session, "ls")?, "docs/\n");
    Ok(())
}

#[test]
fn test_usage_and_unknown_commands() -> Result<()> {
    let mut session = Session::new(None);
    assert_eq!(
        execute(&mut session, "criar_arquivo nota.txt")?,
        "Uso: criar_arquivo <nome.txt> <conteudo>\n"
    );
    assert_eq!(execute(&mut session, "mkdir")?, "Uso: criar_pasta <nome>\n");
    assert_eq!(
        execute(&mut session, "voar alto")?,
        format!("Comando não reconhecido: voar\n{COMMAND_LIST}\n")
    );
    assert_eq!(execute(&mut session, "   ")?, "");
    Ok(())
}

#[test]
fn test_remove_then_list() -> Result<()> {
    let mut session = Session::new(None);
    execute(&mut session, "mkdir docs")?;
    execute(&mut session, "touch b.txt bee")?;
    execute(&mut session, "touch a.txt ay")?;
    assert_eq!(execute(&mut session, "ls")?, "a.txt\nb.txt\ndocs/\n");

    execute(&mut session, "rm a.txt")?;
    execute(&mut session, "rmdir docs")?;
    assert_eq!(execute(&mut session, "ls")?, "b.txt\n");
    assert!(session.cwd().is_root()?);
    Ok(())
}

#[test]
fn test_exit_returns_exit_flow() -> Result<()> {
    let mut session = Session::new(None);
    let mut out = Vec::new();
    assert_eq!(session.execute(b"sair", &mut out)?, Flow::Exit);
    assert_eq!(session.execute(b"exit", &mut out)?, Flow::Exit);
    assert!(out.is_empty());
    Ok(())
}
