// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use cmd::Session;
use cmd::common::{IMAGE_ENV, image_path_with_override};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "treefs")]
struct Cli {
    /// Where the namespace snapshot is written at exit [default: fs.img]
    #[arg(long, env = IMAGE_ENV)]
    image: Option<PathBuf>,

    /// Do not write a snapshot at exit
    #[arg(long)]
    no_image: bool,
}

fn main() -> Result<()> {
    diagnostics::init_diagnostics();

    let cli = Cli::parse();
    let image = image_path_with_override(cli.image, cli.no_image);

    let mut session = Session::new(image);
    let stdin = io::stdin();
    let stdout = io::stdout();
    session.run(stdin.lock(), &mut stdout.lock())
}
