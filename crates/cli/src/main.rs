// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod cmd_demo;
mod cmd_find;
mod cmd_table;

use clap::Parser;

use borders::cli::{Cli, Command};
use borders::config::{self, Config};
use borders::error::ExitCode;

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    borders::logging::init(cli.verbose);

    match run(&cli) {
        Ok(code) => code.into(),
        Err(e) => {
            eprintln!("borders: {}", e);
            ExitCode::for_error(&e).into()
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let config = load_config(cli)?;

    match &cli.command {
        Command::Find(args) => cmd_find::run(args, &config),
        Command::Table(args) => cmd_table::run(args, &config),
        Command::Demo => cmd_demo::run(),
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let cwd = std::env::current_dir()?;
    Ok(config::resolve(cli.config.as_deref(), &cwd)?)
}
