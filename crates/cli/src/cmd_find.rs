// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `borders find` command implementation.

use std::io::IsTerminal;
use std::path::PathBuf;

use borders::cli::FindArgs;
use borders::config::Config;
use borders::error::{Error, ExitCode};
use borders::file_reader::FileContent;
use borders::pattern::Matcher;
use borders::report::{SearchReport, formatter};

/// Run the `borders find` command.
pub fn run(args: &FindArgs, config: &Config) -> anyhow::Result<ExitCode> {
    let output = args.output.unwrap_or(config.find.output);
    let all = args.all || config.find.all;

    let (content, from_file) = match (&args.text, &args.file) {
        (Some(text), _) => (FileContent::Owned(text.clone().into_bytes()), false),
        (None, Some(path)) => (FileContent::read(path)?, true),
        (None, None) => (read_stdin()?, false),
    };
    let haystack = content.as_bytes();

    let pattern = args.pattern.as_bytes();
    let matcher = Matcher::new(pattern);
    let matches: Vec<usize> = if all {
        matcher.find_iter(haystack).collect()
    } else {
        matcher.find(haystack).into_iter().collect()
    };
    tracing::debug!(
        "searched {} bytes for {} byte pattern: {} match(es)",
        haystack.len(),
        pattern.len(),
        matches.len()
    );

    let mut report = SearchReport::new(pattern, matches);
    if from_file {
        report = report.with_lines(haystack);
    }
    print!("{}", formatter(output).format_search(&report)?);

    Ok(if report.found() {
        ExitCode::Success
    } else {
        ExitCode::NotFound
    })
}

fn read_stdin() -> borders::error::Result<FileContent> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Err(Error::Argument(
            "no TEXT or --file given and stdin is a terminal".to_string(),
        ));
    }
    tracing::debug!("reading haystack from stdin");
    FileContent::read_from(stdin.lock()).map_err(|source| Error::Io {
        path: PathBuf::from("<stdin>"),
        source,
    })
}
