mod cli;

use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use microcms::{CmsError, CommonMark, SAMPLE_DOCUMENT};

use crate::cli::Args;

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Print the error to stdout, ignoring a closed stream
            let _ = writeln!(io::stdout(), "{err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let args = Args::parse_from(cli::normalize_args(std::env::args_os()));
    let options = args.page_options();

    if !args.templates.is_empty() {
        log::debug!("ignoring templates option {:?}", args.templates);
    }

    let source = match &args.file {
        Some(path) => {
            log::info!("reading {}", path.display());
            fs::read(path).map_err(|source| CmsError::Read {
                path: path.clone(),
                source,
            })?
        }
        None => {
            log::info!("no source file given, rendering the built-in sample");
            SAMPLE_DOCUMENT.as_bytes().to_vec()
        }
    };

    let html = microcms::render(&source, &CommonMark, &options)?;

    match &args.output {
        Some(path) => {
            fs::write(path, format!("{html}\n")).map_err(|source| CmsError::Write {
                path: path.clone(),
                source,
            })?;
            log::info!("wrote {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{html}")?;
            stdout.flush()?;
        }
    }

    Ok(())
}
