use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use microcms::page::{self, PageOptions};

/// Convert a Markdown file into a complete HTML page
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Markdown source file (a built-in sample is rendered when omitted)
    pub file: Option<PathBuf>,

    /// One or more stylesheets (use quotes if more than one)
    #[arg(long, default_value = "", hide_default_value = true)]
    pub styles: String,

    /// One or more templates (accepted, currently unused)
    #[arg(long, default_value = "", hide_default_value = true)]
    pub templates: String,

    /// Contents of the HTML title tag
    #[arg(long, default_value = page::DEFAULT_TITLE)]
    pub title: String,

    /// HTML language designation, such as en or fr
    #[arg(long, default_value = page::DEFAULT_LANGUAGE)]
    pub language: String,

    /// Write the page to this file instead of standard output
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl Args {
    pub fn page_options(&self) -> PageOptions {
        PageOptions {
            title: self.title.clone(),
            language: self.language.clone(),
            stylesheets: page::split_stylesheets(&self.styles),
        }
    }
}

const LONG_OPTIONS: &[&str] = &["styles", "templates", "title", "language", "output"];

/// Rewrites single-dash long options (`-title x`, `-styles=a.css`) into the
/// double-dash form clap understands.
///
/// Option values and anything after `--` are passed through untouched.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut normalized = Vec::new();
    let mut value_follows = false;
    let mut positional_only = false;

    for arg in args {
        if value_follows || positional_only {
            value_follows = false;
            normalized.push(arg);
            continue;
        }

        let Some(text) = arg.to_str() else {
            normalized.push(arg);
            continue;
        };

        if text == "--" {
            positional_only = true;
            normalized.push(arg);
            continue;
        }

        let (single_dash, rest) = match text.strip_prefix("--") {
            Some(rest) => (false, rest),
            None => match text.strip_prefix('-') {
                Some(rest) => (true, rest),
                None => {
                    normalized.push(arg);
                    continue;
                }
            },
        };

        let (name, inline_value) = match rest.split_once('=') {
            Some((name, _)) => (name, true),
            None => (rest, false),
        };
        if !LONG_OPTIONS.contains(&name) {
            normalized.push(arg);
            continue;
        }

        value_follows = !inline_value;
        if single_dash {
            normalized.push(format!("-{text}").into());
        } else {
            normalized.push(arg);
        }
    }

    normalized
}
