use std::{ffi::OsString, path::PathBuf};

use clap::Parser;
use dictionary::DATAMUSE_API_URL;

/// Get definitions, synonyms and antonyms for a list of words.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Filename with words, one word per line.
    #[arg(short = 'f', long = "file", default_value = "words.txt")]
    pub filename: PathBuf,

    /// If specified, fetch synonyms.
    #[arg(short = 's', long, default_value_t = false)]
    pub synonyms: bool,

    /// If specified, fetch antonyms.
    #[arg(short = 'a', long, default_value_t = false)]
    pub antonyms: bool,

    /// Word lookup endpoint.
    #[arg(long, env = "WORD_LOOKUP_API_URL", default_value = DATAMUSE_API_URL)]
    pub api_url: String,
}

/// Rewrites the single-dash `-help` into `--help` so clap treats it as help
/// rather than the cluster `-h -e -l -p`.
pub fn normalize_help_flag<I, T>(args: I) -> impl Iterator<Item = OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter().map(|arg| {
        let arg = arg.into();
        if arg == "-help" {
            OsString::from("--help")
        } else {
            arg
        }
    })
}
