// crates/cli/src/args.rs
use clap::{Parser, ValueEnum};
use count_vowels_core::ConsonantScope;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ConsonantScopeArg {
    /// Count consonants over the whole raw markup line, tags included
    #[default]
    Line,
    /// Count consonants only over the text isolated between tags
    Segments,
}

impl From<ConsonantScopeArg> for ConsonantScope {
    fn from(arg: ConsonantScopeArg) -> Self {
        match arg {
            ConsonantScopeArg::Line => Self::Line,
            ConsonantScopeArg::Segments => Self::Segments,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "count_vowels",
    version,
    about = "Count vowels and consonants in a .txt or .xml file"
)]
pub struct Args {
    /// File to analyze (.txt or .xml)
    pub file: PathBuf,

    /// Consonant counting policy for markup files
    #[arg(long, value_enum, default_value_t = ConsonantScopeArg::Line)]
    pub consonant_scope: ConsonantScopeArg,
}
