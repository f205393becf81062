// crates/core/src/counter.rs
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::classify::{count_consonants, count_vowels};
use crate::error::{CounterError, Result};
use crate::markup::extract_segments;
use crate::options::ConsonantScope;

/// The two supported file types, dispatched on by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// `.txt`: every character of every line is classified.
    Text,
    /// `.xml`: vowels come only from text isolated between tags.
    Markup,
}

impl FileKind {
    /// Determine the file kind from the path extension, case-insensitively.
    /// Returns `None` for anything other than `.txt` or `.xml`.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "txt" => Some(Self::Text),
            "xml" => Some(Self::Markup),
            _ => None,
        }
    }
}

/// Counts vowels and consonants in a single `.txt` or `.xml` file.
///
/// Construct it with a path, call [`VowelCounter::process`] once, then read
/// the totals through the accessors.
#[derive(Debug)]
pub struct VowelCounter {
    path: PathBuf,
    kind: FileKind,
    scope: ConsonantScope,
    vowels: usize,
    consonants: usize,
}

impl VowelCounter {
    /// Create a counter for `path` with both counts at zero.
    ///
    /// # Errors
    ///
    /// Returns [`CounterError::UnsupportedExtension`] unless the path ends in
    /// `.txt` or `.xml` (any case). The file itself is not touched yet.
    pub fn new(path: impl Into<PathBuf>, scope: ConsonantScope) -> Result<Self> {
        let path = path.into();
        let Some(kind) = FileKind::from_path(&path) else {
            return Err(CounterError::UnsupportedExtension { path });
        };

        Ok(Self {
            path,
            kind,
            scope,
            vowels: 0,
            consonants: 0,
        })
    }

    /// Read the file line by line and recompute both counts.
    ///
    /// Open or read failures are reported to standard output and leave the
    /// counts at whatever had been accumulated up to the failure (zero when
    /// the file could not be opened at all); they never propagate. Calling
    /// this again on an unchanged file yields the same counts, there is no
    /// accumulation across calls.
    pub fn process(&mut self) {
        let (vowels, consonants) = self.read_counts();
        self.vowels = vowels;
        self.consonants = consonants;
    }

    /// Number of vowels found. Zero before [`VowelCounter::process`] ran.
    #[must_use]
    pub fn vowels(&self) -> usize {
        self.vowels
    }

    /// Number of consonants found. Zero before [`VowelCounter::process`] ran.
    #[must_use]
    pub fn consonants(&self) -> usize {
        self.consonants
    }

    fn read_counts(&self) -> (usize, usize) {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) => {
                println!("{}: {e}", self.path.display());
                return (0, 0);
            }
        };

        let mut vowels = 0;
        let mut consonants = 0;

        // The handle is dropped when the reader goes out of scope, on the
        // error path as well.
        for line in BufReader::new(file).lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    println!("{}: {e}", self.path.display());
                    break;
                }
            };

            match self.kind {
                FileKind::Text => {
                    vowels += count_vowels(&line);
                    consonants += count_consonants(&line);
                }
                FileKind::Markup => {
                    let segments = extract_segments(&line);
                    vowels += segments.iter().map(|s| count_vowels(s)).sum::<usize>();
                    consonants += match self.scope {
                        ConsonantScope::Line => count_consonants(&line),
                        ConsonantScope::Segments => {
                            segments.iter().map(|s| count_consonants(s)).sum()
                        }
                    };
                }
            }
        }

        (vowels, consonants)
    }
}
