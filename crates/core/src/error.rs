// crates/core/src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CounterError {
    #[error("file must be .txt or .xml: {}", path.display())]
    UnsupportedExtension { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, CounterError>;
