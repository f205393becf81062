// crates/core/src/lib.rs

pub mod classify;
pub mod counter;
pub mod error;
pub mod markup;
pub mod options;

pub use counter::{FileKind, VowelCounter};
pub use error::{CounterError, Result};
pub use options::ConsonantScope;
