// crates/core/src/options.rs

/// How consonants are counted on a markup line. Vowels always come from the
/// isolated segments only; the consonant scope is a deliberate, swappable
/// policy because both behaviors exist in the wild.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConsonantScope {
    /// Count consonants over the whole raw line, tag markup included.
    #[default]
    Line,
    /// Count consonants only over the isolated segments, like vowels.
    Segments,
}
