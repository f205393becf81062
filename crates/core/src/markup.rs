// crates/core/src/markup.rs
use regex::Regex;
use std::sync::OnceLock;

/// Isolate the text segments of a markup line: everything between a `>` and
/// the next `<`, scanned left to right over non-overlapping occurrences.
/// Empty segments (adjacent tags) are dropped. Tags spanning multiple lines
/// are not handled.
#[must_use]
pub fn extract_segments(line: &str) -> Vec<&str> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r">([^<]*)<").unwrap());

    re.captures_iter(line)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str())
        .filter(|s| !s.is_empty())
        .collect()
}
