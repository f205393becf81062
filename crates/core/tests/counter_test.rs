//! File-level tests for `VowelCounter` against real temporary files.

use count_vowels_core::{ConsonantScope, VowelCounter};
use std::io::Write;
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).expect("create fixture");
    file.write_all(contents.as_bytes()).expect("write fixture");
    path
}

#[test]
fn counts_plain_text() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "hello.txt", "Hello World\n");

    let mut counter = VowelCounter::new(path, ConsonantScope::default()).unwrap();
    counter.process();

    assert_eq!(counter.vowels(), 3);
    assert_eq!(counter.consonants(), 7);
}

#[test]
fn text_mode_counts_markup_characters_too() {
    let dir = TempDir::new().unwrap();
    // A .txt file full of tags: everything alphabetic counts.
    let path = write_file(&dir, "tags.txt", "<a>Hi</a>\n");

    let mut counter = VowelCounter::new(path, ConsonantScope::default()).unwrap();
    counter.process();

    // Vowels a, i, a; consonant H.
    assert_eq!(counter.vowels(), 3);
    assert_eq!(counter.consonants(), 1);
}

#[test]
fn markup_vowels_come_from_segments_only() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "doc.xml", "<a>Hi</a><b>Yo</b>\n");

    let mut counter = VowelCounter::new(&path, ConsonantScope::Line).unwrap();
    counter.process();

    // Vowels from "Hi" and "Yo"; consonants from the whole raw line
    // (H, b, Y, b -- the tag names included).
    assert_eq!(counter.vowels(), 2);
    assert_eq!(counter.consonants(), 4);
}

#[test]
fn markup_segment_scope_restricts_consonants() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "doc.xml", "<a>Hi</a><b>Yo</b>\n");

    let mut counter = VowelCounter::new(&path, ConsonantScope::Segments).unwrap();
    counter.process();

    assert_eq!(counter.vowels(), 2);
    assert_eq!(counter.consonants(), 2);
}

#[test]
fn markup_spanning_multiple_lines() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "multi.xml", "<t>one</t>\n<t>two</t>\nno tags here\n");

    let mut counter = VowelCounter::new(&path, ConsonantScope::Segments).unwrap();
    counter.process();

    // "one" + "two": o,e,o vowels; n,t,w consonants. The untagged line
    // contributes nothing in segment scope.
    assert_eq!(counter.vowels(), 3);
    assert_eq!(counter.consonants(), 3);
}

#[test]
fn processing_twice_does_not_accumulate() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "hello.txt", "Hello World\n");

    let mut counter = VowelCounter::new(path, ConsonantScope::default()).unwrap();
    counter.process();
    counter.process();

    assert_eq!(counter.vowels(), 3);
    assert_eq!(counter.consonants(), 7);
}

#[test]
fn missing_file_yields_zero_counts() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("does-not-exist.txt");

    let mut counter = VowelCounter::new(path, ConsonantScope::default()).unwrap();
    counter.process();

    assert_eq!(counter.vowels(), 0);
    assert_eq!(counter.consonants(), 0);
}

#[test]
fn counts_never_exceed_alphabetic_total() {
    let dir = TempDir::new().unwrap();
    let contents = "Mixed <b>content</b> & 1234 lines!\nsecond line\n";
    let path = write_file(&dir, "mixed.txt", contents);

    let alphabetic = contents.chars().filter(char::is_ascii_alphabetic).count();

    let mut counter = VowelCounter::new(path, ConsonantScope::default()).unwrap();
    counter.process();

    assert!(counter.vowels() + counter.consonants() <= alphabetic);
}
