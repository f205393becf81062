use clap::Parser;
use count_vowels_cli::args::Args;
use count_vowels_core::VowelCounter;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    match VowelCounter::new(args.file, args.consonant_scope.into()) {
        Ok(mut counter) => {
            counter.process();
            println!("Found: {} vowels.", counter.vowels());
            println!("Found: {} consonants.", counter.consonants());
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("{e}");
            println!("Usage: count_vowels [OPTIONS] <FILE>");
            println!("Supported file types: .txt (plain text), .xml (markup)");
            ExitCode::FAILURE
        }
    }
}
