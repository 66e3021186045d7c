//! `passvault generate`: print a random password.

use crate::cli::{load_settings, output};
use crate::errors::Result;
use crate::generator::{self, GeneratorOptions};

/// Execute the `generate` command.
pub fn execute(
    length: Option<usize>,
    no_uppercase: bool,
    no_lowercase: bool,
    no_numbers: bool,
    no_symbols: bool,
) -> Result<()> {
    let settings = load_settings()?;
    let opts = GeneratorOptions {
        length: length.unwrap_or(settings.generator_length),
        uppercase: !no_uppercase,
        lowercase: !no_lowercase,
        numbers: !no_numbers,
        symbols: !no_symbols,
    };

    let password = generator::generate(&opts)?;
    println!("{password}");

    // Label on stderr so `passvault generate | pbcopy` stays clean.
    eprintln!(
        "strength: {}",
        output::strength_label(generator::estimate_strength(&password))
    );

    Ok(())
}
