//! `passvault add`: add a credential to the vault.

use crate::cli::output;
use crate::cli::{load_settings, open_store, read_password, record_activity, Cli};
use crate::errors::{PassVaultError, Result};
use crate::generator::{self, GeneratorOptions};
use crate::vault::NewCredential;

/// Execute the `add` command.
pub fn execute(
    cli: &Cli,
    title: &str,
    username: &str,
    url: Option<&str>,
    password: Option<&str>,
    generate: bool,
) -> Result<()> {
    if title.trim().is_empty() || username.trim().is_empty() {
        return Err(PassVaultError::CommandFailed(
            "title and username cannot be empty".into(),
        ));
    }

    let settings = load_settings()?;

    // Determine the password from one of three sources.
    let password = if generate {
        let opts = GeneratorOptions {
            length: settings.generator_length,
            ..GeneratorOptions::default()
        };
        generator::generate(&opts)?
    } else if let Some(p) = password {
        output::warning("Password provided on command line; it may appear in shell history.");
        p.to_string()
    } else {
        read_password(title)?.to_string()
    };

    if password.is_empty() {
        return Err(PassVaultError::CommandFailed("password cannot be empty".into()));
    }

    let mut store = open_store(cli, &settings)?;

    let mut new = NewCredential::new(title, username, password);
    new.url = url.map(str::to_string);
    let record = store.add(new)?;

    record_activity(&store, "add", Some(&record.id), Some(&record.title));

    output::success(&format!(
        "Added '{}' (id {}, {} password)",
        record.title,
        record.id,
        output::strength_label(record.strength)
    ));
    if generate {
        output::info(&format!("Generated password: {}", record.password));
    }

    Ok(())
}
