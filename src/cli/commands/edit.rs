//! `passvault edit`: change fields of an existing credential.

use crate::cli::output;
use crate::cli::{load_settings, open_store, record_activity, Cli};
use crate::errors::{PassVaultError, Result};
use crate::generator::{self, GeneratorOptions};
use crate::vault::CredentialPatch;

/// Fields requested on the command line.
pub struct EditArgs<'a> {
    pub title: Option<&'a str>,
    pub username: Option<&'a str>,
    pub url: Option<&'a str>,
    pub password: Option<&'a str>,
    pub generate: bool,
}

/// Execute the `edit` command.
pub fn execute(cli: &Cli, id: &str, args: EditArgs<'_>) -> Result<()> {
    let settings = load_settings()?;

    let password = if args.generate {
        let opts = GeneratorOptions {
            length: settings.generator_length,
            ..GeneratorOptions::default()
        };
        Some(generator::generate(&opts)?)
    } else {
        args.password.map(str::to_string)
    };

    let patch = CredentialPatch {
        title: args.title.map(str::to_string),
        username: args.username.map(str::to_string),
        url: args.url.map(str::to_string),
        password,
    };
    if patch.is_empty() {
        return Err(PassVaultError::CommandFailed(
            "nothing to change; pass --title, --username, --url, --password or --generate".into(),
        ));
    }

    let changed: Vec<&str> = [
        ("title", patch.title.is_some()),
        ("username", patch.username.is_some()),
        ("url", patch.url.is_some()),
        ("password", patch.password.is_some()),
    ]
    .into_iter()
    .filter_map(|(name, set)| set.then_some(name))
    .collect();
    let changed = changed.join(", ");

    let mut store = open_store(cli, &settings)?;
    if !store.update(id, patch)? {
        return Err(PassVaultError::RecordNotFound(id.to_string()));
    }

    record_activity(&store, "edit", Some(id), Some(&changed));
    output::success(&format!("Updated {changed} of credential {id}"));

    if args.generate {
        if let Some(record) = store.get(id) {
            output::info(&format!("Generated password: {}", record.password));
        }
    }

    Ok(())
}
