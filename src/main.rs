use clap::Parser;
use passvault::cli::commands::edit::EditArgs;
use passvault::cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    // Diagnostics go to stderr; PASSVAULT_LOG=debug shows store traffic.
    let filter = EnvFilter::try_from_env("PASSVAULT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::List { reveal } => passvault::cli::commands::list::execute(&cli, reveal),
        Commands::Show { ref id } => passvault::cli::commands::show::execute(&cli, id),
        Commands::Add {
            ref title,
            ref username,
            ref url,
            ref password,
            generate,
        } => passvault::cli::commands::add::execute(
            &cli,
            title,
            username,
            url.as_deref(),
            password.as_deref(),
            generate,
        ),
        Commands::Edit {
            ref id,
            ref title,
            ref username,
            ref url,
            ref password,
            generate,
        } => passvault::cli::commands::edit::execute(
            &cli,
            id,
            EditArgs {
                title: title.as_deref(),
                username: username.as_deref(),
                url: url.as_deref(),
                password: password.as_deref(),
                generate,
            },
        ),
        Commands::Delete { ref id, force } => {
            passvault::cli::commands::delete::execute(&cli, id, force)
        }
        Commands::Insights { json } => passvault::cli::commands::insights::execute(&cli, json),
        Commands::Generate {
            length,
            no_uppercase,
            no_lowercase,
            no_numbers,
            no_symbols,
        } => passvault::cli::commands::generate::execute(
            length,
            no_uppercase,
            no_lowercase,
            no_numbers,
            no_symbols,
        ),
        Commands::ChangeMaster => passvault::cli::commands::change_master::execute(&cli),
        Commands::Activity { last, ref since } => {
            passvault::cli::commands::activity::execute(&cli, last, since.as_deref())
        }
        Commands::Completions { ref shell } => {
            passvault::cli::commands::completions::execute(shell)
        }
    };

    if let Err(e) = result {
        passvault::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
