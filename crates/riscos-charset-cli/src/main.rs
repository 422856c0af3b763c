mod check_cmd;
mod cli;
mod decode_cmd;
mod encode_cmd;
mod list_cmd;
mod shared;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(cli.log_level.as_str())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::List { ref format } => list_cmd::run(format),
        Commands::Decode {
            ref alphabet,
            errors,
            ref file,
        } => with_registry(|registry| decode_cmd::run(registry, alphabet, errors, file.as_deref())),
        Commands::Encode {
            ref alphabet,
            errors,
            ref file,
        } => with_registry(|registry| encode_cmd::run(registry, alphabet, errors, file.as_deref())),
        Commands::Check {
            ref alphabet,
            ref format,
        } => with_registry(|registry| check_cmd::run(registry, alphabet.as_deref(), format)),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}

fn with_registry(
    f: impl FnOnce(&riscos_charset::Registry) -> Result<(), i32>,
) -> Result<(), i32> {
    let registry = riscos_charset::build_registry().map_err(|e| {
        eprintln!("Error: failed to build alphabet registry: {e}");
        1
    })?;
    f(&registry)
}
