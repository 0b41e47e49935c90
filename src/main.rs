//! Crudforge CLI - compile entity schemas into CRUD resource layers
//!
//! Usage: crudforge <COMMAND>
//!
//! Commands:
//!   generate  Generate every artifact for a schema file
//!   names     Show derived names for entity names
//!   check     Validate a schema file

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Commands};
use commands::GenerateArgs;

/// Log to stderr so stdout stays machine-readable
///
/// - 0: warnings only
/// - 1 (-v): INFO, one line per entity
/// - 2 (-vv): DEBUG, one line per stage
/// - 3+ (-vvv): TRACE
fn init_tracing(verbose: u8) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,crudforge=info".to_string(),
            2 => "info,crudforge=debug".to_string(),
            _ => "debug,crudforge=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(verbose >= 3)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Generate {
            schema,
            base_dir,
            sequential,
            threads,
            no_collision_check,
            print,
        } => commands::cmd_generate(
            GenerateArgs {
                schema,
                base_dir,
                sequential,
                threads,
                no_collision_check,
                print,
            },
            cli.json,
            cli.config,
        ),
        Commands::Names { names } => commands::cmd_names(&names, cli.json, cli.config),
        Commands::Check { schema } => commands::cmd_check(schema, cli.json, cli.config),
    }
}
