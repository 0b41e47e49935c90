use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Crudforge - compile entity schemas into CRUD resource layers
#[derive(Parser, Debug)]
#[command(name = "crudforge")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI (NDJSON events and JSON results)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file to use instead of ./crudforge.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate every artifact for the entities in a schema file
    Generate {
        /// Entity schema file (.json, .yaml, .yml or .toml)
        #[arg(short, long)]
        schema: PathBuf,

        /// Directory generated paths are rooted at
        #[arg(long)]
        base_dir: Option<PathBuf>,

        /// Run entity pipelines one after another
        #[arg(long, conflicts_with = "threads")]
        sequential: bool,

        /// Number of worker threads (0 = one per core)
        #[arg(long)]
        threads: Option<usize>,

        /// Skip the cross-entity name collision check
        #[arg(long)]
        no_collision_check: bool,

        /// Print artifact contents instead of the manifest
        #[arg(long)]
        print: bool,
    },

    /// Show the names derived from entity names
    Names {
        /// Entity names
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Validate a schema file without generating anything
    Check {
        /// Entity schema file (.json, .yaml, .yml or .toml)
        #[arg(short, long)]
        schema: PathBuf,
    },
}
