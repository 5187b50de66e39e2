//! CLI argument definitions for efftree.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "efftree",
    version,
    about = "Print the effective dependency tree of an npm project",
    long_about = "efftree walks the node_modules hierarchy the way Node's module \
                  resolution does, and prints the logical (deduplicated) dependency \
                  tree that a project would actually load, marking circular references."
)]
pub struct Cli {
    /// With no subcommand, the format configured in ~/.efftree/config.toml is used.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the dependency tree as indented text
    Tree {
        /// Root package.json paths (or their directories).
        /// Defaults to the nearest package.json above the current directory.
        roots: Vec<PathBuf>,
    },

    /// Print the dependency tree as a flat list of paths
    List {
        /// Root package.json paths (or their directories).
        /// Defaults to the nearest package.json above the current directory.
        roots: Vec<PathBuf>,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
