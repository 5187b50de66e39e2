//! Command dispatch and handler modules.

mod list;
mod tree;

use miette::Result;

use efftree_core::config::GlobalConfig;
use efftree_util::errors::EfftreeError;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Command::Tree { roots }) => tree::exec(&roots),
        Some(Command::List { roots }) => list::exec(&roots),
        None => {
            let config = GlobalConfig::load()?;
            match config.output.format.as_str() {
                "tree" => tree::exec(&[]),
                "list" => list::exec(&[]),
                other => Err(EfftreeError::Generic {
                    message: format!(
                        "Unknown output format \"{other}\" in global config (expected \"tree\" or \"list\")"
                    ),
                }
                .into()),
            }
        }
    }
}
