//! xbrlld CLI library.
//!
//! Argument types, configuration and command handlers behind the `xbrlld`
//! binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

use cli::{Cli, Commands, ConvertTarget};
use commands::convert::OutputOpts;

/// Dispatch a parsed [`Cli`] to the appropriate command handler.
pub fn run(cli: Cli) -> error::CliResult<()> {
    let config = config::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Convert { target } => match target {
            ConvertTarget::Taxonomy {
                url,
                output,
                context,
                format,
            } => {
                let opts = OutputOpts {
                    output: &output,
                    context: context.as_deref(),
                    format: format.as_deref(),
                    quiet: cli.quiet,
                };
                commands::convert::run_taxonomy(&url, &opts, &config)
            }

            ConvertTarget::Instance {
                file,
                with_taxonomy,
                output,
                context,
                format,
            } => {
                let opts = OutputOpts {
                    output: &output,
                    context: context.as_deref(),
                    format: format.as_deref(),
                    quiet: cli.quiet,
                };
                commands::convert::run_instance(&file, with_taxonomy, &opts, &config)
            }
        },
    }
}
