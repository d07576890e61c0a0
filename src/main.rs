//! Sharetree CLI - browse a peer's file index and pick files to download
//!
//! Usage: sharetree <COMMAND>
//!
//! Commands:
//!   show     Print the index tree with sizes and selection state
//!   request  Build a download request from a selection
//!   browse   Pick files interactively, then emit the download request

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;

use sharetree::config::Config;
use sharetree::error::ShareTreeError;
use sharetree::presentation::{Cli, ColorWhen, Commands};

mod commands;
mod ui;

use ui::primitives::text::ColoredText;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let ansi = cli.color != Some(ColorWhen::Never) && std::io::stderr().is_terminal();
    sharetree::logging::init(cli.verbose, ansi);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if is_aborted(&err) => ExitCode::from(130),
        Err(err) => {
            eprintln!("{} {:#}", ColoredText::error("Error:").render(ansi), err);
            ExitCode::FAILURE
        }
    }
}

fn is_aborted(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<ShareTreeError>(),
        Some(ShareTreeError::Aborted)
    )
}

fn run(cli: Cli) -> Result<()> {
    let (config, _warnings) = Config::resolve(cli.config.as_deref())?;

    match cli.command {
        Commands::Show {
            index,
            select,
            depth,
        } => commands::show::cmd_show(&index, &select, depth, cli.json, cli.color, &config),
        Commands::Request {
            index,
            select,
            output,
        } => commands::request::cmd_request(&index, &select, output.as_deref(), cli.json),
        Commands::Browse {
            index,
            output,
            yes,
            depth,
        } => commands::browse::cmd_browse(
            &index,
            output.as_deref(),
            yes,
            depth,
            cli.json,
            cli.color,
            &config,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aborted_is_detected_through_context() {
        let err = anyhow::Error::from(ShareTreeError::Aborted).context("while browsing");
        assert!(is_aborted(&err));

        let other = anyhow::Error::from(ShareTreeError::NodeNotFound { path: "x".into() });
        assert!(!is_aborted(&other));
    }
}
