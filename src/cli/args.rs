use crate::constants::{exit_codes, verbosity};
use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// CLI for dialogbox: render and drive dialogs described in JSON or YAML files.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Print the markup of a dialog definition.
    Render(DocumentArgs),
    /// Show a dialog definition in the terminal and print the reply as JSON.
    Run(RunArgs),
    /// List the available locales.
    Locales,
}

/// Arguments naming a dialog definition.
#[derive(clap::Args, Debug, Clone, PartialEq)]
pub struct DocumentArgs {
    /// Dialog definition file (.json, .yaml or .yml).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Locale of the button labels.
    #[arg(short, long)]
    pub locale: Option<String>,
}

#[derive(clap::Args, Debug, Clone, PartialEq)]
pub struct RunArgs {
    #[command(flatten)]
    pub document: DocumentArgs,

    /// Predefined answers as JSON string or `-` to read from stdin.
    #[arg(short, long)]
    pub answers: Option<String>,

    /// Answer every prompt from the answers or the field defaults.
    #[arg(long = "non-interactive")]
    pub non_interactive: bool,
}

/// Parse command line arguments, printing help when a required input is missing.
pub fn parse_cli() -> Cli {
    Cli::try_parse().unwrap_or_else(|e| {
        if matches!(
            e.kind(),
            ErrorKind::MissingRequiredArgument
                | ErrorKind::MissingSubcommand
                | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        ) {
            let mut command = Cli::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_verbose_flags_to_log_filters() {
        assert_eq!(get_log_level_from_verbose(verbosity::OFF), LevelFilter::Error);
        assert_eq!(get_log_level_from_verbose(verbosity::INFO), LevelFilter::Info);
        assert_eq!(get_log_level_from_verbose(verbosity::DEBUG), LevelFilter::Debug);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE), LevelFilter::Trace);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE + 1), LevelFilter::Trace);
    }

    #[test]
    fn parses_render_command() {
        let cli = Cli::parse_from(["dialogbox", "render", "dialog.yaml", "--locale", "fr"]);
        assert_eq!(cli.verbose, 0);
        assert_eq!(
            cli.command,
            Commands::Render(DocumentArgs {
                file: PathBuf::from("dialog.yaml"),
                locale: Some("fr".to_string()),
            })
        );
    }

    #[test]
    fn parses_full_run_flags() {
        let cli = Cli::parse_from([
            "dialogbox",
            "run",
            "dialog.json",
            "-vv",
            "--answers",
            "{\"Name\":\"Ada\"}",
            "--non-interactive",
        ]);
        assert_eq!(cli.verbose, 2);
        let Commands::Run(args) = cli.command else {
            panic!("expected the run command");
        };
        assert_eq!(args.document.file, PathBuf::from("dialog.json"));
        assert_eq!(args.answers.as_deref(), Some("{\"Name\":\"Ada\"}"));
        assert!(args.non_interactive);
    }

    #[test]
    fn requires_a_subcommand() {
        assert!(Cli::try_parse_from(["dialogbox"]).is_err());
        assert_eq!(Cli::parse_from(["dialogbox", "locales"]).command, Commands::Locales);
    }
}
