//! Command dispatch
//!
//! Each handler returns the process exit code on success.

use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::services::LookupOutcome;
use crate::application::ApplicationError;
use crate::cli::args::{Cli, Commands, ConfigCommands, LookupArgs};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, local_config_path, OutputFormat, Settings};
use crate::domain::DocumentFormat;
use crate::exitcode;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

/// Run the parsed command line.
pub fn execute_command(cli: &Cli) -> CliResult<i32> {
    match &cli.command {
        Some(Commands::Get {
            file,
            paths,
            format,
            lookup,
        }) => cmd_get(cli, file, paths, *format, lookup),
        Some(Commands::Demo { lookup }) => cmd_demo(cli, lookup),
        Some(Commands::Config { command }) => cmd_config(cli, command),
        Some(Commands::Completion { shell }) => cmd_completion(*shell),
        None => {
            Cli::command()
                .print_help()
                .map_err(|e| InfraError::io("print help", e))?;
            Ok(exitcode::USAGE)
        }
    }
}

fn project_dir(cli: &Cli) -> CliResult<PathBuf> {
    match &cli.project_dir {
        Some(dir) => Ok(dir.clone()),
        None => std::env::current_dir()
            .map_err(|e| InfraError::io("get current directory", e).into()),
    }
}

fn container(cli: &Cli, lookup: &LookupArgs) -> CliResult<ServiceContainer> {
    let dir = project_dir(cli)?;
    let settings =
        Settings::load(Some(dir.as_path()))?.with_overrides(lookup.policy, lookup.output);
    debug!("settings: {:?}", settings);
    Ok(ServiceContainer::new(settings))
}

fn print_outcomes(outcomes: &[LookupOutcome], format: OutputFormat) -> CliResult<()> {
    for outcome in outcomes {
        match format {
            OutputFormat::Plain => output::info(&output::plain_value(outcome.value.as_ref())),
            OutputFormat::Json => {
                let line = serde_json::to_string(outcome).map_err(|e| {
                    ApplicationError::OperationFailed {
                        context: format!("serialize result for {}", outcome.path),
                        source: Box::new(e),
                    }
                })?;
                output::info(&line);
            }
        }
    }
    Ok(())
}

fn is_stdin(file: &Path) -> bool {
    file == Path::new("-")
}

/// Input format for `file`: flag, then file extension, then configured format.
///
/// `None` means the caller decides: stdin defaults to JSON, a file is an error.
pub fn input_format(
    file: &Path,
    explicit: Option<DocumentFormat>,
    configured: Option<DocumentFormat>,
) -> Option<DocumentFormat> {
    explicit
        .or_else(|| {
            if is_stdin(file) {
                None
            } else {
                DocumentFormat::from_path(file)
            }
        })
        .or(configured)
}

#[instrument(skip(cli, lookup))]
fn cmd_get(
    cli: &Cli,
    file: &Path,
    paths: &[String],
    format: Option<DocumentFormat>,
    lookup: &LookupArgs,
) -> CliResult<i32> {
    let container = container(cli, lookup)?;
    let service = container.lookup_service();

    let format = input_format(file, format, container.settings.format);
    let document = if is_stdin(file) {
        let content =
            io::read_to_string(io::stdin()).map_err(|e| InfraError::io("read stdin", e))?;
        service.load_str(&content, format.unwrap_or(DocumentFormat::Json))?
    } else {
        service.load(file, format)?
    };

    let outcomes = service.query(&document, paths);
    print_outcomes(&outcomes, container.settings.output)?;

    if outcomes.iter().all(LookupOutcome::is_resolved) {
        Ok(exitcode::OK)
    } else {
        Ok(exitcode::ABSENT)
    }
}

#[instrument(skip(cli, lookup))]
fn cmd_demo(cli: &Cli, lookup: &LookupArgs) -> CliResult<i32> {
    let container = container(cli, lookup)?;
    let outcomes = container.lookup_service().demo();

    match container.settings.output {
        OutputFormat::Plain => {
            output::header(&format!(
                "sample record (policy: {})",
                container.settings.policy
            ));
            for outcome in &outcomes {
                output::detail(&output::demo_line(outcome));
            }
        }
        OutputFormat::Json => print_outcomes(&outcomes, OutputFormat::Json)?,
    }
    Ok(exitcode::OK)
}

#[instrument(skip(cli))]
fn cmd_config(cli: &Cli, command: &ConfigCommands) -> CliResult<i32> {
    let dir = project_dir(cli)?;
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load(Some(dir.as_path()))?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Path => {
            // must work even when a config file is malformed
            let container = ServiceContainer::new(Settings::default());
            output::header("config files (lowest to highest precedence)");
            let global = global_config_path().ok_or_else(|| {
                CliError::Usage("cannot determine global config directory".to_string())
            })?;
            for path in [global, local_config_path(&dir)] {
                if container.fs.exists(&path) {
                    output::success_detail(&path.display());
                } else {
                    output::failure(&path.display());
                }
            }
        }
        ConfigCommands::Template => output::info(&Settings::template()),
    }
    Ok(exitcode::OK)
}

fn cmd_completion(shell: Shell) -> CliResult<i32> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(exitcode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::flag_beats_extension("doc.json", Some(DocumentFormat::Toml), None, Some(DocumentFormat::Toml))]
    #[case::extension_beats_config("doc.json", None, Some(DocumentFormat::Toml), Some(DocumentFormat::Json))]
    #[case::config_for_extensionless("doc", None, Some(DocumentFormat::Toml), Some(DocumentFormat::Toml))]
    #[case::unknown_without_config("doc.yaml", None, None, None)]
    #[case::stdin_uses_config("-", None, Some(DocumentFormat::Toml), Some(DocumentFormat::Toml))]
    #[case::stdin_left_to_caller("-", None, None, None)]
    fn given_format_sources_when_resolving_input_format_then_applies_precedence(
        #[case] file: &str,
        #[case] explicit: Option<DocumentFormat>,
        #[case] configured: Option<DocumentFormat>,
        #[case] expected: Option<DocumentFormat>,
    ) {
        assert_eq!(input_format(Path::new(file), explicit, configured), expected);
    }
}
