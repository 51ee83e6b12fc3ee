use std::io::stdout;
use std::process::ExitCode;
use std::str::FromStr;

use clap::Parser;
use tracing::{Level, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

use crate::cli::Cli;
use crate::error::PluginError;
use crate::settings::AppSettings;

mod cli;
mod commands;
mod error;
mod io;
mod locale;
mod reporter;
mod runner;
mod session;
mod settings;
mod utils;

/// Entrypoint of the application. Runs on a single threaded tokio runtime.
///
/// # Arguments
/// `--help` and `--version` print their text and exit. Any other parse error is reported through
/// the error envelope like every other failure.
///
/// # Tracing setup
/// The log level comes from the `log_level` setting, [`WARN`] when it is missing or invalid.
/// Logs go to stderr, or to `log_file` when set, so stdout only ever carries the result.
///
/// # Runner
/// After the tracing is setup, the [`runner`] is executed.
///
/// [`WARN`]: Level::WARN
/// [`runner`]: runner
///
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
  let cli = match Cli::try_parse() {
    Ok(cli) => cli,
    Err(e) if !e.use_stderr() => e.exit(),
    Err(e) => {
      let rendered = e.to_string();
      let message = rendered
        .lines()
        .next()
        .unwrap_or_default()
        .trim_start_matches("error: ");
      return runner::report(
        &Err(PluginError::ValidationError(message.to_string())),
        &mut stdout().lock(),
      );
    }
  };

  let settings = match AppSettings::load(cli.config.as_deref()) {
    Ok(settings) => settings,
    Err(e) => {
      let _guard = init_tracing(None, None);
      return runner::report(
        &Err(PluginError::ConfigurationError(e.to_string())),
        &mut stdout().lock(),
      );
    }
  };

  let _guard = init_tracing(settings.log_level.as_deref(), settings.log_file.as_deref());
  debug!("Loaded settings: {:?}", settings.ftp);

  runner::run(&cli.command, &settings).await
}

/// The returned guard flushes the log file when dropped.
fn init_tracing(
  log_level: Option<&str>,
  log_file: Option<&std::path::Path>,
) -> Option<WorkerGuard> {
  let log_level = Level::from_str(log_level.unwrap_or_default()).unwrap_or(Level::WARN);

  let (writer, guard) = match log_file.and_then(|f| Some((f.parent(), f.file_name()?))) {
    Some((directory, file_name)) => {
      let directory = directory
        .filter(|d| !d.as_os_str().is_empty())
        .unwrap_or_else(|| std::path::Path::new("."));
      let appender = tracing_appender::rolling::never(directory, file_name);
      let (non_blocking, guard) = tracing_appender::non_blocking(appender);
      (BoxMakeWriter::new(non_blocking), Some(guard))
    }
    None => (BoxMakeWriter::new(std::io::stderr), None),
  };

  let subscriber = tracing_subscriber::fmt()
    .with_file(false)
    .with_line_number(false)
    .with_target(false)
    .with_ansi(log_file.is_none())
    .with_max_level(log_level)
    .with_writer(writer)
    .finish();
  let _ = tracing::subscriber::set_global_default(subscriber);
  guard
}
