//! Execution point of a single invocation.

use std::io::{Write, stdout};
use std::process::ExitCode;

use tracing::{error, info};

use crate::commands::command::Commands;
use crate::commands::context::CommandContext;
use crate::commands::payload::Payload;
use crate::error::PluginError;
use crate::locale::Locale;
use crate::reporter;
use crate::session::ftp_session::FtpSessionFactory;
use crate::settings::AppSettings;

/// Runs `command` against the configured FTP server and prints the result envelope to stdout.
pub(crate) async fn run(command: &Commands, settings: &AppSettings) -> ExitCode {
  let locale = Locale::new(&settings.locale);
  let context = CommandContext::new(&settings.ftp, &locale, &FtpSessionFactory);
  let result = execute(command, &context).await;
  report(&result, &mut stdout().lock())
}

pub(crate) async fn execute(
  command: &Commands,
  context: &CommandContext<'_>,
) -> Result<Payload, PluginError> {
  let result = command.execute(context).await;
  match &result {
    Ok(_) => info!("{command} succeeded"),
    Err(e) => error!("{command} failed! {e}"),
  }
  result
}

pub(crate) fn report(result: &Result<Payload, PluginError>, out: &mut impl Write) -> ExitCode {
  match result {
    Ok(payload) => reporter::success(out, payload),
    Err(e) => reporter::failure(out, &e.to_string()),
  }
}
