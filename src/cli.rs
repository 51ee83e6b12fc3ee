//! Command line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::command::Commands;

#[derive(Debug, Parser)]
#[command(name = "backup-plugin-ftp", version, about = "FTP backup plugin for AcePanel")]
pub(crate) struct Cli {
  /// Configuration file, `config.toml` in the working directory when omitted
  #[arg(short, long, global = true, value_name = "FILE")]
  pub(crate) config: Option<PathBuf>,
  #[command(subcommand)]
  pub(crate) command: Commands,
}
