//! The sub-commands accepted on the command line.

use clap::Subcommand;
use strum_macros::Display;
use tracing::info;

use crate::commands::context::CommandContext;
use crate::commands::executable::Executable;
use crate::commands::payload::Payload;
use crate::commands::r#impl::check::Check;
use crate::commands::r#impl::del::Del;
use crate::commands::r#impl::deldir::Deldir;
use crate::commands::r#impl::get::Get;
use crate::commands::r#impl::ls::Ls;
use crate::commands::r#impl::mkdir::Mkdir;
use crate::commands::r#impl::put::Put;
use crate::error::PluginError;

#[derive(Clone, Debug, PartialEq, Eq, Subcommand, Display)]
#[strum(serialize_all = "lowercase")]
pub(crate) enum Commands {
  /// Checks that the server accepts the configured credentials
  Check(Check),
  /// Creates directories, in order
  Mkdir(Mkdir),
  /// Removes directories, in order
  Deldir(Deldir),
  /// Uploads a local file
  Put(Put),
  /// Deletes files, in order
  Del(Del),
  /// Downloads a file (not supported)
  Get(Get),
  /// Lists a directory
  Ls(Ls),
}

impl Commands {
  pub(crate) async fn execute(&self, context: &CommandContext<'_>) -> Result<Payload, PluginError> {
    info!("Executing {self}");
    match self {
      Commands::Check(c) => c.execute(context).await,
      Commands::Mkdir(c) => c.execute(context).await,
      Commands::Deldir(c) => c.execute(context).await,
      Commands::Put(c) => c.execute(context).await,
      Commands::Del(c) => c.execute(context).await,
      Commands::Get(c) => c.execute(context).await,
      Commands::Ls(c) => c.execute(context).await,
    }
  }
}
