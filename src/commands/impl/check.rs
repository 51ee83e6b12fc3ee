use async_trait::async_trait;
use clap::Args;
use tracing::info;

use crate::commands::context::CommandContext;
use crate::commands::executable::Executable;
use crate::commands::payload::Payload;
use crate::error::PluginError;

#[derive(Clone, Debug, PartialEq, Eq, Args)]
pub(crate) struct Check {}

#[async_trait]
impl Executable for Check {
  #[tracing::instrument(skip(self, context))]
  async fn execute(&self, context: &CommandContext<'_>) -> Result<Payload, PluginError> {
    if context.settings.port == 0 {
      return Err(PluginError::ConfigurationError(
        context.locale.get("ftp port is required"),
      ));
    }

    let mut session = context.connect().await?;
    session.quit().await;
    info!("Server at {} is reachable", context.settings.address());
    Ok(Payload::Empty)
  }
}
