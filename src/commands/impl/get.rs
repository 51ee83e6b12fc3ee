use async_trait::async_trait;
use clap::Args;

use crate::commands::context::CommandContext;
use crate::commands::executable::Executable;
use crate::commands::payload::Payload;
use crate::error::PluginError;

/// Downloads are rejected. Arguments are accepted and ignored.
#[derive(Clone, Debug, PartialEq, Eq, Args)]
pub(crate) struct Get {
  #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
  pub(crate) args: Vec<String>,
}

#[async_trait]
impl Executable for Get {
  async fn execute(&self, context: &CommandContext<'_>) -> Result<Payload, PluginError> {
    Err(PluginError::UnsupportedOperationError(
      context.locale.get("not supported for performance reasons"),
    ))
  }
}
