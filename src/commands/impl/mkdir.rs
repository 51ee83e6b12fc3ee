use async_trait::async_trait;
use clap::Args;

use crate::commands::context::CommandContext;
use crate::commands::executable::Executable;
use crate::commands::payload::Payload;
use crate::commands::r#impl::shared::{PathOperation, apply_in_order};
use crate::error::PluginError;

#[derive(Clone, Debug, PartialEq, Eq, Args)]
pub(crate) struct Mkdir {
  /// Remote directories to create
  #[arg(allow_hyphen_values = true)]
  pub(crate) dirs: Vec<String>,
}

#[async_trait]
impl Executable for Mkdir {
  #[tracing::instrument(skip(self, context))]
  async fn execute(&self, context: &CommandContext<'_>) -> Result<Payload, PluginError> {
    apply_in_order(
      context,
      PathOperation::MakeDir,
      &self.dirs,
      "directory path is required",
    )
    .await
  }
}
