use async_trait::async_trait;

use crate::commands::context::CommandContext;
use crate::commands::payload::Payload;
use crate::error::PluginError;

#[async_trait]
pub(crate) trait Executable {
  async fn execute(&self, context: &CommandContext<'_>) -> Result<Payload, PluginError>;
}
