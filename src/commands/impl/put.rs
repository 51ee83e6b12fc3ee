use async_trait::async_trait;
use clap::Args;
use tokio::fs::File;
use tracing::{debug, info};

use crate::commands::context::CommandContext;
use crate::commands::executable::Executable;
use crate::commands::payload::Payload;
use crate::commands::r#impl::shared::remote_parent;
use crate::error::PluginError;

#[derive(Clone, Debug, PartialEq, Eq, Args)]
pub(crate) struct Put {
  /// Local file to upload
  #[arg(allow_hyphen_values = true)]
  pub(crate) local_path: Option<String>,
  /// Destination on the server
  #[arg(allow_hyphen_values = true)]
  pub(crate) remote_path: Option<String>,
}

#[async_trait]
impl Executable for Put {
  /// Opens the local file first, so a missing file never touches the server. The parent of the
  /// remote path is created on a best effort basis.
  #[tracing::instrument(skip(self, context))]
  async fn execute(&self, context: &CommandContext<'_>) -> Result<Payload, PluginError> {
    let (local_path, remote_path) = match (self.local_path.as_deref(), self.remote_path.as_deref()) {
      (Some(l), Some(r)) if !l.is_empty() && !r.is_empty() => (l, r),
      _ => return Err(context.validation_error("local and remote file paths are required")),
    };

    let file = File::open(local_path)
      .await
      .map_err(|e| PluginError::IoError(local_path.to_string(), e))?;

    let mut session = context.connect().await?;
    if let Some(parent) = remote_parent(remote_path) {
      if let Err(e) = session.make_dir(&parent).await {
        debug!("Parent directory '{parent}' not created: {e}");
      }
    }
    let result = session.store(remote_path, Box::new(file.into_std().await)).await;
    session.quit().await;

    let sent = result?;
    info!("Uploaded '{local_path}' to '{remote_path}' ({sent} bytes)");
    Ok(Payload::Empty)
  }
}
