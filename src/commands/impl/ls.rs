use async_trait::async_trait;
use clap::Args;
use tracing::debug;

use crate::commands::context::CommandContext;
use crate::commands::executable::Executable;
use crate::commands::payload::Payload;
use crate::error::PluginError;

#[derive(Clone, Debug, PartialEq, Eq, Args)]
pub(crate) struct Ls {
  /// Remote directory, the current one when omitted
  #[arg(allow_hyphen_values = true)]
  pub(crate) path: Option<String>,
}

#[async_trait]
impl Executable for Ls {
  /// A single entry is returned as an object, several as a list.
  #[tracing::instrument(skip(self, context))]
  async fn execute(&self, context: &CommandContext<'_>) -> Result<Payload, PluginError> {
    let path = match self.path.as_deref() {
      Some(p) if !p.is_empty() => p,
      _ => ".",
    };

    let mut session = context.connect().await?;
    let result = session.list(path).await;
    session.quit().await;

    let mut entries = result?;
    debug!(
      "Listed {} entries in '{path}', {} bytes in total",
      entries.len(),
      entries.iter().map(|e| e.size()).sum::<u64>()
    );
    match entries.len() {
      0 => Err(PluginError::EmptyResultError(
        context.locale.get("ftp server returned no entries"),
      )),
      1 => Ok(Payload::Entry(entries.remove(0))),
      _ => Ok(Payload::Entries(entries)),
    }
  }
}
