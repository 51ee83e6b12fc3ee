use std::path::Path;

use path_clean::PathClean;
use strum_macros::Display;
use tracing::{debug, info};

use crate::commands::context::CommandContext;
use crate::commands::payload::Payload;
use crate::error::PluginError;
use crate::session::remote_session::RemoteSession;

/// Single-path operations applied to every argument of `mkdir`, `deldir` and `del`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Display)]
pub(crate) enum PathOperation {
  MakeDir,
  RemoveDir,
  Delete,
}

impl PathOperation {
  async fn apply(self, session: &mut dyn RemoteSession, path: &str) -> Result<(), PluginError> {
    match self {
      PathOperation::MakeDir => session.make_dir(path).await,
      PathOperation::RemoveDir => session.remove_dir(path).await,
      PathOperation::Delete => session.delete(path).await,
    }
  }
}

/// Applies `operation` to each path in order and stops at the first failure. Paths already
/// processed stay processed. An empty path fails with `missing_message` when the loop reaches
/// it, so an empty argument list connects and succeeds.
pub(crate) async fn apply_in_order(
  context: &CommandContext<'_>,
  operation: PathOperation,
  paths: &[String],
  missing_message: &str,
) -> Result<Payload, PluginError> {
  let mut session = context.connect().await?;
  let mut result = Ok(Payload::Empty);
  for path in paths {
    if path.is_empty() {
      result = Err(context.validation_error(missing_message));
      break;
    }
    debug!("{operation} '{path}'");
    if let Err(e) = operation.apply(session.as_mut(), path).await {
      result = Err(e);
      break;
    }
  }
  session.quit().await;

  if result.is_ok() {
    info!("{operation} applied to {} paths", paths.len());
  }
  result
}

/// Parent directory of a remote path, `None` when it has no meaningful parent.
pub(crate) fn remote_parent(path: &str) -> Option<String> {
  let parent = Path::new(path).parent()?.clean();
  let parent = parent.to_string_lossy();
  if parent.is_empty() || parent == "." {
    return None;
  }
  Some(parent.into_owned())
}
