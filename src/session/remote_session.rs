use std::io::Read;

use async_trait::async_trait;

use crate::error::PluginError;
use crate::io::entry_data::DirectoryEntry;
use crate::settings::FtpSettings;

/// An authenticated session with the remote server, valid for one command.
#[async_trait]
pub(crate) trait RemoteSession: Send {
  async fn make_dir(&mut self, path: &str) -> Result<(), PluginError>;

  async fn remove_dir(&mut self, path: &str) -> Result<(), PluginError>;

  async fn delete(&mut self, path: &str) -> Result<(), PluginError>;

  /// Uploads everything `reader` yields to `path`, returning the number of bytes sent.
  async fn store(
    &mut self,
    path: &str,
    reader: Box<dyn Read + Send>,
  ) -> Result<u64, PluginError>;

  async fn list(&mut self, path: &str) -> Result<Vec<DirectoryEntry>, PluginError>;

  /// Ends the session. Never fails, calling it again does nothing.
  async fn quit(&mut self);
}

/// Opens sessions. The caller must [`RemoteSession::quit`] every session it gets.
#[async_trait]
pub(crate) trait SessionFactory: Send + Sync {
  async fn connect(&self, settings: &FtpSettings) -> Result<Box<dyn RemoteSession>, PluginError>;
}
