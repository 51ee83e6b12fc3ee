//! Session with a real FTP server.
//!
//! The protocol is handled by the blocking [`FtpStream`], every call runs on tokio's blocking
//! pool. The stream is moved into the blocking task and handed back once the call returns.

use std::io::Read;

use async_trait::async_trait;
use suppaftp::types::{FileType, Response};
use suppaftp::{FtpError, FtpResult, FtpStream};
use tokio::task;
use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::error::PluginError;
use crate::io::entry_data::DirectoryEntry;
use crate::io::list_parser::parse_listing;
use crate::session::remote_session::{RemoteSession, SessionFactory};
use crate::settings::FtpSettings;

pub(crate) struct FtpSession {
  /// `None` once the session is closed.
  stream: Option<FtpStream>,
}

/// The reply line of a refused command, e.g. `550 Permission denied`.
fn reply_line(response: &Response) -> String {
  String::from_utf8_lossy(&response.body).trim().to_string()
}

fn to_plugin_error(error: FtpError) -> PluginError {
  match error {
    FtpError::ConnectionError(e) => PluginError::ConnectionError(e.to_string()),
    FtpError::UnexpectedResponse(response) => {
      PluginError::RemoteOperationError(reply_line(&response))
    }
    other => PluginError::ProtocolError(other.to_string()),
  }
}

impl FtpSession {
  /// Connects, logs in and switches to binary transfers.
  ///
  /// Once connected, any failure closes the session before the error is returned. Rejected
  /// credentials give [`PluginError::AuthenticationError`].
  #[tracing::instrument(skip(settings), fields(address = %settings.address()))]
  pub(crate) async fn open(settings: &FtpSettings) -> Result<Self, PluginError> {
    let address = settings.address();
    let stream = task::spawn_blocking(move || FtpStream::connect(address.as_str()))
      .await
      .map_err(|e| PluginError::ConnectionError(format!("FTP task failed! {e}")))?
      .map_err(|e| {
        PluginError::ConnectionError(format!(
          "Failed to connect to {}! {e}",
          settings.address()
        ))
      })?;
    let mut session = FtpSession {
      stream: Some(stream),
    };

    let username = settings.username.clone();
    let password = Zeroizing::new(settings.password.clone());
    let login = session
      .run_raw(move |s| s.login(username.as_str(), password.as_str()))
      .await
      .and_then(|r| {
        r.map_err(|e| match to_plugin_error(e) {
          PluginError::RemoteOperationError(m) => PluginError::AuthenticationError(m),
          other => other,
        })
      });
    if let Err(e) = login {
      session.quit().await;
      return Err(e);
    }
    info!("Logged in as '{}'", settings.username);
    debug!("Base path '{}' is not applied to paths", settings.base_path);

    if let Err(e) = session.run(|s| s.transfer_type(FileType::Binary)).await {
      session.quit().await;
      return Err(e);
    }
    Ok(session)
  }

  /// Runs a blocking call on the stream.
  async fn run_raw<T, F>(&mut self, operation: F) -> Result<FtpResult<T>, PluginError>
  where
    T: Send + 'static,
    F: FnOnce(&mut FtpStream) -> FtpResult<T> + Send + 'static,
  {
    let mut stream = self
      .stream
      .take()
      .ok_or_else(|| PluginError::ConnectionError("Session is closed!".to_string()))?;
    let (stream, result) = task::spawn_blocking(move || {
      let result = operation(&mut stream);
      (stream, result)
    })
    .await
    .map_err(|e| PluginError::ConnectionError(format!("FTP task failed! {e}")))?;
    self.stream = Some(stream);
    Ok(result)
  }

  async fn run<T, F>(&mut self, operation: F) -> Result<T, PluginError>
  where
    T: Send + 'static,
    F: FnOnce(&mut FtpStream) -> FtpResult<T> + Send + 'static,
  {
    self.run_raw(operation).await?.map_err(to_plugin_error)
  }
}

#[async_trait]
impl RemoteSession for FtpSession {
  #[tracing::instrument(skip(self))]
  async fn make_dir(&mut self, path: &str) -> Result<(), PluginError> {
    let path = path.to_string();
    self.run(move |s| s.mkdir(path.as_str())).await
  }

  #[tracing::instrument(skip(self))]
  async fn remove_dir(&mut self, path: &str) -> Result<(), PluginError> {
    let path = path.to_string();
    self.run(move |s| s.rmdir(path.as_str())).await
  }

  #[tracing::instrument(skip(self))]
  async fn delete(&mut self, path: &str) -> Result<(), PluginError> {
    let path = path.to_string();
    self.run(move |s| s.rm(path.as_str())).await
  }

  #[tracing::instrument(skip(self, reader))]
  async fn store(
    &mut self,
    path: &str,
    mut reader: Box<dyn Read + Send>,
  ) -> Result<u64, PluginError> {
    let path = path.to_string();
    let sent = self
      .run(move |s| s.put_file(path.as_str(), &mut reader))
      .await?;
    info!("Stored {sent} bytes");
    Ok(sent)
  }

  #[tracing::instrument(skip(self))]
  async fn list(&mut self, path: &str) -> Result<Vec<DirectoryEntry>, PluginError> {
    let path = path.to_string();
    let lines = self.run(move |s| s.list(Some(path.as_str()))).await?;
    let entries = parse_listing(&lines);
    debug!("LIST returned {} lines, {} entries", lines.len(), entries.len());
    Ok(entries)
  }

  async fn quit(&mut self) {
    if self.stream.is_none() {
      return;
    }
    if let Err(e) = self.run(|s| s.quit()).await {
      debug!("QUIT failed: {e}");
    }
    self.stream = None;
  }
}

#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct FtpSessionFactory;

#[async_trait]
impl SessionFactory for FtpSessionFactory {
  async fn connect(&self, settings: &FtpSettings) -> Result<Box<dyn RemoteSession>, PluginError> {
    let session = FtpSession::open(settings).await?;
    Ok(Box::new(session))
  }
}
