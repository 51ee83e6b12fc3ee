//! Errors that end a command. Each one is reported once through the error envelope.

use std::io;

use thiserror::Error;

#[allow(clippy::enum_variant_names)]
#[derive(Debug, Error)]
pub(crate) enum PluginError {
  /// A required setting is missing or invalid.
  #[error("{0}")]
  ConfigurationError(String),
  /// A required command line argument is missing or empty.
  #[error("{0}")]
  ValidationError(String),
  /// The server could not be reached or the control connection broke.
  #[error("{0}")]
  ConnectionError(String),
  /// The server rejected the credentials.
  #[error("{0}")]
  AuthenticationError(String),
  /// The server refused a file or directory operation.
  #[error("{0}")]
  RemoteOperationError(String),
  #[error("{0}")]
  UnsupportedOperationError(String),
  /// Listing succeeded but contained nothing.
  #[error("{0}")]
  EmptyResultError(String),
  /// Local file could not be opened or read.
  #[error("{0}: {1}")]
  IoError(String, #[source] io::Error),
  /// The server sent something that is not a valid FTP reply.
  #[error("{0}")]
  ProtocolError(String),
}
