//! Settings loaded once at startup from the configuration file and environment.

use std::fmt::{Debug, Formatter};
use std::path::{Path, PathBuf};

use config::{Config, ConfigError};
use derive_builder::Builder;
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Used when no configuration file is given on the command line. May be absent.
pub(crate) const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Prefix of environment overrides, e.g. `BACKUP_FTP_FTP__HOST` sets `ftp.host`.
pub(crate) const ENV_PREFIX: &str = "BACKUP_FTP";

#[derive(Debug, Error)]
pub(crate) enum SettingsError {
  #[error("Failed to load configuration! {0}")]
  ConfigError(#[from] ConfigError),
  #[error("Invalid ftp port {0}!")]
  InvalidPort(i64),
}

/// Connection parameters of the FTP server.
#[derive(Clone, PartialEq, Default, Builder, Zeroize, ZeroizeOnDrop)]
#[builder(setter(into))]
pub(crate) struct FtpSettings {
  #[builder(default)]
  pub(crate) host: String,
  /// 0 when not configured.
  #[builder(default)]
  pub(crate) port: u16,
  #[builder(default)]
  pub(crate) username: String,
  #[builder(default)]
  pub(crate) password: String,
  /// Loaded for completeness, no operation prefixes paths with it.
  #[builder(default)]
  pub(crate) base_path: String,
}

impl FtpSettings {
  pub(crate) fn address(&self) -> String {
    format!("{}:{}", self.host, self.port)
  }
}

impl Debug for FtpSettings {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("FtpSettings")
      .field("host", &self.host)
      .field("port", &self.port)
      .field("username", &self.username)
      .field("password", &"****")
      .field("base_path", &self.base_path)
      .finish()
  }
}

#[derive(Debug)]
pub(crate) struct AppSettings {
  pub(crate) ftp: FtpSettings,
  pub(crate) log_level: Option<String>,
  pub(crate) log_file: Option<PathBuf>,
  pub(crate) locale: String,
}

impl AppSettings {
  /// Loads the file at `path`, or the optional [`DEFAULT_CONFIG_FILE`], then applies
  /// environment overrides.
  pub(crate) fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
    let file = match path {
      Some(p) => config::File::from(p).required(true),
      None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
    };
    let config = Config::builder()
      .add_source(file)
      .add_source(
        config::Environment::with_prefix(ENV_PREFIX)
          .prefix_separator("_")
          .separator("__"),
      )
      .build()?;
    Self::from_config(&config)
  }

  pub(crate) fn from_config(config: &Config) -> Result<Self, SettingsError> {
    let port = optional(config.get_int("ftp.port"))?.unwrap_or(0);
    let port = u16::try_from(port).map_err(|_| SettingsError::InvalidPort(port))?;

    let ftp = FtpSettings {
      host: optional(config.get_string("ftp.host"))?.unwrap_or_default(),
      port,
      username: optional(config.get_string("ftp.username"))?.unwrap_or_default(),
      password: optional(config.get_string("ftp.password"))?.unwrap_or_default(),
      base_path: optional(config.get_string("ftp.basepath"))?.unwrap_or_default(),
    };

    Ok(AppSettings {
      ftp,
      log_level: optional(config.get_string("log_level"))?,
      log_file: optional(config.get_string("log_file"))?
        .filter(|f| !f.is_empty())
        .map(PathBuf::from),
      locale: optional(config.get_string("locale"))?.unwrap_or_else(|| "en".to_string()),
    })
  }
}

/// Missing keys are not an error, wrongly typed ones are.
fn optional<T>(value: Result<T, ConfigError>) -> Result<Option<T>, SettingsError> {
  match value {
    Ok(v) => Ok(Some(v)),
    Err(ConfigError::NotFound(_)) => Ok(None),
    Err(e) => Err(e.into()),
  }
}
