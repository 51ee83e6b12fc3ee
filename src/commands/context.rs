use tracing::debug;

use crate::error::PluginError;
use crate::locale::Locale;
use crate::session::remote_session::{RemoteSession, SessionFactory};
use crate::settings::FtpSettings;

/// Everything a command needs, built once per invocation.
pub(crate) struct CommandContext<'a> {
  pub(crate) settings: &'a FtpSettings,
  pub(crate) locale: &'a Locale,
  session_factory: &'a dyn SessionFactory,
}

impl<'a> CommandContext<'a> {
  pub(crate) fn new(
    settings: &'a FtpSettings,
    locale: &'a Locale,
    session_factory: &'a dyn SessionFactory,
  ) -> Self {
    CommandContext {
      settings,
      locale,
      session_factory,
    }
  }

  /// Opens an authenticated session. The caller must quit it.
  pub(crate) async fn connect(&self) -> Result<Box<dyn RemoteSession>, PluginError> {
    debug!("Connecting to {}", self.settings.address());
    self.session_factory.connect(self.settings).await
  }

  /// A [`PluginError::ValidationError`] with the localized `message`.
  pub(crate) fn validation_error(&self, message: &str) -> PluginError {
    PluginError::ValidationError(self.locale.get(message))
  }
}
