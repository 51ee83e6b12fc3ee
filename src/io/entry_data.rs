use serde::Serialize;

/// One record of a remote directory listing.
#[derive(Clone, Ord, PartialOrd, Eq, PartialEq, Debug, Hash, Serialize)]
pub(crate) struct DirectoryEntry {
  name: String,
  size: u64,
  /// Modification time as a Unix timestamp, 0 when the server did not report one.
  time: i64,
}

impl DirectoryEntry {
  pub(crate) fn new(name: impl Into<String>, size: u64, time: i64) -> Self {
    DirectoryEntry {
      name: name.into(),
      size,
      time,
    }
  }

  pub fn name(&self) -> &str {
    &self.name
  }
  pub fn size(&self) -> u64 {
    self.size
  }
  pub fn time(&self) -> i64 {
    self.time
  }
}
