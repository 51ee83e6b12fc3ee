use serde::Serialize;

use crate::io::entry_data::DirectoryEntry;

/// Data carried by a successful command.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub(crate) enum Payload {
  /// Serialized as `null`.
  Empty,
  Entry(DirectoryEntry),
  Entries(Vec<DirectoryEntry>),
}
