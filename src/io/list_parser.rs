//! Turns the lines of a `LIST` reply into [`DirectoryEntry`] values.
//!
//! Lines are parsed by [`suppaftp::list::File`], which understands Unix `ls -l` and DOS/IIS
//! listings. Lines it cannot parse (such as `total 8`) are skipped, as are `.` and `..`.

use chrono::{DateTime, Utc};
use suppaftp::list::File;
use tracing::trace;

use crate::io::entry_data::DirectoryEntry;

impl From<&File> for DirectoryEntry {
  fn from(file: &File) -> Self {
    let modified: DateTime<Utc> = file.modified().into();
    DirectoryEntry::new(file.name(), file.size() as u64, modified.timestamp())
  }
}

pub(crate) fn parse_listing(lines: &[String]) -> Vec<DirectoryEntry> {
  lines
    .iter()
    .map(|l| l.trim_end_matches(['\r', '\n']))
    .filter(|l| !l.trim().is_empty())
    .filter_map(|line| match line.parse::<File>() {
      Ok(file) => Some(DirectoryEntry::from(&file)),
      Err(e) => {
        trace!("Skipping listing line '{line}': {e:?}");
        None
      }
    })
    .filter(|e| e.name() != "." && e.name() != "..")
    .collect()
}
