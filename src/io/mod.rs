//! Directory entries and the parsing of remote listings.
pub(crate) mod entry_data;
pub(crate) mod list_parser;
