//! Sub-commands and their handlers.

pub(crate) mod command;
pub(crate) mod context;
pub(crate) mod executable;
pub(crate) mod r#impl;
pub(crate) mod payload;
