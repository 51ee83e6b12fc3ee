//! Contains actual implementations of commands.

pub(crate) mod check;
pub(crate) mod del;
pub(crate) mod deldir;
pub(crate) mod get;
pub(crate) mod ls;
pub(crate) mod mkdir;
pub(crate) mod put;
pub(crate) mod shared;
