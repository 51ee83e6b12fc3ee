//! Contains implementation of the FTP client session.
pub(crate) mod ftp_session;
pub(crate) mod remote_session;
