//! Writes the single result envelope of an invocation.

use std::io::Write;
use std::process::ExitCode;

use serde::Serialize;
use tracing::error;

use crate::commands::payload::Payload;

#[derive(Debug, Serialize)]
struct Envelope<'a> {
  success: bool,
  message: &'a str,
  data: &'a Payload,
}

/// `{"success":true,"message":"success","data":...}`, exit status 0.
pub(crate) fn success(out: &mut impl Write, payload: &Payload) -> ExitCode {
  let envelope = Envelope {
    success: true,
    message: "success",
    data: payload,
  };
  if write(out, &envelope) {
    ExitCode::SUCCESS
  } else {
    ExitCode::FAILURE
  }
}

/// `{"success":false,"message":...,"data":null}`, exit status 1.
pub(crate) fn failure(out: &mut impl Write, message: &str) -> ExitCode {
  let envelope = Envelope {
    success: false,
    message,
    data: &Payload::Empty,
  };
  write(out, &envelope);
  ExitCode::FAILURE
}

fn write(out: &mut impl Write, envelope: &Envelope) -> bool {
  let result = serde_json::to_writer(&mut *out, envelope)
    .map_err(std::io::Error::from)
    .and_then(|_| writeln!(out))
    .and_then(|_| out.flush());
  if let Err(e) = result {
    error!("Failed to write result! {e}");
    return false;
  }
  true
}
