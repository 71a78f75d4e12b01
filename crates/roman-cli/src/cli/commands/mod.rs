pub mod decode;
pub mod dispatch;
pub mod encode;
pub mod validate;

pub use dispatch::dispatch;

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;

use crate::cli::args::OutputFormat;

/// Writes one result line to stdout in the requested format.
pub(crate) fn emit<W: Write, T: Serialize>(
    out: &mut W,
    format: OutputFormat,
    record: &T,
    text: impl FnOnce() -> String,
) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", text()),
        OutputFormat::Json => {
            let line = serde_json::to_string(record).context("failed to serialize result")?;
            writeln!(out, "{line}")
        }
    }
    .context("failed to write to stdout")
}

#[derive(Debug, Serialize)]
pub(crate) struct ErrorRecord {
    pub kind: &'static str,
    pub message: String,
}

impl From<&roman_core::NumeralError> for ErrorRecord {
    fn from(err: &roman_core::NumeralError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}
