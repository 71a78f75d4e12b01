use anyhow::Result;
use serde::Serialize;
use std::io::Write;

use super::{emit, ErrorRecord};
use crate::cli::args::{EncodeArgs, OutputFormat};
use crate::exit_codes;

/// Largest value the CLI will encode; output grows by one `M` per thousand.
pub const MAX_VALUE: i64 = 1_000_000;

#[derive(Debug, Serialize)]
struct EncodeRecord {
    input: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    numeral: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorRecord>,
}

pub fn run<W: Write>(args: EncodeArgs, format: OutputFormat, out: &mut W) -> Result<i32> {
    let mut code = exit_codes::SUCCESS;
    for n in args.values {
        if n > MAX_VALUE {
            code = exit_codes::INVALID_INPUT;
            let message = format!("{n} exceeds the encode limit of {MAX_VALUE}");
            if format == OutputFormat::Text {
                eprintln!("error: {message}");
                continue;
            }
            let record = EncodeRecord {
                input: n,
                numeral: None,
                error: Some(ErrorRecord {
                    kind: "limit",
                    message,
                }),
            };
            emit(out, format, &record, String::new)?;
            continue;
        }
        match roman_core::encode(n) {
            Ok(numeral) => {
                let text = numeral.clone();
                let record = EncodeRecord {
                    input: n,
                    numeral: Some(numeral),
                    error: None,
                };
                emit(out, format, &record, || text)?;
            }
            Err(err) => {
                code = exit_codes::INVALID_INPUT;
                if format == OutputFormat::Text {
                    eprintln!("error: {n}: {err}");
                    continue;
                }
                let record = EncodeRecord {
                    input: n,
                    numeral: None,
                    error: Some(ErrorRecord::from(&err)),
                };
                emit(out, format, &record, String::new)?;
            }
        }
    }
    Ok(code)
}
