use anyhow::Result;
use serde::Serialize;
use std::io::Write;

use super::{emit, ErrorRecord};
use crate::cli::args::{DecodeArgs, OutputFormat};
use crate::exit_codes;

#[derive(Debug, Serialize)]
struct DecodeRecord<'a> {
    input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorRecord>,
}

pub fn run<W: Write>(args: DecodeArgs, format: OutputFormat, out: &mut W) -> Result<i32> {
    let mut code = exit_codes::SUCCESS;
    for input in &args.numerals {
        match roman_core::decode(input) {
            Ok(value) => {
                let record = DecodeRecord {
                    input,
                    value: Some(value),
                    error: None,
                };
                emit(out, format, &record, || value.to_string())?;
            }
            Err(err) => {
                code = exit_codes::INVALID_INPUT;
                if format == OutputFormat::Text {
                    eprintln!("error: {err}");
                    continue;
                }
                let record = DecodeRecord {
                    input,
                    value: None,
                    error: Some(ErrorRecord::from(&err)),
                };
                emit(out, format, &record, String::new)?;
            }
        }
    }
    Ok(code)
}
