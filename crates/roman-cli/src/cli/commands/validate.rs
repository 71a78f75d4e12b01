use anyhow::Result;
use roman_core::{Mode, Violation};
use serde::Serialize;
use std::io::Write;

use super::emit;
use crate::cli::args::{OutputFormat, ValidateArgs};
use crate::exit_codes;

#[derive(Debug, Serialize)]
struct ValidateRecord<'a> {
    input: &'a str,
    mode: Mode,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    violation: Option<Violation>,
}

pub fn run<W: Write>(args: ValidateArgs, format: OutputFormat, out: &mut W) -> Result<i32> {
    let mode = Mode::from(args.strict);
    let mut code = exit_codes::SUCCESS;
    for input in &args.numerals {
        let violation = roman_core::check(input, mode).err();
        if violation.is_some() {
            code = exit_codes::INVALID_INPUT;
        }
        let text = match &violation {
            None => format!("{input}: valid"),
            Some(v) => format!("{input}: invalid: {v}"),
        };
        let record = ValidateRecord {
            input,
            mode,
            valid: violation.is_none(),
            violation,
        };
        emit(out, format, &record, || text)?;
    }
    Ok(code)
}
