//! Integer <-> numeral conversion.

use crate::error::{DomainError, NumeralError};
use crate::symbols::{next_symbol, SYMBOLS};
use crate::validate::check_structure;

/// Encodes a positive integer in canonical form.
///
/// There is no upper bound: values above 3999 are written with four or more
/// leading `M`, which the structural check will later refuse to decode. The
/// output holds one `M` per thousand, so very large inputs (near `i64::MAX`)
/// exhaust memory and abort; callers taking untrusted input should cap it.
pub fn encode(n: i64) -> Result<String, NumeralError> {
    if n == 0 {
        return Err(DomainError::Zero.into());
    }
    if n < 0 {
        return Err(DomainError::Negative.into());
    }

    let mut remaining = n;
    let mut out = String::new();
    for symbol in SYMBOLS.iter() {
        while remaining >= symbol.value {
            out.push_str(symbol.text);
            remaining -= symbol.value;
        }
        if remaining == 0 {
            break;
        }
    }

    tracing::trace!(n, numeral = %out, "encoded");
    Ok(out)
}

/// Decodes a structurally valid numeral.
///
/// Non-canonical but structurally legal input such as `XCXL` decodes to the
/// sum of its symbols (130). Use [`crate::is_valid`] in strict mode to reject
/// such input first.
pub fn decode(s: &str) -> Result<i64, NumeralError> {
    if let Err(violation) = check_structure(s) {
        tracing::debug!(input = s, %violation, "decode rejected");
        return Err(NumeralError::parse(s));
    }

    let mut total: i64 = 0;
    let mut pos = 0;
    while pos < s.len() {
        let symbol = next_symbol(&s[pos..]).ok_or_else(|| NumeralError::parse(s))?;
        total = total
            .checked_add(symbol.value)
            .ok_or_else(|| NumeralError::parse(s))?;
        pos += symbol.text.len();
    }

    tracing::trace!(input = s, total, "decoded");
    Ok(total)
}
