//! Numeral validation.
//!
//! Structural rules, applied in order:
//!
//! 1. the string is non-empty
//! 2. only `I V X L C D M` appear
//! 3. `I X C M` repeat at most three times in a row, `V L D` never repeat
//! 4. symbols (pairs consumed greedily) never increase in value, and a
//!    subtractive pair is never followed by another of the same value
//!
//! Strict mode adds a canonical-form check: the string must equal the
//! encoding of its own decoded value.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::codec::{decode, encode};
use crate::symbols::{max_repeats, next_symbol, ORDER_SENTINEL};

/// How much to check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Rules 1-4 only.
    #[default]
    Structural,
    /// Rules 1-4 plus canonical form.
    Strict,
}

impl From<bool> for Mode {
    fn from(strict: bool) -> Self {
        if strict {
            Mode::Strict
        } else {
            Mode::Structural
        }
    }
}

/// The first rule a string broke. Positions are character offsets.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Violation {
    #[error("empty input")]
    Empty,

    #[error("invalid character {ch:?} at position {position}")]
    InvalidCharacter { ch: char, position: usize },

    #[error("{ch:?} repeated more than {max} times at position {position}")]
    TooManyRepeats { ch: char, position: usize, max: usize },

    #[error("{symbol:?} at position {position} is larger than the symbol before it")]
    OutOfOrder {
        symbol: &'static str,
        position: usize,
    },

    #[error("subtractive pair {symbol:?} repeated at position {position}")]
    RepeatedPair {
        symbol: &'static str,
        position: usize,
    },

    #[error("no symbol matches at position {position}")]
    Unmatched { position: usize },

    #[error("not in canonical form (expected {})", .canonical.as_deref().unwrap_or("no encoding"))]
    NotCanonical { canonical: Option<String> },
}

/// Returns whether `s` is a well-formed numeral. Never fails.
pub fn is_valid(s: &str, strict: bool) -> bool {
    check(s, Mode::from(strict)).is_ok()
}

/// Like [`is_valid`] but reports which rule was broken.
pub fn check(s: &str, mode: Mode) -> Result<(), Violation> {
    let result = check_structure(s).and_then(|()| match mode {
        Mode::Structural => Ok(()),
        Mode::Strict => check_canonical(s),
    });
    if let Err(violation) = &result {
        tracing::debug!(input = s, ?mode, %violation, "numeral rejected");
    }
    result
}

pub(crate) fn check_structure(s: &str) -> Result<(), Violation> {
    if s.is_empty() {
        return Err(Violation::Empty);
    }

    let mut last: Option<char> = None;
    let mut consecutive = 0usize;
    for (position, ch) in s.chars().enumerate() {
        let max = max_repeats(ch).ok_or(Violation::InvalidCharacter { ch, position })?;
        if last == Some(ch) {
            consecutive += 1;
            if consecutive >= max {
                return Err(Violation::TooManyRepeats { ch, position, max });
            }
        } else {
            consecutive = 0;
        }
        last = Some(ch);
    }

    // Every character is ASCII from here on, so byte and char offsets agree.
    let mut previous = ORDER_SENTINEL;
    let mut previous_len = 0;
    let mut pos = 0;
    while pos < s.len() {
        let symbol = next_symbol(&s[pos..]).ok_or(Violation::Unmatched { position: pos })?;
        if symbol.value > previous {
            return Err(Violation::OutOfOrder {
                symbol: symbol.text,
                position: pos,
            });
        }
        if symbol.value == previous && previous_len == 2 {
            return Err(Violation::RepeatedPair {
                symbol: symbol.text,
                position: pos,
            });
        }
        previous = symbol.value;
        previous_len = symbol.text.len();
        pos += symbol.text.len();
    }

    Ok(())
}

fn check_canonical(s: &str) -> Result<(), Violation> {
    let canonical = decode(s).and_then(encode).ok();
    if canonical.as_deref() == Some(s) {
        Ok(())
    } else {
        Err(Violation::NotCanonical { canonical })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_table() {
        let cases = [
            ("I", true),
            ("V", true),
            ("X", true),
            ("L", true),
            ("C", true),
            ("D", true),
            ("M", true),
            ("III", true),
            ("IIII", false),
            ("VV", false),
            ("XXX", true),
            ("XXXX", false),
            ("LL", false),
            ("CCC", true),
            ("CCCC", false),
            ("DD", false),
            ("MMM", true),
            ("MMMM", false),
            ("MMMCMXCIX", true),
            ("CXXX", true),
            ("IXX", false),
            ("XIX", true),
            ("IVIV", false),
            ("XCXC", false),
            ("CMCM", false),
            ("IXIXV", false),
            ("A", false),
            ("IA", false),
            ("AI", false),
            ("", false),
        ];
        for (input, expected) in cases {
            assert_eq!(is_valid(input, false), expected, "is_valid({input:?}, false)");
        }
    }

    #[test]
    fn test_strict_table() {
        let cases = [
            ("MMMCMXCIX", true),
            ("MCMLIV", true),
            ("XIX", true),
            ("XCXL", false),
            ("VIV", false),
            ("IIII", false),
        ];
        for (input, expected) in cases {
            assert_eq!(is_valid(input, true), expected, "is_valid({input:?}, true)");
        }
    }

    #[test]
    fn test_structurally_legal_but_not_canonical() {
        for input in ["XCXL", "VIV", "IXIV"] {
            assert!(is_valid(input, false), "{input} should pass rules 1-4");
            assert!(!is_valid(input, true), "{input} should fail strict");
        }
        assert_eq!(
            check("XCXL", Mode::Strict),
            Err(Violation::NotCanonical {
                canonical: Some("CXXX".to_string())
            })
        );
    }

    #[test]
    fn test_repeat_limit_boundary() {
        assert_eq!(check("III", Mode::Structural), Ok(()));
        assert_eq!(
            check("IIII", Mode::Structural),
            Err(Violation::TooManyRepeats {
                ch: 'I',
                position: 3,
                max: 3
            })
        );
        assert_eq!(
            check("LL", Mode::Structural),
            Err(Violation::TooManyRepeats {
                ch: 'L',
                position: 1,
                max: 1
            })
        );
        // A different character in between resets the run.
        assert_eq!(check("XXXIX", Mode::Structural), Ok(()));
        assert_eq!(check("CCCXCIX", Mode::Structural), Ok(()));
    }

    #[test]
    fn test_reports_first_violation() {
        assert_eq!(check("", Mode::Strict), Err(Violation::Empty));
        assert_eq!(
            check("MXA", Mode::Structural),
            Err(Violation::InvalidCharacter {
                ch: 'A',
                position: 2
            })
        );
        assert_eq!(
            check("IXX", Mode::Structural),
            Err(Violation::OutOfOrder {
                symbol: "X",
                position: 2
            })
        );
    }

    #[test]
    fn test_subtractive_pair_cannot_repeat() {
        let cases = [("IVIV", "IV", 2), ("XLXL", "XL", 2), ("MCDCD", "CD", 3)];
        for (input, symbol, position) in cases {
            assert_eq!(
                check(input, Mode::Structural),
                Err(Violation::RepeatedPair { symbol, position }),
                "check({input:?})"
            );
        }
        // Equal single symbols and a smaller pair after a pair stay legal.
        assert_eq!(check("XXX", Mode::Structural), Ok(()));
        assert_eq!(check("XCXL", Mode::Structural), Ok(()));
    }

    #[test]
    fn test_non_ascii_rejected_without_panic() {
        assert!(!is_valid("Ⅻ", false));
        assert!(!is_valid("Xé", true));
    }

    #[test]
    fn test_is_valid_is_pure() {
        for input in ["MCMLIV", "XCXL", "IXX", ""] {
            for strict in [false, true] {
                assert_eq!(is_valid(input, strict), is_valid(input, strict));
            }
        }
    }

    #[test]
    fn test_mode_from_bool() {
        assert_eq!(Mode::from(true), Mode::Strict);
        assert_eq!(Mode::from(false), Mode::Structural);
        assert_eq!(Mode::default(), Mode::Structural);
    }

    #[test]
    fn test_violation_serializes_with_rule_tag() {
        let v = Violation::OutOfOrder {
            symbol: "X",
            position: 2,
        };
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["rule"], "out_of_order");
        assert_eq!(json["symbol"], "X");
        assert_eq!(json["position"], 2);
    }
}
