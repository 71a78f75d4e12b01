//! Roman numeral encoding, decoding and validation.
//!
//! ```
//! use roman_core::{decode, encode, is_valid};
//!
//! assert_eq!(encode(1954).unwrap(), "MCMLIV");
//! assert_eq!(decode("MCMLIV").unwrap(), 1954);
//! assert!(is_valid("XCXL", false));
//! assert!(!is_valid("XCXL", true));
//! ```
//!
//! All operations are pure and share one read-only symbol table.

pub mod codec;
mod error;
pub mod numeral;
pub mod symbols;
pub mod validate;

pub use codec::{decode, encode};
pub use error::{DomainError, NumeralError};
pub use numeral::Numeral;
pub use validate::{check, is_valid, Mode, Violation};
