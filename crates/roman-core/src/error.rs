//! Error types for the numeral codec.

use thiserror::Error;

/// Integer inputs that have no numeral representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("zero is not representable")]
    Zero,

    #[error("negative numbers are not representable")]
    Negative,
}

/// Codec errors. Both kinds are terminal for the call that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumeralError {
    /// Encode input outside the representable domain.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Decode input failed the structural check.
    #[error("not a valid Roman numeral: {input:?}")]
    Parse { input: String },
}

impl NumeralError {
    pub(crate) fn parse(input: &str) -> Self {
        Self::Parse {
            input: input.to_string(),
        }
    }

    /// Stable machine-readable kind, used in JSON output.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Domain(_) => "domain",
            Self::Parse { .. } => "parse",
        }
    }
}
