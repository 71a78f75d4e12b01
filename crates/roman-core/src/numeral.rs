//! A canonical numeral as a value type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::codec::{decode, encode};
use crate::error::NumeralError;
use crate::validate::{check, Mode};

/// A numeral string that is known to be in canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Numeral(String);

impl Numeral {
    pub fn new(n: i64) -> Result<Self, NumeralError> {
        encode(n).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decoded value. `None` only for encodings above 3999, which the
    /// structural rules refuse to decode.
    pub fn value(&self) -> Option<i64> {
        decode(&self.0).ok()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl FromStr for Numeral {
    type Err = NumeralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        check(s, Mode::Strict).map_err(|_| NumeralError::parse(s))?;
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<i64> for Numeral {
    type Error = NumeralError;

    fn try_from(n: i64) -> Result<Self, Self::Error> {
        Self::new(n)
    }
}

impl AsRef<str> for Numeral {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Numeral {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Numeral {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
