use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Name of the person claiming a voucher
#[derive(Debug, PartialEq, Clone)]
pub struct PersonName(String);

impl FromStr for PersonName {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        super::required_field(value, "Name").map(Self)
    }
}

impl AsRef<str> for PersonName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<PersonName> for String {
    fn from(value: PersonName) -> Self {
        value.0
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
