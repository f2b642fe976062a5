use std::str::FromStr;

use crate::error::{Error, Result};

/// Contact phone number, free-form
#[derive(Debug, PartialEq, Clone)]
pub struct PhoneNumber(String);

impl FromStr for PhoneNumber {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        super::required_field(value, "Phone number").map(Self)
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<PhoneNumber> for String {
    fn from(value: PhoneNumber) -> Self {
        value.0
    }
}
