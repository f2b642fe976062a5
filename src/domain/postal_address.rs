use std::str::FromStr;

use crate::error::{Error, Result};

/// Optional postal address; an empty value means none was given
#[derive(Debug, PartialEq, Clone, Default)]
pub struct PostalAddress(String);

impl PostalAddress {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for PostalAddress {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        Ok(Self(value.trim().to_string()))
    }
}

impl AsRef<str> for PostalAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<PostalAddress> for String {
    fn from(value: PostalAddress) -> Self {
        value.0
    }
}
