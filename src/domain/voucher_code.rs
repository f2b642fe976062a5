use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A voucher code, normalized to uppercase with surrounding whitespace removed
#[derive(Debug, PartialEq, Clone)]
pub struct VoucherCode(String);

impl FromStr for VoucherCode {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        let value = super::required_field(value, "Voucher code")?;
        Ok(Self(value.to_uppercase()))
    }
}

impl AsRef<str> for VoucherCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<VoucherCode> for String {
    fn from(value: VoucherCode) -> Self {
        value.0
    }
}

impl fmt::Display for VoucherCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
