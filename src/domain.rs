mod email_address;
mod person_name;
mod phone_number;
mod postal_address;
mod voucher_code;

pub use email_address::EmailAddress;
pub use person_name::PersonName;
pub use phone_number::PhoneNumber;
pub use postal_address::PostalAddress;
pub use voucher_code::VoucherCode;

use crate::error::{Error, Result};

/// Trim a required text field, rejecting blank values
fn required_field(value: &str, field: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(Error::ParsingError(format!("{} cannot be empty", field)));
    }
    Ok(value.to_string())
}
