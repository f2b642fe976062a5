use std::fmt;

use chrono::{DateTime, Utc};

use serde::{Deserialize, Serialize};

use uuid::Uuid;

use crate::domain::{EmailAddress, PersonName, PhoneNumber, PostalAddress, VoucherCode};

/// Validated submission request, not yet stored
#[derive(Debug, Clone)]
pub struct NewSubmission {
    pub name: PersonName,
    pub phone: PhoneNumber,
    pub email: EmailAddress,
    pub address: PostalAddress,
    pub voucher: VoucherCode,
}

/// Review state of a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    New,
    Processed,
}

impl SubmissionStatus {
    pub fn toggled(self) -> Self {
        match self {
            Self::New => Self::Processed,
            Self::Processed => Self::New,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::New => "new",
            Self::Processed => "processed",
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stored submission record
///
/// Field names follow the persisted JSON layout (`createdAt` in camel case).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub address: String,
    pub voucher: String,
    /// Set once on creation
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub status: SubmissionStatus,
}

impl Submission {
    pub fn toggle_status(&mut self) {
        self.status = self.status.toggled();
    }
}

impl From<NewSubmission> for Submission {
    /// Stamp a fresh id and creation time onto a validated request
    fn from(new: NewSubmission) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: new.name.into(),
            phone: new.phone.into(),
            email: new.email.into(),
            address: new.address.into(),
            voucher: new.voucher.into(),
            created_at: Utc::now(),
            status: SubmissionStatus::New,
        }
    }
}
