//! Customer Model
//!
//! Customers are keyed by phone number in practice: forms look a customer
//! up by phone before creating one. Best effort only — two concurrent
//! submissions with the same new number can still create duplicates.

use serde::{Deserialize, Serialize};

/// Customer entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub customer_name: String,
    pub customer_phone: String,
}

/// Initial status of reservations and contact messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionStatus {
    Pending,
}

impl SubmissionStatus {
    /// Wire value sent in mutation variables.
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Pending => "Pending",
        }
    }
}
