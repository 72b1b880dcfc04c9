use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::validate_email;
use crate::patch::{PatchError, PatchPayload};

/// An employee record.
///
/// Constraints: both name parts must not be blank and `email` must be
/// well-formed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Payload for creating (or fully replacing) an employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Typed partial update for an employee.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeePatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

impl Employee {
    pub fn validate(&self) -> Result<(), PatchError> {
        if self.first_name.trim().is_empty() {
            return Err(PatchError::ValidationFailed {
                field: "first_name",
                reason: "must not be blank".to_string(),
            });
        }
        if self.last_name.trim().is_empty() {
            return Err(PatchError::ValidationFailed {
                field: "last_name",
                reason: "must not be blank".to_string(),
            });
        }
        validate_email(&self.email)
            .map_err(|reason| PatchError::ValidationFailed { field: "email", reason })?;
        Ok(())
    }
}

impl EmployeePatch {
    /// Decodes a raw string-keyed payload into a typed patch.
    pub fn from_payload(fields: Map<String, Value>) -> Result<Self, PatchError> {
        let mut payload = PatchPayload::new(fields);
        payload.reject_identity("id")?;
        let patch = Self {
            first_name: payload.take_string("first_name")?,
            last_name: payload.take_string("last_name")?,
            email: payload.take_string("email")?,
        };
        payload.expect_drained()?;
        Ok(patch)
    }
}
