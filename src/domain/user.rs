use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::validate_email;
use crate::patch::{PatchError, PatchPayload};

/// A registered user record.
///
/// Constraints: `name` must not be blank, `email` must be well-formed,
/// `age` must be positive. The `id` is assigned by the store and never
/// changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub age: u32,
}

/// Payload for creating (or fully replacing) a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    pub name: String,
    pub email: String,
    pub age: u32,
}

/// Typed partial update for a user: one optional slot per mutable field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<u32>,
}

impl User {
    /// Checks the record's field constraints.
    pub fn validate(&self) -> Result<(), PatchError> {
        if self.name.trim().is_empty() {
            return Err(PatchError::ValidationFailed {
                field: "name",
                reason: "must not be blank".to_string(),
            });
        }
        validate_email(&self.email)
            .map_err(|reason| PatchError::ValidationFailed { field: "email", reason })?;
        if self.age == 0 {
            return Err(PatchError::ValidationFailed {
                field: "age",
                reason: "must be positive".to_string(),
            });
        }
        Ok(())
    }
}

impl UserPatch {
    /// Decodes a raw string-keyed payload into a typed patch.
    ///
    /// The identity key is rejected before anything else; keys that do not
    /// name a declared mutable field fail with
    /// [`PatchError::UnknownField`].
    pub fn from_payload(fields: Map<String, Value>) -> Result<Self, PatchError> {
        let mut payload = PatchPayload::new(fields);
        payload.reject_identity("id")?;
        let patch = Self {
            name: payload.take_string("name")?,
            email: payload.take_string("email")?,
            age: payload.take_u32("age")?,
        };
        payload.expect_drained()?;
        Ok(patch)
    }
}
