use serde_json::{Map, Value};

use super::PatchError;

/// Wire-side partial-update payload: the string-keyed mapping of scalar or
/// null values decoded from a request body.
///
/// Decoders consume fields with the `take_*` helpers, then call
/// [`PatchPayload::expect_drained`] so leftover keys surface as
/// [`PatchError::UnknownField`]. The identity key must be rejected first via
/// [`PatchPayload::reject_identity`], so an identity violation wins over any
/// other problem in the same payload.
#[derive(Debug, Clone, Default)]
pub struct PatchPayload {
    fields: Map<String, Value>,
}

impl PatchPayload {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Fails if the payload contains the record's identity key.
    pub fn reject_identity(&self, field: &'static str) -> Result<(), PatchError> {
        if self.fields.contains_key(field) {
            return Err(PatchError::IdentityFieldNotAllowed(field));
        }
        Ok(())
    }

    /// Consumes a required-string field. Absent → `None`; null or any
    /// non-string value is rejected.
    pub fn take_string(&mut self, field: &'static str) -> Result<Option<String>, PatchError> {
        match self.fields.remove(field) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(_) => Err(PatchError::InvalidValue {
                field,
                expected: "a string",
            }),
        }
    }

    /// Consumes a clearable string field. Absent → `None`; null →
    /// `Some(None)` (clear); a string → `Some(Some(..))`.
    pub fn take_nullable_string(
        &mut self,
        field: &'static str,
    ) -> Result<Option<Option<String>>, PatchError> {
        match self.fields.remove(field) {
            None => Ok(None),
            Some(Value::Null) => Ok(Some(None)),
            Some(Value::String(s)) => Ok(Some(Some(s))),
            Some(_) => Err(PatchError::InvalidValue {
                field,
                expected: "a string or null",
            }),
        }
    }

    /// Consumes an unsigned-integer field. Fractional, negative, or
    /// out-of-range numbers are rejected along with non-numbers.
    pub fn take_u32(&mut self, field: &'static str) -> Result<Option<u32>, PatchError> {
        let invalid = || PatchError::InvalidValue {
            field,
            expected: "an unsigned integer",
        };
        match self.fields.remove(field) {
            None => Ok(None),
            Some(Value::Number(n)) => {
                let raw = n.as_u64().ok_or_else(invalid)?;
                u32::try_from(raw).map(Some).map_err(|_| invalid())
            }
            Some(_) => Err(invalid()),
        }
    }

    /// Fails on the first field no decoder consumed.
    pub fn expect_drained(self) -> Result<(), PatchError> {
        match self.fields.into_iter().next() {
            None => Ok(()),
            Some((key, _)) => Err(PatchError::UnknownField(key)),
        }
    }
}
