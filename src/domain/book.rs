use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::patch::{PatchError, PatchPayload};

/// A catalogued book.
///
/// `author` and `published` are optional, and a patch may clear either by
/// sending null. Only `title` carries a constraint: it must not be blank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: u64,
    pub title: String,
    pub author: Option<String>,
    pub published: Option<NaiveDate>,
}

/// Payload for creating (or fully replacing) a book.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookCreate {
    pub title: String,
    pub author: Option<String>,
    pub published: Option<NaiveDate>,
}

/// Typed partial update for a book. The double-`Option` slots distinguish
/// "leave unchanged" (outer `None`) from "clear" (inner `None`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<Option<String>>,
    pub published: Option<Option<NaiveDate>>,
}

impl Book {
    pub fn validate(&self) -> Result<(), PatchError> {
        if self.title.trim().is_empty() {
            return Err(PatchError::ValidationFailed {
                field: "title",
                reason: "must not be blank".to_string(),
            });
        }
        Ok(())
    }
}

impl BookPatch {
    /// Decodes a raw string-keyed payload into a typed patch.
    ///
    /// `published` travels as an ISO-8601 date string on the wire.
    pub fn from_payload(fields: Map<String, Value>) -> Result<Self, PatchError> {
        let mut payload = PatchPayload::new(fields);
        payload.reject_identity("id")?;
        let published = match payload.take_nullable_string("published")? {
            None => None,
            Some(None) => Some(None),
            Some(Some(raw)) => {
                let date = NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|_| {
                    PatchError::InvalidValue {
                        field: "published",
                        expected: "an ISO-8601 date (YYYY-MM-DD) or null",
                    }
                })?;
                Some(Some(date))
            }
        };
        let patch = Self {
            title: payload.take_string("title")?,
            author: payload.take_nullable_string("author")?,
            published,
        };
        payload.expect_drained()?;
        Ok(patch)
    }
}
