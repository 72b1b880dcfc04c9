use crate::actor_framework::Entity;
use crate::domain::{User, UserCreate, UserPatch};
use crate::patch::PatchError;

impl Entity for User {
    type Id = u64;
    type CreatePayload = UserCreate;
    type Patch = UserPatch;

    fn id(&self) -> &u64 {
        &self.id
    }

    fn from_create(id: u64, payload: UserCreate) -> Result<Self, PatchError> {
        let user = Self {
            id,
            name: payload.name,
            email: payload.email,
            age: payload.age,
        };
        user.validate()?;
        Ok(user)
    }

    /// Overlays the patch's fields on a copy of the record, keeping the
    /// identity, and re-validates the result. The base is untouched.
    fn apply_patch(&self, patch: &UserPatch) -> Result<Self, PatchError> {
        let mut next = self.clone();
        if let Some(name) = &patch.name {
            next.name = name.clone();
        }
        if let Some(email) = &patch.email {
            next.email = email.clone();
        }
        if let Some(age) = patch.age {
            next.age = age;
        }
        next.validate()?;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann() -> User {
        User {
            id: 1,
            name: "Ann".to_string(),
            email: "ann@x.com".to_string(),
            age: 30,
        }
    }

    #[test]
    fn patch_overwrites_named_fields_only() {
        let patched = ann()
            .apply_patch(&UserPatch { age: Some(31), ..UserPatch::default() })
            .unwrap();
        assert_eq!(
            patched,
            User {
                id: 1,
                name: "Ann".to_string(),
                email: "ann@x.com".to_string(),
                age: 31,
            }
        );
    }

    #[test]
    fn empty_patch_returns_an_equal_record() {
        let base = ann();
        assert_eq!(base.apply_patch(&UserPatch::default()).unwrap(), base);
    }

    #[test]
    fn base_record_is_not_mutated() {
        let base = ann();
        let _ = base
            .apply_patch(&UserPatch { name: Some("Beth".to_string()), ..UserPatch::default() })
            .unwrap();
        assert_eq!(base, ann());
    }

    #[test]
    fn patched_record_is_revalidated() {
        let err = ann()
            .apply_patch(&UserPatch {
                email: Some("not-an-email".to_string()),
                ..UserPatch::default()
            })
            .unwrap_err();
        assert!(matches!(
            err,
            PatchError::ValidationFailed { field: "email", .. }
        ));
    }

    #[test]
    fn create_validates_the_payload() {
        let err = User::from_create(
            1,
            UserCreate {
                name: "Ann".to_string(),
                email: "ann@x.com".to_string(),
                age: 0,
            },
        )
        .unwrap_err();
        assert!(matches!(
            err,
            PatchError::ValidationFailed { field: "age", .. }
        ));
    }
}
