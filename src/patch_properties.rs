//! Property tests for the merge-patch algebra over the user record.

use proptest::prelude::*;

use crate::actor_framework::Entity;
use crate::domain::{User, UserPatch};

fn arb_user() -> impl Strategy<Value = User> {
    (1u64..1000, "[A-Za-z]{1,12}", "[a-z]{1,8}@[a-z]{1,8}\\.com", 1u32..120u32)
        .prop_map(|(id, name, email, age)| User { id, name, email, age })
}

fn arb_patch() -> impl Strategy<Value = UserPatch> {
    (
        proptest::option::of("[A-Za-z]{1,12}"),
        proptest::option::of("[a-z]{1,8}@[a-z]{1,8}\\.com"),
        proptest::option::of(1u32..120u32),
    )
        .prop_map(|(name, email, age)| UserPatch { name, email, age })
}

proptest! {
    #[test]
    fn empty_patch_is_identity(user in arb_user()) {
        let patched = user.apply_patch(&UserPatch::default()).unwrap();
        prop_assert_eq!(patched, user);
    }

    #[test]
    fn identity_survives_every_accepted_patch(user in arb_user(), patch in arb_patch()) {
        let patched = user.apply_patch(&patch).unwrap();
        prop_assert_eq!(patched.id, user.id);
    }

    #[test]
    fn disjoint_patches_compose(
        user in arb_user(),
        name in "[A-Za-z]{1,12}",
        age in 1u32..120u32,
    ) {
        let p_name = UserPatch { name: Some(name.clone()), ..UserPatch::default() };
        let p_age = UserPatch { age: Some(age), ..UserPatch::default() };
        let merged = UserPatch { name: Some(name), age: Some(age), ..UserPatch::default() };

        let sequential = user.apply_patch(&p_name).unwrap().apply_patch(&p_age).unwrap();
        let one_shot = user.apply_patch(&merged).unwrap();
        prop_assert_eq!(sequential, one_shot);
    }

    #[test]
    fn later_write_to_a_field_wins(
        user in arb_user(),
        first in 1u32..120u32,
        second in 1u32..120u32,
    ) {
        let patched = user
            .apply_patch(&UserPatch { age: Some(first), ..UserPatch::default() }).unwrap()
            .apply_patch(&UserPatch { age: Some(second), ..UserPatch::default() }).unwrap();
        prop_assert_eq!(patched.age, second);
    }
}
