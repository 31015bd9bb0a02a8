//! Shared proptest strategies for unit tests.

use proptest::prelude::*;

use crate::account::ParentResourceType;

/// Names that satisfy the name grammar.
pub(crate) fn arb_valid_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_-]{0,63}").unwrap()
}

/// Parent types outside {repo, space}.
pub(crate) fn arb_invalid_parent_type() -> impl Strategy<Value = ParentResourceType> {
    prop::string::string_regex("[a-zA-Z_ ]{0,12}")
        .unwrap()
        .prop_filter("must not be a known parent type", |raw| {
            raw != "repo" && raw != "space"
        })
        .prop_map(ParentResourceType::from)
}

/// Non-empty plaintext passwords.
pub(crate) fn arb_password() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ -~]{1,32}").unwrap()
}
