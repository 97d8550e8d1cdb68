//! Test utilities for property-based testing
//!
//! This module provides generators and helpers for proptest.

#[cfg(test)]
pub mod generators {
    use proptest::prelude::*;

    use crate::core::environment::ForcedMode;

    /// Generate a target identifier (lowercase alphanumeric with hyphens)
    pub fn target_id() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9-]{0,20}[a-z0-9]?".prop_filter("Id must not be empty", |s| !s.is_empty())
    }

    /// Generate free text that may contain the record delimiter
    pub fn free_text() -> impl Strategy<Value = String> {
        "[A-Za-z0-9 |,.()-]{0,40}"
    }

    /// Generate an optional forced mode
    pub fn forced_mode() -> impl Strategy<Value = Option<ForcedMode>> {
        prop_oneof![
            Just(None),
            Just(Some(ForcedMode::Host)),
            Just(Some(ForcedMode::System)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::generators::*;
    use crate::config::defaults::MIN_PROPTEST_ITERATIONS;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(MIN_PROPTEST_ITERATIONS))]

        #[test]
        fn test_target_id_generator(id in target_id()) {
            prop_assert!(!id.is_empty());
            prop_assert!(id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        }

        #[test]
        fn test_free_text_generator(text in free_text()) {
            prop_assert!(text.len() <= 40);
            prop_assert!(!text.contains('"'));
        }
    }
}
