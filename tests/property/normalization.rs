//! Normalization invariants.

use super::strategies::spanish_text_strategy;
use agrofondos::normalize;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_normalize_idempotent(text in spanish_text_strategy()) {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn prop_normalize_ascii_lowercase_trimmed(text in spanish_text_strategy()) {
        let out = normalize(&text);
        prop_assert_eq!(out.trim(), out.as_str());
        for c in out.chars() {
            prop_assert!(c.is_ascii_lowercase() || c == ' ', "unexpected {:?} in {:?}", c, out);
        }
    }

    #[test]
    fn prop_normalize_never_grows_spanish(text in spanish_text_strategy()) {
        prop_assert!(normalize(&text).chars().count() <= text.chars().count());
    }

    #[test]
    fn prop_normalize_total(text in any::<String>()) {
        // arbitrary unicode never panics
        let _ = normalize(&text);
    }
}
