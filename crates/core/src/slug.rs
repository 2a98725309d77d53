//! Slug canonicalization.
//!
//! The single place the slug rule lives. Every creation path and the migrator
//! derive slugs through [`canonicalize`]; lookups normalize their input
//! through [`normalize_lookup`]. Historically two creation paths disagreed
//! (one lower-cased everything, one capitalized the first letter); keeping
//! one implementation point is what closes that bug class.

use unicode_normalization::UnicodeNormalization;

/// Derive the canonical slug for a display name.
///
/// Lowercase ASCII alphanumerics with every separator removed:
/// `"Little Angels Public School"` → `"littleangelspublicschool"`.
///
/// Diacritics are folded to their base letter (NFKD) before the ASCII strip,
/// so `"École"` becomes `"ecole"` rather than `"cole"`. Characters with no
/// ASCII base are dropped entirely; a name can therefore canonicalize to the
/// empty string, which is never a valid slug; creation paths reject it
/// before persisting (see [`crate::SlugError::EmptySlug`]).
///
/// Pure and deterministic: no locale, clock, or call-history dependence.
#[must_use]
pub fn canonicalize(name: &str) -> String {
    name.nfkd()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .concat()
        .to_lowercase()
}

/// Normalize an inbound slug parameter for lookup.
///
/// Removes whitespace and lower-cases, nothing else. Punctuation is kept:
/// the input is expected to already be slug-shaped, and stripping it here
/// would let a malformed parameter alias a different record's slug.
#[must_use]
pub fn normalize_lookup(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().concat().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_case_and_whitespace() {
        assert_eq!(canonicalize("Little Angels Public School"), "littleangelspublicschool");
        assert_eq!(canonicalize("little   angels PUBLIC   school"), "littleangelspublicschool");
    }

    #[test]
    fn strips_punctuation() {
        assert_eq!(canonicalize("St. Mary's High-School!"), "stmaryshighschool");
    }

    #[test]
    fn degenerate_inputs_yield_empty() {
        assert_eq!(canonicalize(""), "");
        assert_eq!(canonicalize("   "), "");
        assert_eq!(canonicalize("!!!"), "");
    }

    #[test]
    fn idempotent() {
        for s in ["Little Angels Public School", "St. Mary's High-School!", "", "École 42"] {
            let once = canonicalize(s);
            assert_eq!(canonicalize(&once), once);
        }
    }

    #[test]
    fn deterministic_across_calls() {
        let first = canonicalize("Govt. Sr. Sec. School #12");
        for _ in 0..10 {
            assert_eq!(canonicalize("Govt. Sr. Sec. School #12"), first);
        }
    }

    #[test]
    fn folds_diacritics_to_base_letters() {
        assert_eq!(canonicalize("École Sainte-Thérèse"), "ecolesaintetherese");
        assert_eq!(canonicalize("Växjö Förskolan"), "vaxjoforskolan");
    }

    #[test]
    fn non_latin_scripts_strip_to_empty() {
        assert_eq!(canonicalize("学校"), "");
    }

    #[test]
    fn lookup_normalization_keeps_punctuation() {
        assert_eq!(normalize_lookup("  Little Angels  "), "littleangels");
        assert_eq!(normalize_lookup("st-marys"), "st-marys");
        assert_eq!(normalize_lookup("ABC"), "abc");
    }
}
