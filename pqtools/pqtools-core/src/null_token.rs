/// Spellings read as null in addition to the empty string.
pub const NULL_TOKENS: &[&str] = &[
    "NA", "N/A", "n/a", "#N/A", "NULL", "null", "NaN", "nan", "-NaN", "-nan",
];

/// Returns `true` if `raw` is a recognised null spelling.
///
/// Matching is exact, except for the NaN family which matches any case.
pub fn is_null_token(raw: &str) -> bool {
    if raw.is_empty() {
        return true;
    }
    if NULL_TOKENS.contains(&raw) {
        return true;
    }
    let unsigned = raw.strip_prefix('-').unwrap_or(raw);
    unsigned.eq_ignore_ascii_case("nan")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_every_listed_token() {
        for token in NULL_TOKENS {
            assert!(is_null_token(token), "{token}");
        }
        assert!(is_null_token(""));
    }

    #[test]
    fn nan_family_ignores_case() {
        assert!(is_null_token("NAN"));
        assert!(is_null_token("-nAn"));
    }

    #[test]
    fn other_tokens_are_case_sensitive() {
        assert!(!is_null_token("Null"));
        assert!(!is_null_token("na"));
        assert!(!is_null_token(" "));
        assert!(!is_null_token("none"));
    }
}
