// src/core/sanitize.rs

/// Some player names arrive with an acute accent where an apostrophe
/// belongs (N´Guessan).
pub fn normalize_apostrophe(s: &str) -> String {
    s.replace('´', "'")
}

/// Plain cell token: trimmed, apostrophe fixed.
pub fn clean_token(s: &str) -> String {
    normalize_apostrophe(s.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_is_trimmed_and_apostrophe_fixed() {
        assert_eq!(clean_token("  N´Guessan \n"), "N'Guessan");
        assert_eq!(clean_token("\u{a0}12\u{a0}"), "12");
    }
}
