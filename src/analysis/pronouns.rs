//! First-person pronoun counting.

use once_cell::sync::Lazy;
use regex::Regex;

static PRONOUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b(I|we|my|ours|us)\b").unwrap());

/// Case-sensitive `US`, read as the country abbreviation.
static COUNTRY_US_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bUS\b").unwrap());

/// Count `I`, `we`, `my`, `ours` and `us` as whole words, ignoring case.
///
/// If the text contains a standalone uppercase `US` anywhere, every `us`
/// match in the whole document is dropped, not just the uppercase one. This
/// is a deliberately coarse document-level rule; callers depend on it.
pub fn count_personal_pronouns(text: &str) -> usize {
    let country_mentioned = COUNTRY_US_RE.is_match(text);

    PRONOUN_RE
        .find_iter(text)
        .filter(|m| !(country_mentioned && m.as_str().eq_ignore_ascii_case("us")))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_us_suppresses_us_matches() {
        assert_eq!(count_personal_pronouns("I love the US and we are proud"), 2);
    }

    #[test]
    fn test_suppression_is_document_wide() {
        // the lowercase object pronoun goes too once "US" appears anywhere
        let text = "They told us about the US economy. My view differs.";
        assert_eq!(count_personal_pronouns(text), 1);
    }

    #[test]
    fn test_us_counted_without_country() {
        assert_eq!(count_personal_pronouns("We use us as object"), 2);
    }

    #[test]
    fn test_hyphenated_country_still_counts_as_us() {
        assert_eq!(count_personal_pronouns("Us and the US-based firm"), 0);
    }

    #[test]
    fn test_whole_words_only() {
        assert_eq!(count_personal_pronouns("myself user wendy ourselves Isle"), 0);
        assert_eq!(count_personal_pronouns("Ours is mine, I think. MY turn."), 3);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(count_personal_pronouns(""), 0);
    }
}
