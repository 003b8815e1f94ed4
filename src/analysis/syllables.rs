//! Vowel-group syllable estimate.
//!
//! Fog Index values downstream are defined against this exact heuristic, so
//! the suffix stripping happens before the vowel-run count and nothing here
//! consults a pronunciation dictionary.

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y'];

/// Estimate the number of syllables in `word`. Always at least 1.
///
/// 1. lowercase
/// 2. drop a trailing `e` when longer than 2 chars
/// 3. then drop a trailing `es`/`ed` when longer than 3 chars
/// 4. count maximal runs of `a e i o u y`
pub fn count_syllables(word: &str) -> usize {
    let mut chars: Vec<char> = word.to_lowercase().chars().collect();

    if chars.len() > 2 && chars.last() == Some(&'e') {
        chars.pop();
    }
    if chars.len() > 3 && matches!(&chars[chars.len() - 2..], ['e', 's'] | ['e', 'd']) {
        chars.truncate(chars.len() - 2);
    }

    let mut count = 0;
    let mut prev_is_vowel = false;
    for c in chars {
        let is_vowel = VOWELS.contains(&c);
        if is_vowel && !prev_is_vowel {
            count += 1;
        }
        prev_is_vowel = is_vowel;
    }

    count.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_trailing_e_is_silent() {
        assert_eq!(count_syllables("hope"), 1);
        assert_eq!(count_syllables("the"), 1);
    }

    #[test]
    fn test_vowel_runs() {
        assert_eq!(count_syllables("caring"), 2);
        assert_eq!(count_syllables("beautiful"), 3);
        assert_eq!(count_syllables("rhythm"), 1);
    }

    #[test]
    fn test_es_ed_suffixes_are_stripped() {
        assert_eq!(count_syllables("houses"), 1);
        assert_eq!(count_syllables("agreed"), 2);
        // "ed" stripping applies even where it is pronounced
        assert_eq!(count_syllables("created"), 1);
    }

    #[test]
    fn test_short_words_keep_suffix() {
        // length 3 is not > 3, so "es" stays and forms one run
        assert_eq!(count_syllables("yes"), 1);
        assert_eq!(count_syllables("e"), 1);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(count_syllables("Organization"), count_syllables("organization"));
        assert_eq!(count_syllables("organization"), 5);
    }

    #[test]
    fn test_no_vowels_still_one() {
        assert_eq!(count_syllables("hmm"), 1);
        assert_eq!(count_syllables(""), 1);
    }

    proptest! {
        #[test]
        fn syllables_are_at_least_one(s in ".{0,40}") {
            prop_assert!(count_syllables(&s) >= 1);
        }
    }
}
