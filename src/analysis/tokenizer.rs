//! Sentence and word segmentation.
//!
//! Sentences are cut Punkt-style: a run of `.`, `?` or `!` followed by
//! whitespace ends a sentence unless the period closes a known abbreviation,
//! an initial, or a dotted acronym. Each sentence is then split into words
//! with the Penn Treebank rules (clitics split from their host, punctuation
//! padded out, sentence-final period separated).

use once_cell::sync::Lazy;
use regex::Regex;

/// Sentences and word tokens of one document, in text order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenStream<'a> {
    /// Trimmed sentence spans borrowed from the document.
    pub sentences: Vec<&'a str>,
    /// Word and punctuation tokens from every sentence.
    pub words: Vec<String>,
}

/// Lowercase abbreviations whose trailing period does not end a sentence.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "inc", "ltd", "corp", "dept", "gov",
    "gen", "col", "lt", "sgt", "capt", "rep", "sen", "rev", "fig", "approx", "est", "jan", "feb",
    "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec", "u.s", "u.k", "e.g",
    "i.e", "a.m", "p.m",
];

static BOUNDARY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[.?!]+["'”’)\]]*(?:\s+|$)"#).unwrap());

/// A Treebank substitution: pattern and replacement template.
type Rule = (Regex, &'static str);

fn rules(specs: &[(&str, &'static str)]) -> Vec<Rule> {
    specs
        .iter()
        .map(|(pattern, replacement)| (Regex::new(pattern).unwrap(), *replacement))
        .collect()
}

static STARTING_QUOTES: Lazy<Vec<Rule>> = Lazy::new(|| {
    rules(&[
        (r"([«“‘„]|`+)", " ${1} "),
        (r#"^""#, " `` "),
        (r#"([ (\[{<])("|'')"#, "${1} `` "),
        // opening quote before a one-letter word that is not a clitic ('m 't 's 'd 'n)
        (r"'([\w--[mtsdnMTSDN]])\b", "' ${1}"),
    ])
});

static PUNCTUATION: Lazy<Vec<Rule>> = Lazy::new(|| {
    rules(&[
        (r#"([^.])(\.)([\])}>"']*)\s*$"#, "${1} ${2} ${3} "),
        (r"([:,])([^\d])", " ${1} ${2}"),
        (r"([:,])$", " ${1} "),
        (r"\.{2,}", " ${0} "),
        (r"[;@#$%&]", " ${0} "),
        (r"[?!]", " ${0} "),
        (r"([^'])' ", "${1} ' "),
        (r"\*", " ${0} "),
        (r"[\]\[(){}<>]", " ${0} "),
        (r"--", " -- "),
    ])
});

static ENDING_QUOTES: Lazy<Vec<Rule>> = Lazy::new(|| {
    rules(&[
        (r"([»”’])", " ${1} "),
        (r"''", " '' "),
        (r#"""#, " '' "),
        (r"([^' ])('[sS]|'[mM]|'[dD]|') ", "${1} ${2} "),
        (r"([^' ])('ll|'LL|'re|'RE|'ve|'VE|n't|N'T) ", "${1} ${2} "),
    ])
});

static CONTRACTIONS: Lazy<Vec<Rule>> = Lazy::new(|| {
    rules(&[
        (r"(?i)\b(can)(not)\b", " ${1} ${2} "),
        (r"(?i)\b(d)('ye)\b", " ${1} ${2} "),
        (r"(?i)\b(gim)(me)\b", " ${1} ${2} "),
        (r"(?i)\b(gon)(na)\b", " ${1} ${2} "),
        (r"(?i)\b(got)(ta)\b", " ${1} ${2} "),
        (r"(?i)\b(lem)(me)\b", " ${1} ${2} "),
        (r"(?i)\b(more)('n)\b", " ${1} ${2} "),
        (r"(?i)\b(wan)(na)(\s)", " ${1} ${2}${3}"),
        (r"(?i) ('t)(is)\b", " ${1} ${2} "),
        (r"(?i) ('t)(was)\b", " ${1} ${2} "),
    ])
});

/// Split `text` into sentences and word tokens.
pub fn tokenize(text: &str) -> TokenStream<'_> {
    let sentences = split_sentences(text);
    let words = sentences.iter().flat_map(|s| tokenize_words(s)).collect();
    TokenStream { sentences, words }
}

/// Punkt-style sentence segmentation. Returned spans are trimmed and never empty.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for m in BOUNDARY_RE.find_iter(text) {
        let punct = m.as_str().trim_end();
        let terminators: &str = {
            let len = punct
                .chars()
                .take_while(|c| matches!(c, '.' | '?' | '!'))
                .count();
            &punct[..len]
        };
        if terminators.chars().all(|c| c == '.') {
            let next = text[m.end()..].split_whitespace().next();
            if !period_ends_sentence(&text[start..m.start()], terminators, next) {
                continue;
            }
        }

        let sentence = text[start..m.start() + punct.len()].trim();
        if !sentence.is_empty() {
            sentences.push(sentence);
        }
        start = m.end();
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }
    sentences
}

/// Lowercase words that commonly open a sentence.
const SENTENCE_STARTERS: &[&str] = &[
    "a", "after", "all", "also", "an", "and", "as", "at", "before", "but", "for", "he", "her",
    "his", "how", "however", "i", "if", "in", "it", "its", "many", "meanwhile", "most", "my",
    "no", "not", "on", "one", "or", "our", "she", "so", "some", "still", "that", "the", "their",
    "then", "there", "these", "they", "this", "those", "we", "what", "when", "where", "while",
    "who", "why", "yet", "you",
];

/// Decide whether a run of periods ends the sentence, given the text before it
/// and the token after it.
///
/// An ellipsis ends a sentence only before a capitalized word. A period after
/// an abbreviation, initial or dotted acronym ends one only before a
/// capitalized common sentence starter. Any other period always does.
fn period_ends_sentence(preceding: &str, periods: &str, next: Option<&str>) -> bool {
    let Some(next) = next.map(|w| w.trim_start_matches(|c: char| !c.is_alphanumeric())) else {
        return true;
    };
    let capitalized = next.chars().next().is_some_and(char::is_uppercase);

    if periods.len() > 1 {
        return capitalized;
    }
    if !closes_abbreviation(preceding) {
        return true;
    }
    capitalized && SENTENCE_STARTERS.contains(&next.to_lowercase().as_str())
}

/// Whether the last token of `preceding` is something a period abbreviates.
fn closes_abbreviation(preceding: &str) -> bool {
    let Some(token) = preceding.split_whitespace().last() else {
        return false;
    };
    let token = token.trim_start_matches(|c: char| !c.is_alphanumeric());
    // the pronoun, not an initial
    if token == "I" {
        return false;
    }
    let token = token.to_lowercase();

    if token.is_empty() {
        return false;
    }
    if ABBREVIATIONS.contains(&token.as_str()) {
        return true;
    }
    // initials ("J.") and dotted acronyms ("N.A.S.A")
    let mut chars = token.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return c.is_alphabetic();
    }
    token.contains('.')
        && token
            .split('.')
            .all(|part| !part.is_empty() && part.chars().all(char::is_alphabetic))
}

/// Treebank word tokenization of a single sentence.
pub fn tokenize_words(sentence: &str) -> Vec<String> {
    let mut text = sentence.to_string();

    for (re, rep) in STARTING_QUOTES.iter().chain(PUNCTUATION.iter()) {
        text = re.replace_all(&text, *rep).into_owned();
    }

    text = format!(" {text} ");
    for (re, rep) in ENDING_QUOTES.iter().chain(CONTRACTIONS.iter()) {
        text = re.replace_all(&text, *rep).into_owned();
    }

    text.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        let stream = tokenize("");
        assert!(stream.sentences.is_empty());
        assert!(stream.words.is_empty());

        let stream = tokenize("   \n\t ");
        assert!(stream.sentences.is_empty());
        assert!(stream.words.is_empty());
    }

    #[test]
    fn test_basic_sentences() {
        let sentences = split_sentences("Hello world. This is a test! Is it? Yes");
        assert_eq!(sentences, vec!["Hello world.", "This is a test!", "Is it?", "Yes"]);
    }

    #[test]
    fn test_abbreviations_do_not_split() {
        let sentences = split_sentences("We met Dr. Smith at 5 p.m. on Friday. It went well.");
        assert_eq!(
            sentences,
            vec!["We met Dr. Smith at 5 p.m. on Friday.", "It went well."]
        );
    }

    #[test]
    fn test_initials_and_acronyms() {
        let sentences = split_sentences("J. R. R. Tolkien wrote it. The U.S. economy grew.");
        assert_eq!(sentences, vec!["J. R. R. Tolkien wrote it.", "The U.S. economy grew."]);
    }

    #[test]
    fn test_pronoun_i_is_not_an_initial() {
        assert_eq!(
            split_sentences("Neither did I. We left early."),
            vec!["Neither did I.", "We left early."]
        );
    }

    #[test]
    fn test_initial_before_sentence_starter_splits() {
        assert_eq!(
            split_sentences("He chose plan B. The rest followed."),
            vec!["He chose plan B.", "The rest followed."]
        );
        assert_eq!(
            split_sentences("We landed in the U.S. Then we drove north."),
            vec!["We landed in the U.S.", "Then we drove north."]
        );
    }

    #[test]
    fn test_ellipsis_splits_only_before_capital() {
        assert_eq!(
            split_sentences("Wait... what happened here?"),
            vec!["Wait... what happened here?"]
        );
        assert_eq!(
            split_sentences("Wait... What happened here?"),
            vec!["Wait...", "What happened here?"]
        );
    }

    #[test]
    fn test_quotes_after_terminator() {
        let sentences = split_sentences("He said \"stop.\" Then he left.");
        assert_eq!(sentences, vec!["He said \"stop.\"", "Then he left."]);
    }

    #[test]
    fn test_no_space_no_split() {
        assert_eq!(split_sentences("Version 2.5 is out.Really"), vec!["Version 2.5 is out.Really"]);
    }

    #[test]
    fn test_final_period_split() {
        assert_eq!(tokenize_words("The cat sat."), vec!["The", "cat", "sat", "."]);
    }

    #[test]
    fn test_contractions() {
        assert_eq!(
            tokenize_words("I don't think it's Bob's."),
            vec!["I", "do", "n't", "think", "it", "'s", "Bob", "'s", "."]
        );
        assert_eq!(tokenize_words("We cannot go"), vec!["We", "can", "not", "go"]);
    }

    #[test]
    fn test_punctuation_padding() {
        assert_eq!(
            tokenize_words("Well, (maybe) yes; 3,000 cats: 50% done?"),
            vec!["Well", ",", "(", "maybe", ")", "yes", ";", "3,000", "cats", ":", "50", "%", "done", "?"]
        );
    }

    #[test]
    fn test_hyphens_and_internal_periods_kept() {
        assert_eq!(
            tokenize_words("A well-known U.S. firm grew"),
            vec!["A", "well-known", "U.S.", "firm", "grew"]
        );
    }

    #[test]
    fn test_double_quotes() {
        assert_eq!(
            tokenize_words("\"Hi\" she said"),
            vec!["``", "Hi", "''", "she", "said"]
        );
    }

    #[test]
    fn test_opening_single_quote_before_one_letter_word() {
        assert_eq!(
            tokenize_words("He wrote 'a' and 'b' here"),
            vec!["He", "wrote", "'", "a", "'", "and", "'", "b", "'", "here"]
        );
        // clitic-looking letters stay attached
        assert_eq!(tokenize_words("say 'm now"), vec!["say", "'m", "now"]);
    }

    #[test]
    fn test_opening_single_quote_on_longer_word_stays_attached() {
        assert_eq!(
            tokenize_words("He said 'hello there' to me."),
            vec!["He", "said", "'hello", "there", "'", "to", "me", "."]
        );
    }

    #[test]
    fn test_tokenize_is_deterministic() {
        let text = "First one. Second one? Third!";
        assert_eq!(tokenize(text), tokenize(text));
        assert_eq!(tokenize(text).sentences.len(), 3);
        assert_eq!(tokenize(text).words.len(), 8);
    }
}
