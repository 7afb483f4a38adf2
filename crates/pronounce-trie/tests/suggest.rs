//! Suggestion behavior against a realistic word list, plus ordering laws.
//!
//! Run: cargo test -p pronounce-trie --test suggest

use proptest::prelude::*;

use pronounce_trie::{PrefixMatch, Vocabulary};

const WORDS: &[&str] = &[
    "through", "tough", "enough", "cough", "thought", "bought", "taught", "caught", "daughter",
    "knight", "knife", "know", "knot", "psychology", "psychiatrist", "receipt", "scissors",
    "island", "debris", "colonel", "salmon", "mortgage", "wednesday", "february", "schedule",
    "chaos", "choir", "pneumonia", "mischievous", "the", "then", "there", "they", "think",
];

fn vocabulary() -> Vocabulary {
    Vocabulary::from_words(WORDS).unwrap()
}

#[test]
fn difficult_words_by_prefix() {
    let v = vocabulary();
    assert_eq!(v.suggest("kn", 10), vec!["knife", "knight", "knot", "know"]);
    assert_eq!(v.suggest("psy", 10), vec!["psychiatrist", "psychology"]);
    assert_eq!(v.suggest("th", 3), vec!["the", "then", "there"]);
    assert_eq!(v.suggest("ch", 10), vec!["chaos", "choir"]);
}

#[test]
fn full_listing_is_sorted_and_complete() {
    let v = vocabulary();
    let mut expected: Vec<String> = WORDS.iter().map(|w| w.to_string()).collect();
    expected.sort();
    assert_eq!(v.words(), expected);
    assert_eq!(v.len(), WORDS.len());
}

#[test]
fn lookup_word_and_prefix() {
    let v = vocabulary();
    assert_eq!(v.lookup("the"), PrefixMatch::ExactAndPrefix);
    assert_eq!(v.lookup("thr"), PrefixMatch::Prefix);
    assert_eq!(v.lookup("choir"), PrefixMatch::Exact);
    assert_eq!(v.lookup("xyz"), PrefixMatch::None);
}

fn word() -> impl Strategy<Value = String> {
    "[a-d]{1,5}"
}

proptest! {
    #[test]
    fn suggestions_are_sorted_prefixed_and_stored(
        words in prop::collection::vec(word(), 0..40),
        prefix in "[a-d]{0,2}",
        limit in 0usize..20,
    ) {
        let v = Vocabulary::from_words(&words).unwrap();
        let got = v.suggest(&prefix, limit);

        prop_assert!(got.len() <= limit);
        prop_assert!(got.windows(2).all(|w| w[0] < w[1]));
        for s in &got {
            prop_assert!(s.starts_with(prefix.as_str()));
            prop_assert!(v.contains(s));
        }

        // Same answer as filtering the sorted, deduplicated word list.
        let mut expected: Vec<String> = words
            .iter()
            .filter(|w| w.starts_with(prefix.as_str()))
            .cloned()
            .collect();
        expected.sort();
        expected.dedup();
        expected.truncate(limit);
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn reinserting_changes_nothing(words in prop::collection::vec(word(), 1..20)) {
        let mut v = Vocabulary::from_words(&words).unwrap();
        let before = v.words();
        let stats = v.stats();
        prop_assert_eq!(v.extend(&words).unwrap(), 0);
        prop_assert_eq!(v.words(), before);
        prop_assert_eq!(v.stats(), stats);
    }
}
