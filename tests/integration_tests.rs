//! Integration tests for keyword extraction.

use keyfreq::{
    extract_keywords, CharacterPolicy, Config, Keyword, KeywordExtractor, Outcome, StopWordSet,
    TextConfig, TokenFilter, Tokenizer,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;
use std::fs;
use tempfile::tempdir;

/// Fragments mixing scripts, accents, digits, punctuation and combining marks.
const PIECES: &[&str] = &[
    "gato", "Cachorro", "AÇÃO", "coração", "o", "e", "muito", "python", "PYTHON", "мир",
    "日本語", "straße", "cafe\u{0301}", "123", "4.5", "!!", "...", " ", "\n", "\t", "-", "_",
    "é", "ñ", "İstanbul", "ǅ", "\u{200B}", "🦀", "a1b2", "x",
];

fn random_text(rng: &mut ChaCha8Rng) -> String {
    let len = rng.gen_range(0..40);
    let mut text = String::new();
    for _ in 0..len {
        if rng.gen_bool(0.3) {
            text.push(rng.gen::<char>());
        } else {
            text.push_str(PIECES[rng.gen_range(0..PIECES.len())]);
        }
        if rng.gen_bool(0.5) {
            text.push(' ');
        }
    }
    text
}

fn stop_words() -> StopWordSet {
    StopWordSet::from_list(&["o", "e", "muito"])
}

#[test]
fn test_scenario_ranked_with_first_occurrence_ties() {
    let result = extract_keywords(
        "O gato e o cachorro e o gato brincam muito",
        &stop_words(),
        10,
        3,
    );

    assert_eq!(
        result,
        vec![
            Keyword::new("gato", 2),
            Keyword::new("cachorro", 1),
            Keyword::new("brincam", 1),
        ]
    );
}

#[test]
fn test_scenario_empty_input() {
    assert!(extract_keywords("", &stop_words(), 10, 3).is_empty());
}

#[test]
fn test_scenario_only_stop_words_and_short_words() {
    assert!(extract_keywords("a e o", &stop_words(), 10, 3).is_empty());
}

#[test]
fn test_scenario_fifteen_distinct_words() {
    let vocabulary = [
        "alfa", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel", "india",
        "juliet", "kilo", "lima", "mike", "november", "oscar",
    ];
    let text = vocabulary.join(" ");

    let result = extract_keywords(&text, &stop_words(), 10, 3);

    assert_eq!(result.len(), 10);
    for (keyword, expected) in result.iter().zip(vocabulary.iter()) {
        assert_eq!(keyword.word, *expected);
        assert_eq!(keyword.frequency, 1);
    }
}

#[test]
fn test_scenario_mixed_case() {
    let result = extract_keywords("Python PYTHON python", &stop_words(), 10, 3);

    assert_eq!(result, vec![Keyword::new("python", 3)]);
}

#[test]
fn test_default_extractor_portuguese_text() {
    let extractor = KeywordExtractor::default();
    let text = "A linguagem Rust é rápida. Rust também é segura, e a comunidade Rust \
                cresce porque a linguagem é acessível.";

    let result = extractor.extract(text);

    assert_eq!(result[0], Keyword::new("rust", 3));
    assert_eq!(result[1], Keyword::new("linguagem", 2));
    let words: Vec<_> = result.iter().map(|k| k.word.as_str()).collect();
    assert!(words.contains(&"rápida"));
    assert!(!words.contains(&"também"));
    assert!(!words.contains(&"porque"));
}

#[test]
fn test_analyze_distinguishes_blank_and_empty() {
    let extractor = KeywordExtractor::default();

    assert_eq!(extractor.analyze(""), Outcome::BlankInput);
    assert_eq!(extractor.analyze(" \t\n "), Outcome::BlankInput);
    assert_eq!(extractor.analyze("de da do 42 !!"), Outcome::NoKeywords);
    assert_eq!(extractor.analyze("rede rede").keywords(), &[Keyword::new("rede", 2)]);
}

#[test]
fn test_config_file_drives_extractor() {
    let dir = tempdir().unwrap();
    let stop_path = dir.path().join("stop.txt");
    fs::write(&stop_path, "rede\n").unwrap();

    let config_path = dir.path().join("keyfreq.json");
    fs::write(
        &config_path,
        format!(
            r#"{{ "extractor": {{ "max_results": 2, "stop_words_file": {:?} }} }}"#,
            stop_path
        ),
    )
    .unwrap();

    let config = Config::load(&config_path).unwrap();
    let extractor = KeywordExtractor::from_config(&config).unwrap();
    let result = extractor.extract("rede rede rede sinal sinal cabo antena");

    assert_eq!(result, vec![Keyword::new("sinal", 2), Keyword::new("cabo", 1)]);
}

#[test]
fn test_combining_accents_depend_on_normalization() {
    let text = "cafe\u{0301} cafe\u{0301} cafe";

    let normalized = extract_keywords(text, &StopWordSet::empty(), 10, 3);
    assert_eq!(
        normalized,
        vec![Keyword::new("café", 2), Keyword::new("cafe", 1)]
    );

    // Without NFC the combining mark is a separator, so the accent is lost.
    let extractor = KeywordExtractor::new(StopWordSet::empty()).with_tokenizer(Tokenizer::new(
        TextConfig {
            unicode_normalize: false,
        },
    ));
    assert_eq!(extractor.extract(text), vec![Keyword::new("cafe", 3)]);
}

#[test]
fn test_config_file_disables_normalization() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("keyfreq.json");
    fs::write(&config_path, r#"{ "text": { "unicode_normalize": false } }"#).unwrap();

    let config = Config::load(&config_path).unwrap();
    assert!(!config.text.unicode_normalize);

    let extractor = KeywordExtractor::from_config(&config).unwrap();
    assert_eq!(
        extractor.extract("cafe\u{0301} cafe\u{0301} cafe"),
        vec![Keyword::new("cafe", 3)]
    );
}

#[test]
fn test_random_inputs_never_panic_and_hold_invariants() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let stop_words = StopWordSet::portuguese();
    let policy = CharacterPolicy::default();

    for _ in 0..500 {
        let text = random_text(&mut rng);
        let max_results = rng.gen_range(0..12);
        let min_length = rng.gen_range(1..6);

        let result = extract_keywords(&text, &stop_words, max_results, min_length);

        let extractor = KeywordExtractor::new(stop_words.clone()).with_min_length(min_length);
        let table = extractor.count(&text);
        assert!(result.len() <= max_results.min(table.len()));

        for pair in result.windows(2) {
            assert!(pair[0].frequency >= pair[1].frequency);
        }

        let mut seen = HashSet::new();
        for keyword in &result {
            assert!(keyword.frequency >= 1);
            assert!(keyword.word.chars().count() >= min_length);
            assert!(policy.accepts(&keyword.word));
            assert!(!stop_words.contains(&keyword.word));
            assert!(seen.insert(keyword.word.clone()), "duplicate {}", keyword.word);
            assert_eq!(table.get(&keyword.word), Some(keyword.frequency));
        }
    }
}

#[test]
fn test_random_inputs_filter_is_idempotent() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let extractor = KeywordExtractor::default();
    let filter = TokenFilter::default();

    for _ in 0..200 {
        let text = random_text(&mut rng);
        let once = filter.filter(extractor.tokenize(&text));
        let twice = filter.filter(once.clone());
        assert_eq!(once, twice);
    }
}

#[test]
fn test_any_letter_policy_on_random_inputs() {
    let mut rng = ChaCha8Rng::seed_from_u64(1234);
    let extractor = KeywordExtractor::new(StopWordSet::empty())
        .with_policy(CharacterPolicy::any_letter())
        .with_min_length(1);

    for _ in 0..200 {
        let text = random_text(&mut rng);
        for keyword in extractor.extract(&text) {
            assert!(keyword.word.chars().all(char::is_alphabetic));
        }
    }
}

#[test]
fn test_batch_matches_sequential() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let docs: Vec<String> = (0..64).map(|_| random_text(&mut rng)).collect();
    let extractor = KeywordExtractor::default();

    let batch = extractor.extract_batch(&docs);
    let sequential: Vec<_> = docs.iter().map(|d| extractor.extract(d)).collect();

    assert_eq!(batch, sequential);
}
