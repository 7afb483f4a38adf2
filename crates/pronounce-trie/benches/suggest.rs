// Criterion benchmarks for pronounce-trie.
//
// Run:
//   cargo bench -p pronounce-trie

use criterion::{Criterion, criterion_group, criterion_main};

use pronounce_trie::Vocabulary;

/// Deterministic synthetic vocabulary: every 1-4 letter word over a 10-letter alphabet.
fn synthetic_words() -> Vec<String> {
    const ALPHABET: &[char] = &['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j'];
    let mut words = Vec::new();
    let mut frontier = vec![String::new()];
    for _ in 0..4 {
        let mut next = Vec::with_capacity(frontier.len() * ALPHABET.len());
        for stem in &frontier {
            for &c in ALPHABET {
                let mut w = stem.clone();
                w.push(c);
                words.push(w.clone());
                next.push(w);
            }
        }
        frontier = next;
    }
    words
}

/// Build the whole vocabulary from scratch.
fn bench_load(c: &mut Criterion) {
    let words = synthetic_words();
    c.bench_function("load_11110_words", |b| {
        b.iter(|| std::hint::black_box(Vocabulary::from_words(&words).expect("valid words")));
    });
}

/// Keystroke-style prefix queries with a UI-sized limit.
fn bench_suggest(c: &mut Criterion) {
    let vocab = Vocabulary::from_words(synthetic_words()).expect("valid words");
    let prefixes = ["a", "bc", "def", "j", "ghij"];

    c.bench_function("suggest_limit_10", |b| {
        b.iter(|| {
            for p in &prefixes {
                std::hint::black_box(vocab.suggest(p, 10));
            }
        });
    });

    c.bench_function("suggest_empty_prefix_all", |b| {
        b.iter(|| std::hint::black_box(vocab.suggest("", usize::MAX)));
    });
}

criterion_group!(benches, bench_load, bench_suggest);
criterion_main!(benches);
