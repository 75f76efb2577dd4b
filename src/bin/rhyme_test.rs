// Minimal test harness for the rhyme scorer
// Run with: cargo run --bin rhyme_test
// src/bin/rhyme_test.rs
use rhyme_core::{Dictionary, RhymeEngine};

fn main() {
    let engine = RhymeEngine::new(Dictionary::sample());
    let test_pairs = [
        ("cat", "cat"), ("cat", "rat"), ("cat", "bat"), ("cat", "dog"),
        ("light", "bright"), ("light", "tonight"), ("light", "ten"),
        ("queen", "between"), ("burns", "returns"), ("god", "trod"),
        ("show", "overflow"), ("heard", "third"), ("cat", "xylophone"),
    ];
    for (a, b) in test_pairs.iter() {
        let score = engine.score(a, b);
        println!("{} / {} => {:.3}", a, b, score);
    }
}
