//! Micro-benchmarks for the word search.
//!
//! This benchmark suite measures full search runs over representative boards
//! against a small fixed dictionary.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench search
//! ```

use std::hint;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use letterlace_core::{Lexicon, LetterGrid};
use letterlace_solver::PathSearch;

const WORDS: &[&str] = &[
    "act", "acts", "ate", "cat", "cats", "cast", "case", "eat", "eats", "nest", "nests", "net",
    "nets", "not", "note", "notes", "onset", "sane", "sat", "sea", "seat", "sent", "set", "son",
    "stone", "tact", "tan", "ten", "tens", "toe", "ton", "tone", "tones",
];

fn dictionary() -> Lexicon {
    Lexicon::build(WORDS.iter().copied())
}

fn bench_full_search(c: &mut Criterion) {
    let lexicon = dictionary();
    let boards = [
        ("dense_3x3", "CAT ETS NOS"),
        ("dense_4x4", "CATS TONE NEST ACTE"),
        ("sparse_4x4", "C__S __N_ N__T A___"),
        ("dense_5x5", "CATSE ONEST NESTA ACTSO TONES"),
    ];

    let mut group = c.benchmark_group("path_search");
    for (param, layout) in boards {
        let grid: LetterGrid = layout.parse().unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(param), &grid, |b, grid| {
            b.iter(|| hint::black_box(PathSearch::new(grid, &lexicon).run()));
        });
    }
    group.finish();
}

fn bench_with_bonus(c: &mut Criterion) {
    let lexicon = dictionary();
    let grid: LetterGrid = "CATS TONE NEST ACTE"
        .parse::<LetterGrid>()
        .unwrap()
        .with_bonus(5)
        .unwrap();

    c.bench_function("path_search/bonus_4x4", |b| {
        b.iter(|| hint::black_box(PathSearch::new(&grid, &lexicon).run()));
    });
}

criterion_group!(benches, bench_full_search, bench_with_bonus);
criterion_main!(benches);
