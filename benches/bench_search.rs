use criterion::{criterion_group, criterion_main, Criterion};
use stepladder_solver::{find_best_ladder, Dictionary, TileSet, WordGraph};

const LETTERS: &[char] = &['b', 'd', 'o', 's'];

/// All 3 letter combinations over a small alphabet with mixed tile values.
fn synthetic_words() -> Vec<String> {
    let mut words = Vec::new();
    for &a in LETTERS {
        for &b in LETTERS {
            for &c in LETTERS {
                words.push([a, b, c].iter().collect());
            }
        }
    }
    words
}

fn criterion_benchmark(c: &mut Criterion) {
    let words = synthetic_words();
    let tileset = TileSet::new();
    let dictionary = Dictionary::from_words(&words, 3).unwrap();

    c.bench_function("graph.build", |b| {
        b.iter(|| WordGraph::new(dictionary.words(), &tileset))
    });

    let graph = WordGraph::new(dictionary.words(), &tileset);
    c.bench_function("search.find_best_ladder", |b| {
        b.iter(|| find_best_ladder(&graph))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
