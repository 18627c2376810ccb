use criterion::{black_box, criterion_group, criterion_main, Criterion};

use spell_core::{tokenize, Corrector, EditGenerator, FrequencyModel};

// A few thousand distinct words with a skewed frequency distribution, built
// deterministically so runs are comparable.
fn synthetic_model() -> FrequencyModel {
    let syllables = ["ka", "lo", "mi", "ten", "sor", "pra", "vel", "dun", "ish", "qua"];
    let mut text = String::new();
    for (i, a) in syllables.iter().enumerate() {
        for (j, b) in syllables.iter().enumerate() {
            for (k, c) in syllables.iter().enumerate() {
                let word = format!("{a}{b}{c}");
                for _ in 0..=((i * 7 + j * 3 + k) % 13) {
                    text.push_str(&word);
                    text.push(' ');
                }
            }
        }
    }
    text.push_str(include_str!("../README.md"));
    let mut model = FrequencyModel::new();
    model.build(tokenize(&text));
    model
}

fn tokenize_text(c: &mut Criterion) {
    let text = include_str!("../README.md").repeat(50);
    c.bench_function("tokenize_readme_x50", |b| b.iter(|| tokenize(black_box(&text)).count()));
}

fn edits(c: &mut Criterion) {
    let generator = EditGenerator::new();
    c.bench_function("distance1_spelling", |b| {
        b.iter(|| generator.distance1(black_box("spelling")))
    });
    c.bench_function("distance2_spelling", |b| {
        b.iter(|| generator.distance2(black_box("spelling")))
    });
}

fn correct(c: &mut Criterion) {
    let model = synthetic_model();
    let corrector = Corrector::default();

    c.bench_function("correct_known", |b| {
        b.iter(|| corrector.correct(&model, black_box("kalomi")))
    });
    c.bench_function("correct_distance1", |b| {
        b.iter(|| corrector.correct(&model, black_box("kalomo")))
    });
    c.bench_function("correct_distance2", |b| {
        b.iter(|| corrector.correct(&model, black_box("kxlomo")))
    });
    c.bench_function("correct_unknown", |b| {
        b.iter(|| corrector.correct(&model, black_box("zzzzzzzzzz")))
    });
}

criterion_group!(benches, tokenize_text, edits, correct);
criterion_main!(benches);
