use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, criterion_group, criterion_main};
use keyscore::lexicon::Lexicon;
use keyscore::scoring::heuristic::adjust;
use keyscore::{PromptBuilder, RelevanceScorer, StubClassifier};

const SHORT: &str = "I bought a new keyboard.";
const LONG: &str = "These switches feel amazing. The tactile bump is smooth but pronounced, \
giving excellent feedback while typing. The sound is a deep, satisfying thock without being \
too loud, and the weight feels just right for extended typing sessions.";

fn bench_adjust(c: &mut Criterion) {
    let lexicon = Lexicon::builtin();

    c.bench_function("adjust_short", |b| {
        b.iter(|| adjust(black_box(5.0), black_box(SHORT), &lexicon))
    });
    c.bench_function("adjust_long", |b| {
        b.iter(|| adjust(black_box(5.0), black_box(LONG), &lexicon))
    });
}

fn bench_prompt(c: &mut Criterion) {
    let lexicon = Lexicon::builtin();
    let builder = PromptBuilder::new();

    c.bench_function("build_prompt", |b| {
        b.iter(|| builder.build(&lexicon, black_box(LONG)))
    });
}

fn bench_stub_score(c: &mut Criterion) {
    let scorer = RelevanceScorer::new(Arc::new(StubClassifier::new(0.0)));

    c.bench_function("score_stub_long", |b| {
        b.iter(|| scorer.score(black_box(LONG)))
    });
}

criterion_group!(benches, bench_adjust, bench_prompt, bench_stub_score);
criterion_main!(benches);
