use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dark_triad::{analyze, AnalysisOptions, Output};

fn benchmark_analyze_short(c: &mut Criterion) {
    let text = "I deserve to win, and whatever they say, I don't care.";
    let options = AnalysisOptions::default();

    c.bench_function("analyze_short", |b| {
        b.iter(|| {
            analyze(black_box(text), black_box(&options)).expect("Analysis failed");
        })
    });
}

fn benchmark_analyze_long_full(c: &mut Criterion) {
    let text = "Honestly, I think I deserve far more credit than anyone on this team. \
        Whatever they say in the meeting, the strategy was mine from the start, and I will \
        leverage every advantage I can to control the outcome. People who are weak or stupid \
        enough to trust everyone get exploited; that is just how power works. Sorry, not sorry. \
        I don't care about their feelings, and frankly the whole thing has been boring. \
        Look at me: I am the best at what I do, my results are amazing, and I will win again. \
        If someone lies to me, I want revenge, and I will punish them for it. We could work \
        together, help each other and be kind, but that is not how anyone gets ahead. \
        The end justifies the means, and I will use whatever is useful to me.";

    let options = AnalysisOptions {
        output: Output::Full,
        wc_grams: true,
        ..Default::default()
    };

    c.bench_function("analyze_long_full", |b| {
        b.iter(|| {
            analyze(black_box(text), black_box(&options)).expect("Analysis failed");
        })
    });
}

criterion_group!(
    benches,
    benchmark_analyze_short,
    benchmark_analyze_long_full
);
criterion_main!(benches);
