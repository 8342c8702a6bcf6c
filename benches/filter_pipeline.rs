// benches/filter_pipeline.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use xpath_gen::{
    config::options::ExtractOptions,
    csv::to_csv,
    filter::{apply_options, Category, FilteredView},
    render::render_rows,
    sample::sample,
};

fn bench_pipeline(c: &mut Criterion) {
    let raw = sample();
    let opts = ExtractOptions::default();

    c.bench_function("apply_options", |b| {
        b.iter(|| black_box(apply_options(black_box(&raw), &opts).len()))
    });

    let items = apply_options(&raw, &opts);

    c.bench_function("view_search", |b| {
        b.iter(|| {
            let view = FilteredView::new(black_box(&items), Category::Interactive, black_box("Form"));
            black_box(view.len())
        })
    });

    c.bench_function("render_rows", |b| {
        b.iter(|| {
            let view = FilteredView::all(&items);
            black_box(render_rows(&view).len())
        })
    });

    c.bench_function("to_csv", |b| {
        b.iter(|| black_box(to_csv(black_box(&items)).len()))
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
