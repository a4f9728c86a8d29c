use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use signwright::SignDocument;
use signwright::render::{LayoutOptions, LayoutParams, SvgRenderOptions, compute_layout};

fn fixtures() -> Vec<(&'static str, SignDocument)> {
    vec![
        ("g1-1", SignDocument::example_g1_1()),
        ("g1-2", SignDocument::example_g1_2()),
    ]
}

fn bench_layout(c: &mut Criterion) {
    let options = LayoutOptions::default();
    let mut group = c.benchmark_group("layout");
    for (name, doc) in fixtures() {
        let params = LayoutParams::from_document(&doc);
        group.bench_function(name, |b| {
            b.iter(|| compute_layout(std::hint::black_box(&params), &options).unwrap())
        });
    }
    group.finish();
}

fn bench_render_svg_sync(c: &mut Criterion) {
    let options = LayoutOptions::default();
    let svg_options = SvgRenderOptions::default();
    let mut group = c.benchmark_group("render_svg_sync");
    for (name, doc) in fixtures() {
        group.bench_function(name, |b| {
            b.iter_batched(
                || doc.clone(),
                |doc| signwright::render::render_svg_sync(&doc, &options, &svg_options).unwrap(),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_layout, bench_render_svg_sync);
criterion_main!(benches);
