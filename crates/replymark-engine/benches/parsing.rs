use criterion::{Criterion, criterion_group, criterion_main};
use replymark_engine::{HtmlRenderer, format_inline, parse_document};
mod common;

fn bench_parse_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let content = common::generate_reply(100);
    group.bench_function("parse_document", |b| {
        b.iter(|| {
            let doc = parse_document(std::hint::black_box(&content));
            std::hint::black_box(doc);
        });
    });

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");
    group.sample_size(10);

    let content = common::generate_reply(100);
    let renderer = HtmlRenderer::default();
    group.bench_function("render_source", |b| {
        b.iter(|| std::hint::black_box(renderer.render_source(std::hint::black_box(&content))));
    });

    let inline = common::generate_inline_heavy(500);
    group.bench_function("format_inline", |b| {
        b.iter(|| std::hint::black_box(format_inline(std::hint::black_box(&inline))));
    });

    group.finish();
}

criterion_group!(benches, bench_parse_document, bench_render);
criterion_main!(benches);
