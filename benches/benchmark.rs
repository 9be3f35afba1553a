//! Performance benchmarks for readable-extract.
//!
//! Run with: `cargo bench`
//!
//! - a small article page, end to end and with custom options
//! - synthetic pages of growing size to watch scaling of the scoring walk

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use readable_extract::{extract, extract_with_options, Options};

const SAMPLE_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Harbour dredging resumes | Coastal Gazette</title>
</head>
<body>
    <nav>
        <a href="/">Home</a>
        <a href="/about">About</a>
    </nav>
    <div class="sidebar"><h3>Popular</h3><ul><li><a href="/1">One</a></li></ul></div>
    <article class="post">
        <h1>Harbour dredging resumes</h1>
        <p>Dredging in the inner harbour resumed on Monday after a two-week pause,
        port officials said, with crews working through the night to catch up.</p>
        <p>The pause followed complaints from residents about noise. Officials say
        the new schedule keeps the loudest work to daylight hours.</p>
        <p>The project, budgeted at four million, is expected to finish in spring
        and will let larger ferries dock at the main quay.</p>
        <p><a href="/next">Read more</a></p>
    </article>
    <footer>
        <p>Copyright 2026</p>
    </footer>
</body>
</html>
"#;

fn synthetic_page(paragraphs: usize) -> String {
    let mut html = String::from("<html><head><title>Synthetic</title></head><body>");
    html.push_str("<nav><a href='/'>Home</a> <a href='/a'>About</a></nav><main><div class='content'>");
    for i in 0..paragraphs {
        html.push_str(&format!(
            "<div><p>Paragraph {i} has a fair amount of prose, several commas, and a \
             <a href='/x{i}'>link</a> so that scoring, density and merging all run.</p></div>"
        ));
    }
    html.push_str("</div></main><aside>Related</aside></body></html>");
    html
}

fn bench_extract_default(c: &mut Criterion) {
    c.bench_function("extract_default", |b| {
        b.iter(|| extract(black_box(SAMPLE_HTML)));
    });
}

fn bench_extract_with_options(c: &mut Criterion) {
    let options = Options {
        positive_patterns: vec!["post".to_string(), "story".to_string()],
        min_text_length: 40,
        ..Options::default()
    };

    c.bench_function("extract_with_options", |b| {
        b.iter(|| extract_with_options(black_box(SAMPLE_HTML), black_box(&options)));
    });
}

fn bench_page_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("page_size");

    for paragraphs in [10, 100, 1000] {
        let html = synthetic_page(paragraphs);
        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(paragraphs), &html, |b, html| {
            b.iter(|| extract(black_box(html)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_extract_default,
    bench_extract_with_options,
    bench_page_size
);
criterion_main!(benches);
