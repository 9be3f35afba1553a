//! Edge case integration tests
//!
//! Tests for unusual inputs, boundary conditions, and error handling.

#![allow(clippy::expect_used)] // expect() is appropriate in tests for clear panic messages

use readable_extract::{extract, extract_with_options, Error, Options};

#[test]
fn test_extract_minimal_html() {
    let html = "<html><body><p>Minimal content, just long enough.</p></body></html>";

    match extract(html) {
        Ok(result) => {
            assert_eq!(result.content_text, "Minimal content, just long enough.");
            assert_eq!(result.content_html, "<div><p>Minimal content, just long enough.</p></div>");
        }
        Err(err) => panic!("Extraction failed: {err:?}"),
    }
}

#[test]
fn test_extract_empty_body() {
    let html = "<html><body></body></html>";
    assert_eq!(extract(html).unwrap_err(), Error::NoContentFound);
}

#[test]
fn test_extract_no_body() {
    // The parser synthesizes an empty body.
    let html = "<html><head><title>No Body</title></head></html>";
    assert_eq!(extract(html).unwrap_err(), Error::NoContentFound);
}

#[test]
fn test_extract_malformed_html() {
    let html = "<html><body><p>Unclosed paragraph that runs on<div>Nested block with more words<p>Badly closed paragraph, too</body>";

    match extract(html) {
        Ok(result) => {
            assert!(result.content_text.contains("Nested block with more words"));
        }
        Err(err) => panic!("Extraction failed on malformed HTML: {err:?}"),
    }
}

#[test]
fn test_extract_deeply_nested_html() {
    let mut html = String::from("<html><body>");
    for i in 0..50 {
        html.push_str(&format!("<div class='level-{i}'>"));
    }
    html.push_str("<p>Deep content here, nested fifty levels down.</p>");
    for _ in 0..50 {
        html.push_str("</div>");
    }
    html.push_str("</body></html>");

    match extract(&html) {
        Ok(result) => {
            assert_eq!(
                result.content_text, "Deep content here, nested fifty levels down.",
                "Should extract deeply nested content"
            );
        }
        Err(err) => panic!("Extraction failed on nested HTML: {err:?}"),
    }
}

#[test]
fn test_extract_very_large_document() {
    let paragraphs: String = (0..5000)
        .map(|i| format!("<p>Paragraph {i} with some content words.</p>"))
        .collect::<Vec<_>>()
        .join("\n");

    let html = format!("<html><body><article>{paragraphs}</article></body></html>");

    match extract(&html) {
        Ok(result) => {
            assert_eq!(result.content_text.lines().count(), 5000);
            assert!(result.content_text.starts_with("Paragraph 0 "));
            assert!(result.content_text.ends_with("Paragraph 4999 with some content words."));
        }
        Err(err) => panic!("Extraction failed on large document: {err:?}"),
    }
}

#[test]
fn test_extract_non_english_content() {
    let html = r#"<!DOCTYPE html>
    <html lang="ja">
    <head>
        <meta charset="UTF-8">
        <title>日本語の記事タイトル</title>
    </head>
    <body>
        <article>
            <h1>日本語の見出し</h1>
            <p>この記事では、さまざまなトピックについて詳しく説明しています。日本語のコンテンツを正しく処理できることを確認するためのテストです。</p>
            <p>Rustは安全性と速度を両立させた素晴らしいプログラミング言語です。メモリ安全性を保証しながら、高いパフォーマンスを実現します。</p>
        </article>
    </body>
    </html>"#;

    match extract(html) {
        Ok(result) => {
            assert_eq!(result.title, "日本語の記事タイトル");
            assert!(result.content_text.contains("日本語のコンテンツ"));
            assert!(result.content_text.contains("Rustは安全性と速度"));
        }
        Err(err) => panic!("Extraction failed on non-English content: {err:?}"),
    }
}

#[test]
fn test_extract_only_whitespace_content() {
    let html = "<html><body><article>   \n\t\n   </article></body></html>";
    assert_eq!(extract(html).unwrap_err(), Error::NoContentFound);
}

#[test]
fn test_extract_script_and_style_removed() {
    let html = r"<!DOCTYPE html>
    <html>
    <head>
        <style>body { color: red; }</style>
        <script>alert('hello');</script>
    </head>
    <body>
        <article>
            <p>Main content here, in a sentence long enough to count.</p>
            <script>console.log('inline script');</script>
            <style>.inline { display: none; }</style>
        </article>
    </body>
    </html>";

    match extract(html) {
        Ok(result) => {
            assert!(!result.content_text.contains("alert"), "Script content should be removed");
            assert!(
                !result.content_text.contains("console.log"),
                "Inline script should be removed"
            );
            assert!(!result.content_text.contains("color: red"), "Style content should be removed");
            assert_eq!(
                result.content_text,
                "Main content here, in a sentence long enough to count."
            );
        }
        Err(err) => panic!("Extraction failed: {err:?}"),
    }
}

#[test]
fn test_extract_preserves_text_structure() {
    let html = r"<!DOCTYPE html>
    <html>
    <body>
        <article>
            <h1>Title</h1>
            <p>First paragraph, written out in full sentences.</p>
            <p>Second paragraph, also written out in full sentences.</p>
            <p>Third paragraph, which introduces the list below.</p>
            <ul>
                <li>Item one</li>
                <li>Item two</li>
            </ul>
        </article>
    </body>
    </html>";

    match extract(html) {
        Ok(result) => {
            assert_eq!(
                result.content_text,
                "Title\n\
                 First paragraph, written out in full sentences.\n\
                 Second paragraph, also written out in full sentences.\n\
                 Third paragraph, which introduces the list below.\n\
                 Item one\n\
                 Item two"
            );
            assert_eq!(result.title, "Title");
        }
        Err(err) => panic!("Extraction failed: {err:?}"),
    }
}

#[test]
fn test_extract_handles_special_characters() {
    let html = r"<!DOCTYPE html>
    <html>
    <body>
        <article>
            <p>Special chars decoded from entities: &amp; &lt; &gt; &quot; &apos;</p>
            <p>More symbols in a second sentence: &copy; &reg; &trade;</p>
        </article>
    </body>
    </html>";

    match extract(html) {
        Ok(result) => {
            assert!(result.content_text.contains(r#"& < > " '"#));
            assert!(result.content_text.contains("© ® ™"));
            assert!(result.content_html.contains("&amp; &lt; &gt; &quot; &#39;"));
        }
        Err(err) => panic!("Extraction failed: {err:?}"),
    }
}

#[test]
fn test_sibling_score_ratio_controls_merging() {
    let strong = "A strong paragraph that carries the story forward, sentence after sentence, with care.";
    let html = format!(
        r#"<html><body>
        <div id="a"><p>{strong}</p><p>{strong}</p><p>{strong}</p></div>
        <div id="b"><p>WEAK_ONE is short but scores.</p><p>WEAK_TWO is short but scores.</p></div>
    </body></html>"#
    );

    let result = extract(&html).expect("default extraction");
    assert!(result.content_text.contains(strong));
    assert!(!result.content_text.contains("WEAK_ONE"));

    let options = Options {
        sibling_score_ratio: 0.0,
        ..Options::default()
    };
    let result = extract_with_options(&html, &options).expect("permissive extraction");
    assert!(result.content_text.contains("WEAK_ONE"));
    assert!(result.content_text.contains("WEAK_TWO"));
}

// Performance baseline test
#[test]
fn test_extract_performance_baseline() {
    let html = std::fs::read_to_string(format!(
        "{}/tests/integration/fixtures/article_full.html",
        env!("CARGO_MANIFEST_DIR")
    ))
    .expect("Failed to read fixture");

    let start = std::time::Instant::now();

    for _ in 0..50 {
        let _ = extract(&html);
    }

    let duration = start.elapsed();

    assert!(
        duration.as_secs() < 10,
        "Performance regression: took {duration:?} for 50 extractions"
    );

    eprintln!(
        "Performance: 50 extractions in {:?} ({:.2}ms per extraction)",
        duration,
        duration.as_millis() as f64 / 50.0
    );
}
