//! Integration tests for real-world article extraction
//!
//! Tests extraction from realistic HTML samples representing various page layouts.

#![allow(clippy::expect_used)] // expect() is appropriate in tests for clear panic messages

use readable_extract::{
    extract, extract_bytes, extract_request, Envelope, FetchError, Fetcher, Request,
};
use url::Url;

/// Test fixture path helper
fn fixture_path(name: &str) -> String {
    format!(
        "{}/tests/integration/fixtures/{}",
        env!("CARGO_MANIFEST_DIR"),
        name
    )
}

fn fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name)).expect("Failed to read fixture")
}

#[test]
fn test_extract_news_article() {
    let html = fixture("article_full.html");

    match extract(&html) {
        Ok(result) => {
            assert_eq!(result.title, "Scientists map deep-sea vents");
            assert!(
                result.content_text.len() > 500,
                "Content should be substantial"
            );
            assert!(
                result.content_text.contains("groundbreaking discovery"),
                "Should contain main article content"
            );
            assert!(
                result.content_text.contains("Dr. Maria Johnson"),
                "Should contain the byline"
            );
            assert!(
                result.content_text.contains("A black smoker photographed at 3,000 metres."),
                "Should keep the figure caption"
            );
            assert!(result.content_html.contains(r#"<img src="/img/vent.jpg" alt="A black smoker vent">"#));

            for boilerplate in [
                "Subscribe to our newsletter",
                "Popular Posts",
                "Skip to content",
                "cookies",
                "Share on Facebook",
                "More ocean stories",
                "All rights reserved",
                "Features",
                "window.analytics",
            ] {
                assert!(
                    !result.content_text.contains(boilerplate),
                    "{boilerplate} should be removed"
                );
            }
        }
        Err(err) => panic!("Extraction failed: {err:?}"),
    }
}

#[test]
fn test_extract_blog_post() {
    let html = fixture("blog_post.html");
    let expected = fixture("blog_post.txt");

    match extract(&html) {
        Ok(result) => {
            assert_eq!(result.title, "Why I switched to a standing desk");
            assert_eq!(result.content_text, expected.trim_end());
            assert!(!result.content_text.contains("Great post"));
            assert!(!result.content_text.contains("Archives"));
            assert!(!result.content_text.contains("Proudly powered"));
        }
        Err(err) => panic!("Extraction failed: {err:?}"),
    }
}

#[test]
fn test_extract_legacy_table_layout() {
    let html = fixture("table_layout.html");
    let expected = fixture("table_layout.txt");

    match extract(&html) {
        Ok(result) => {
            assert_eq!(result.title, "Grandma's apple pie");
            assert_eq!(result.content_text, expected.trim_end());
            assert!(result.content_html.contains("<b>Ingredients</b><br>"));
            assert!(!result.content_text.contains("Netscape"));
            assert!(!result.content_text.contains("Cakes"));
        }
        Err(err) => panic!("Extraction failed: {err:?}"),
    }
}

#[test]
fn test_extraction_is_deterministic_across_fixtures() {
    for name in ["article_full.html", "blog_post.html", "table_layout.html"] {
        let html = fixture(name);
        let first = extract(&html).expect("first run");
        let second = extract(&html).expect("second run");
        assert_eq!(first, second, "{name} differs between runs");
    }
}

#[test]
fn test_reextracting_content_html_yields_same_text() {
    for name in ["article_full.html", "blog_post.html", "table_layout.html"] {
        let first = extract(&fixture(name)).expect("first pass");
        let wrapped = format!("<html><body>{}</body></html>", first.content_html);
        let second = extract(&wrapped).expect("second pass");
        assert_eq!(first.content_text, second.content_text, "{name} is not stable");
    }
}

#[test]
fn test_bytes_and_str_entry_points_agree() {
    let html = fixture("article_full.html");
    let from_str = extract(&html).expect("str");
    let from_bytes = extract_bytes(html.as_bytes()).expect("bytes");
    assert_eq!(from_str, from_bytes);
}

/// Serves fixtures by URL path.
struct FixtureFetcher;

impl Fetcher for FixtureFetcher {
    fn fetch(&self, url: &Url) -> Result<Vec<u8>, FetchError> {
        let name = url.path().trim_start_matches('/');
        std::fs::read(fixture_path(name)).map_err(|_| FetchError::Status(404))
    }
}

#[test]
fn test_request_by_url_produces_success_envelope() {
    let request = Request::from_url("https://fixtures.test/blog_post.html");
    let envelope = Envelope::from_outcome(extract_request(
        &request,
        &FixtureFetcher,
        &readable_extract::Options::default(),
    ));

    assert!(envelope.is_success());
    assert_eq!(envelope.status(), 200);
    let json: serde_json::Value =
        serde_json::from_str(&envelope.to_json().expect("json")).expect("valid json");
    assert_eq!(json["title"], "Why I switched to a standing desk");
    assert!(json["content"]
        .as_str()
        .expect("content string")
        .starts_with("For years I wrote"));
    assert!(json["html"].as_str().expect("html string").starts_with("<div>"));
}

#[test]
fn test_request_for_missing_page_reports_fetch_failure() {
    let request = Request::from_url("https://fixtures.test/missing.html");
    let envelope = Envelope::from_outcome(extract_request(
        &request,
        &FixtureFetcher,
        &readable_extract::Options::default(),
    ));

    assert!(!envelope.is_success());
    assert_eq!(envelope.status(), 502);
}
