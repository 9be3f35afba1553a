use readable_extract::extract;

const PARA: &str = "Filler paragraph with enough words, and a comma, to carry the article.";

fn article(inner: &str) -> String {
    format!("<html><body><article><p>{PARA}</p><p>{PARA}</p><p>{PARA}</p>{inner}</article></body></html>")
}

#[test]
fn extract_puts_each_paragraph_on_its_own_line() {
    let html = article("<p>First extra paragraph.</p><p>Second extra paragraph.</p>");
    let result = extract(&html);
    match result {
        Ok(result) => {
            assert!(result
                .content_text
                .ends_with("First extra paragraph.\nSecond extra paragraph."));
            assert!(!result.content_text.contains("\n\n"));
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn extract_handles_br_as_line_break() {
    let html = article("<p>Line 1<br>Line 2</p>");
    let result = extract(&html);
    match result {
        Ok(result) => assert!(result.content_text.ends_with("Line 1\nLine 2")),
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn extract_strips_inline_elements() {
    let html = "<html><body><p>This is <strong>bold</strong> and <em>italic</em>, all in one sentence.</p></body></html>";
    let result = extract(html);
    match result {
        Ok(result) => assert_eq!(result.content_text, "This is bold and italic, all in one sentence."),
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn extract_handles_nested_inline_elements() {
    let html = "<html><body><p>This is <strong><em>bold and italic</em></strong> text in a sentence.</p></body></html>";
    let result = extract(html);
    match result {
        Ok(result) => assert_eq!(result.content_text, "This is bold and italic text in a sentence."),
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn extract_preserves_link_text_without_url() {
    let html = r#"<html><body><p>Visit <a href="https://example.com">our site</a> for the full report and data.</p></body></html>"#;
    let result = extract(html);
    match result {
        Ok(result) => {
            assert!(result.content_text.contains("our site"));
            assert!(!result.content_text.contains("https://"));
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn extract_preserves_headings_on_their_own_line() {
    let html = article("<h2>Heading</h2><p>Para after the heading.</p>");
    let result = extract(&html);
    match result {
        Ok(result) => assert!(result.content_text.contains("\nHeading\nPara after the heading.")),
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn extract_collapses_inline_whitespace() {
    let html = article("<p> Hello\t\tworld </p><p> Second\n   line </p>");
    let result = extract(&html);
    match result {
        Ok(result) => {
            assert!(result.content_text.ends_with("Hello world\nSecond line"));
            assert!(!result.content_text.contains("  "));
            assert!(!result.content_text.contains('\t'));
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn extract_handles_list_items() {
    let html = article("<ul><li>Item 1</li><li>Item 2</li><li>Item 3</li></ul>");
    let result = extract(&html);
    match result {
        Ok(result) => assert!(result.content_text.ends_with("Item 1\nItem 2\nItem 3")),
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn extract_result_fields_are_public() {
    let result = extract(&article("")).expect("expected Ok(_)");
    let _text: &str = &result.content_text;
    let _html: &str = &result.content_html;
    let _title: &str = &result.title;
    assert!(result.word_count() > 10);
}
