//! End-to-end tests for the legal document renderer
//!
//! These exercise the full file pipeline against a real temporary
//! directory: read markdown, render, create the destination directory,
//! write the page.

use std::fs;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use brightside_tools::brand::Palette;
use brightside_tools::docs::{convert_document, render_document, DocError};

#[test]
fn test_converts_markdown_file_to_styled_page() {
    let dir = TempDir::new().unwrap();
    let md = dir.path().join("privacy_policy.md");
    let html = dir.path().join("legal-web").join("privacy.html");
    fs::write(&md, "# Hello\n\nWorld").unwrap();

    convert_document(&md, &html, "Test", &Palette::default()).unwrap();

    let page = fs::read_to_string(&html).unwrap();
    assert!(page.contains("<h1>Hello</h1>"));
    assert!(page.contains("<p>World</p>"));
    assert!(page.contains("<title>Test - BrightSide</title>"));
    assert!(page.starts_with("<!DOCTYPE html>"));
}

#[test]
fn test_page_has_exactly_one_title_element() {
    let page = render_document(
        "# Privacy\n\nWe collect nothing.",
        "Privacy Policy",
        &Palette::default(),
    );
    assert_eq!(page.matches("<title>").count(), 1);
    assert!(page.contains("<title>Privacy Policy - BrightSide</title>"));
}

#[test]
fn test_missing_source_fails_without_writing_output() {
    let dir = TempDir::new().unwrap();
    let md = dir.path().join("does_not_exist.md");
    let html = dir.path().join("legal-web").join("privacy.html");

    let err = convert_document(&md, &html, "Privacy Policy", &Palette::default()).unwrap_err();
    assert!(matches!(err, DocError::Read { .. }));
    assert!(!html.exists());
    // The destination directory must not be created either
    assert!(!dir.path().join("legal-web").exists());
}

#[test]
fn test_empty_markdown_still_produces_a_valid_page() {
    let dir = TempDir::new().unwrap();
    let md = dir.path().join("empty.md");
    let html = dir.path().join("empty.html");
    fs::write(&md, "").unwrap();

    convert_document(&md, &html, "Empty", &Palette::default()).unwrap();

    let page = fs::read_to_string(&html).unwrap();
    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(page.trim_end().ends_with("</html>"));
    assert!(page.contains("<title>Empty - BrightSide</title>"));
}

#[test]
fn test_rerunning_overwrites_with_identical_bytes() {
    let dir = TempDir::new().unwrap();
    let md = dir.path().join("terms_of_service.md");
    let html = dir.path().join("terms.html");
    fs::write(&md, "# Terms\n\nBe kind.\n").unwrap();

    convert_document(&md, &html, "Terms of Service", &Palette::default()).unwrap();
    let first = fs::read(&html).unwrap();

    convert_document(&md, &html, "Terms of Service", &Palette::default()).unwrap();
    let second = fs::read(&html).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_tables_fenced_code_and_line_breaks() {
    let source = "\
| Data | Retention |
| --- | --- |
| Email | 30 days |

```
curl https://example.com
```

line one
line two";
    let page = render_document(source, "Privacy Policy", &Palette::default());
    assert!(page.contains("<table>"));
    assert!(page.contains("<td>Email</td>"));
    assert!(page.contains("<pre><code>"));
    assert!(page.contains("<br />"));
}

#[test]
fn test_template_shell_survives_substitution() {
    let page = render_document("Some body text.", "Terms of Service", &Palette::default());
    assert!(page.contains(r#"<a href="index.html" class="back-link">"#));
    assert!(page.contains("&copy; 2025 BrightSide. All rights reserved."));
    assert!(page.contains("mailto:support@brightside.com"));
    assert!(!page.contains("{title}"));
    assert!(!page.contains("{content}"));
}
