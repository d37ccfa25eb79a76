//! Markdown conversion for the legal documents
//!
//! Uses comrak with GFM tables and hard line breaks so the single-newline
//! formatting used in the legal sources survives into HTML.

use comrak::{markdown_to_html, Options};

/// Convert markdown source to an HTML fragment
///
/// Tables and fenced code blocks are enabled, and single newlines become
/// `<br />` elements. Raw HTML passes through unchanged; the legal
/// documents are first-party content. Malformed markdown is rendered
/// permissively rather than rejected.
pub fn to_fragment(source: &str) -> String {
    let mut options = Options::default();
    options.extension.table = true;
    options.render.hardbreaks = true;
    options.render.unsafe_ = true;
    markdown_to_html(source, &options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_and_paragraph() {
        let html = to_fragment("# Hello\n\nWorld");
        assert!(html.contains("<h1>Hello</h1>"));
        assert!(html.contains("<p>World</p>"));
    }

    #[test]
    fn test_single_newline_becomes_line_break() {
        let html = to_fragment("line one\nline two");
        assert!(html.contains("<br />"));
    }

    #[test]
    fn test_tables() {
        let html = to_fragment("| a | b |\n| --- | --- |\n| 1 | 2 |");
        assert!(html.contains("<table>"));
        assert!(html.contains("<th>a</th>"));
        assert!(html.contains("<td>1</td>"));
    }

    #[test]
    fn test_fenced_code() {
        let html = to_fragment("```\nlet x = 1;\n```");
        assert!(html.contains("<pre><code>"));
        assert!(html.contains("let x = 1;"));
    }

    #[test]
    fn test_empty_source() {
        assert_eq!(to_fragment(""), "");
    }
}
