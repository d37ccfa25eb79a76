//! The fixed page shell for the legal documents
//!
//! A complete HTML5 document with an inline stylesheet, a back link to the
//! legal index page, and the support footer. Color values are substituted
//! from the brand palette; `{title}` and `{content}` carry the per-document
//! parts.

use crate::brand::Palette;

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - BrightSide</title>
    <style>
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
            line-height: 1.6;
            color: {ink};
            background: {canvas};
            padding: 20px;
        }

        .container {
            max-width: 800px;
            margin: 0 auto;
            background: {surface};
            padding: 40px;
            border-radius: 8px;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }

        h1 {
            color: {primary};
            margin-bottom: 20px;
            font-size: 2.5em;
        }

        h2 {
            color: {ink};
            margin-top: 30px;
            margin-bottom: 15px;
            font-size: 1.8em;
            border-bottom: 2px solid {primary};
            padding-bottom: 5px;
        }

        h3 {
            color: {ink};
            margin-top: 20px;
            margin-bottom: 10px;
            font-size: 1.3em;
        }

        p {
            margin-bottom: 15px;
        }

        strong {
            color: {ink};
        }

        ul, ol {
            margin: 15px 0;
            padding-left: 30px;
        }

        li {
            margin-bottom: 8px;
        }

        table {
            width: 100%;
            border-collapse: collapse;
            margin: 20px 0;
            font-size: 0.9em;
        }

        th, td {
            border: 1px solid {border};
            padding: 12px;
            text-align: left;
        }

        th {
            background: {primary};
            color: {surface};
            font-weight: 600;
        }

        tr:nth-child(even) {
            background: {row-alt};
        }

        a {
            color: {primary};
            text-decoration: none;
        }

        a:hover {
            text-decoration: underline;
        }

        hr {
            border: none;
            border-top: 1px solid {border};
            margin: 30px 0;
        }

        blockquote {
            border-left: 4px solid {primary};
            padding-left: 20px;
            margin: 20px 0;
            font-style: italic;
            color: {muted};
        }

        .back-link {
            display: inline-block;
            margin-bottom: 20px;
            padding: 10px 20px;
            background: {row-alt};
            border-radius: 4px;
            color: {ink};
            text-decoration: none;
            transition: background 0.2s;
        }

        .back-link:hover {
            background: {primary};
            color: {surface};
        }

        footer {
            margin-top: 40px;
            padding-top: 20px;
            border-top: 1px solid {border};
            text-align: center;
            color: {muted};
            font-size: 0.9em;
        }
    </style>
</head>
<body>
    <div class="container">
        <a href="index.html" class="back-link">&larr; Back to Legal</a>
        {content}
        <footer>
            <p>&copy; 2025 BrightSide. All rights reserved.</p>
            <p><a href="mailto:support@brightside.com">support@brightside.com</a></p>
        </footer>
    </div>
</body>
</html>
"#;

/// Substitute the title, content fragment, and brand colors into the shell
///
/// Colors are substituted first so brace sequences inside the caller's
/// content never collide with the palette placeholders.
pub fn render_page(title: &str, content: &str, palette: &Palette) -> String {
    PAGE_TEMPLATE
        .replace("{primary}", &palette.resolve_or_default("primary"))
        .replace("{ink}", &palette.resolve_or_default("ink"))
        .replace("{muted}", &palette.resolve_or_default("muted"))
        .replace("{canvas}", &palette.resolve_or_default("canvas"))
        .replace("{surface}", &palette.resolve_or_default("surface"))
        .replace("{border}", &palette.resolve_or_default("border"))
        .replace("{row-alt}", &palette.resolve_or_default("row-alt"))
        .replace("{title}", title)
        .replace("{content}", content)
}
