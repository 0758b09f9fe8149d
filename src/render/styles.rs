//! CSS profiles for the rendered output.
//!
//! Three profiles cover the three delivery shapes: a standalone per-chapter
//! page, the combined interactive document (fixed sidebar navigation), and
//! the combined print/PDF document (page-break control, point-sized type).
//! Keeping them as constants means the rendering code never assembles CSS
//! from fragments and the output styling is diffable in one place.

/// Styling for a standalone per-chapter HTML page.
pub const PAGE_CSS: &str = r#"
        body {
            font-family: Arial, sans-serif;
            line-height: 1.6;
            max-width: 800px;
            margin: 0 auto;
            padding: 20px;
        }
        pre {
            background-color: #f4f4f4;
            padding: 10px;
            border-radius: 5px;
            overflow-x: auto;
        }
        code {
            font-family: Consolas, Monaco, 'Andale Mono', monospace;
        }
        img {
            max-width: 100%;
            height: auto;
            display: block;
            margin: 10px auto;
        }
        a {
            color: #007bff;
            text-decoration: none;
        }
        a:hover {
            text-decoration: underline;
        }
        table {
            border-collapse: collapse;
            width: 100%;
            margin: 10px 0;
        }
        th, td {
            border: 1px solid #ddd;
            padding: 8px;
            text-align: left;
        }
        th {
            background-color: #f2f2f2;
        }
"#;

/// Styling for the combined document when viewed interactively: fixed
/// sidebar table of contents, content offset to its right.
pub const SCREEN_CSS: &str = r#"
        body {
            font-family: Arial, sans-serif;
            line-height: 1.6;
            max-width: 1200px;
            margin: 0 auto;
            padding: 20px;
        }
        .toc {
            position: fixed;
            top: 20px;
            left: 20px;
            width: 250px;
            max-height: 80vh;
            overflow-y: auto;
            background: #f8f9fa;
            padding: 20px;
            border-radius: 5px;
            border: 1px solid #dee2e6;
        }
        .toc h2 {
            margin-top: 0;
            color: #495057;
        }
        .toc ul {
            list-style-type: none;
            padding-left: 0;
        }
        .toc li {
            margin: 5px 0;
        }
        .toc a {
            text-decoration: none;
            color: #007bff;
            display: block;
            padding: 5px 10px;
            border-radius: 3px;
            transition: background-color 0.2s;
        }
        .toc a:hover {
            background-color: #e9ecef;
        }
        .content {
            margin-left: 290px;
        }
        section {
            margin-bottom: 40px;
            padding: 20px;
            border: 1px solid #dee2e6;
            border-radius: 5px;
            background: white;
        }
        section h1 {
            color: #495057;
            border-bottom: 2px solid #007bff;
            padding-bottom: 10px;
        }
        pre {
            background-color: #f4f4f4;
            padding: 10px;
            border-radius: 5px;
            overflow-x: auto;
        }
        code {
            font-family: Consolas, Monaco, 'Andale Mono', monospace;
        }
        hr {
            border: none;
            border-top: 1px solid #dee2e6;
            margin: 20px 0;
        }
        img {
            max-width: 100%;
            height: auto;
            display: block;
            margin: 10px auto;
        }
        a {
            color: #007bff;
            text-decoration: none;
        }
        a:hover {
            text-decoration: underline;
        }
        table {
            border-collapse: collapse;
            width: 100%;
            margin: 10px 0;
        }
        th, td {
            border: 1px solid #ddd;
            padding: 8px;
            text-align: left;
        }
        th {
            background-color: #f2f2f2;
        }
"#;

/// Styling for the combined document when destined for PDF: the table of
/// contents gets its own page and every section starts on a fresh one.
pub const PRINT_CSS: &str = r#"
        body {
            font-family: Arial, sans-serif;
            line-height: 1.6;
            margin: 20px;
            font-size: 12pt;
        }
        .toc {
            page-break-after: always;
            margin-bottom: 30px;
        }
        .toc h2 {
            margin-top: 0;
            color: #495057;
            font-size: 18pt;
        }
        .toc ul {
            list-style-type: none;
            padding-left: 0;
        }
        .toc li {
            margin: 8px 0;
            font-size: 11pt;
        }
        .toc a {
            text-decoration: none;
            color: #007bff;
        }
        section {
            page-break-before: always;
            margin-bottom: 20px;
        }
        section:first-of-type {
            page-break-before: avoid;
        }
        section h1 {
            color: #495057;
            border-bottom: 2px solid #007bff;
            padding-bottom: 10px;
            font-size: 16pt;
        }
        pre {
            background-color: #f4f4f4;
            padding: 10px;
            border-radius: 5px;
            overflow-x: auto;
            font-size: 10pt;
        }
        code {
            font-family: Consolas, Monaco, 'Andale Mono', monospace;
        }
        hr {
            border: none;
            border-top: 1px solid #dee2e6;
            margin: 20px 0;
        }
        img {
            max-width: 100%;
            height: auto;
            display: block;
            margin: 10px auto;
        }
        a {
            color: #007bff;
            text-decoration: none;
        }
        a:hover {
            text-decoration: underline;
        }
        table {
            border-collapse: collapse;
            width: 100%;
            margin: 10px 0;
        }
        th, td {
            border: 1px solid #ddd;
            padding: 8px;
            text-align: left;
        }
        th {
            background-color: #f2f2f2;
        }
        @page {
            margin: 1in;
        }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_profile_uses_fixed_sidebar() {
        assert!(SCREEN_CSS.contains("position: fixed"));
        assert!(SCREEN_CSS.contains(".content"));
        assert!(!SCREEN_CSS.contains("page-break"));
    }

    #[test]
    fn print_profile_controls_page_breaks() {
        assert!(PRINT_CSS.contains("page-break-before: always"));
        assert!(PRINT_CSS.contains("page-break-after: always"));
        assert!(PRINT_CSS.contains("@page"));
        assert!(!PRINT_CSS.contains("position: fixed"));
    }

    #[test]
    fn page_profile_is_self_contained() {
        assert!(PAGE_CSS.contains("max-width: 800px"));
        assert!(!PAGE_CSS.contains(".toc"));
    }
}
