//! Inline HTML for the usage page and rendered checksum results

use crate::checksum::Checksum;
use crate::handler::Verification;

/// Usage page shown when `/hash` is called without `data`
pub fn usage_page() -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>SHA-256 Hash Generator</title>
    <style>{}</style>
</head>
<body>
    <div class="card">
        <h1>SHA-256 Hash Generator</h1>
        <p><strong>Usage:</strong></p>
        <code>/hash?data=HelloWorld</code>
        <code>/hash?data=HelloWorld&amp;expected=872e4e50ce9990d8b041330c47c9ddd11bec6b503ae9386a99da8584e9bb12c4</code>
        <p><strong>Limits:</strong> Max 10,000 characters input</p>
    </div>
</body>
</html>"#,
        CSS_STYLES
    )
}

/// Render the result of hashing `data`.
///
/// `data` is escaped here; the checksum and any echoed expected value are
/// hex-only and go in verbatim.
pub fn render_result(data: &str, checksum: &Checksum, verification: &Verification) -> String {
    let outcome = match verification {
        Verification::Pass => "Verification Result: PASS ✅".to_string(),
        Verification::Fail { expected } => {
            format!("Verification Result: FAIL ❌\nExpected: {}", expected)
        }
        Verification::NotRequested => {
            "Verification Result: No comparison checksum provided.".to_string()
        }
    };

    format!(
        "<pre>data: {}\n\nMessage Digest SHA-256 : Checksum Value: {}\n\n{}</pre>",
        html_escape(data),
        checksum,
        outcome
    )
}

/// Escape text for embedding in HTML element content or attribute values.
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '/' => out.push_str("&#x2F;"),
            _ => out.push(c),
        }
    }
    out
}

const CSS_STYLES: &str = r#"
body {
    font-family: system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
    margin: 0;
    padding: 40px 20px;
    background: #f5f5f5;
}
.card {
    max-width: 500px;
    margin: 0 auto;
    background: white;
    padding: 30px;
    border-radius: 8px;
    box-shadow: 0 2px 10px rgba(0, 0, 0, 0.1);
}
h1 {
    margin-top: 0;
    color: #333;
}
code {
    display: block;
    margin: 10px 0;
    padding: 8px 12px;
    background: #eee;
    border-radius: 4px;
    font-family: monospace;
    font-size: 13px;
    overflow-x: auto;
}
p {
    color: #666;
    line-height: 1.6;
    margin: 10px 0;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== html_escape ====================

    #[test]
    fn test_escapes_markup() {
        assert_eq!(
            html_escape("<script>alert(1)</script>"),
            "&lt;script&gt;alert(1)&lt;&#x2F;script&gt;"
        );
        assert_eq!(html_escape(r#"a "b" 'c'"#), "a &quot;b&quot; &#x27;c&#x27;");
    }

    #[test]
    fn test_escape_is_single_pass() {
        // Replacement text is not escaped again
        assert_eq!(html_escape("&lt;"), "&amp;lt;");
        assert_eq!(html_escape("</"), "&lt;&#x2F;");
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(html_escape("HelloWorld 123 ünï"), "HelloWorld 123 ünï");
    }

    // ==================== render_result ====================

    #[test]
    fn test_render_pass() {
        let checksum = Checksum::compute("HelloWorld");
        let body = render_result("HelloWorld", &checksum, &Verification::Pass);
        assert_eq!(
            body,
            "<pre>data: HelloWorld\n\n\
             Message Digest SHA-256 : Checksum Value: \
             872e4e50ce9990d8b041330c47c9ddd11bec6b503ae9386a99da8584e9bb12c4\n\n\
             Verification Result: PASS ✅</pre>"
        );
    }

    #[test]
    fn test_render_fail_echoes_expected() {
        let checksum = Checksum::compute("HelloWorld");
        let expected = "DEADBEEF".repeat(8);
        let body = render_result(
            "HelloWorld",
            &checksum,
            &Verification::Fail {
                expected: expected.clone(),
            },
        );
        assert!(body.contains("Verification Result: FAIL ❌\nExpected: DEADBEEF"));
        assert!(body.ends_with(&format!("{}</pre>", expected)));
    }

    #[test]
    fn test_render_without_expected() {
        let checksum = Checksum::compute("x");
        let body = render_result("x", &checksum, &Verification::NotRequested);
        assert!(body.contains("No comparison checksum provided."));
        assert!(!body.contains("PASS"));
        assert!(!body.contains("FAIL"));
    }

    #[test]
    fn test_render_escapes_data() {
        let data = "<b>hi</b>";
        let checksum = Checksum::compute(data);
        let body = render_result(data, &checksum, &Verification::NotRequested);
        assert!(body.contains("data: &lt;b&gt;hi&lt;&#x2F;b&gt;"));
        assert!(!body.contains("<b>"));
    }

    // ==================== usage_page ====================

    #[test]
    fn test_usage_page_content() {
        let page = usage_page();
        assert!(page.contains("SHA-256 Hash Generator"));
        assert!(page.contains("/hash?data=HelloWorld"));
        assert!(page.contains("Max 10,000 characters input"));
    }
}
