use super::*;

#[test]
fn renders_basic_formatting() {
    let html = render_markdown_html("**Skills:** *Rust*, Python\n\n- one\n- two");
    assert!(html.contains("<strong>Skills:</strong>"));
    assert!(html.contains("<em>Rust</em>"));
    assert!(html.contains("<li>one</li>"));
}

#[test]
fn raw_html_is_dropped() {
    let html = render_markdown_html("hello <script>alert(1)</script>\n\n<div onclick=\"x()\">block</div>");
    assert!(!html.contains("<script>"));
    assert!(!html.contains("onclick"));
    assert!(html.contains("hello"));
}

#[test]
fn javascript_links_are_neutralised() {
    let html = render_markdown_html("[click](javascript:alert(1)) and <javascript:alert(2)>");
    assert!(!html.contains(r#"href="javascript"#));
    assert_eq!(html.matches(r##"href="#""##).count(), 2);
}

#[test]
fn data_images_are_neutralised() {
    let html = render_markdown_html("![x](data:image/svg+xml;base64,AAAA)");
    assert!(html.contains(r##"src="#""##));
}

#[test]
fn http_and_mailto_links_survive() {
    let html = render_markdown_html("[cv](https://example.com/cv.pdf) [mail](mailto:hr@example.com)");
    assert!(html.contains(r#"href="https://example.com/cv.pdf""#));
    assert!(html.contains(r#"href="mailto:hr@example.com""#));
}

#[test]
fn scheme_check_ignores_obfuscation() {
    assert!(!is_safe_url("java\tscript:alert(1)"));
    assert!(!is_safe_url(" JAVASCRIPT:alert(1)"));
    assert!(!is_safe_url("vbscript:msgbox"));
    assert!(is_safe_url("/candidates/4"));
    assert!(is_safe_url("notes?at=10:30"));
    assert!(is_safe_url("HTTPS://example.com"));
}
