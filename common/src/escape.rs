//! HTMLエスケープ
//!
//! ギャラリーとドキュメント整理の両方で同じ規則を使う。

/// 本文用: `& < > " '` の5文字をエスケープ
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// 属性値用: `&` と `"` をエスケープ（ダブルクォートで囲む前提）
pub fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_all_reserved() {
        assert_eq!(escape_html(r#"&<>"'"#), "&amp;&lt;&gt;&quot;&#39;");
    }

    #[test]
    fn test_escape_html_script() {
        let escaped = escape_html("<script>alert(1)</script>");
        assert_eq!(escaped, "&lt;script&gt;alert(1)&lt;/script&gt;");
        assert!(!escaped.contains('<'));
    }

    #[test]
    fn test_escape_html_plain_text_untouched() {
        assert_eq!(escape_html("FizzBuzz デモ"), "FizzBuzz デモ");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_escape_attr() {
        assert_eq!(escape_attr(r#"a"b&c"#), "a&quot;b&amp;c");
        assert_eq!(escape_attr("demos/x/index.html"), "demos/x/index.html");
    }
}
