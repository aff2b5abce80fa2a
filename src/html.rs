/// Escape text for HTML element content and double- or single-quoted
/// attribute values.
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"Faith & "Founding" <b>'x'</b>"#),
            "Faith &amp; &quot;Founding&quot; &lt;b&gt;&#39;x&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_html("Côte d’Ivoire"), "Côte d’Ivoire");
    }
}
