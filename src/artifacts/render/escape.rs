//! Escaping of untrusted commit and author strings

/// Replace control characters so commit text cannot inject terminal escapes
pub fn sanitize_terminal(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { '\u{fffd}' } else { c })
        .collect()
}

/// Escape text for use in XML character data and attribute values
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c if c.is_control() => escaped.push('\u{fffd}'),
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("plain message", "plain message")]
    #[case("\u{1b}[31mred\u{1b}[0m", "\u{fffd}[31mred\u{fffd}[0m")]
    #[case("tab\there", "tab\u{fffd}here")]
    fn test_sanitize_terminal(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(sanitize_terminal(input), expected);
    }

    #[rstest]
    #[case("<script>alert('x')</script>", "&lt;script&gt;alert(&apos;x&apos;)&lt;/script&gt;")]
    #[case("Tom & \"Jerry\"", "Tom &amp; &quot;Jerry&quot;")]
    #[case("ünïcödé", "ünïcödé")]
    fn test_escape_xml(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(escape_xml(input), expected);
    }
}
