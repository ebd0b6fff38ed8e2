//! HTML escaping.

use std::fmt;

/// Display adapter that escapes `& < > " '` as it writes.
#[derive(Debug, Clone, Copy)]
pub struct Escaped<'a>(pub &'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.0;
        while let Some(pos) = rest.find(['&', '<', '>', '"', '\'']) {
            f.write_str(&rest[..pos])?;
            let entity = match rest.as_bytes()[pos] {
                b'&' => "&amp;",
                b'<' => "&lt;",
                b'>' => "&gt;",
                b'"' => "&quot;",
                _ => "&#39;",
            };
            f.write_str(entity)?;
            rest = &rest[pos + 1..];
        }
        f.write_str(rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escape_html(raw: &str) -> String {
        Escaped(raw).to_string()
    }

    #[test]
    fn test_escapes_all_special_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(escape_html("NX-OS 10.3(6)(M)"), "NX-OS 10.3(6)(M)");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_multibyte_text_kept() {
        assert_eq!(escape_html("Zürich <core>"), "Zürich &lt;core&gt;");
    }
}
