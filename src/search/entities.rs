//! HTML entity decoding for API text fields
//!
//! The search API returns titles and channel names HTML-escaped
//! (`Mom&#39;s Dal`, `Tea &amp; Pakora`). Terminal output needs plain text.

/// Decode named (HTML5) and numeric HTML entities
///
/// Unknown entities are left as-is.
#[must_use]
pub fn decode_entities(input: &str) -> String {
    html_escape::decode_html_entities(input).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(decode_entities("Instant Pot Paneer"), "Instant Pot Paneer");
    }

    #[test]
    fn test_basic_named_entities() {
        assert_eq!(
            decode_entities("Tea &amp; Pakora &quot;Street&quot; &lt;3"),
            "Tea & Pakora \"Street\" <3"
        );
    }

    #[test]
    fn test_html5_named_entities() {
        assert_eq!(
            decode_entities("Cr&egrave;me Br&ucirc;l&eacute;e &ndash; Easy&hellip; &rsquo;s"),
            "Crème Brûlée – Easy… ’s"
        );
    }

    #[test]
    fn test_numeric_entities() {
        assert_eq!(decode_entities("Mom&#39;s Dal"), "Mom's Dal");
        assert_eq!(decode_entities("Chef&#x27;s Special"), "Chef's Special");
    }

    #[test]
    fn test_bare_ampersand_left_alone() {
        assert_eq!(decode_entities("Salt & Pepper"), "Salt & Pepper");
        assert_eq!(decode_entities("trailing &"), "trailing &");
    }
}
