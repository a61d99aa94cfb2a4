use std::sync::LazyLock;

use regex::Regex;
use v_htmlescape::escape;

pub const NOT_PROVIDED: &str = "Not provided";

static CAPITALS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([A-Z])").unwrap());

pub fn capitalize_first(input: &str) -> String {
    let mut chars = input.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Human readable label for a camelCase key: `moveInDate` -> `Move In Date`.
pub fn review_label(key: &str) -> String {
    let spaced = CAPITALS.replace_all(key, " ${1}");

    capitalize_first(spaced.trim())
}

/// Escapes `& < > " ' /` so submitted text can sit in element bodies and
/// attribute values.
pub fn escape_html(input: &str) -> String {
    escape(input).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("yes"), "Yes");
        assert_eq!(capitalize_first("Yes"), "Yes");
        assert_eq!(capitalize_first("bank transfer"), "Bank transfer");
        assert_eq!(capitalize_first("éclair"), "Éclair");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_review_label() {
        assert_eq!(review_label("fullName"), "Full Name");
        assert_eq!(review_label("moveInDate"), "Move In Date");
        assert_eq!(review_label("dob"), "Dob");
        assert_eq!(review_label("signature"), "Signature");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("Smith & Sons"), "Smith &amp; Sons");
        assert_eq!(
            escape_html("<b>\"x\"</b>"),
            "&lt;b&gt;&quot;x&quot;&lt;&#x2f;b&gt;"
        );
        assert_eq!(escape_html("O'Neil"), "O&#x27;Neil");
        assert_eq!(escape_html("plain"), "plain");
    }
}
