//! Line-level value extraction for TextGrid fields, e.g.
//! `xmin = 0.25` or `text = "word"`.

use std::num::ParseFloatError;

use once_cell::sync::Lazy;
use regex::Regex;

// Greedy, so a quoted value runs to the last '"' on the line.
// Praat's doubled quotes ("") inside a label are kept as is.
static NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"name\s*=\s*"(.*)""#).unwrap()
});

static TEXT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"text\s*=\s*"(.*)""#).unwrap()
});

/// Returns the quoted value of a `name = "..."` field,
/// or `None` if the line has no such field.
pub fn name_value(line: &str) -> Option<&str> {
    NAME_REGEX.captures(line)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Returns the quoted value of a `text = "..."` field.
/// Lines without a quoted value return an empty string.
pub fn text_value(line: &str) -> &str {
    TEXT_REGEX.captures(line)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .unwrap_or_default()
}

/// Everything after the first `=`, trimmed.
/// Empty if the line has no `=`.
pub fn field_value(line: &str) -> &str {
    line.split_once('=')
        .map(|(_, value)| value.trim())
        .unwrap_or_default()
}

/// Parses the value after the first `=` as seconds.
pub fn seconds(line: &str) -> Result<f64, ParseFloatError> {
    field_value(line).parse::<f64>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_value_is_exact_quoted_content() {
        assert_eq!(name_value(r#"        name = "target" "#), Some("target"));
        assert_eq!(name_value(r#"name="Target""#), Some("Target"));
        assert_eq!(name_value(r#"name = " padded ""#), Some(" padded "));
        assert_eq!(name_value("name = target"), None);
    }

    #[test]
    fn text_value_defaults_to_empty() {
        assert_eq!(text_value(r#"text = "word""#), "word");
        assert_eq!(text_value(r#"text = """#), "");
        assert_eq!(text_value("text = word"), "");
        assert_eq!(text_value(r#"text = "say ""hi"" now""#), r#"say ""hi"" now"#);
    }

    #[test]
    fn field_value_after_first_equals() {
        assert_eq!(field_value("xmin = 1.5"), "1.5");
        assert_eq!(field_value("xmax=2"), "2");
        assert_eq!(field_value("no value here"), "");
    }

    #[test]
    fn seconds_parses_or_fails() {
        assert_eq!(seconds("xmin = 0.25").unwrap(), 0.25);
        assert_eq!(seconds("xmax = 3").unwrap(), 3.0);
        assert!(seconds("xmin = abc").is_err());
        assert!(seconds("xmin").is_err());
    }
}
