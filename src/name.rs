//! Tag name extraction
//!
//! Turns raw tag text (`<div class="x">`, `<br/>`) into the element name.
//! The lenient [`tag_name`] never fails: anything it cannot make sense of
//! becomes the empty name. [`tag_name_strict`] reports the same cases.

use memchr::memchr3;

use crate::error::MarkupError;
use crate::node::Range;

/// Strip tag delimiters: leading `<`, trailing `>` and a `/` right before it
fn strip_delimiters(raw: &str) -> &str {
    let inner = raw.strip_prefix('<').unwrap_or(raw);
    match inner.strip_suffix('>') {
        Some(rest) => rest.strip_suffix('/').unwrap_or(rest),
        None => inner,
    }
}

/// First whitespace-delimited token; trailing attribute text is dropped
#[inline]
fn first_token(inner: &str) -> Option<&str> {
    inner.split_ascii_whitespace().next()
}

/// Extract the element name from raw tag text
///
/// Returns `""` for empty, truncated or otherwise nameless tags.
pub fn tag_name(raw: &str) -> &str {
    first_token(strip_delimiters(raw)).unwrap_or("")
}

/// Extract the element name, reporting malformed tag text
pub fn tag_name_strict(raw: &str) -> Result<&str, MarkupError> {
    if raw.is_empty() {
        return Err(MarkupError::EmptyTag);
    }
    let name = first_token(strip_delimiters(raw))
        .ok_or_else(|| MarkupError::MissingName(raw.to_string()))?;

    if let Some(offset) = memchr3(b'<', b'=', b'"', name.as_bytes()) {
        return Err(MarkupError::InvalidNameByte {
            name: name.to_string(),
            byte: name.as_bytes()[offset] as char,
            offset,
        });
    }
    Ok(name)
}

/// An element name together with the range of the tag it came from
///
/// The range is the opening tag's own span, used for navigation and
/// highlighting; it is never the element's full range.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NameValue {
    name: String,
    range: Range,
}

impl NameValue {
    pub fn new(name: impl Into<String>, start: usize, end: usize) -> Self {
        NameValue {
            name: name.into(),
            range: Range::new(start, end),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn range(&self) -> Range {
        self.range
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_and_self_closing() {
        assert_eq!(tag_name("<div>"), "div");
        assert_eq!(tag_name("<div/>"), "div");
        assert_eq!(tag_name("<br />"), "br");
    }

    #[test]
    fn test_attributes_discarded() {
        assert_eq!(tag_name("<div class=\"x\">"), "div");
        assert_eq!(tag_name("<input\n\ttype=\"text\"/>"), "input");
    }

    #[test]
    fn test_malformed_recovers_empty() {
        assert_eq!(tag_name(""), "");
        assert_eq!(tag_name("<"), "");
        assert_eq!(tag_name("<>"), "");
        assert_eq!(tag_name("</>"), "");
        assert_eq!(tag_name("<   >"), "");
    }

    #[test]
    fn test_truncated_tag() {
        // lexer gave up before the closing '>'
        assert_eq!(tag_name("<div"), "div");
        assert_eq!(tag_name("<span id="), "span");
    }

    #[test]
    fn test_slash_only_before_close() {
        assert_eq!(tag_name("<a/b>"), "a/b");
        assert_eq!(tag_name("<p/"), "p/");
    }

    #[test]
    fn test_strict_ok() {
        assert_eq!(tag_name_strict("<div class=\"x\">"), Ok("div"));
        assert_eq!(tag_name_strict("<img/>"), Ok("img"));
    }

    #[test]
    fn test_strict_errors() {
        assert_eq!(tag_name_strict(""), Err(MarkupError::EmptyTag));
        assert_eq!(
            tag_name_strict("<>"),
            Err(MarkupError::MissingName("<>".to_string()))
        );
        assert_eq!(
            tag_name_strict("<div<span>"),
            Err(MarkupError::InvalidNameByte {
                name: "div<span".to_string(),
                byte: '<',
                offset: 3,
            })
        );
        assert!(matches!(
            tag_name_strict("<a=b>"),
            Err(MarkupError::InvalidNameByte { byte: '=', .. })
        ));
    }

    #[test]
    fn test_name_value() {
        let value = NameValue::new("div", 10, 15);
        assert_eq!(value.name(), "div");
        assert_eq!(value.range(), Range::new(10, 15));
    }
}
