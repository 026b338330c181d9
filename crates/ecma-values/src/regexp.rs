//! Regular-expression splitting backed by `regress`

use regress::{Flags, Regex};

use crate::array::{JsArray, MAX_ARRAY_LENGTH};
use crate::error::{ValueError, ValueResult};
use crate::split::Splitter;
use crate::string::JsString;
use crate::value::Value;

/// A [`Splitter`] that cuts at regular-expression matches.
///
/// Capture groups of each separator match are spliced into the result,
/// with non-participating groups as undefined.
#[derive(Debug)]
pub struct RegExpSplitter {
    regex: Regex,
    source: String,
    flags: String,
}

impl RegExpSplitter {
    /// Compile `pattern` with ECMAScript `flags`
    pub fn new(pattern: &str, flags: &str) -> ValueResult<Self> {
        let regex = Regex::with_flags(pattern, Flags::from(flags)).map_err(|e| {
            ValueError::invalid_argument(format!(
                "Invalid regular expression: /{pattern}/{flags}: {e}"
            ))
        })?;
        Ok(Self {
            regex,
            source: pattern.to_string(),
            flags: flags.to_string(),
        })
    }

    /// The pattern text
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The flag letters
    pub fn flags(&self) -> &str {
        &self.flags
    }

    fn uses_unicode(&self) -> bool {
        self.flags.contains('u') || self.flags.contains('v')
    }

    /// Index after the unit at `index`; a whole surrogate pair in unicode
    /// mode
    fn advance(&self, units: &[u16], index: usize) -> usize {
        let pair = self.uses_unicode()
            && matches!(units.get(index), Some(0xD800..=0xDBFF))
            && matches!(units.get(index + 1), Some(0xDC00..=0xDFFF));
        if pair { index + 2 } else { index + 1 }
    }

    fn find_from(&self, units: &[u16], start: usize) -> Option<regress::Match> {
        if self.uses_unicode() {
            self.regex.find_from_utf16(units, start).next()
        } else {
            self.regex.find_from_ucs2(units, start).next()
        }
    }
}

impl Splitter for RegExpSplitter {
    fn split(&self, target: &JsString, limit: Option<usize>) -> JsArray {
        let limit = limit.unwrap_or(MAX_ARRAY_LENGTH);
        if limit == 0 {
            return JsArray::new();
        }
        let units = target.units();
        let size = units.len();
        if size == 0 {
            // An empty string only splits away if the pattern matches it
            return match self.find_from(units, 0) {
                Some(_) => JsArray::new(),
                None => JsArray::of([Value::String(target.clone())]),
            };
        }

        let mut pieces = Vec::new();
        let mut p = 0;
        let mut q = 0;
        while q < size {
            let Some(found) = self.find_from(units, q) else {
                break;
            };
            let (start, end) = (found.start(), found.end().min(size));
            if start >= size {
                break;
            }
            if end == p {
                q = self.advance(units, start);
                continue;
            }

            pieces.push(Value::String(target.substring_units(p, start)));
            if pieces.len() == limit {
                return JsArray::from_vec(pieces);
            }
            for group in 1..=found.captures.len() {
                let capture = found
                    .group(group)
                    .map_or(Value::Undefined, |range| {
                        Value::String(target.substring_units(range.start, range.end))
                    });
                pieces.push(capture);
                if pieces.len() == limit {
                    return JsArray::from_vec(pieces);
                }
            }
            p = end;
            q = p;
        }
        pieces.push(Value::String(target.substring_units(p, size)));
        JsArray::from_vec(pieces)
    }

    fn separator_text(&self) -> Option<JsString> {
        Some(JsString::from(self.source.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(arr: &JsArray) -> Vec<String> {
        arr.values().map(|v| v.to_js_string().to_std_string()).collect()
    }

    #[test]
    fn test_split_on_pattern() {
        let splitter = RegExpSplitter::new(r"\s*,\s*", "").unwrap();
        let parts = JsString::from("a , b,c").split(&splitter, None);
        assert_eq!(texts(&parts), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_captures_are_spliced() {
        let splitter = RegExpSplitter::new("(-)|(\\+)", "").unwrap();
        let parts = JsString::from("1-2+3").split(&splitter, None);
        assert_eq!(parts.length(), 7);
        assert_eq!(parts.get(1), Value::from("-"));
        assert!(parts.get(2).is_undefined());
        assert!(parts.get(4).is_undefined());
        assert_eq!(parts.get(5), Value::from("+"));
    }

    #[test]
    fn test_empty_matches_split_units() {
        let splitter = RegExpSplitter::new("", "").unwrap();
        let parts = JsString::from("abc").split(&splitter, Some(2));
        assert_eq!(texts(&parts), vec!["a", "b"]);
    }

    #[test]
    fn test_unicode_empty_matches_keep_pairs() {
        let splitter = RegExpSplitter::new("", "u").unwrap();
        let parts = JsString::from("a\u{1F600}b").split(&splitter, None);
        assert_eq!(texts(&parts), vec!["a", "\u{1F600}", "b"]);

        let single = JsString::from("\u{1F600}").split(&splitter, None);
        assert_eq!(single.length(), 1);
        assert!(single.get(0).as_string().is_some_and(JsString::is_well_formed));

        // Without the flag the pair is cut into units
        let units = RegExpSplitter::new("", "").unwrap();
        assert_eq!(JsString::from("\u{1F600}").split(&units, None).length(), 2);
    }

    #[test]
    fn test_empty_input() {
        let optional = RegExpSplitter::new("x*", "").unwrap();
        assert_eq!(JsString::default().split(&optional, None).length(), 0);

        let required = RegExpSplitter::new("x", "").unwrap();
        assert_eq!(JsString::default().split(&required, None).length(), 1);
    }

    #[test]
    fn test_invalid_pattern() {
        let err = RegExpSplitter::new("(", "").unwrap_err();
        assert!(matches!(err, ValueError::InvalidArgument(_)));
    }
}
