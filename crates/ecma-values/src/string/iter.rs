//! Code point iteration

use std::iter::FusedIterator;

use super::JsString;

/// Iterator over the code points of a [`JsString`].
///
/// Surrogate pairs combine into one code point; lone surrogates are yielded
/// as their unit value.
#[derive(Clone, Debug)]
pub struct CodePoints {
    string: JsString,
    position: usize,
}

impl CodePoints {
    pub(super) fn new(string: JsString) -> Self {
        Self {
            string,
            position: 0,
        }
    }
}

impl Iterator for CodePoints {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let index = i64::try_from(self.position).ok()?;
        let point = self.string.code_point_at(index)?;
        self.position += if point > 0xFFFF { 2 } else { 1 };
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.string.length() - self.position;
        (remaining.div_ceil(2), Some(remaining))
    }
}

impl FusedIterator for CodePoints {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairs_combine() {
        let s = JsString::from("a\u{1F600}b");
        let points: Vec<u32> = s.iter().collect();
        assert_eq!(points, vec![0x61, 0x1F600, 0x62]);
    }

    #[test]
    fn test_lone_surrogates() {
        let s = JsString::from_char_codes([0xDC00, 0xD800]);
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![0xDC00, 0xD800]);
    }
}
