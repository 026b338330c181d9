//! Immutable UTF-16 strings
//!
//! [`JsString`] stores UTF-16 code units and indexes by unit, never by code
//! point or grapheme. Every producing method returns a new instance. The
//! FxHash of the units is computed once at construction and used as an
//! equality fast path.

mod iter;

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Add;
use std::rc::Rc;

use rustc_hash::FxHasher;

pub use iter::CodePoints;

use crate::array::{ArrayLike, JsArray, MAX_ARRAY_LENGTH};
use crate::equality::same_value_non_numeric;
use crate::error::{ValueError, ValueResult};
use crate::index::{IndexArg, clamp_position, relative_range, slot_index};
use crate::object::{ObjectLike, ObjectState, index_keys};
use crate::split::Separator;
use crate::value::Value;

/// Longest string `repeat` and the pad methods will produce
pub const MAX_STRING_LENGTH: usize = (1 << 30) - 24;

const CLASS_NAME: &str = "String";

struct StringData {
    units: Box<[u16]>,
    hash: u64,
    state: ObjectState,
}

/// An immutable string of UTF-16 code units
#[derive(Clone)]
pub struct JsString(Rc<StringData>);

fn invalid_string_length() -> ValueError {
    ValueError::invalid_argument("Invalid string length")
}

/// ECMAScript WhiteSpace and LineTerminator code units
fn is_trimmable(unit: u16) -> bool {
    matches!(
        unit,
        0x0009..=0x000D
            | 0x0020
            | 0x00A0
            | 0x1680
            | 0x2000..=0x200A
            | 0x2028
            | 0x2029
            | 0x202F
            | 0x205F
            | 0x3000
            | 0xFEFF
    )
}

#[inline]
fn is_high_surrogate(unit: u16) -> bool {
    (0xD800..=0xDBFF).contains(&unit)
}

#[inline]
fn is_low_surrogate(unit: u16) -> bool {
    (0xDC00..=0xDFFF).contains(&unit)
}

/// First match of `needle` starting at or after `from`
fn find_units(haystack: &[u16], needle: &[u16], from: usize) -> Option<usize> {
    if needle.is_empty() {
        return (from <= haystack.len()).then_some(from);
    }
    haystack
        .get(from..)?
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|pos| pos + from)
}

/// Last match of `needle` starting at or before `from`
fn rfind_units(haystack: &[u16], needle: &[u16], from: usize) -> Option<usize> {
    let last_start = haystack.len().checked_sub(needle.len())?.min(from);
    (0..=last_start)
        .rev()
        .find(|&start| haystack[start..start + needle.len()] == *needle)
}

impl JsString {
    /// Create a string from UTF-16 code units
    pub fn from_units(units: impl Into<Box<[u16]>>) -> Self {
        let units = units.into();
        let hash = Self::compute_hash(&units);
        Self(Rc::new(StringData {
            units,
            hash,
            state: ObjectState::new(),
        }))
    }

    /// Create a string from raw char codes (`String.fromCharCode`)
    pub fn from_char_codes(codes: impl IntoIterator<Item = u16>) -> Self {
        Self::from_units(codes.into_iter().collect::<Vec<_>>())
    }

    /// Create a string from code points (`String.fromCodePoint`).
    ///
    /// Values above `0x10FFFF` are rejected. Surrogate code points are
    /// stored as single units.
    pub fn from_code_points(points: impl IntoIterator<Item = u32>) -> ValueResult<Self> {
        let mut units = Vec::new();
        for point in points {
            if point > 0x10FFFF {
                return Err(ValueError::invalid_argument(format!(
                    "Invalid code point {point}"
                )));
            }
            match u16::try_from(point) {
                Ok(unit) => units.push(unit),
                Err(_) => {
                    let offset = point - 0x1_0000;
                    units.push(0xD800 | (offset >> 10) as u16);
                    units.push(0xDC00 | (offset & 0x3FF) as u16);
                }
            }
        }
        Ok(Self::from_units(units))
    }

    fn compute_hash(units: &[u16]) -> u64 {
        let mut hasher = FxHasher::default();
        units.hash(&mut hasher);
        hasher.finish()
    }

    /// Get precomputed hash value
    #[inline]
    pub fn hash_value(&self) -> u64 {
        self.0.hash
    }

    /// Length in UTF-16 code units
    #[inline]
    pub fn length(&self) -> usize {
        self.0.units.len()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.units.is_empty()
    }

    /// The code units
    #[inline]
    pub fn units(&self) -> &[u16] {
        &self.0.units
    }

    /// Convert to a Rust string, replacing lone surrogates with U+FFFD
    pub fn to_std_string(&self) -> String {
        String::from_utf16_lossy(&self.0.units)
    }

    /// Whether both handles refer to the same instance
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Freeze this instance
    pub fn freeze(&self) -> &Self {
        crate::object::freeze(self)
    }

    /// Whether this instance is frozen
    pub fn is_frozen(&self) -> bool {
        self.0.state.is_frozen()
    }

    pub(crate) fn substring_units(&self, from: usize, to: usize) -> JsString {
        Self::from_units(&self.0.units[from..to])
    }

    // ------------------------------------------------------------------
    // Unit access
    // ------------------------------------------------------------------

    /// One-unit string at `index`, or the empty string out of range
    pub fn char_at(&self, index: i64) -> JsString {
        match self.char_code_at(index) {
            Some(unit) => Self::from_units(vec![unit]),
            None => Self::default(),
        }
    }

    /// Code unit at `index`
    pub fn char_code_at(&self, index: i64) -> Option<u16> {
        slot_index(index).and_then(|i| self.0.units.get(i).copied())
    }

    /// Code point starting at `index`; a lone surrogate is returned as is
    pub fn code_point_at(&self, index: i64) -> Option<u32> {
        let i = slot_index(index)?;
        let first = *self.0.units.get(i)?;
        if is_high_surrogate(first)
            && let Some(&second) = self.0.units.get(i + 1)
            && is_low_surrogate(second)
        {
            let high = u32::from(first - 0xD800);
            let low = u32::from(second - 0xDC00);
            return Some(0x1_0000 + (high << 10) + low);
        }
        Some(u32::from(first))
    }

    /// One-unit string at a relative index
    pub fn at(&self, index: i64) -> Option<JsString> {
        let len = self.length();
        let absolute = if index < 0 {
            len.checked_sub(usize::try_from(index.unsigned_abs()).ok()?)?
        } else {
            slot_index(index)?
        };
        self.0
            .units
            .get(absolute)
            .map(|unit| Self::from_units(vec![*unit]))
    }

    /// Iterator over code points
    pub fn iter(&self) -> CodePoints {
        CodePoints::new(self.clone())
    }

    // ------------------------------------------------------------------
    // Composition
    // ------------------------------------------------------------------

    /// Append the text of `other`
    pub fn concat(&self, other: impl Into<JsString>) -> JsString {
        let other = other.into();
        if other.is_empty() {
            return self.clone();
        }
        let mut units = Vec::with_capacity(self.length() + other.length());
        units.extend_from_slice(self.units());
        units.extend_from_slice(other.units());
        Self::from_units(units)
    }

    /// Units in `[start, end)`, negative offsets counting from the end
    pub fn slice(&self, start: impl IndexArg, end: impl IndexArg) -> JsString {
        let range = relative_range(start.into_offset(), end.into_offset(), self.length());
        self.substring_units(range.start, range.end)
    }

    /// Units between `start` and `end`.
    ///
    /// Negative offsets mean 0 and the bounds are swapped if reversed.
    pub fn substring(&self, start: impl IndexArg, end: impl IndexArg) -> JsString {
        let len = self.length();
        let from = start.into_offset().map_or(0, |s| clamp_position(s, len));
        let to = end.into_offset().map_or(len, |e| clamp_position(e, len));
        if from <= to {
            self.substring_units(from, to)
        } else {
            self.substring_units(to, from)
        }
    }

    /// Concatenate `count` copies
    pub fn repeat(&self, count: i64) -> ValueResult<JsString> {
        let count = usize::try_from(count).map_err(|_| {
            ValueError::invalid_argument(format!("Invalid count value: {count}"))
        })?;
        if count == 0 || self.is_empty() {
            return Ok(Self::default());
        }
        let total = self
            .length()
            .checked_mul(count)
            .filter(|n| *n <= MAX_STRING_LENGTH)
            .ok_or_else(invalid_string_length)?;
        let mut units = Vec::with_capacity(total);
        for _ in 0..count {
            units.extend_from_slice(self.units());
        }
        Ok(Self::from_units(units))
    }

    /// Pad at the front to `max_length` units.
    ///
    /// An undefined `filler` means a single space; an empty filler leaves
    /// the string unchanged.
    pub fn pad_start(&self, max_length: usize, filler: impl Into<Value>) -> ValueResult<JsString> {
        self.pad(max_length, filler.into(), true)
    }

    /// Pad at the end to `max_length` units
    pub fn pad_end(&self, max_length: usize, filler: impl Into<Value>) -> ValueResult<JsString> {
        self.pad(max_length, filler.into(), false)
    }

    fn pad(&self, max_length: usize, filler: Value, at_start: bool) -> ValueResult<JsString> {
        let len = self.length();
        if max_length <= len {
            return Ok(self.clone());
        }
        let filler = if filler.is_undefined() {
            Self::from(" ")
        } else {
            filler.to_js_string()
        };
        if filler.is_empty() {
            return Ok(self.clone());
        }
        if max_length > MAX_STRING_LENGTH {
            return Err(invalid_string_length());
        }

        let fill = filler.units().iter().copied().cycle().take(max_length - len);
        let mut units = Vec::with_capacity(max_length);
        if at_start {
            units.extend(fill);
            units.extend_from_slice(self.units());
        } else {
            units.extend_from_slice(self.units());
            units.extend(fill);
        }
        Ok(Self::from_units(units))
    }

    // ------------------------------------------------------------------
    // Search
    // ------------------------------------------------------------------

    /// First index of `search` at or after `position`
    pub fn index_of(&self, search: impl Into<JsString>, position: impl IndexArg) -> Option<usize> {
        let search = search.into();
        let from = position
            .into_offset()
            .map_or(0, |p| clamp_position(p, self.length()));
        find_units(self.units(), search.units(), from)
    }

    /// Last index of `search` at or before `position` (default: the end)
    pub fn last_index_of(
        &self,
        search: impl Into<JsString>,
        position: impl IndexArg,
    ) -> Option<usize> {
        let search = search.into();
        let len = self.length();
        let from = position.into_offset().map_or(len, |p| clamp_position(p, len));
        rfind_units(self.units(), search.units(), from)
    }

    /// Whether `search` occurs at or after `position`
    pub fn includes(&self, search: impl Into<JsString>, position: impl IndexArg) -> bool {
        self.index_of(search, position).is_some()
    }

    /// Whether the units at `position` equal `search`
    pub fn starts_with(&self, search: impl Into<JsString>, position: impl IndexArg) -> bool {
        let search = search.into();
        let len = self.length();
        let start = position.into_offset().map_or(0, |p| clamp_position(p, len));
        let end = start + search.length();
        end <= len && self.matches_at(start, end, search)
    }

    /// Whether the units ending at `end_position` (default: the end) equal
    /// `search`
    pub fn ends_with(&self, search: impl Into<JsString>, end_position: impl IndexArg) -> bool {
        let search = search.into();
        let len = self.length();
        let end = end_position.into_offset().map_or(len, |p| clamp_position(p, len));
        end.checked_sub(search.length())
            .is_some_and(|start| self.matches_at(start, end, search))
    }

    fn matches_at(&self, start: usize, end: usize, search: JsString) -> bool {
        same_value_non_numeric(
            &Value::String(self.substring_units(start, end)),
            &Value::String(search),
        )
    }

    /// Unit-by-unit equality with another string or host text
    pub fn content_equals(&self, other: impl Into<JsString>) -> bool {
        let other = other.into();
        self.length() == other.length() && self.units() == other.units()
    }

    /// Ordering by code units; there is no locale tailoring
    pub fn locale_compare(&self, other: &JsString) -> Ordering {
        self.units().cmp(other.units())
    }

    // ------------------------------------------------------------------
    // Split
    // ------------------------------------------------------------------

    /// Split into at most `limit` pieces (`None` means unbounded).
    ///
    /// A [`Separator::Custom`] splitter that accepts the receiver does the
    /// whole job. Otherwise pieces are cut at each literal occurrence of the
    /// separator text; an undefined separator yields the whole string and an
    /// empty one yields single units.
    pub fn split<'a>(&self, separator: impl Into<Separator<'a>>, limit: Option<usize>) -> JsArray {
        let separator = match separator.into() {
            Separator::Custom(splitter) if splitter.can_split(self) => {
                tracing::trace!(
                    target: "ecma::string",
                    len = self.length(),
                    "split delegated to custom splitter"
                );
                return splitter.split(self, limit);
            }
            Separator::Custom(splitter) => splitter.separator_text(),
            Separator::Text(text) => Some(text),
            Separator::Undefined => None,
        };

        let limit = limit.unwrap_or(MAX_ARRAY_LENGTH);
        if limit == 0 {
            return JsArray::new();
        }
        let Some(separator) = separator else {
            return JsArray::of([Value::String(self.clone())]);
        };

        let units = self.units();
        let needle = separator.units();
        if needle.is_empty() {
            return units
                .iter()
                .take(limit)
                .map(|unit| Value::String(Self::from_units(vec![*unit])))
                .collect();
        }
        if units.is_empty() {
            return JsArray::of([Value::String(self.clone())]);
        }

        let mut pieces = Vec::new();
        let mut p = 0;
        let mut next = find_units(units, needle, 0);
        while let Some(q) = next {
            pieces.push(Value::String(self.substring_units(p, q)));
            if pieces.len() == limit {
                return JsArray::from_vec(pieces);
            }
            p = q + needle.len();
            next = find_units(units, needle, p);
        }
        pieces.push(Value::String(self.substring_units(p, units.len())));
        JsArray::from_vec(pieces)
    }

    // ------------------------------------------------------------------
    // Case and whitespace
    // ------------------------------------------------------------------

    /// Full Unicode lowercase mapping per code point
    pub fn to_lower_case(&self) -> JsString {
        self.map_chars(char::to_lowercase)
    }

    /// Full Unicode uppercase mapping per code point
    pub fn to_upper_case(&self) -> JsString {
        self.map_chars(char::to_uppercase)
    }

    fn map_chars<I, F>(&self, mut f: F) -> JsString
    where
        I: Iterator<Item = char>,
        F: FnMut(char) -> I,
    {
        let mut units = Vec::with_capacity(self.length());
        let mut buf = [0u16; 2];
        for decoded in char::decode_utf16(self.units().iter().copied()) {
            match decoded {
                Ok(c) => {
                    for mapped in f(c) {
                        units.extend_from_slice(mapped.encode_utf16(&mut buf));
                    }
                }
                // Lone surrogates pass through
                Err(err) => units.push(err.unpaired_surrogate()),
            }
        }
        Self::from_units(units)
    }

    /// Strip leading and trailing whitespace and line terminators
    pub fn trim(&self) -> JsString {
        let units = self.units();
        let start = units.iter().position(|u| !is_trimmable(*u)).unwrap_or(units.len());
        let end = units.iter().rposition(|u| !is_trimmable(*u)).map_or(start, |i| i + 1);
        self.substring_units(start, end.max(start))
    }

    /// Strip leading whitespace and line terminators
    pub fn trim_start(&self) -> JsString {
        let units = self.units();
        let start = units.iter().position(|u| !is_trimmable(*u)).unwrap_or(units.len());
        self.substring_units(start, units.len())
    }

    /// Strip trailing whitespace and line terminators
    pub fn trim_end(&self) -> JsString {
        let units = self.units();
        let end = units.iter().rposition(|u| !is_trimmable(*u)).map_or(0, |i| i + 1);
        self.substring_units(0, end)
    }

    // ------------------------------------------------------------------
    // Unicode forms
    // ------------------------------------------------------------------

    /// Whether the string has no lone surrogates
    pub fn is_well_formed(&self) -> bool {
        char::decode_utf16(self.units().iter().copied()).all(|decoded| decoded.is_ok())
    }

    /// Copy with every lone surrogate replaced by U+FFFD
    pub fn to_well_formed(&self) -> JsString {
        if self.is_well_formed() {
            return self.clone();
        }
        let mut units = Vec::with_capacity(self.length());
        let mut buf = [0u16; 2];
        for decoded in char::decode_utf16(self.units().iter().copied()) {
            let c = decoded.unwrap_or(char::REPLACEMENT_CHARACTER);
            units.extend_from_slice(c.encode_utf16(&mut buf));
        }
        Self::from_units(units)
    }

    /// Unicode normalization: `"NFC"` (default), `"NFD"`, `"NFKC"` or
    /// `"NFKD"`. Lone surrogates are kept in place.
    #[cfg(feature = "normalize")]
    pub fn normalize(&self, form: Option<&str>) -> ValueResult<JsString> {
        use unicode_normalization::UnicodeNormalization;

        let normalize: fn(&str) -> String = match form.unwrap_or("NFC") {
            "NFC" => |s| s.nfc().collect(),
            "NFD" => |s| s.nfd().collect(),
            "NFKC" => |s| s.nfkc().collect(),
            "NFKD" => |s| s.nfkd().collect(),
            _ => {
                return Err(ValueError::invalid_argument(
                    "The normalization form should be one of NFC, NFD, NFKC, NFKD.",
                ));
            }
        };

        let mut units = Vec::with_capacity(self.length());
        let mut run = String::new();
        for decoded in char::decode_utf16(self.units().iter().copied()) {
            match decoded {
                Ok(c) => run.push(c),
                Err(err) => {
                    units.extend(normalize(&run).encode_utf16());
                    run.clear();
                    units.push(err.unpaired_surrogate());
                }
            }
        }
        units.extend(normalize(&run).encode_utf16());
        Ok(Self::from_units(units))
    }
}

impl Default for JsString {
    fn default() -> Self {
        Self::from_units(Vec::new())
    }
}

impl PartialEq for JsString {
    fn eq(&self, other: &Self) -> bool {
        // Fast path: different hash means different content
        if self.0.hash != other.0.hash {
            return false;
        }
        self.0.units == other.0.units
    }
}

impl Eq for JsString {}

impl Hash for JsString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash.hash(state);
    }
}

impl PartialOrd for JsString {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for JsString {
    fn cmp(&self, other: &Self) -> Ordering {
        self.units().cmp(other.units())
    }
}

impl PartialEq<str> for JsString {
    fn eq(&self, other: &str) -> bool {
        self.units().iter().copied().eq(other.encode_utf16())
    }
}

impl PartialEq<&str> for JsString {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

impl PartialEq<JsString> for &str {
    fn eq(&self, other: &JsString) -> bool {
        *other == **self
    }
}

impl AsRef<[u16]> for JsString {
    fn as_ref(&self) -> &[u16] {
        self.units()
    }
}

impl fmt::Debug for JsString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JsString({:?})", self.to_std_string())
    }
}

impl fmt::Display for JsString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_std_string())
    }
}

impl From<&str> for JsString {
    fn from(s: &str) -> Self {
        Self::from_units(s.encode_utf16().collect::<Vec<_>>())
    }
}

impl From<String> for JsString {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<&String> for JsString {
    fn from(s: &String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<char> for JsString {
    fn from(c: char) -> Self {
        let mut buf = [0u16; 2];
        Self::from_units(&*c.encode_utf16(&mut buf))
    }
}

impl From<&[u16]> for JsString {
    fn from(units: &[u16]) -> Self {
        Self::from_units(units)
    }
}

impl From<Vec<u16>> for JsString {
    fn from(units: Vec<u16>) -> Self {
        Self::from_units(units)
    }
}

impl From<&JsString> for JsString {
    fn from(s: &JsString) -> Self {
        s.clone()
    }
}

/// Canonical text form of any value
impl From<&Value> for JsString {
    fn from(value: &Value) -> Self {
        value.to_js_string()
    }
}

impl From<Value> for JsString {
    fn from(value: Value) -> Self {
        value.to_js_string()
    }
}

impl<T: Into<JsString>> Add<T> for &JsString {
    type Output = JsString;

    fn add(self, rhs: T) -> JsString {
        self.concat(rhs)
    }
}

impl<T: Into<JsString>> Add<T> for JsString {
    type Output = JsString;

    fn add(self, rhs: T) -> JsString {
        self.concat(rhs)
    }
}

impl ArrayLike for JsString {
    fn length(&self) -> usize {
        JsString::length(self)
    }

    fn item(&self, index: usize) -> Value {
        self.0
            .units
            .get(index)
            .map_or(Value::Undefined, |unit| {
                Value::String(Self::from_units(vec![*unit]))
            })
    }
}

impl ObjectLike for JsString {
    fn object_state(&self) -> &ObjectState {
        &self.0.state
    }

    fn class_name(&self) -> &'static str {
        CLASS_NAME
    }

    fn own_keys(&self) -> Vec<JsString> {
        index_keys(self.length())
    }
}
