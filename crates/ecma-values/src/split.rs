//! Pluggable separators for `JsString::split`

use crate::array::JsArray;
use crate::string::JsString;
use crate::value::Value;

/// A separator that knows how to split text itself
///
/// `JsString::split` hands the whole operation to [`Splitter::split`]
/// whenever [`Splitter::can_split`] accepts the receiver.
pub trait Splitter {
    /// Whether this splitter handles `target`
    fn can_split(&self, _target: &JsString) -> bool {
        true
    }

    /// Split `target` into at most `limit` pieces (`None` means unbounded)
    fn split(&self, target: &JsString, limit: Option<usize>) -> JsArray;

    /// Literal text to split on when [`Splitter::can_split`] declines.
    ///
    /// `None` behaves like an undefined separator.
    fn separator_text(&self) -> Option<JsString> {
        None
    }
}

/// The separator argument of `split`
#[derive(Clone)]
pub enum Separator<'a> {
    /// No separator: the whole string is the only piece
    Undefined,
    /// Split on every occurrence of this text
    Text(JsString),
    /// Delegate to a splitter
    Custom(&'a dyn Splitter),
}

impl std::fmt::Debug for Separator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Undefined => f.write_str("Undefined"),
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl From<&str> for Separator<'_> {
    fn from(text: &str) -> Self {
        Self::Text(JsString::from(text))
    }
}

impl From<String> for Separator<'_> {
    fn from(text: String) -> Self {
        Self::Text(JsString::from(text))
    }
}

impl From<JsString> for Separator<'_> {
    fn from(text: JsString) -> Self {
        Self::Text(text)
    }
}

impl From<&JsString> for Separator<'_> {
    fn from(text: &JsString) -> Self {
        Self::Text(text.clone())
    }
}

/// The undefined marker means "no separator"; anything else splits on its
/// text form
impl From<&Value> for Separator<'_> {
    fn from(value: &Value) -> Self {
        match value {
            Value::Undefined => Self::Undefined,
            other => Self::Text(other.to_js_string()),
        }
    }
}

impl From<Value> for Separator<'_> {
    fn from(value: Value) -> Self {
        Self::from(&value)
    }
}

impl<'a, S: Splitter> From<&'a S> for Separator<'a> {
    fn from(splitter: &'a S) -> Self {
        Self::Custom(splitter)
    }
}

impl<'a> From<&'a dyn Splitter> for Separator<'a> {
    fn from(splitter: &'a dyn Splitter) -> Self {
        Self::Custom(splitter)
    }
}
