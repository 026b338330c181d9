//! Element values
//!
//! A [`Value`] is what an array slot holds. The undefined marker is its own
//! variant so it can be stored, compared and returned from out-of-range
//! lookups without being confused with `Null` or a host-side `None`.

use std::fmt;
use std::rc::Rc;

use crate::array::{ArrayLike, JsArray};
use crate::equality::strict_equal;
use crate::number::number_to_string;
use crate::object::ObjectLike;
use crate::string::JsString;

/// A value stored in an array slot or passed to a method
#[derive(Clone, Default)]
pub enum Value {
    /// The undefined marker
    #[default]
    Undefined,
    /// `null`
    Null,
    /// Boolean primitive
    Boolean(bool),
    /// Number primitive (IEEE 754 double)
    Number(f64),
    /// Immutable UTF-16 string
    String(JsString),
    /// Dynamic array (reference semantics)
    Array(JsArray),
    /// Embedder-provided object
    Host(Rc<dyn HostObject>),
}

/// Capabilities an embedder object can expose to the algorithms in this crate
pub trait HostObject: ObjectLike + fmt::Debug {
    /// Canonical text form
    fn to_js_string(&self) -> JsString {
        JsString::from(format!("[object {}]", self.class_name()))
    }

    /// Indexed view, if the object is array-like
    fn as_array_like(&self) -> Option<&dyn ArrayLike> {
        None
    }

    /// Whether `concat` flattens this object.
    ///
    /// Only honoured when [`HostObject::as_array_like`] returns a view.
    fn is_concat_spreadable(&self) -> bool {
        false
    }
}

impl Value {
    /// The undefined marker
    #[inline]
    pub const fn undefined() -> Self {
        Self::Undefined
    }

    /// `null`
    #[inline]
    pub const fn null() -> Self {
        Self::Null
    }

    /// Check if undefined
    #[inline]
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Check if null
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Check if null or undefined
    #[inline]
    pub fn is_nullish(&self) -> bool {
        matches!(self, Self::Undefined | Self::Null)
    }

    /// Get as number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as boolean
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as string
    pub fn as_string(&self) -> Option<&JsString> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as array
    pub fn as_array(&self) -> Option<&JsArray> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Get as host object
    pub fn as_host(&self) -> Option<&Rc<dyn HostObject>> {
        match self {
            Self::Host(h) => Some(h),
            _ => None,
        }
    }

    /// The `typeof` tag
    pub fn type_of(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Boolean(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Null | Self::Array(_) | Self::Host(_) => "object",
        }
    }

    /// Canonical text form of this value
    pub fn to_js_string(&self) -> JsString {
        match self {
            Self::Undefined => JsString::from("undefined"),
            Self::Null => JsString::from("null"),
            Self::Boolean(true) => JsString::from("true"),
            Self::Boolean(false) => JsString::from("false"),
            Self::Number(n) => JsString::from(number_to_string(*n)),
            Self::String(s) => s.clone(),
            Self::Array(a) => a.join(None),
            Self::Host(h) => h.to_js_string(),
        }
    }

    /// Freeze the referenced instance. Primitives are already immutable.
    pub fn freeze(&self) -> &Self {
        match self {
            Self::String(s) => {
                crate::object::freeze(s);
            }
            Self::Array(a) => {
                crate::object::freeze(a);
            }
            Self::Host(h) => {
                crate::object::freeze(h.as_ref());
            }
            _ => {}
        }
        self
    }

    /// Whether the value is frozen. Primitives always are.
    pub fn is_frozen(&self) -> bool {
        match self {
            Self::String(s) => crate::object::is_frozen(s),
            Self::Array(a) => crate::object::is_frozen(a),
            Self::Host(h) => crate::object::is_frozen(h.as_ref()),
            _ => true,
        }
    }
}

impl PartialEq for Value {
    /// Strict equality: primitives by value, text by content, objects by
    /// identity.
    fn eq(&self, other: &Self) -> bool {
        strict_equal(self, other)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => write!(f, "undefined"),
            Self::Null => write!(f, "null"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{}", number_to_string(*n)),
            Self::String(s) => write!(f, "{:?}", s.to_std_string()),
            Self::Array(a) => write!(f, "{a:?}"),
            Self::Host(h) => write!(f, "{h:?}"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_js_string())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

macro_rules! number_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Self::Number(f64::from(n))
                }
            }
        )*
    };
}

number_from!(i8, i16, i32, u8, u16, u32, f32, f64);

macro_rules! wide_number_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                // Precision loss above 2^53 matches ECMAScript Number
                #[allow(clippy::cast_precision_loss)]
                fn from(n: $ty) -> Self {
                    Self::Number(n as f64)
                }
            }
        )*
    };
}

wide_number_from!(i64, u64, isize, usize);

impl From<char> for Value {
    fn from(c: char) -> Self {
        Self::String(JsString::from(c))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(JsString::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(JsString::from(s))
    }
}

impl From<JsString> for Value {
    fn from(s: JsString) -> Self {
        Self::String(s)
    }
}

impl From<&JsString> for Value {
    fn from(s: &JsString) -> Self {
        Self::String(s.clone())
    }
}

impl From<JsArray> for Value {
    fn from(a: JsArray) -> Self {
        Self::Array(a)
    }
}

impl From<&JsArray> for Value {
    fn from(a: &JsArray) -> Self {
        Self::Array(a.clone())
    }
}

impl From<Rc<dyn HostObject>> for Value {
    fn from(h: Rc<dyn HostObject>) -> Self {
        Self::Host(h)
    }
}

impl From<&Value> for Value {
    fn from(v: &Value) -> Self {
        v.clone()
    }
}

/// Host-side absence maps to `null`, never to the undefined marker
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}
