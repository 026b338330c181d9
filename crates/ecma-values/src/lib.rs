//! # ECMAScript Values
//!
//! The ECMA-262 `Array` and `String` value types as a plain Rust library.
//!
//! ## Design Principles
//!
//! - **Reference semantics**: `JsArray` and `JsString` are shared handles;
//!   cloning one never copies its contents
//! - **UTF-16 indexing**: strings address code units, exactly as scripts do
//! - **Fail loudly**: every mutator on a frozen instance returns
//!   `ValueError::MutationRejected` and leaves the contents unchanged
//! - **Single-threaded**: values are `!Send`, so callers cannot share them
//!   across threads without their own synchronisation
//!
//! ```
//! use ecma_values::{js_array, JsString, Value};
//!
//! let arr = js_array!["a", "b", "c"];
//! let removed = arr.splice(1, 1, &["x".into(), "y".into()]).unwrap();
//! assert_eq!(removed.to_string(), "b");
//! assert_eq!(arr.join(Some("-")), "a-x-y-c");
//!
//! let padded = JsString::from("abc").pad_start(6, "0").unwrap();
//! assert_eq!(padded, "000abc");
//! assert_eq!(Value::from(&arr).to_js_string(), "a,x,y,c");
//! ```

#![warn(clippy::all)]
#![warn(missing_docs)]

pub mod array;
pub mod equality;
pub mod error;
pub mod index;
pub mod number;
pub mod object;
#[cfg(feature = "regexp")]
pub mod regexp;
pub mod split;
pub mod string;
pub mod value;

pub use array::{ArrayLike, JsArray, MAX_ARRAY_LENGTH};
pub use equality::{same_value_non_numeric, same_value_zero, strict_equal};
pub use error::{MutationKind, ValueError, ValueResult};
pub use index::IndexArg;
pub use object::{ObjectLike, ObjectState, freeze, is_frozen, keys};
#[cfg(feature = "regexp")]
pub use regexp::RegExpSplitter;
pub use split::{Separator, Splitter};
pub use string::{JsString, MAX_STRING_LENGTH};
pub use value::{HostObject, Value};

/// Build a [`JsArray`] from a list of values convertible into [`Value`].
///
/// ```
/// let arr = ecma_values::js_array![1, "two", true];
/// assert_eq!(arr.length(), 3);
/// ```
#[macro_export]
macro_rules! js_array {
    () => {
        $crate::JsArray::new()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::JsArray::of([$($crate::Value::from($item)),+])
    };
}
