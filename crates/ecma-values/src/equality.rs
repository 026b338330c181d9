//! Value comparison relations
//!
//! `indexOf`/`lastIndexOf` use [`strict_equal`], `includes` uses
//! [`same_value_zero`], and `JsString::starts_with`/`ends_with` compare the
//! bounded substring against the search text with
//! [`same_value_non_numeric`].
//!
//! Numbers are compared with NaN equal to itself and `+0` equal to `-0` in
//! the first two relations, so a stored NaN can always be found again.

use std::rc::Rc;

use crate::value::Value;

/// Strict equality (`===` with NaN reflexive).
pub fn strict_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
        (Value::Boolean(x), Value::Boolean(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => numbers_equal(*x, *y),
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Array(x), Value::Array(y)) => x.ptr_eq(y),
        (Value::Host(x), Value::Host(y)) => Rc::ptr_eq(x, y),
        _ => false,
    }
}

/// SameValueZero, used by `includes`.
///
/// Identical to [`strict_equal`] here since NaN is already reflexive.
#[inline]
pub fn same_value_zero(a: &Value, b: &Value) -> bool {
    strict_equal(a, b)
}

/// Equality for text, boolean and identity contexts.
///
/// Numbers compare by bit pattern, so `+0` and `-0` differ and NaN equals
/// only an identically encoded NaN.
pub fn same_value_non_numeric(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.to_bits() == y.to_bits(),
        _ => strict_equal(a, b),
    }
}

#[inline]
fn numbers_equal(x: f64, y: f64) -> bool {
    x == y || (x.is_nan() && y.is_nan())
}
