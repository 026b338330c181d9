//! Object state shared by arrays, strings and host objects
//!
//! The only state an instance carries beyond its contents is the frozen
//! flag. Freezing is one-way: nothing clears it.

use std::cell::Cell;

use crate::array::{JsArray, sort_default};
use crate::error::{MutationKind, ValueError, ValueResult};
use crate::string::JsString;
use crate::value::Value;

/// Object flags
#[derive(Debug, Default)]
pub struct ObjectState {
    frozen: Cell<bool>,
}

impl ObjectState {
    /// Fresh, unfrozen state
    pub const fn new() -> Self {
        Self {
            frozen: Cell::new(false),
        }
    }

    /// Set the frozen flag
    pub fn freeze(&self) {
        self.frozen.set(true);
    }

    /// Whether the instance is frozen
    #[inline]
    pub fn is_frozen(&self) -> bool {
        self.frozen.get()
    }

    /// Gate a structural change.
    ///
    /// Returns `MutationRejected` carrying `kind` and `index` when frozen.
    pub fn check_mutation(
        &self,
        kind: MutationKind,
        index: usize,
        class: &'static str,
    ) -> ValueResult<()> {
        if !self.is_frozen() {
            return Ok(());
        }
        tracing::debug!(
            target: "ecma::object",
            class,
            ?kind,
            index,
            "mutation rejected on frozen object"
        );
        Err(ValueError::mutation_rejected(kind, index, class))
    }
}

/// Anything that behaves like an ECMAScript object
pub trait ObjectLike {
    /// The instance's frozen flag
    fn object_state(&self) -> &ObjectState;

    /// Class name used in `[object Name]` renderings
    fn class_name(&self) -> &'static str {
        "Object"
    }

    /// Externally visible keys, in declaration order
    fn own_keys(&self) -> Vec<JsString> {
        Vec::new()
    }
}

/// Freeze `obj`, returning the same instance.
pub fn freeze<T: ObjectLike + ?Sized>(obj: &T) -> &T {
    let state = obj.object_state();
    if !state.is_frozen() {
        tracing::trace!(target: "ecma::object", class = obj.class_name(), "object frozen");
        state.freeze();
    }
    obj
}

/// Whether `obj` has been frozen.
pub fn is_frozen<T: ObjectLike + ?Sized>(obj: &T) -> bool {
    obj.object_state().is_frozen()
}

/// The sorted list of an instance's own keys.
///
/// Sorting uses the default array comparator, so index keys come out in
/// text order (`"10"` before `"2"`).
pub fn keys<T: ObjectLike + ?Sized>(obj: &T) -> JsArray {
    let keys = obj.own_keys().into_iter().map(Value::String).collect();
    JsArray::from_vec(sort_default(keys))
}

/// Keys `"0".."len"` for index-addressed objects
pub(crate) fn index_keys(len: usize) -> Vec<JsString> {
    (0..len).map(|i| JsString::from(i.to_string())).collect()
}
