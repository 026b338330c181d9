//! Dynamic arrays
//!
//! A [`JsArray`] is a growable sequence of [`Value`] slots behind a shared
//! handle: cloning a `JsArray` yields another reference to the same
//! instance. Every mutator checks the frozen flag before touching a slot
//! and validates its arguments before the first write, so a rejected call
//! leaves the contents unchanged.
//!
//! Callback-driven methods take the length once when they start and read
//! each slot as they reach it. No borrow of the slot storage is held while
//! a callback runs, so callbacks may freely read or mutate the receiver.

mod iter;

use std::cell::{Cell, RefCell};
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

pub use iter::{ArrayEntries, ArrayKeys, ArrayValues};

use crate::equality::{same_value_zero, strict_equal};
use crate::error::{MutationKind, ValueError, ValueResult};
use crate::index::{IndexArg, clamp_position, relative_index, relative_or, relative_range, slot_index};
use crate::object::{ObjectLike, ObjectState, index_keys};
use crate::string::JsString;
use crate::value::Value;

/// Largest length an array may reach (`2^32 - 1`)
pub const MAX_ARRAY_LENGTH: usize = u32::MAX as usize;

const CLASS_NAME: &str = "Array";

/// Indexed read access shared by arrays, strings and array-like host objects
pub trait ArrayLike {
    /// Number of addressable slots
    fn length(&self) -> usize;

    /// The value at `index`, or undefined past the end
    fn item(&self, index: usize) -> Value;
}

struct ArrayData {
    elements: RefCell<Vec<Value>>,
    state: ObjectState,
    /// `None` means the default (spread)
    spreadable: Cell<Option<bool>>,
}

/// A dynamic, heterogeneous array
#[derive(Clone)]
pub struct JsArray(Rc<ArrayData>);

thread_local! {
    /// Arrays currently being rendered, innermost last
    static RENDERING: RefCell<Vec<usize>> = const { RefCell::new(Vec::new()) };
}

/// Membership in `RENDERING`, released on drop so an unwinding render
/// does not leave the array marked
struct RenderEntry;

impl RenderEntry {
    fn enter(id: usize) -> Option<Self> {
        RENDERING.with(|stack| {
            let mut stack = stack.borrow_mut();
            if stack.contains(&id) {
                return None;
            }
            stack.push(id);
            Some(Self)
        })
    }
}

impl Drop for RenderEntry {
    fn drop(&mut self) {
        RENDERING.with(|stack| {
            stack.borrow_mut().pop();
        });
    }
}

fn invalid_length() -> ValueError {
    ValueError::invalid_argument("Invalid array length")
}

fn grown_length(len: usize, extra: usize) -> ValueResult<usize> {
    len.checked_add(extra)
        .filter(|n| *n <= MAX_ARRAY_LENGTH)
        .ok_or_else(invalid_length)
}

/// `(start, count)` for `splice`/`toSpliced`.
///
/// `splice()` removes nothing; `splice(start)` removes everything from
/// `start` on.
fn splice_bounds(start: Option<i64>, delete_count: Option<i64>, len: usize) -> (usize, usize) {
    let from = relative_or(start, 0, len);
    let count = match delete_count {
        Some(count) => clamp_position(count, len - from),
        None if start.is_some() => len - from,
        None => 0,
    };
    (from, count)
}

impl JsArray {
    /// Create an empty array
    pub fn new() -> Self {
        Self::from_vec(Vec::new())
    }

    /// Create an array of `len` undefined slots
    pub fn with_length(len: usize) -> ValueResult<Self> {
        if len > MAX_ARRAY_LENGTH {
            return Err(invalid_length());
        }
        Ok(Self::from_vec(vec![Value::Undefined; len]))
    }

    /// Create an array holding `items` in order
    pub fn of(items: impl IntoIterator<Item = Value>) -> Self {
        items.into_iter().collect()
    }

    /// Take ownership of an existing slot vector
    pub fn from_vec(elements: Vec<Value>) -> Self {
        Self(Rc::new(ArrayData {
            elements: RefCell::new(elements),
            state: ObjectState::new(),
            spreadable: Cell::new(None),
        }))
    }

    /// Copy the slots of any array-like source
    pub fn from_array_like<A: ArrayLike + ?Sized>(source: &A) -> Self {
        (0..source.length()).map(|i| source.item(i)).collect()
    }

    /// Copy an array-like source through `mapper(value, index)`
    pub fn from_array_like_map<A, F>(source: &A, mut mapper: F) -> Self
    where
        A: ArrayLike + ?Sized,
        F: FnMut(&Value, usize) -> Value,
    {
        (0..source.length())
            .map(|i| mapper(&source.item(i), i))
            .collect()
    }

    /// Collect any iterator through `mapper(item, index)`
    pub fn from_iter_map<I, F>(items: I, mut mapper: F) -> Self
    where
        I: IntoIterator,
        F: FnMut(I::Item, usize) -> Value,
    {
        items
            .into_iter()
            .enumerate()
            .map(|(i, item)| mapper(item, i))
            .collect()
    }

    /// `Array.isArray`
    pub fn is_array(value: &Value) -> bool {
        matches!(value, Value::Array(_))
    }

    /// Whether both handles refer to the same instance
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Current slot count
    #[inline]
    pub fn length(&self) -> usize {
        self.0.elements.borrow().len()
    }

    /// Check if the array has no slots
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length() == 0
    }

    /// Snapshot of the current slots
    pub fn to_vec(&self) -> Vec<Value> {
        self.0.elements.borrow().clone()
    }

    /// Freeze this instance
    pub fn freeze(&self) -> &Self {
        crate::object::freeze(self)
    }

    /// Whether this instance is frozen
    pub fn is_frozen(&self) -> bool {
        self.0.state.is_frozen()
    }

    /// Override whether `concat` flattens this array (`None` restores the
    /// default, which is to flatten)
    pub fn set_concat_spreadable(&self, spreadable: Option<bool>) {
        self.0.spreadable.set(spreadable);
    }

    /// Whether `concat` flattens this array
    pub fn is_concat_spreadable(&self) -> bool {
        self.0.spreadable.get().unwrap_or(true)
    }

    #[inline]
    fn slot(&self, index: usize) -> Value {
        self.0
            .elements
            .borrow()
            .get(index)
            .cloned()
            .unwrap_or_default()
    }

    #[inline]
    fn check(&self, kind: MutationKind, index: usize) -> ValueResult<()> {
        self.0.state.check_mutation(kind, index, CLASS_NAME)
    }

    /// Run `render` unless this array is already being rendered further up
    /// the stack, in which case `None` is returned.
    fn guard_cycle<R>(&self, render: impl FnOnce() -> R) -> Option<R> {
        let _entry = RenderEntry::enter(Rc::as_ptr(&self.0) as usize)?;
        Some(render())
    }

    // ------------------------------------------------------------------
    // Element access
    // ------------------------------------------------------------------

    /// The slot value at `index`, or undefined outside `[0, length)`
    pub fn get(&self, index: i64) -> Value {
        slot_index(index).map_or(Value::Undefined, |i| self.slot(i))
    }

    /// Relative access: negative indices count from the end
    pub fn at(&self, index: i64) -> Value {
        let len = self.length();
        let absolute = if index < 0 {
            usize::try_from(index.unsigned_abs())
                .ok()
                .and_then(|back| len.checked_sub(back))
        } else {
            slot_index(index)
        };
        absolute.map_or(Value::Undefined, |i| self.slot(i))
    }

    /// Write `value` at `index`, growing the array with undefined slots if
    /// needed. Negative indices are ignored.
    pub fn set(&self, index: i64, value: impl Into<Value>) -> ValueResult<()> {
        let Some(slot) = slot_index(index) else {
            return Ok(());
        };
        let len = self.length();
        let kind = if slot >= len {
            MutationKind::Add
        } else {
            MutationKind::Set
        };
        self.check(kind, slot)?;
        if slot >= MAX_ARRAY_LENGTH {
            return Err(invalid_length());
        }

        let value = value.into();
        let mut elements = self.0.elements.borrow_mut();
        if slot >= elements.len() {
            tracing::trace!(
                target: "ecma::array",
                from = elements.len(),
                to = slot + 1,
                "array grown by indexed write"
            );
            elements.resize(slot + 1, Value::Undefined);
        }
        elements[slot] = value;
        Ok(())
    }

    /// Remove the slot at `index`, shifting later slots down.
    ///
    /// Returns whether a slot was removed.
    pub fn delete(&self, index: i64) -> ValueResult<bool> {
        self.check(MutationKind::Delete, clamp_position(index, usize::MAX))?;
        let mut elements = self.0.elements.borrow_mut();
        match slot_index(index) {
            Some(i) if i < elements.len() => {
                elements.remove(i);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    // ------------------------------------------------------------------
    // Stack and queue operations
    // ------------------------------------------------------------------

    /// Append one value, returning the new length
    pub fn push(&self, value: impl Into<Value>) -> ValueResult<usize> {
        let len = self.length();
        self.check(MutationKind::Add, len)?;
        let new_len = grown_length(len, 1)?;
        let value = value.into();
        self.0.elements.borrow_mut().push(value);
        Ok(new_len)
    }

    /// Append every item in order, returning the new length
    pub fn push_all(&self, items: &[Value]) -> ValueResult<usize> {
        let len = self.length();
        self.check(MutationKind::Add, len)?;
        let new_len = grown_length(len, items.len())?;
        self.0.elements.borrow_mut().extend_from_slice(items);
        Ok(new_len)
    }

    /// Remove and return the last slot (undefined when empty)
    pub fn pop(&self) -> ValueResult<Value> {
        self.check(MutationKind::Delete, self.length().saturating_sub(1))?;
        Ok(self.0.elements.borrow_mut().pop().unwrap_or_default())
    }

    /// Remove and return the first slot (undefined when empty)
    pub fn shift(&self) -> ValueResult<Value> {
        self.check(MutationKind::Delete, 0)?;
        let mut elements = self.0.elements.borrow_mut();
        if elements.is_empty() {
            Ok(Value::Undefined)
        } else {
            Ok(elements.remove(0))
        }
    }

    /// Insert `items` at the front, returning the new length
    pub fn unshift(&self, items: &[Value]) -> ValueResult<usize> {
        let len = self.length();
        self.check(MutationKind::Add, len)?;
        let new_len = grown_length(len, items.len())?;
        let mut elements = self.0.elements.borrow_mut();
        let tail = std::mem::take(&mut *elements);
        elements.reserve(new_len);
        elements.extend_from_slice(items);
        elements.extend(tail);
        Ok(new_len)
    }

    // ------------------------------------------------------------------
    // In-place restructuring
    // ------------------------------------------------------------------

    /// Remove `delete_count` slots at `start` and insert `items` there.
    ///
    /// Returns the removed slots in their original order.
    pub fn splice(
        &self,
        start: impl IndexArg,
        delete_count: impl IndexArg,
        items: &[Value],
    ) -> ValueResult<JsArray> {
        let len = self.length();
        let (from, count) = splice_bounds(start.into_offset(), delete_count.into_offset(), len);
        let kind = match (count, items.len()) {
            (0, n) if n > 0 => MutationKind::Add,
            (_, 0) if count > 0 => MutationKind::Delete,
            _ => MutationKind::Set,
        };
        self.check(kind, from)?;
        grown_length(len - count, items.len())?;

        let removed: Vec<Value> = self
            .0
            .elements
            .borrow_mut()
            .splice(from..from + count, items.iter().cloned())
            .collect();
        Ok(Self::from_vec(removed))
    }

    /// Copy `[start, end)` over the slots beginning at `target`, handling
    /// overlap like `memmove`
    ///
    /// `start` defaults to 0 and `end` to the length.
    pub fn copy_within(
        &self,
        target: i64,
        start: impl IndexArg,
        end: impl IndexArg,
    ) -> ValueResult<&Self> {
        let len = self.length();
        let to = relative_index(target, len);
        let from = relative_or(start.into_offset(), 0, len);
        let fin = relative_or(end.into_offset(), len, len);
        self.check(MutationKind::Set, to)?;

        let count = fin.saturating_sub(from).min(len - to);
        let mut elements = self.0.elements.borrow_mut();
        if from < to && to < from + count {
            for i in (0..count).rev() {
                elements[to + i] = elements[from + i].clone();
            }
        } else {
            for i in 0..count {
                elements[to + i] = elements[from + i].clone();
            }
        }
        Ok(self)
    }

    /// Overwrite every slot in `[start, end)` with `value`
    pub fn fill(
        &self,
        value: impl Into<Value>,
        start: impl IndexArg,
        end: impl IndexArg,
    ) -> ValueResult<&Self> {
        let range = relative_range(start.into_offset(), end.into_offset(), self.length());
        self.check(MutationKind::Set, range.start)?;
        let value = value.into();
        for slot in &mut self.0.elements.borrow_mut()[range] {
            *slot = value.clone();
        }
        Ok(self)
    }

    /// Reverse the slots in place
    pub fn reverse(&self) -> ValueResult<&Self> {
        self.check(MutationKind::Set, 0)?;
        self.0.elements.borrow_mut().reverse();
        Ok(self)
    }

    /// Sort by text form, undefined slots last
    pub fn sort(&self) -> ValueResult<&Self> {
        self.check(MutationKind::Set, 0)?;
        let sorted = sort_default(self.to_vec());
        self.write_back(sorted)?;
        Ok(self)
    }

    /// Sort with a comparator, undefined slots last.
    ///
    /// The sort is stable. An inconsistent comparator yields an unspecified
    /// order but never a panic.
    pub fn sort_by<F>(&self, compare: F) -> ValueResult<&Self>
    where
        F: FnMut(&Value, &Value) -> Ordering,
    {
        self.check(MutationKind::Set, 0)?;
        let sorted = sort_custom(self.to_vec(), compare);
        self.write_back(sorted)?;
        Ok(self)
    }

    /// Store sorted values over the first slots, tolerating a comparator that
    /// changed the length meanwhile.
    ///
    /// Comparators and host text conversions run embedder code, so the
    /// frozen flag is checked again here.
    fn write_back(&self, sorted: Vec<Value>) -> ValueResult<()> {
        self.check(MutationKind::Set, 0)?;
        let mut elements = self.0.elements.borrow_mut();
        for (i, value) in sorted.into_iter().enumerate() {
            match elements.get_mut(i) {
                Some(slot) => *slot = value,
                None => elements.push(value),
            }
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Copying operations
    // ------------------------------------------------------------------

    /// Copy of `[start, end)` as a new array
    pub fn slice(&self, start: impl IndexArg, end: impl IndexArg) -> JsArray {
        let elements = self.0.elements.borrow();
        let range = relative_range(start.into_offset(), end.into_offset(), elements.len());
        Self::from_vec(elements[range].to_vec())
    }

    /// New array of the receiver's slots followed by each item.
    ///
    /// Spreadable items contribute their elements instead of themselves.
    pub fn concat(&self, items: &[Value]) -> JsArray {
        let mut out = self.to_vec();
        for item in items {
            match item {
                Value::Array(array) if array.is_concat_spreadable() => {
                    out.extend(array.to_vec());
                }
                Value::Host(host) if host.is_concat_spreadable() => match host.as_array_like() {
                    Some(view) => out.extend((0..view.length()).map(|i| view.item(i))),
                    None => out.push(item.clone()),
                },
                _ => out.push(item.clone()),
            }
        }
        Self::from_vec(out)
    }

    /// Reversed copy
    pub fn to_reversed(&self) -> JsArray {
        let mut elements = self.to_vec();
        elements.reverse();
        Self::from_vec(elements)
    }

    /// Sorted copy using the default comparator
    pub fn to_sorted(&self) -> JsArray {
        Self::from_vec(sort_default(self.to_vec()))
    }

    /// Sorted copy using `compare`
    pub fn to_sorted_by<F>(&self, compare: F) -> JsArray
    where
        F: FnMut(&Value, &Value) -> Ordering,
    {
        Self::from_vec(sort_custom(self.to_vec(), compare))
    }

    /// Copy with a `splice` applied
    pub fn to_spliced(
        &self,
        start: impl IndexArg,
        delete_count: impl IndexArg,
        items: &[Value],
    ) -> ValueResult<JsArray> {
        let elements = self.0.elements.borrow();
        let len = elements.len();
        let (from, count) = splice_bounds(start.into_offset(), delete_count.into_offset(), len);
        let mut out = Vec::with_capacity(grown_length(len - count, items.len())?);
        out.extend_from_slice(&elements[..from]);
        out.extend_from_slice(items);
        out.extend_from_slice(&elements[from + count..]);
        Ok(Self::from_vec(out))
    }

    /// Copy with the slot at relative `index` replaced
    pub fn with(&self, index: i64, value: impl Into<Value>) -> ValueResult<JsArray> {
        let mut elements = self.to_vec();
        let len = elements.len();
        let absolute = if index < 0 {
            usize::try_from(index.unsigned_abs())
                .ok()
                .and_then(|back| len.checked_sub(back))
        } else {
            slot_index(index).filter(|i| *i < len)
        };
        let slot = absolute
            .and_then(|i| elements.get_mut(i))
            .ok_or_else(|| ValueError::invalid_argument("Invalid index"))?;
        *slot = value.into();
        Ok(Self::from_vec(elements))
    }

    /// Flatten nested arrays up to `depth` levels
    pub fn flat(&self, depth: usize) -> JsArray {
        fn flatten_into(out: &mut Vec<Value>, source: &JsArray, depth: usize) {
            for value in source.to_vec() {
                match value {
                    Value::Array(inner) if depth > 0 => flatten_into(out, &inner, depth - 1),
                    other => out.push(other),
                }
            }
        }

        let mut out = Vec::with_capacity(self.length());
        flatten_into(&mut out, self, depth);
        Self::from_vec(out)
    }

    // ------------------------------------------------------------------
    // Callback-driven passes
    // ------------------------------------------------------------------

    /// Whether `predicate` holds for every slot
    pub fn every<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&Value, usize) -> bool,
    {
        (0..self.length()).all(|i| predicate(&self.slot(i), i))
    }

    /// Whether `predicate` holds for some slot
    pub fn some<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&Value, usize) -> bool,
    {
        (0..self.length()).any(|i| predicate(&self.slot(i), i))
    }

    /// First slot value satisfying `predicate`
    pub fn find<F>(&self, mut predicate: F) -> Option<Value>
    where
        F: FnMut(&Value, usize) -> bool,
    {
        (0..self.length())
            .map(|i| (i, self.slot(i)))
            .find(|(i, value)| predicate(value, *i))
            .map(|(_, value)| value)
    }

    /// Index of the first slot satisfying `predicate`
    pub fn find_index<F>(&self, mut predicate: F) -> Option<usize>
    where
        F: FnMut(&Value, usize) -> bool,
    {
        (0..self.length()).find(|&i| predicate(&self.slot(i), i))
    }

    /// Last slot value satisfying `predicate`
    pub fn find_last<F>(&self, mut predicate: F) -> Option<Value>
    where
        F: FnMut(&Value, usize) -> bool,
    {
        (0..self.length())
            .rev()
            .map(|i| (i, self.slot(i)))
            .find(|(i, value)| predicate(value, *i))
            .map(|(_, value)| value)
    }

    /// Index of the last slot satisfying `predicate`
    pub fn find_last_index<F>(&self, mut predicate: F) -> Option<usize>
    where
        F: FnMut(&Value, usize) -> bool,
    {
        (0..self.length())
            .rev()
            .find(|&i| predicate(&self.slot(i), i))
    }

    /// New array of the slots satisfying `predicate`
    pub fn filter<F>(&self, mut predicate: F) -> JsArray
    where
        F: FnMut(&Value, usize) -> bool,
    {
        (0..self.length())
            .map(|i| (i, self.slot(i)))
            .filter(|(i, value)| predicate(value, *i))
            .map(|(_, value)| value)
            .collect()
    }

    /// New array of `mapper(value, index)` for every slot
    pub fn map<F>(&self, mut mapper: F) -> JsArray
    where
        F: FnMut(&Value, usize) -> Value,
    {
        (0..self.length())
            .map(|i| mapper(&self.slot(i), i))
            .collect()
    }

    /// Call `f(value, index)` for every slot
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&Value, usize),
    {
        for i in 0..self.length() {
            f(&self.slot(i), i);
        }
    }

    /// Left-to-right fold.
    ///
    /// Without `initial` the first slot seeds the accumulator, which fails
    /// with [`ValueError::EmptyReduce`] on an empty array.
    pub fn reduce<F>(&self, reducer: F, initial: Option<Value>) -> ValueResult<Value>
    where
        F: FnMut(Value, &Value, usize) -> Value,
    {
        self.fold(0..self.length(), reducer, initial)
    }

    /// Right-to-left fold, seeded by the last slot when `initial` is absent
    pub fn reduce_right<F>(&self, reducer: F, initial: Option<Value>) -> ValueResult<Value>
    where
        F: FnMut(Value, &Value, usize) -> Value,
    {
        self.fold((0..self.length()).rev(), reducer, initial)
    }

    fn fold<I, F>(&self, mut indices: I, mut reducer: F, initial: Option<Value>) -> ValueResult<Value>
    where
        I: Iterator<Item = usize>,
        F: FnMut(Value, &Value, usize) -> Value,
    {
        let mut acc = match initial {
            Some(seed) => seed,
            None => {
                let first = indices.next().ok_or(ValueError::EmptyReduce)?;
                self.slot(first)
            }
        };
        for i in indices {
            acc = reducer(acc, &self.slot(i), i);
        }
        Ok(acc)
    }

    // ------------------------------------------------------------------
    // Search
    // ------------------------------------------------------------------

    /// First index strictly equal to `search`, scanning from `from_index`
    pub fn index_of(&self, search: impl Into<Value>, from_index: impl IndexArg) -> Option<usize> {
        let search = search.into();
        let elements = self.0.elements.borrow();
        let start = relative_or(from_index.into_offset(), 0, elements.len());
        elements[start..]
            .iter()
            .position(|value| strict_equal(value, &search))
            .map(|pos| pos + start)
    }

    /// Last index strictly equal to `search`, scanning back from
    /// `from_index` (default: the last slot)
    pub fn last_index_of(
        &self,
        search: impl Into<Value>,
        from_index: impl IndexArg,
    ) -> Option<usize> {
        let search = search.into();
        let elements = self.0.elements.borrow();
        let len = elements.len();
        let last = match from_index.into_offset() {
            None => len.checked_sub(1)?,
            Some(n) if n >= 0 => usize::try_from(n).unwrap_or(usize::MAX).min(len.checked_sub(1)?),
            Some(n) => len.checked_sub(usize::try_from(n.unsigned_abs()).ok()?)?,
        };
        elements[..=last]
            .iter()
            .rposition(|value| strict_equal(value, &search))
    }

    /// Whether some slot from `from_index` on is SameValueZero to `search`
    pub fn includes(&self, search: impl Into<Value>, from_index: impl IndexArg) -> bool {
        let search = search.into();
        let elements = self.0.elements.borrow();
        let start = relative_or(from_index.into_offset(), 0, elements.len());
        elements[start..]
            .iter()
            .any(|value| same_value_zero(value, &search))
    }

    // ------------------------------------------------------------------
    // Text
    // ------------------------------------------------------------------

    /// Join slot texts with `separator` (default `","`).
    ///
    /// Undefined and null slots contribute empty text. An array nested
    /// inside itself renders as empty text.
    pub fn join(&self, separator: Option<&str>) -> JsString {
        self.guard_cycle(|| {
            let separator = JsString::from(separator.unwrap_or(","));
            let mut units = Vec::new();
            for i in 0..self.length() {
                if i > 0 {
                    units.extend_from_slice(separator.units());
                }
                let value = self.slot(i);
                if !value.is_nullish() {
                    units.extend_from_slice(value.to_js_string().units());
                }
            }
            JsString::from_units(units)
        })
        .unwrap_or_default()
    }

    /// Same as `join(None)`; there is no locale-specific formatting
    pub fn to_locale_string(&self) -> JsString {
        self.join(None)
    }

    // ------------------------------------------------------------------
    // Iteration
    // ------------------------------------------------------------------

    /// Iterator over indices `0..length`
    pub fn keys(&self) -> ArrayKeys {
        ArrayKeys::new(self.length())
    }

    /// Iterator over slot values
    pub fn values(&self) -> ArrayValues {
        ArrayValues::new(self.clone())
    }

    /// Iterator over `(index, value)` pairs
    pub fn entries(&self) -> ArrayEntries {
        ArrayEntries::new(self.clone())
    }
}

/// Stable sort by text form, undefined markers last
pub(crate) fn sort_default(values: Vec<Value>) -> Vec<Value> {
    tracing::trace!(target: "ecma::array", len = values.len(), comparator = "default", "sorting");
    let (defined, undefined) = split_undefined(values);
    let mut keyed: Vec<(JsString, Value)> = defined
        .into_iter()
        .map(|value| (value.to_js_string(), value))
        .collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0));

    let mut sorted: Vec<Value> = keyed.into_iter().map(|(_, value)| value).collect();
    sorted.resize(sorted.len() + undefined, Value::Undefined);
    sorted
}

/// Stable merge sort with a caller comparator, undefined markers last
fn sort_custom<F>(values: Vec<Value>, mut compare: F) -> Vec<Value>
where
    F: FnMut(&Value, &Value) -> Ordering,
{
    tracing::trace!(target: "ecma::array", len = values.len(), comparator = "custom", "sorting");
    let (defined, undefined) = split_undefined(values);
    let mut sorted = merge_sort(defined, &mut compare);
    sorted.resize(sorted.len() + undefined, Value::Undefined);
    sorted
}

fn split_undefined(values: Vec<Value>) -> (Vec<Value>, usize) {
    let total = values.len();
    let defined: Vec<Value> = values.into_iter().filter(|v| !v.is_undefined()).collect();
    let undefined = total - defined.len();
    (defined, undefined)
}

/// Top-down merge sort. Only ever takes from the right run when the
/// comparator says the left element is greater, which keeps ties in order.
fn merge_sort<F>(mut values: Vec<Value>, compare: &mut F) -> Vec<Value>
where
    F: FnMut(&Value, &Value) -> Ordering,
{
    if values.len() <= 1 {
        return values;
    }
    let right = values.split_off(values.len() / 2);
    let left = merge_sort(values, compare);
    let right = merge_sort(right, compare);

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(l, r) == Ordering::Greater,
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        merged.extend(if take_right { right.next() } else { left.next() });
    }
    merged
}

impl Default for JsArray {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Value> for JsArray {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl IntoIterator for &JsArray {
    type Item = Value;
    type IntoIter = ArrayValues;

    fn into_iter(self) -> Self::IntoIter {
        self.values()
    }
}

impl ArrayLike for JsArray {
    fn length(&self) -> usize {
        JsArray::length(self)
    }

    fn item(&self, index: usize) -> Value {
        self.slot(index)
    }
}

impl ArrayLike for [Value] {
    fn length(&self) -> usize {
        self.len()
    }

    fn item(&self, index: usize) -> Value {
        self.get(index).cloned().unwrap_or_default()
    }
}

impl ObjectLike for JsArray {
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

impl fmt::Debug for JsArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.guard_cycle(|| f.debug_list().entries(self.to_vec()).finish()) {
            Some(result) => result,
            None => f.write_str("[...]"),
        }
    }
}

impl fmt::Display for JsArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.join(None))
    }
}
