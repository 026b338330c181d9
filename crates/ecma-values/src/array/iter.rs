//! Array iteration adapters
//!
//! Each adapter records the array length when it is created and reads live
//! slot values as it advances. Shrinking the array mid-iteration makes the
//! remaining positions read as undefined; growing it is not observed.

use std::iter::FusedIterator;

use super::JsArray;
use crate::value::Value;

/// Iterator over array indices
#[derive(Clone, Debug)]
pub struct ArrayKeys {
    next: usize,
    end: usize,
}

impl ArrayKeys {
    pub(super) fn new(len: usize) -> Self {
        Self { next: 0, end: len }
    }
}

impl Iterator for ArrayKeys {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.next >= self.end {
            return None;
        }
        let index = self.next;
        self.next += 1;
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for ArrayKeys {
    fn next_back(&mut self) -> Option<usize> {
        if self.next >= self.end {
            return None;
        }
        self.end -= 1;
        Some(self.end)
    }
}

impl ExactSizeIterator for ArrayKeys {}
impl FusedIterator for ArrayKeys {}

/// Iterator over array slot values
#[derive(Clone, Debug)]
pub struct ArrayValues {
    array: JsArray,
    keys: ArrayKeys,
}

impl ArrayValues {
    pub(super) fn new(array: JsArray) -> Self {
        let keys = ArrayKeys::new(array.length());
        Self { array, keys }
    }
}

impl Iterator for ArrayValues {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        self.keys.next().map(|i| self.array.slot(i))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl DoubleEndedIterator for ArrayValues {
    fn next_back(&mut self) -> Option<Value> {
        self.keys.next_back().map(|i| self.array.slot(i))
    }
}

impl ExactSizeIterator for ArrayValues {}
impl FusedIterator for ArrayValues {}

/// Iterator over `(index, value)` entries
#[derive(Clone, Debug)]
pub struct ArrayEntries {
    array: JsArray,
    keys: ArrayKeys,
}

impl ArrayEntries {
    pub(super) fn new(array: JsArray) -> Self {
        let keys = ArrayKeys::new(array.length());
        Self { array, keys }
    }
}

impl Iterator for ArrayEntries {
    type Item = (usize, Value);

    fn next(&mut self) -> Option<(usize, Value)> {
        self.keys.next().map(|i| (i, self.array.slot(i)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl DoubleEndedIterator for ArrayEntries {
    fn next_back(&mut self) -> Option<(usize, Value)> {
        self.keys.next_back().map(|i| (i, self.array.slot(i)))
    }
}

impl ExactSizeIterator for ArrayEntries {}
impl FusedIterator for ArrayEntries {}
