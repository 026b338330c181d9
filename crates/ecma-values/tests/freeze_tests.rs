//! Frozen-instance tests
//!
//! Every declared mutator must reject with the attempted kind and index and
//! leave the contents untouched.

use std::rc::Rc;

use ecma_values::{
    HostObject, JsArray, JsString, MutationKind, ObjectLike, ObjectState, Value, ValueError,
    ValueResult, freeze, is_frozen, js_array, keys,
};

fn frozen_sample() -> JsArray {
    let arr = js_array![3, 1, 2];
    freeze(&arr);
    arr
}

fn assert_rejected<T: std::fmt::Debug>(result: ValueResult<T>, kind: MutationKind, index: usize) {
    match result {
        Err(err) => assert_eq!(err.mutation(), Some((kind, index)), "{err}"),
        Ok(value) => panic!("mutation unexpectedly allowed: {value:?}"),
    }
}

#[test]
fn test_freeze_is_one_way_and_keeps_identity() {
    let arr = js_array![1];
    assert!(!is_frozen(&arr));
    let same = freeze(&arr);
    assert!(same.ptr_eq(&arr));
    assert!(arr.is_frozen());
    arr.freeze();
    assert!(is_frozen(&arr));

    // Clones share the instance, and so its frozen flag
    assert!(arr.clone().is_frozen());
}

#[test]
fn test_every_mutator_rejects() {
    let arr = frozen_sample();

    assert_rejected(arr.push(4), MutationKind::Add, 3);
    assert_rejected(arr.push_all(&[]), MutationKind::Add, 3);
    assert_rejected(arr.unshift(&[Value::from(0)]), MutationKind::Add, 3);
    assert_rejected(arr.pop(), MutationKind::Delete, 2);
    assert_rejected(arr.shift(), MutationKind::Delete, 0);
    assert_rejected(arr.set(1, 9), MutationKind::Set, 1);
    assert_rejected(arr.set(7, 9), MutationKind::Add, 7);
    assert_rejected(arr.delete(1), MutationKind::Delete, 1);
    assert_rejected(arr.splice(1, 1, &[]), MutationKind::Delete, 1);
    assert_rejected(arr.splice(1, 0, &[Value::from(5)]), MutationKind::Add, 1);
    assert_rejected(arr.splice(0, 1, &[Value::from(5)]), MutationKind::Set, 0);
    assert_rejected(arr.fill(0, 1, None), MutationKind::Set, 1);
    assert_rejected(arr.copy_within(2, 0, None), MutationKind::Set, 2);
    assert_rejected(arr.sort(), MutationKind::Set, 0);
    assert_rejected(arr.sort_by(|_, _| std::cmp::Ordering::Equal), MutationKind::Set, 0);
    assert_rejected(arr.reverse(), MutationKind::Set, 0);

    assert_eq!(arr.to_string(), "3,1,2");
}

#[test]
fn test_rejection_message() {
    let arr = frozen_sample();
    let err = arr.push(1).unwrap_err();
    assert_eq!(
        err.to_string(),
        "TypeError: Cannot add property '3', object is not extensible"
    );
    assert!(matches!(err, ValueError::MutationRejected { class: "Array", .. }));
}

#[test]
fn test_queries_and_copies_still_work() {
    let arr = frozen_sample();
    assert_eq!(arr.get(0), Value::from(3));
    assert_eq!(arr.index_of(2, None), Some(2));
    assert_eq!(arr.to_sorted().to_string(), "1,2,3");
    assert_eq!(arr.slice(1, None).to_string(), "1,2");
    assert_eq!(arr.map(|v, _| v.clone()).length(), 3);

    // Copies start unfrozen
    let copy = arr.to_reversed();
    assert!(!copy.is_frozen());
    copy.push(0).unwrap();
}

#[test]
fn test_nested_values_are_not_frozen() {
    let inner = js_array![1];
    let outer = js_array![&inner];
    freeze(&outer);
    inner.push(2).unwrap();
    assert_eq!(outer.join(None), "1,2");
}

#[test]
fn test_value_freeze() {
    let value = Value::from(js_array![1, 2]);
    assert!(!value.is_frozen());
    value.freeze();
    assert!(value.is_frozen());
    let arr = value.as_array().cloned().unwrap_or_default();
    assert_rejected(arr.pop(), MutationKind::Delete, 1);

    let text = Value::from("abc");
    text.freeze();
    assert!(text.as_string().is_some_and(JsString::is_frozen));
    assert!(Value::Null.is_frozen());
}

#[derive(Debug)]
struct Config {
    state: ObjectState,
}

impl ObjectLike for Config {
    fn object_state(&self) -> &ObjectState {
        &self.state
    }

    fn class_name(&self) -> &'static str {
        "Config"
    }

    fn own_keys(&self) -> Vec<JsString> {
        vec![JsString::from("port"), JsString::from("host")]
    }
}

impl HostObject for Config {}

#[test]
fn test_host_objects_freeze_and_list_keys() {
    let config = Config {
        state: ObjectState::new(),
    };
    let listed = keys(&config);
    assert_eq!(listed.to_string(), "host,port");
    freeze(&config);
    assert!(is_frozen(&config));

    let host: Rc<dyn HostObject> = Rc::new(Config {
        state: ObjectState::new(),
    });
    let value = Value::from(host);
    assert_eq!(value.to_js_string(), "[object Config]");
    value.freeze();
    assert!(value.is_frozen());
}

#[test]
fn test_keys_of_arrays_and_strings() {
    let arr = JsArray::with_length(3).unwrap();
    assert_eq!(keys(&arr).to_string(), "0,1,2");
    let s = JsString::from("ab");
    assert_eq!(keys(&s).to_string(), "0,1");
    assert!(keys(&JsArray::new()).is_empty());
}

#[test]
fn test_comparator_that_freezes_blocks_write_back() {
    let arr = js_array![3, 1, 2];
    let handle = arr.clone();
    let result = arr.sort_by(|a, b| {
        handle.freeze();
        let a = a.as_number().unwrap_or(0.0);
        a.total_cmp(&b.as_number().unwrap_or(0.0))
    });
    assert!(arr.is_frozen());
    assert_rejected(result, MutationKind::Set, 0);
    assert_eq!(arr.to_string(), "3,1,2");
}

/// Host value that freezes an array when rendered as text
#[derive(Debug)]
struct Freezer {
    state: ObjectState,
    target: JsArray,
}

impl ObjectLike for Freezer {
    fn object_state(&self) -> &ObjectState {
        &self.state
    }
}

impl HostObject for Freezer {
    fn to_js_string(&self) -> JsString {
        self.target.freeze();
        JsString::from("m")
    }
}

#[test]
fn test_text_conversion_that_freezes_blocks_default_sort() {
    let arr = js_array!["z", "a"];
    let host: Rc<dyn HostObject> = Rc::new(Freezer {
        state: ObjectState::new(),
        target: arr.clone(),
    });
    arr.push(host).unwrap();

    assert_rejected(arr.sort(), MutationKind::Set, 0);
    assert_eq!(arr.to_string(), "z,a,m");
}
