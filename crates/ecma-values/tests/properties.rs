//! Property tests for the array and string round-trip laws

use ecma_values::index::{relative_index, relative_range};
use ecma_values::{JsArray, JsString, Value, freeze};
use proptest::prelude::*;

fn array_of(values: &[i32]) -> JsArray {
    values.iter().copied().map(Value::from).collect()
}

fn numbers(arr: &JsArray) -> Vec<f64> {
    arr.values().map(|v| v.as_number().unwrap_or(f64::NAN)).collect()
}

fn as_f64(values: &[i32]) -> Vec<f64> {
    values.iter().copied().map(f64::from).collect()
}

proptest! {
    #[test]
    fn prop_set_then_get(values in prop::collection::vec(any::<i32>(), 0..20), index in 0i64..40, v in any::<i32>()) {
        let arr = array_of(&values);
        arr.set(index, v).unwrap();
        prop_assert_eq!(arr.get(index), Value::from(v));
        prop_assert!(arr.length() >= values.len());
    }

    #[test]
    fn prop_push_then_pop(values in prop::collection::vec(any::<i32>(), 0..20), v in any::<i32>()) {
        let arr = array_of(&values);
        arr.push(v).unwrap();
        prop_assert_eq!(arr.pop().unwrap(), Value::from(v));
        prop_assert_eq!(numbers(&arr), as_f64(&values));
    }

    #[test]
    fn prop_slice_copies(values in prop::collection::vec(any::<i32>(), 0..20)) {
        let arr = array_of(&values);
        let copy = arr.slice(None, None);
        prop_assert!(!copy.ptr_eq(&arr));
        prop_assert_eq!(copy.to_vec(), arr.to_vec());
    }

    #[test]
    fn prop_splice_returns_removed(
        values in prop::collection::vec(any::<i32>(), 0..20),
        start in -25i64..25,
        count in -5i64..25,
    ) {
        let arr = array_of(&values);
        let removed = arr.splice(start, count, &[]).unwrap();
        prop_assert_eq!(values.len(), removed.length() + arr.length());

        let from = relative_index(start, values.len());
        let expected = as_f64(&values[from..from + removed.length()]);
        prop_assert_eq!(numbers(&removed), expected);
    }

    #[test]
    fn prop_sort_is_idempotent(values in prop::collection::vec(any::<i32>(), 0..30)) {
        let arr = array_of(&values);
        arr.sort().unwrap();
        let once = arr.to_vec();
        arr.sort().unwrap();
        prop_assert_eq!(arr.to_vec(), once);
    }

    #[test]
    fn prop_undefined_sorts_last(
        values in prop::collection::vec(prop::option::of(any::<i32>()), 0..30),
        descending in any::<bool>(),
    ) {
        let arr: JsArray = values
            .iter()
            .map(|v| v.map_or(Value::Undefined, Value::from))
            .collect();
        arr.sort_by(|a, b| {
            let ord = a.as_number().unwrap_or(0.0).total_cmp(&b.as_number().unwrap_or(0.0));
            if descending { ord.reverse() } else { ord }
        }).unwrap();

        let defined = values.iter().filter(|v| v.is_some()).count();
        let sorted = arr.to_vec();
        prop_assert!(sorted[..defined].iter().all(|v| !v.is_undefined()));
        prop_assert!(sorted[defined..].iter().all(Value::is_undefined));
    }

    #[test]
    fn prop_reverse_twice(values in prop::collection::vec(any::<i32>(), 0..20)) {
        let arr = array_of(&values);
        arr.reverse().unwrap();
        arr.reverse().unwrap();
        prop_assert_eq!(numbers(&arr), as_f64(&values));
    }

    #[test]
    fn prop_join_split_round_trip(words in prop::collection::vec("[a-z]{0,5}", 1..10)) {
        let arr: JsArray = words.iter().map(|w| Value::from(w.as_str())).collect();
        let joined = arr.join(Some(","));
        let parts = joined.split(",", None);
        let texts: Vec<String> = parts.values().map(|v| v.to_js_string().to_std_string()).collect();
        prop_assert_eq!(texts, words);
    }

    #[test]
    fn prop_frozen_arrays_stay_unchanged(values in prop::collection::vec(any::<i32>(), 0..10), start in -12i64..12) {
        let arr = array_of(&values);
        freeze(&arr);
        prop_assert!(arr.push(1).is_err());
        prop_assert!(arr.splice(start, 1, &[Value::from(0)]).is_err());
        prop_assert!(arr.fill(0, start, None).is_err());
        prop_assert!(arr.sort().is_err());
        prop_assert_eq!(numbers(&arr), as_f64(&values));
    }

    #[test]
    fn prop_relative_range_is_clamped(start in any::<i64>(), end in any::<i64>(), len in 0usize..100) {
        let range = relative_range(Some(start), Some(end), len);
        prop_assert!(range.start <= range.end);
        prop_assert!(range.end <= len);
    }

    #[test]
    fn prop_pad_start_reaches_target(text in "[a-z]{0,8}", target in 0usize..20, filler in "[0-9]{1,3}") {
        let s = JsString::from(text.as_str());
        let padded = s.pad_start(target, filler.as_str()).unwrap();
        prop_assert_eq!(padded.length(), target.max(s.length()));
        prop_assert!(padded.ends_with(&s, None));
    }
}
