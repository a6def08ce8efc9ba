use std::cell::Cell;

use reciprocal::prelude::*;

fn decimal() -> impl Conversion<Input = String, Output = f64> {
    from_fns(
        |raw: String| {
            raw.parse::<f64>()
                .map_err(|err| ConversionError::with_source("not a decimal number", err))
        },
        |value: f64| Ok(value.to_string()),
    )
}

fn int() -> impl Conversion<Input = String, Output = i64> {
    from_fns(
        |raw: String| {
            raw.parse::<i64>()
                .map_err(|err| ConversionError::with_source("not an integer", err))
        },
        |value: i64| Ok(value.to_string()),
    )
}

/// A conversion from `i64` to `bool` which counts how many times either direction runs, so tests
/// can observe short-circuiting.
fn counted_nonzero(calls: &Cell<u32>) -> impl Conversion<Input = i64, Output = bool> + '_ {
    from_fns(
        move |value: i64| {
            calls.set(calls.get() + 1);
            Ok(value != 0)
        },
        move |flag: bool| {
            calls.set(calls.get() + 1);
            Ok(if flag { 1 } else { 0 })
        },
    )
}

#[test]
fn decimal_string_round_trip() {
    let decimal = decimal();
    assert_eq!(decimal.apply("3.5".to_string()).unwrap(), 3.5);
    assert_eq!(decimal.unapply(3.5).unwrap(), "3.5");
    assert!(decimal.apply("abc".to_string()).is_err());
}

#[test]
fn string_to_bool_through_int() {
    let calls = Cell::new(0);
    let truthy = int().then(counted_nonzero(&calls));

    assert_eq!(truthy.apply("0".to_string()).unwrap(), false);
    assert_eq!(truthy.apply("7".to_string()).unwrap(), true);
    assert_eq!(calls.get(), 2);
}

#[test]
fn first_stage_failure_skips_second_stage() {
    let calls = Cell::new(0);
    let truthy = int().then(counted_nonzero(&calls));

    assert!(truthy.apply("x".to_string()).is_err());
    assert_eq!(calls.get(), 0);
}

#[test]
fn second_stage_failure_fails_the_whole_composition() {
    let positive = from_fns(
        |value: i64| {
            if value > 0 {
                Ok(value as u64)
            } else {
                Err(ConversionError::new("not positive"))
            }
        },
        |value: u64| Ok(value as i64),
    );
    let composite = int().then(positive);

    assert_eq!(composite.apply("12".to_string()).unwrap(), 12);
    assert!(composite.apply("-12".to_string()).is_err());
}

#[test]
fn inversion_agrees_pointwise_with_the_opposite_direction() {
    for raw in ["5", "-40", "x", ""] {
        let forward = int().apply(raw.to_string());
        let inverted = int().invert().unapply(raw.to_string());
        match (forward, inverted) {
            (Ok(a), Ok(b)) => assert_eq!(a, b),
            (Err(a), Err(b)) => assert_eq!(a.to_string(), b.to_string()),
            (a, b) => panic!("outcomes diverge: {:?} vs {:?}", a, b),
        }
    }

    assert_eq!(int().invert().apply(9).unwrap(), "9");
}

#[test]
fn double_inversion_restores_the_original_orientation() {
    let twice = int().invert().invert();
    assert_eq!(twice.apply("31".to_string()).unwrap(), 31);
    assert_eq!(twice.unapply(31).unwrap(), "31");
}

#[test]
fn optional_lift_passes_absence_through_without_running_the_inner_conversion() {
    let calls = Cell::new(0);
    let lifted = counted_nonzero(&calls).optional();

    assert_eq!(lifted.apply(None).unwrap(), None);
    assert_eq!(lifted.unapply(None).unwrap(), None);
    assert_eq!(calls.get(), 0);

    assert_eq!(lifted.apply(Some(3)).unwrap(), Some(true));
    assert_eq!(calls.get(), 1);
}

#[test]
fn optional_lift_propagates_inner_failure() {
    let lifted = int().optional();
    assert!(lifted.apply(Some("x".to_string())).is_err());
}

#[test]
fn sequence_lift_preserves_order_and_length() {
    let lifted = int().many();
    let raw: Vec<String> = vec!["3".into(), "1".into(), "2".into()];
    assert_eq!(lifted.apply(raw).unwrap(), vec![3, 1, 2]);
    assert_eq!(
        lifted.unapply(vec![3, 1, 2]).unwrap(),
        vec!["3".to_string(), "1".to_string(), "2".to_string()]
    );
}

#[test]
fn sequence_lift_aborts_on_the_first_failing_element() {
    let calls = Cell::new(0);
    let validated = from_fns(
        |value: i64| {
            calls.set(calls.get() + 1);
            if value % 2 == 0 {
                Ok(value / 2)
            } else {
                Err(ConversionError::new("odd"))
            }
        },
        |half: i64| {
            calls.set(calls.get() + 1);
            Ok(half * 2)
        },
    );
    let lifted = validated.many();

    // The second element fails: nothing is returned, and the third is never attempted.
    assert!(lifted.apply(vec![4, 3, 8]).is_err());
    assert_eq!(calls.get(), 2);
}

#[test]
fn sequence_lift_aborts_backward_on_a_failing_element() {
    let doubled = from_fns(
        |value: i64| Ok(value * 2),
        |doubled: i64| {
            if doubled % 2 == 0 {
                Ok(doubled / 2)
            } else {
                Err(ConversionError::new("not an even number"))
            }
        },
    );
    let lifted = doubled.many();

    assert_eq!(lifted.unapply(vec![2, 4]).unwrap(), vec![1, 2]);
    assert!(lifted.unapply(vec![2, 3, 4]).is_err());
}

#[test]
fn empty_sequences_convert_to_empty_sequences() {
    let lifted = int().many();
    assert_eq!(lifted.apply(Vec::new()).unwrap(), Vec::<i64>::new());
    assert_eq!(lifted.unapply(Vec::new()).unwrap(), Vec::<String>::new());
}
