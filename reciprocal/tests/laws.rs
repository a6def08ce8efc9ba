use quickcheck::{QuickCheck, TestResult};
use reciprocal::prelude::*;

fn int() -> impl Conversion<Input = String, Output = i64> {
    from_fns(
        |raw: String| {
            raw.parse::<i64>()
                .map_err(|err| ConversionError::with_source("not an integer", err))
        },
        |value: i64| Ok(value.to_string()),
    )
}

fn outcomes_agree<T: PartialEq>(
    left: Result<T, ConversionError>,
    right: Result<T, ConversionError>,
) -> bool {
    match (left, right) {
        (Ok(left), Ok(right)) => left == right,
        (Err(left), Err(right)) => left.to_string() == right.to_string(),
        _ => false,
    }
}

fn identity_returns_every_value_unchanged(value: i64) -> bool {
    let id = identity::<i64>();
    id.apply(value).unwrap() == value && id.unapply(value).unwrap() == value
}

fn double_inversion_agrees_with_the_original(raw: String) -> bool {
    outcomes_agree(
        int().invert().invert().apply(raw.clone()),
        int().apply(raw),
    )
}

fn inversion_swaps_directions_pointwise(raw: String, value: i64) -> bool {
    outcomes_agree(int().invert().unapply(raw.clone()), int().apply(raw))
        && outcomes_agree(int().invert().apply(value), int().unapply(value))
}

fn identity_is_neutral_for_composition(raw: String) -> bool {
    outcomes_agree(
        identity::<String>().then(int()).apply(raw.clone()),
        int().apply(raw.clone()),
    ) && outcomes_agree(
        int().then(identity::<i64>()).apply(raw.clone()),
        int().apply(raw),
    )
}

fn sequence_lift_prints_every_element_in_order(values: Vec<i64>) -> bool {
    let printed = int().many().unapply(values.clone()).unwrap();
    printed.len() == values.len()
        && printed
            .iter()
            .zip(&values)
            .all(|(raw, value)| raw == &value.to_string())
}

fn sequence_lift_rejects_a_sequence_with_any_bad_element(
    values: Vec<i64>,
    position: usize,
) -> TestResult {
    let mut raw: Vec<String> = values.iter().map(ToString::to_string).collect();
    raw.insert(position % (raw.len() + 1), "not a number".to_string());
    match int().many().apply(raw) {
        Err(_) => TestResult::passed(),
        Ok(partial) => TestResult::error(format!("lift produced output: {:?}", partial)),
    }
}

fn optional_lift_is_faithful(value: Option<i64>) -> bool {
    let lifted = int().optional();
    lifted.unapply(value).unwrap() == value.map(|value| value.to_string())
}

#[test]
fn identity_laws() {
    QuickCheck::new().quickcheck(identity_returns_every_value_unchanged as fn(i64) -> bool);
    QuickCheck::new().quickcheck(identity_is_neutral_for_composition as fn(String) -> bool);
}

#[test]
fn inversion_laws() {
    QuickCheck::new().quickcheck(double_inversion_agrees_with_the_original as fn(String) -> bool);
    QuickCheck::new().quickcheck(inversion_swaps_directions_pointwise as fn(String, i64) -> bool);
}

#[test]
fn lifting_laws() {
    QuickCheck::new().quickcheck(sequence_lift_prints_every_element_in_order as fn(Vec<i64>) -> bool);
    QuickCheck::new().quickcheck(
        sequence_lift_rejects_a_sequence_with_any_bad_element as fn(Vec<i64>, usize) -> TestResult,
    );
    QuickCheck::new().quickcheck(optional_lift_is_faithful as fn(Option<i64>) -> bool);
}
