//! Integration tests for `Opt<T>`.
//!
//! Covers construction, extraction contracts, the map/bind combinators and
//! conversion to and from the standard library `Option`.

#![cfg(feature = "control")]

use fun::control::{FailureKind, Opt, Outcome};
use rstest::rstest;
use std::cell::Cell;

// =============================================================================
// Construction and Extraction
// =============================================================================

#[rstest]
fn some_has_value() {
    let value = Opt::some(42);
    assert!(value.has_value());
    assert_eq!(*value.value_ref(), 42);
}

#[rstest]
fn none_has_no_value() {
    let value: Opt<i32> = Opt::none();
    assert!(!value.has_value());
    assert_eq!(value, Opt::default());
}

#[rstest]
#[should_panic(expected = "called `Opt::value_ref()` on an `Absent` value")]
fn value_ref_on_absent_panics() {
    let value: Opt<String> = Opt::none();
    let _ = value.value_ref();
}

#[rstest]
#[case(Opt::some(3), 3)]
#[case(Opt::none(), -1)]
fn value_or_falls_back_only_when_absent(#[case] value: Opt<i32>, #[case] expected: i32) {
    assert_eq!(value.value_or(-1), expected);
}

// =============================================================================
// Combinators
// =============================================================================

#[rstest]
fn map_transforms_present_value() {
    assert_eq!(Opt::some(5).map(|x| x * 2), Opt::some(10));
}

#[rstest]
fn map_never_invokes_function_on_absent() {
    let calls = Cell::new(0);
    let result = Opt::<i32>::none().map(|x| {
        calls.set(calls.get() + 1);
        x + 1
    });
    assert_eq!(result, Opt::none());
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn bind_flattens_one_level() {
    let half = |x: i32| if x % 2 == 0 { Opt::some(x / 2) } else { Opt::none() };
    assert_eq!(Opt::some(8).bind(half), Opt::some(4));
    assert_eq!(Opt::some(7).bind(half), Opt::none());
}

#[rstest]
fn select_many_projects_both_values() {
    let result = Opt::some(3).select_many(|x| Opt::some(x * 10), |x, y| format!("{x}-{y}"));
    assert_eq!(result, Opt::some("3-30".to_string()));
}

#[rstest]
fn select_many_skips_projector_when_binder_is_absent() {
    let calls = Cell::new(0);
    let result: Opt<i32> = Opt::some(3).select_many(
        |_| Opt::<i32>::none(),
        |x, y| {
            calls.set(calls.get() + 1);
            x + y
        },
    );
    assert_eq!(result, Opt::none());
    assert_eq!(calls.get(), 0);
}

#[rstest]
#[case(4, Opt::some(4))]
#[case(5, Opt::none())]
fn filter_keeps_matching_values(#[case] input: i32, #[case] expected: Opt<i32>) {
    assert_eq!(Opt::some(input).filter(|x| x % 2 == 0), expected);
}

#[rstest]
fn ok_or_turns_absent_into_error() {
    let outcome = Opt::<i32>::none().ok_or("missing id");
    assert_eq!(outcome.error_ref().kind(), FailureKind::Message);
    assert_eq!(outcome, Outcome::fail("missing id"));
    assert_eq!(Opt::some(1).ok_or("missing id"), Outcome::value(1));
}

// =============================================================================
// Conversions and Formatting
// =============================================================================

#[rstest]
fn converts_to_and_from_std_option() {
    assert_eq!(Opt::from(Some(1)), Opt::some(1));
    assert_eq!(Opt::<i32>::from(None), Opt::none());
    assert_eq!(Option::from(Opt::some("a")), Some("a"));
    assert_eq!(Opt::<u8>::none().into_option(), None);
}

#[rstest]
fn as_ref_borrows_value() {
    let name = Opt::some(String::from("Ada"));
    assert_eq!(name.as_ref().map(String::len), Opt::some(3));
    assert!(name.has_value());
}

#[rstest]
fn display_and_debug() {
    assert_eq!(Opt::some(1).to_string(), "Present(1)");
    assert_eq!(Opt::<i32>::none().to_string(), "Absent");
    assert_eq!(format!("{:?}", Opt::some(1)), "Present(1)");
    assert_eq!(format!("{:?}", Opt::<i32>::none()), "Absent");
}

// =============================================================================
// Ordering
// =============================================================================

#[rstest]
#[case(None, Some(1))]
#[case(Some(1), Some(2))]
#[case(None, None)]
#[case(Some(5), None)]
fn ordering_matches_std_option(#[case] left: Option<i32>, #[case] right: Option<i32>) {
    assert_eq!(Opt::from(left).cmp(&Opt::from(right)), left.cmp(&right));
}

#[rstest]
fn absent_sorts_first() {
    let mut values = vec![Opt::some(3), Opt::none(), Opt::some(1)];
    values.sort();
    assert_eq!(values, vec![Opt::none(), Opt::some(1), Opt::some(3)]);
    assert_eq!(values.iter().max(), Some(&Opt::some(3)));
}
