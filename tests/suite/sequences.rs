//! Sequence helper tests

use ferrule::prelude::*;
use ferrule::{MinMax, SequenceError};
use ferrule_testkit::{Case, CountingIter, ExplodingIter, random, run};
use proptest::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct Employee {
    name: &'static str,
    dept: u32,
    salary: u32,
}

fn staff() -> Vec<Employee> {
    vec![
        Employee { name: "ada", dept: 2, salary: 120 },
        Employee { name: "bo", dept: 1, salary: 90 },
        Employee { name: "cy", dept: 3, salary: 120 },
        Employee { name: "di", dept: 1, salary: 70 },
    ]
}

#[test]
fn first_or_matches_first_on_random_input() {
    for len in [0, 1, 7] {
        let values = random::ints(len);
        let expected = values.first().copied().unwrap_or(-1);
        assert_eq!(values.into_iter().first_or(-1), expected);
    }
}

#[test]
fn single_queries_stop_at_the_second_hit() {
    let err = ExplodingIter::new(0.., 2).single().unwrap_err();
    assert_eq!(err, SequenceError::MoreThanOneElement);

    let err = ExplodingIter::new(0.., 6)
        .single_where(|n| n % 5 == 0)
        .unwrap_err();
    assert_eq!(err, SequenceError::MoreThanOneMatch);
}

#[test]
fn single_or_table() {
    let cases = [
        Case::new("empty", vec![], Ok(0)),
        Case::new("one", vec![4], Ok(4)),
        Case::new("two", vec![4, 5], Err(SequenceError::MoreThanOneElement)),
    ];
    run(&cases, |input: &Vec<i32>| input.iter().copied().single_or(0));
}

#[test]
fn index_of_visits_nothing_past_the_match() {
    let (iter, pulls) = CountingIter::new(["a", "b", "c", "d"].into_iter());
    assert_eq!(iter.index_of(&"b"), Some(1));
    assert_eq!(pulls.get(), 2);

    assert_eq!(ExplodingIter::new(10.., 4).index_of(&13), Some(3));
    assert_eq!([1, 2, 3].into_iter().index_of(&9), None);
}

#[test]
fn index_of_by_uses_custom_equality() {
    let words = ["Alpha", "beta", "GAMMA"];
    let found = words
        .into_iter()
        .index_of_by(&"gamma", |a, b| a.eq_ignore_ascii_case(b));
    assert_eq!(found, Some(2));
}

proptest! {
    #[test]
    fn min_max_agrees_with_separate_queries(values in prop::collection::vec(-1_000_i32..=1_000, 1..64)) {
        let pair = values.iter().copied().min_max().unwrap();
        prop_assert_eq!(pair.min, *values.iter().min().unwrap());
        prop_assert_eq!(pair.max, *values.iter().max().unwrap());
    }

    #[test]
    fn nullable_extremes_bound_every_present_value(
        values in prop::collection::vec(prop::option::of(-5.0_f64..5.0), 0..64),
    ) {
        let present: Vec<f64> = values.iter().flatten().copied().collect();
        match values.into_iter().min_max_present() {
            Some(pair) => prop_assert!(present.iter().all(|v| *v >= pair.min && *v <= pair.max)),
            None => prop_assert!(present.is_empty()),
        }
    }
}

#[test]
fn extremes_of_an_empty_sequence() {
    let empty: Vec<u64> = Vec::new();
    assert_eq!(empty.iter().copied().min_max(), Err(SequenceError::NoElements));
    assert_eq!(
        empty.iter().copied().min_with(u64::cmp),
        Err(SequenceError::NoElements)
    );

    let absent: Vec<Option<u64>> = Vec::new();
    assert_eq!(absent.into_iter().min_max_present(), None);
}

#[test]
fn keyed_extremes_return_original_elements() {
    let richest = staff().into_iter().max_item_by(|e| e.salary).unwrap();
    assert_eq!(richest.name, "ada");

    let MinMax { min, max } = staff().into_iter().min_max_item_by(|e| e.dept).unwrap();
    assert_eq!((min.name, max.name), ("bo", "cy"));

    let by_name_len = staff()
        .into_iter()
        .min_item_by_with(|e| e.name, |a: &&str, b: &&str| b.len().cmp(&a.len()))
        .unwrap();
    assert_eq!(by_name_len.name, "ada");
}

#[test]
fn custom_comparer_keeps_first_on_ties() {
    let words = ["pear", "fig", "kiwi", "yam"];
    let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
    assert_eq!(words.into_iter().min_with(by_len).unwrap(), "fig");
    assert_eq!(words.into_iter().max_with(by_len).unwrap(), "pear");
    assert_eq!(
        words.into_iter().min_max_with(by_len).unwrap().into_tuple(),
        ("fig", "pear")
    );
}

#[test]
fn order_by_sequence_follows_reference_order() {
    let result: Vec<i32> = [1, 2, 3]
        .into_iter()
        .order_by_sequence([2, 1, 3], |s| s * 2, |o| o * 2, |_, o| o * 2)
        .collect();
    assert_eq!(result, vec![4, 2, 6]);
}

#[test]
fn order_by_sequence_groups_and_drops_unmatched() {
    let ordered: Vec<&str> = staff()
        .into_iter()
        .order_by_sequence([3, 1, 9], |e| e.dept, |d| *d, |e, _| e.name)
        .collect();
    assert_eq!(ordered, vec!["cy", "bo", "di"]);

    let none: Vec<&str> = staff()
        .into_iter()
        .order_by_sequence(Vec::<u32>::new(), |e| e.dept, |d| *d, |e, _| e.name)
        .collect();
    assert!(none.is_empty());
}

#[test]
fn order_by_sequence_with_custom_equality() {
    let ordered: Vec<String> = ["Beta", "alpha"]
        .into_iter()
        .order_by_sequence_with(
            ["ALPHA", "beta"],
            ToString::to_string,
            ToString::to_string,
            |s, o| format!("{o}={s}"),
            |a: &String, b: &String| a.eq_ignore_ascii_case(b),
        )
        .collect();
    assert_eq!(ordered, vec!["ALPHA=alpha", "beta=Beta"]);
}

#[test]
fn float_comparison_is_total() {
    let values = [2.5, f64::NAN, -1.0];
    let pair = values.into_iter().min_max().unwrap();
    assert!(pair.min.is_nan());
    assert_eq!(pair.max, 2.5);
    assert_eq!(
        values.into_iter().max_with(|a, b| a.total_cmp(b)).map(f64::is_nan),
        Ok(true)
    );
}
