//! Tuple adapter tests

use ferrule::prelude::*;

#[test]
fn tuples_feed_sequence_helpers() {
    let scores = (70, 95, 88, 95);
    assert_eq!(scores.seq().copied().max_with(i32::cmp).unwrap(), 95);
    assert_eq!(scores.into_seq().index_of(&95), Some(1));
}

#[test]
fn arity_is_reported() {
    assert_eq!(<(u8,) as TupleSeq>::ARITY, 1);
    assert_eq!(<(u8, u8, u8, u8, u8, u8, u8, u8) as TupleSeq>::ARITY, 8);
}

#[test]
fn borrowed_iteration_leaves_tuple_intact() {
    let names = (String::from("x"), String::from("y"), String::from("z"));
    let joined: Vec<&str> = names.seq().map(String::as_str).collect();
    assert_eq!(joined, ["x", "y", "z"]);
    assert_eq!(names.0, "x");
}
