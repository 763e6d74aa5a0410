//! Random value generators.
//!
//! Generators return owned `Vec`s so a failing assertion can print the whole
//! input that triggered it.

use std::ops::{Range, RangeInclusive};

const ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const WHITESPACE: &[char] = &[' ', '\t', '\n', '\r'];

/// `count` integers drawn from the full `i64` range.
#[must_use]
pub fn ints(count: usize) -> Vec<i64> {
    (0..count).map(|_| rand::random::<i64>()).collect()
}

/// `count` integers drawn uniformly from `range`.
#[must_use]
pub fn ints_in(count: usize, range: RangeInclusive<i64>) -> Vec<i64> {
    (0..count)
        .map(|_| rand::random_range(range.clone()))
        .collect()
}

/// `count` floats drawn uniformly from `range`.
#[must_use]
pub fn floats_in(count: usize, range: Range<f64>) -> Vec<f64> {
    (0..count)
        .map(|_| rand::random_range(range.clone()))
        .collect()
}

/// A random alphanumeric string of exactly `len` characters.
#[must_use]
pub fn ascii_string(len: usize) -> String {
    (0..len)
        .map(|_| char::from(ALPHANUMERIC[rand::random_range(0..ALPHANUMERIC.len())]))
        .collect()
}

/// `count` alphanumeric strings with lengths drawn from `len`.
#[must_use]
pub fn strings(count: usize, len: Range<usize>) -> Vec<String> {
    (0..count)
        .map(|_| ascii_string(rand::random_range(len.clone())))
        .collect()
}

/// A string of `len` whitespace characters (spaces, tabs, newlines).
#[must_use]
pub fn whitespace_string(len: usize) -> String {
    (0..len)
        .map(|_| WHITESPACE[rand::random_range(0..WHITESPACE.len())])
        .collect()
}

/// Wrap each value in `Some`, replacing roughly `none_ratio` of them with `None`.
#[must_use]
pub fn optional<T>(values: Vec<T>, none_ratio: f64) -> Vec<Option<T>> {
    values
        .into_iter()
        .map(|value| (rand::random::<f64>() >= none_ratio).then_some(value))
        .collect()
}
