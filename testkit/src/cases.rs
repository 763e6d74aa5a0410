//! Data-driven case tables.
//!
//! ```
//! use ferrule_testkit::{Case, run};
//!
//! let cases = [
//!     Case::new("zero", 0, 0),
//!     Case::new("negative", -4, 4),
//! ];
//! run(&cases, |n: &i32| n.abs());
//! ```

use std::fmt::Debug;

/// Boundary values worth including in any `i32` table.
pub const I32_EDGES: [i32; 5] = [i32::MIN, -1, 0, 1, i32::MAX];

/// Boundary values worth including in any `i64` table.
pub const I64_EDGES: [i64; 5] = [i64::MIN, -1, 0, 1, i64::MAX];

/// One named input and the result it should produce.
#[derive(Debug, Clone, PartialEq)]
pub struct Case<I, E> {
    pub name: &'static str,
    pub input: I,
    pub expected: E,
}

impl<I, E> Case<I, E> {
    pub fn new(name: &'static str, input: I, expected: E) -> Self {
        Self {
            name,
            input,
            expected,
        }
    }
}

/// Run `f` against every case, failing with the case name on the first mismatch.
pub fn run<I, E, F>(cases: &[Case<I, E>], mut f: F)
where
    I: Debug,
    E: PartialEq + Debug,
    F: FnMut(&I) -> E,
{
    for case in cases {
        let actual = f(&case.input);
        assert_eq!(
            actual, case.expected,
            "case '{}' failed for input {:?}",
            case.name, case.input
        );
    }
}
