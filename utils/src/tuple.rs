//! Homogeneous tuple to iterator adapters.

use std::array;

/// Iterate the elements of a tuple whose fields all share one type.
///
/// Implemented for arities 1 through 8.
///
/// ```
/// use ferrule_utils::TupleSeq;
///
/// let total: i32 = (1, 2, 3).into_seq().sum();
/// assert_eq!(total, 6);
///
/// let names = ("a".to_string(), "b".to_string());
/// assert_eq!(names.seq().map(String::as_str).collect::<Vec<_>>(), ["a", "b"]);
/// ```
pub trait TupleSeq {
    type Item;
    type IntoSeq: Iterator<Item = Self::Item>;
    type Seq<'a>: Iterator<Item = &'a Self::Item>
    where
        Self: 'a;

    const ARITY: usize;

    fn into_seq(self) -> Self::IntoSeq;

    fn seq(&self) -> Self::Seq<'_>;
}

macro_rules! same {
    ($_idx:tt, $ty:ty) => {
        $ty
    };
}

macro_rules! tuple_seq {
    ($arity:literal; $($idx:tt),+) => {
        impl<T> TupleSeq for ($(same!($idx, T),)+) {
            type Item = T;
            type IntoSeq = array::IntoIter<T, $arity>;
            type Seq<'a> = array::IntoIter<&'a T, $arity>
            where
                Self: 'a;

            const ARITY: usize = $arity;

            fn into_seq(self) -> Self::IntoSeq {
                [$(self.$idx),+].into_iter()
            }

            fn seq(&self) -> Self::Seq<'_> {
                [$(&self.$idx),+].into_iter()
            }
        }
    };
}

tuple_seq!(1; 0);
tuple_seq!(2; 0, 1);
tuple_seq!(3; 0, 1, 2);
tuple_seq!(4; 0, 1, 2, 3);
tuple_seq!(5; 0, 1, 2, 3, 4);
tuple_seq!(6; 0, 1, 2, 3, 4, 5);
tuple_seq!(7; 0, 1, 2, 3, 4, 5, 6);
tuple_seq!(8; 0, 1, 2, 3, 4, 5, 6, 7);
