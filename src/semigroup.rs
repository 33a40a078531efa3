//! Semigroup: types with an associative `combine`.
//!
//! Semigroups are how failures accumulate. A
//! [`Validation`](crate::effect::Validation) built with
//! `Validation::semigroup()` merges the errors of two failed branches with
//! the error type's `combine`, and
//! [`apply_concat`](crate::effect::apply_concat) /
//! [`first_success`](crate::effect::first_success) merge successful values
//! the same way.
//!
//! # Law
//!
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use tributary::Semigroup;
//!
//! assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
//! assert_eq!("Hello, ".to_string().combine("World!".to_string()), "Hello, World!");
//! assert_eq!(Some(vec![1]).combine(None), Some(vec![1]));
//! assert_eq!(
//!     (vec!["a"], "x".to_string()).combine((vec!["b"], "y".to_string())),
//!     (vec!["a", "b"], "xy".to_string())
//! );
//! ```
//!
//! Error types usually wrap a collection:
//!
//! ```
//! use tributary::Semigroup;
//!
//! #[derive(Debug, PartialEq)]
//! struct FieldErrors(Vec<String>);
//!
//! impl Semigroup for FieldErrors {
//!     fn combine(mut self, other: Self) -> Self {
//!         self.0.extend(other.0);
//!         self
//!     }
//! }
//! ```

/// A type with an associative binary operation.
///
/// `combine` takes both sides by value; clone first to keep the originals.
pub trait Semigroup: Sized {
    /// Combine `self` with `other`, `self` first.
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl Semigroup for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

/// `None` is neutral; two `Some`s combine their contents.
impl<T: Semigroup> Semigroup for Option<T> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(a), Some(b)) => Some(a.combine(b)),
            (Some(a), None) => Some(a),
            (None, b) => b,
        }
    }
}

macro_rules! impl_semigroup_tuple {
    ($($idx:tt $T:ident),+) => {
        impl<$($T: Semigroup),+> Semigroup for ($($T,)+) {
            #[inline]
            fn combine(self, other: Self) -> Self {
                ($(self.$idx.combine(other.$idx),)+)
            }
        }
    };
}

// Component-wise, for tuples of 2 to 12 elements.
impl_semigroup_tuple!(0 T1, 1 T2);
impl_semigroup_tuple!(0 T1, 1 T2, 2 T3);
impl_semigroup_tuple!(0 T1, 1 T2, 2 T3, 3 T4);
impl_semigroup_tuple!(0 T1, 1 T2, 2 T3, 3 T4, 4 T5);
impl_semigroup_tuple!(0 T1, 1 T2, 2 T3, 3 T4, 4 T5, 5 T6);
impl_semigroup_tuple!(0 T1, 1 T2, 2 T3, 3 T4, 4 T5, 5 T6, 6 T7);
impl_semigroup_tuple!(0 T1, 1 T2, 2 T3, 3 T4, 4 T5, 5 T6, 6 T7, 7 T8);
impl_semigroup_tuple!(0 T1, 1 T2, 2 T3, 3 T4, 4 T5, 5 T6, 6 T7, 7 T8, 8 T9);
impl_semigroup_tuple!(0 T1, 1 T2, 2 T3, 3 T4, 4 T5, 5 T6, 6 T7, 7 T8, 8 T9, 9 T10);
impl_semigroup_tuple!(0 T1, 1 T2, 2 T3, 3 T4, 4 T5, 5 T6, 6 T7, 7 T8, 8 T9, 9 T10, 10 T11);
impl_semigroup_tuple!(0 T1, 1 T2, 2 T3, 3 T4, 4 T5, 5 T6, 6 T7, 7 T8, 8 T9, 9 T10, 10 T11, 11 T12);

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn vec_appends_in_order() {
        assert_eq!(vec!["e1"].combine(vec!["e2", "e3"]), vec!["e1", "e2", "e3"]);
        assert_eq!(Vec::<i32>::new().combine(vec![1]), vec![1]);
    }

    #[test]
    fn option_treats_none_as_neutral() {
        assert_eq!(None.combine(Some("a".to_string())), Some("a".to_string()));
        assert_eq!(Some("a".to_string()).combine(None), Some("a".to_string()));
        assert_eq!(
            Some("a".to_string()).combine(Some("b".to_string())),
            Some("ab".to_string())
        );
        assert_eq!(None::<String>.combine(None), None);
    }

    #[test]
    fn tuples_combine_component_wise() {
        let t = (vec![1], "a".to_string(), Some(vec!['x']));
        let u = (vec![2], "b".to_string(), None);
        assert_eq!(t.combine(u), (vec![1, 2], "ab".to_string(), Some(vec!['x'])));
    }

    proptest! {
        #[test]
        fn vec_is_associative(a: Vec<i32>, b: Vec<i32>, c: Vec<i32>) {
            let left = a.clone().combine(b.clone()).combine(c.clone());
            let right = a.combine(b.combine(c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn string_is_associative(a: String, b: String, c: String) {
            let left = a.clone().combine(b.clone()).combine(c.clone());
            let right = a.combine(b.combine(c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn option_is_associative(a: Option<Vec<u8>>, b: Option<Vec<u8>>, c: Option<Vec<u8>>) {
            let left = a.clone().combine(b.clone()).combine(c.clone());
            let right = a.combine(b.combine(c));
            prop_assert_eq!(left, right);
        }
    }
}
