//! Monoid: a [`Semigroup`] with an identity element.
//!
//! [`apply_empty`](crate::effect::apply_empty) lifts [`Monoid::empty`] into
//! an effect, giving the neutral element for
//! [`apply_concat`](crate::effect::apply_concat).
//!
//! # Laws
//!
//! ```text
//! a.combine(M::empty()) == a
//! M::empty().combine(a) == a
//! ```
//!
//! Numbers have two monoids each, so they are picked with the [`Sum`] and
//! [`Product`] wrappers:
//!
//! ```
//! use tributary::monoid::{Product, Sum};
//! use tributary::{Monoid, Semigroup};
//!
//! assert_eq!(Sum(2).combine(Sum(3)), Sum(5));
//! assert_eq!(Product(2).combine(Product(3)), Product(6));
//! assert_eq!(Sum::<i32>::empty(), Sum(0));
//! assert_eq!(Product::<i32>::empty(), Product(1));
//! ```

use std::ops::{Add, Mul};

use crate::semigroup::Semigroup;

/// A [`Semigroup`] with an identity element.
pub trait Monoid: Semigroup {
    /// The identity: combining with it on either side changes nothing.
    fn empty() -> Self;
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Vec::new()
    }
}

impl Monoid for String {
    fn empty() -> Self {
        String::new()
    }
}

impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

macro_rules! impl_monoid_tuple {
    ($($T:ident),+) => {
        impl<$($T: Monoid),+> Monoid for ($($T,)+) {
            fn empty() -> Self {
                ($($T::empty(),)+)
            }
        }
    };
}

impl_monoid_tuple!(T1, T2);
impl_monoid_tuple!(T1, T2, T3);
impl_monoid_tuple!(T1, T2, T3, T4);
impl_monoid_tuple!(T1, T2, T3, T4, T5);
impl_monoid_tuple!(T1, T2, T3, T4, T5, T6);
impl_monoid_tuple!(T1, T2, T3, T4, T5, T6, T7);
impl_monoid_tuple!(T1, T2, T3, T4, T5, T6, T7, T8);
impl_monoid_tuple!(T1, T2, T3, T4, T5, T6, T7, T8, T9);
impl_monoid_tuple!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10);
impl_monoid_tuple!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11);
impl_monoid_tuple!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12);

/// Addition monoid. Identity is `T::default()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Sum<T>(pub T);

impl<T: Add<Output = T>> Semigroup for Sum<T> {
    fn combine(self, other: Self) -> Self {
        Sum(self.0 + other.0)
    }
}

impl<T: Add<Output = T> + Default> Monoid for Sum<T> {
    fn empty() -> Self {
        Sum(T::default())
    }
}

/// Multiplication monoid. Identity is [`One::one`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Product<T>(pub T);

/// Multiplicative identity for numeric types.
pub trait One {
    /// `1` for this type.
    fn one() -> Self;
}

macro_rules! impl_one {
    ($($t:ty => $one:expr),+ $(,)?) => {
        $(impl One for $t {
            fn one() -> Self {
                $one
            }
        })+
    };
}

impl_one!(
    i8 => 1, i16 => 1, i32 => 1, i64 => 1, i128 => 1, isize => 1,
    u8 => 1, u16 => 1, u32 => 1, u64 => 1, u128 => 1, usize => 1,
    f32 => 1.0, f64 => 1.0,
);

impl<T: Mul<Output = T>> Semigroup for Product<T> {
    fn combine(self, other: Self) -> Self {
        Product(self.0 * other.0)
    }
}

impl<T: Mul<Output = T> + One> Monoid for Product<T> {
    fn empty() -> Self {
        Product(T::one())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn tuple_empty_is_component_wise() {
        let empty: (Vec<u8>, String, Sum<i32>) = Monoid::empty();
        assert_eq!(empty, (vec![], String::new(), Sum(0)));
    }

    #[test]
    fn option_empty_is_none() {
        let empty: Option<Vec<i32>> = Monoid::empty();
        assert_eq!(empty, None);
    }

    proptest! {
        #[test]
        fn vec_identity(v: Vec<i32>) {
            prop_assert_eq!(v.clone().combine(Vec::empty()), v.clone());
            prop_assert_eq!(Vec::empty().combine(v.clone()), v);
        }

        #[test]
        fn string_identity(s: String) {
            prop_assert_eq!(s.clone().combine(String::empty()), s.clone());
            prop_assert_eq!(String::empty().combine(s.clone()), s);
        }

        #[test]
        fn sum_identity(n in -10_000i64..10_000) {
            prop_assert_eq!(Sum(n).combine(Sum::empty()), Sum(n));
            prop_assert_eq!(Sum::empty().combine(Sum(n)), Sum(n));
        }

        #[test]
        fn product_identity(n in -10_000i64..10_000) {
            prop_assert_eq!(Product(n).combine(Product::empty()), Product(n));
            prop_assert_eq!(Product::empty().combine(Product(n)), Product(n));
        }
    }
}
