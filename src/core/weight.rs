use std::{cmp::Ordering, ops::Add};

mod ordered_float;

pub use ordered_float::OrderedFloat;

use super::error::AddEdgeErrorKind;

/// Numeric type usable as an edge weight and a path distance.
pub trait Weight: PartialOrd + Add<Self, Output = Self> + Clone + Sized {
    type Ord: Ord + From<Self> + Into<Self>;

    fn zero() -> Self;
    fn inf() -> Self;
    fn is_unsigned() -> bool;
    fn is_float() -> bool;

    /// Sum of two weights, or `None` if it is not representable.
    ///
    /// Floats never overflow, a too large sum becomes the infinity.
    fn checked_add(&self, other: &Self) -> Option<Self>;
}

/// Checks that the weight can be stored in a graph.
///
/// Dijkstra's algorithm relies on edges never decreasing the distance, so
/// negative weights are rejected. NaN is rejected too, because it does not
/// compare with anything.
///
/// For integers, [`Weight::inf`] is the maximum value and it is reserved for
/// unreachable nodes, so it cannot be a weight. Float infinity is accepted.
pub fn check_weight<W: Weight>(weight: &W) -> Result<(), AddEdgeErrorKind> {
    if !W::is_unsigned() {
        match weight.partial_cmp(&W::zero()) {
            Some(Ordering::Less) => return Err(AddEdgeErrorKind::NegativeWeight),
            Some(_) => {}
            None => return Err(AddEdgeErrorKind::NotANumber),
        }
    }

    if !W::is_float() && *weight >= W::inf() {
        return Err(AddEdgeErrorKind::Reserved);
    }

    Ok(())
}

/// Pairs a value with a weight and compares by the weight only.
#[derive(Debug, Clone, Copy)]
pub struct Weighted<T, W>(pub T, pub W);

impl<T, W: PartialEq> PartialEq for Weighted<T, W> {
    fn eq(&self, other: &Self) -> bool {
        self.1.eq(&other.1)
    }
}

impl<T, W: Eq> Eq for Weighted<T, W> {}

impl<T, W: PartialOrd> PartialOrd for Weighted<T, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.1.partial_cmp(&other.1)
    }
}

impl<T, W: Ord> Ord for Weighted<T, W> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.1.cmp(&other.1)
    }
}

macro_rules! impl_int_weight {
    ($ty:ty, $is_unsigned:expr) => {
        impl Weight for $ty {
            type Ord = Self;

            fn zero() -> Self {
                0
            }

            fn inf() -> Self {
                <$ty>::MAX
            }

            fn is_unsigned() -> bool {
                $is_unsigned
            }

            fn is_float() -> bool {
                false
            }

            fn checked_add(&self, other: &Self) -> Option<Self> {
                <$ty>::checked_add(*self, *other)
            }
        }
    };
}

impl_int_weight!(i8, false);
impl_int_weight!(i16, false);
impl_int_weight!(i32, false);
impl_int_weight!(i64, false);
impl_int_weight!(u8, true);
impl_int_weight!(u16, true);
impl_int_weight!(u32, true);
impl_int_weight!(u64, true);
impl_int_weight!(isize, false);
impl_int_weight!(usize, true);

macro_rules! impl_float_weight {
    ($ty:ty) => {
        impl Weight for $ty {
            type Ord = OrderedFloat<Self>;

            fn zero() -> Self {
                <$ty>::default()
            }

            fn inf() -> Self {
                <$ty>::INFINITY
            }

            fn is_unsigned() -> bool {
                false
            }

            fn is_float() -> bool {
                true
            }

            fn checked_add(&self, other: &Self) -> Option<Self> {
                Some(*self + *other)
            }
        }
    };
}

impl_float_weight!(f32);
impl_float_weight!(f64);

#[cfg(test)]
mod tests {
    use std::{cmp::Reverse, collections::BinaryHeap};

    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn check_weight_accepts_zero_and_positive() {
        assert_matches!(check_weight(&0.0f64), Ok(()));
        assert_matches!(check_weight(&2.5f64), Ok(()));
        assert_matches!(check_weight(&0i32), Ok(()));
        assert_matches!(check_weight(&(u8::MAX - 1)), Ok(()));
    }

    #[test]
    fn check_weight_rejects_integer_max() {
        assert_matches!(check_weight(&u8::MAX), Err(AddEdgeErrorKind::Reserved));
        assert_matches!(check_weight(&i32::MAX), Err(AddEdgeErrorKind::Reserved));
    }

    #[test]
    fn checked_add_overflow() {
        assert_eq!(Weight::checked_add(&200u8, &55), Some(255));
        assert_eq!(Weight::checked_add(&200u8, &56), None);
        assert_eq!(Weight::checked_add(&f64::MAX, &f64::MAX), Some(f64::INFINITY));
    }

    #[test]
    fn check_weight_rejects_negative() {
        assert_matches!(check_weight(&-0.1f64), Err(AddEdgeErrorKind::NegativeWeight));
        assert_matches!(check_weight(&-3i64), Err(AddEdgeErrorKind::NegativeWeight));
    }

    #[test]
    fn check_weight_rejects_nan() {
        assert_matches!(check_weight(&f32::NAN), Err(AddEdgeErrorKind::NotANumber));
    }

    #[test]
    fn check_weight_accepts_infinity() {
        assert_matches!(check_weight(&f64::INFINITY), Ok(()));
    }

    #[test]
    fn weighted_min_heap_order() {
        let mut heap = BinaryHeap::new();
        for (name, w) in [("b", 2.0), ("c", 3.5), ("a", 0.5)] {
            heap.push(Reverse(Weighted(name, <f64 as Weight>::Ord::from(w))));
        }

        let order = std::iter::from_fn(|| heap.pop().map(|Reverse(Weighted(name, _))| name))
            .collect::<Vec<_>>();

        assert_eq!(order, vec!["a", "b", "c"]);
    }
}
