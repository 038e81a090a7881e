use std::{cmp::Ordering, fmt::Debug, ops::Add};

/// Edge weight and path distance type.
///
/// Distances are represented as `Option<W>` where `None` stands for the
/// infinite distance, so there is no need for a sentinel value in the weight
/// type itself.
///
/// Distances are summed with [`checked_add`](Weight::checked_add). A distance
/// that does not fit into the weight type is considered infinite, so the
/// algorithms never panic on overflow. In particular, a vertex whose shortest
/// distance (or BFS hop count) exceeds the range of `W` is reported with
/// `None` distance.
pub trait Weight: Ord + Add<Self, Output = Self> + Copy + Debug {
    fn zero() -> Self;
    fn one() -> Self;

    /// Returns `None` if the sum overflows.
    fn checked_add(self, rhs: Self) -> Option<Self>;
}

/// Sums two distances where `None` is infinity. The infinity is absorbing and
/// an overflowing sum is infinity as well.
pub fn add_dist<W: Weight>(lhs: Option<W>, rhs: Option<W>) -> Option<W> {
    lhs?.checked_add(rhs?)
}

/// Returns `true` if `new` is strictly shorter than `current`, where `None`
/// is infinity.
pub fn improves<W: Weight>(new: Option<W>, current: Option<W>) -> bool {
    match (new, current) {
        (Some(new), Some(current)) => new < current,
        (Some(_), None) => true,
        (None, _) => false,
    }
}

/// A value ordered only by its weight.
///
/// Used as an entry of priority queues.
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
    ($ty:ty) => {
        impl Weight for $ty {
            fn zero() -> Self {
                0
            }

            fn one() -> Self {
                1
            }

            fn checked_add(self, rhs: Self) -> Option<Self> {
                <$ty>::checked_add(self, rhs)
            }
        }
    };
}

impl_int_weight!(i8);
impl_int_weight!(i16);
impl_int_weight!(i32);
impl_int_weight!(i64);
impl_int_weight!(u8);
impl_int_weight!(u16);
impl_int_weight!(u32);
impl_int_weight!(u64);
impl_int_weight!(isize);
impl_int_weight!(usize);

#[cfg(test)]
mod tests {
    use std::{cmp::Reverse, collections::BinaryHeap};

    use super::*;

    #[test]
    fn infinity_is_absorbing() {
        assert_eq!(add_dist(Some(3), Some(-5)), Some(-2));
        assert_eq!(add_dist::<i32>(None, Some(1)), None);
        assert_eq!(add_dist::<i32>(Some(1), None), None);
    }

    #[test]
    fn overflow_is_infinity() {
        assert_eq!(add_dist(Some(200u8), Some(100)), None);
        assert_eq!(add_dist(Some(200u8), Some(55)), Some(255));
        assert_eq!(add_dist(Some(i8::MIN), Some(-1)), None);
        assert_eq!(Weight::checked_add(i64::MAX, 1), None);
    }

    #[test]
    fn finite_improves_infinite() {
        assert!(improves(Some(i64::MAX), None));
        assert!(improves(Some(1), Some(2)));
        assert!(!improves(Some(2), Some(2)));
        assert!(!improves::<i64>(None, None));
        assert!(!improves(None, Some(0)));
    }

    #[test]
    fn weighted_ordered_by_weight_only() {
        let mut queue = BinaryHeap::new();
        queue.push(Reverse(Weighted("c", 3)));
        queue.push(Reverse(Weighted("a", 1)));
        queue.push(Reverse(Weighted("b", 2)));

        let order = std::iter::from_fn(|| queue.pop().map(|Reverse(Weighted(x, _))| x))
            .collect::<Vec<_>>();
        assert_eq!(order, vec!["a", "b", "c"]);
    }
}
