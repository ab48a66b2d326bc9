use std::mem::transmute_copy;
use std::{iter::FusedIterator, ops::RangeInclusive};

/// Trait for types that can be represented by a contiguous range of `i8`.
///
/// # Safety
///
/// Must only be implemented for `#[repr(i8)]` types that can be safely transmuted to and from `i8`
/// within the range `(Integer::MIN..=Integer::MAX)`.
pub unsafe trait Integer: Copy {
    /// The minimum repr.
    const MIN: i8;

    /// The maximum repr.
    const MAX: i8;

    /// Casts from `i8`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range `(Self::MIN..=Self::MAX)`.
    #[inline(always)]
    #[track_caller]
    fn new(i: i8) -> Self {
        match Self::try_new(i) {
            Some(v) => v,
            None => panic!("`{i}` is out of range `({}..={})`", Self::MIN, Self::MAX),
        }
    }

    /// Casts from `i8`, or returns `None` if out of range.
    #[inline(always)]
    fn try_new(i: i8) -> Option<Self> {
        if Self::in_range(i) {
            Some(unsafe { transmute_copy(&i) })
        } else {
            None
        }
    }

    /// Casts to `i8`.
    #[inline(always)]
    fn get(self) -> i8 {
        unsafe { transmute_copy(&self) }
    }

    /// Whether a value is in the range `(Self::MIN..=Self::MAX)`.
    #[inline(always)]
    fn in_range(i: i8) -> bool {
        (Self::MIN..=Self::MAX).contains(&i)
    }

    /// An iterator over all values in the range `(Self::MIN..=Self::MAX)`.
    #[inline(always)]
    fn iter() -> Iter<Self> {
        Iter((Self::MIN..=Self::MAX).map(Self::new as fn(i8) -> Self))
    }
}

/// An iterator over all values of an [`Integer`], in order.
#[derive(Debug, Clone)]
pub struct Iter<T>(std::iter::Map<RangeInclusive<i8>, fn(i8) -> T>);

impl<T> Iterator for Iter<T> {
    type Item = T;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<T> {
    #[inline(always)]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<T> {}

impl<T> FusedIterator for Iter<T> {}
