use std::iter;

use super::*;

impl iter::Sum for SpatialVector {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = Self>,
    {
        iter.fold(Self::default(), |a, b| a + b)
    }
}

impl<'a> iter::Sum<&'a Self> for SpatialVector {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = &'a Self>,
    {
        iter.fold(Self::default(), |a, b| a + *b)
    }
}
