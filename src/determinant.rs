use std::ops::{Mul, Sub};

use num_traits::{Signed, Zero};

use crate::{Scalar, Segment, Vector, area};

/// The scalar value representing the determinant of the matrix formed by two direction vectors.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct Determinant<T>(T);

impl<T> From<[&Vector<T>; 2]> for Determinant<T>
where
    T: Copy + Sub<Output = T> + Mul<Output = T>,
{
    fn from([u, v]: [&Vector<T>; 2]) -> Self {
        Self(area(u, v))
    }
}

impl<T> Determinant<T>
where
    T: Scalar,
{
    /// Returns the determinant of the direction vectors of the given [`Segment`]s.
    pub(crate) fn new(a: &Segment<T>, b: &Segment<T>) -> Self {
        Self(area(&a.vec(), &b.vec()))
    }
}

impl<T> Determinant<T>
where
    T: Zero,
{
    /// Returns true if, and only if, both vectors are parallel.
    pub(crate) fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl<T> Determinant<T>
where
    T: Signed,
{
    /// Returns true if, and only if, turning from the first vector to the second is
    /// counter-clockwise.
    pub(crate) fn is_positive(&self) -> bool {
        self.0.is_positive()
    }
}
