use std::{
    fmt::Display,
    ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign},
};

use num_traits::{Num, ToPrimitive};

/// A point or direction in the plain.
///
/// The `z` coordinate is carried along by every arithmetic operation but ignored by the planar
/// algorithms.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vector<T> {
    /// The horizontal coordinate.
    pub x: T,
    /// The vertical coordinate.
    pub y: T,
    /// The depth coordinate.
    pub z: T,
}

impl<T> From<[T; 2]> for Vector<T>
where
    T: Num,
{
    fn from([x, y]: [T; 2]) -> Self {
        Self { x, y, z: T::zero() }
    }
}

impl<T> From<[T; 3]> for Vector<T> {
    fn from([x, y, z]: [T; 3]) -> Self {
        Self { x, y, z }
    }
}

impl<T> Display for Vector<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.z)
    }
}

impl<T> Add for Vector<T>
where
    T: Add<Output = T>,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl<T> AddAssign for Vector<T>
where
    T: AddAssign,
{
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl<T> Sub for Vector<T>
where
    T: Sub<Output = T>,
{
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl<T> SubAssign for Vector<T>
where
    T: SubAssign,
{
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl<T> Neg for Vector<T>
where
    T: Neg<Output = T>,
{
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl<T> Mul<T> for Vector<T>
where
    T: Mul<Output = T> + Copy,
{
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}

impl<T> Div<T> for Vector<T>
where
    T: Div<Output = T> + Copy,
{
    type Output = Self;

    fn div(self, rhs: T) -> Self::Output {
        Self {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
        }
    }
}

impl<T> Vector<T>
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<Output = T>,
{
    /// Returns the dot product of self and rhs.
    pub fn dot(&self, rhs: &Self) -> T {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// Returns the cross product of self and rhs.
    pub fn cross(&self, rhs: &Self) -> Self {
        Self {
            x: self.y * rhs.z - self.z * rhs.y,
            y: self.z * rhs.x - self.x * rhs.z,
            z: self.x * rhs.y - self.y * rhs.x,
        }
    }

    /// Returns the squared length of self.
    pub fn length_squared(&self) -> T {
        self.dot(self)
    }
}

impl<T> Vector<T>
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<Output = T> + ToPrimitive,
{
    /// Returns the length of self, or NaN if it does not fit in a `f64`.
    pub fn length(&self) -> f64 {
        self.length_squared().to_f64().unwrap_or(f64::NAN).sqrt()
    }

    /// Returns the distance between self and rhs.
    pub fn distance(&self, rhs: &Self) -> f64 {
        (*rhs - *self).length()
    }
}

/// Returns the signed magnitude of the cross product of u and v in the plain.
///
/// The result is positive when turning from u to v is counter-clockwise.
pub fn area<T>(u: &Vector<T>, v: &Vector<T>) -> T
where
    T: Copy + Sub<Output = T> + Mul<Output = T>,
{
    u.x * v.y - u.y * v.x
}

/// A constructor macro for the planar [`Vector`].
#[macro_export]
macro_rules! vector {
    ($x:expr, $y:expr) => {
        $crate::Vector::from([$x, $y])
    };
    ($x:expr, $y:expr, $z:expr) => {
        $crate::Vector {
            x: $x,
            y: $y,
            z: $z,
        }
    };
}
