mod bounding_box;
mod clipper;
mod determinant;
mod error;
mod fill;
mod intersection;
mod polygon;
mod retrace;
mod segment;
mod surface;
mod vector;

use std::fmt::Debug;

use num_traits::{NumCast, Signed};

pub use self::bounding_box::BoundingBox;
pub use self::error::Error;
pub use self::fill::{FillRule, contains, even_odd, nonzero_winding, winding_number};
pub use self::intersection::{Intersection, Placement, classify, crossing_point, parameters};
pub use self::polygon::Polygon;
pub use self::segment::Segment;
pub use self::surface::Surface;
pub use self::vector::{Vector, area};

/// A numeric type coordinates can be expressed in.
///
/// Signed areas are always evaluated in the scalar type itself, so integer coordinates keep
/// every orientation decision exact. Only parameters along a segment are computed as `f64`.
pub trait Scalar: Copy + PartialOrd + Signed + NumCast + Debug + Send + Sync {
    /// Returns the value of this type closest to the given real number, if representable.
    fn from_real(value: f64) -> Option<Self>;
}

macro_rules! integer_scalar {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                fn from_real(value: f64) -> Option<Self> {
                    NumCast::from(value.round())
                }
            }
        )*
    };
}

macro_rules! float_scalar {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                fn from_real(value: f64) -> Option<Self> {
                    NumCast::from(value)
                }
            }
        )*
    };
}

integer_scalar!(i16, i32, i64, i128, isize);
float_scalar!(f32, f64);

/// Returns the pixel coordinate closest to the given scalar, if representable.
pub(crate) fn pixel<T>(value: T) -> Option<i64>
where
    T: Scalar,
{
    NumCast::from(value.to_f64()?.round())
}
