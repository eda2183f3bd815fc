use crate::{Scalar, Segment, Vector, area, determinant::Determinant};

/// How the supporting lines of two segments relate to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// The lines meet at a single point.
    Crossing,
    /// The lines never meet.
    Parallel,
    /// The lines are the same line.
    Collinear,
}

/// The relation between two segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Intersection {
    /// Whether the segments share at least one point.
    pub intersects: bool,
    /// How the supporting lines of the segments relate.
    pub placement: Placement,
}

/// Returns how the segment `ab` relates to the segment `cd`.
///
/// Endpoints count as part of the segments: two segments sharing a vertex intersect. Swapping
/// the segments never changes the result.
pub fn classify<T>(a: &Vector<T>, b: &Vector<T>, c: &Vector<T>, d: &Vector<T>) -> Intersection
where
    T: Scalar,
{
    let ab = *b - *a;
    let cd = *d - *c;
    let offset = *c - *a;

    if Determinant::from([&ab, &cd]).is_zero() {
        // A zero-length segment is parallel to anything, so its supporting line is taken from
        // the other segment.
        let reference = if is_null(&cd) { ab } else { cd };
        if !area(&reference, &offset).is_zero() {
            return Intersection {
                intersects: false,
                placement: Placement::Parallel,
            };
        }

        return Intersection {
            intersects: overlaps(a.x, b.x, c.x, d.x) && overlaps(a.y, b.y, c.y, d.y),
            placement: Placement::Collinear,
        };
    }

    let denominator = area(&cd, &ab);
    Intersection {
        intersects: within(area(&cd, &offset), denominator, false)
            && within(area(&ab, &offset), denominator, false),
        placement: Placement::Crossing,
    }
}

/// Returns the positions `(t1, t2)` where the supporting lines of `ab` and `cd` meet, such that
/// `a + t1 (b - a) == c + t2 (d - c)`, or [`None`] if the lines are parallel.
pub fn parameters<T>(
    a: &Vector<T>,
    b: &Vector<T>,
    c: &Vector<T>,
    d: &Vector<T>,
) -> Option<(f64, f64)>
where
    T: Scalar,
{
    let ab = *b - *a;
    let cd = *d - *c;
    let offset = *c - *a;

    let denominator = area(&cd, &ab);
    if denominator.is_zero() {
        return None;
    }

    let denominator = denominator.to_f64()?;
    Some((
        area(&cd, &offset).to_f64()? / denominator,
        area(&ab, &offset).to_f64()? / denominator,
    ))
}

/// Returns the point where `ab` and `cd` cross, rounded to the coordinate type, if they do.
pub fn crossing_point<T>(
    a: &Vector<T>,
    b: &Vector<T>,
    c: &Vector<T>,
    d: &Vector<T>,
) -> Option<Vector<T>>
where
    T: Scalar,
{
    let Intersection {
        intersects: true,
        placement: Placement::Crossing,
    } = classify(a, b, c, d)
    else {
        return None;
    };

    let (t, _) = parameters(a, b, c, d)?;
    lerp(a, b, t)
}

/// Returns the positions `(t1, t2)` where `ab` and `cd` cross if, and only if, both fall strictly
/// inside their segment.
pub(crate) fn proper_crossing<T>(
    a: &Vector<T>,
    b: &Vector<T>,
    c: &Vector<T>,
    d: &Vector<T>,
) -> Option<(f64, f64)>
where
    T: Scalar,
{
    let ab = *b - *a;
    let cd = *d - *c;
    let offset = *c - *a;

    let denominator = area(&cd, &ab);
    if denominator.is_zero()
        || !within(area(&cd, &offset), denominator, true)
        || !within(area(&ab, &offset), denominator, true)
    {
        return None;
    }

    parameters(a, b, c, d)
}

/// Returns the point at the given position of the segment `ab`, rounded to the coordinate type.
pub(crate) fn lerp<T>(a: &Vector<T>, b: &Vector<T>, t: f64) -> Option<Vector<T>>
where
    T: Scalar,
{
    let x = a.x.to_f64()? + t * (b.x - a.x).to_f64()?;
    let y = a.y.to_f64()? + t * (b.y - a.y).to_f64()?;

    Some(Vector {
        x: T::from_real(x)?,
        y: T::from_real(y)?,
        z: T::zero(),
    })
}

impl<T> Segment<T>
where
    T: Scalar,
{
    /// Returns how self relates to rhs.
    pub fn intersection(&self, rhs: &Segment<T>) -> Intersection {
        classify(&self.a, &self.b, &rhs.a, &rhs.b)
    }
}

/// Predicts whether the division `numerator / denominator` falls in the range `[0, 1]`, or
/// `(0, 1)` when strict, without dividing.
fn within<T>(numerator: T, denominator: T, strict: bool) -> bool
where
    T: Scalar,
{
    let (numerator, denominator) = if denominator.is_negative() {
        (-numerator, -denominator)
    } else {
        (numerator, denominator)
    };

    if strict {
        numerator.is_positive() && numerator < denominator
    } else {
        !numerator.is_negative() && numerator <= denominator
    }
}

/// Returns true if, and only if, the intervals `[a, b]` and `[c, d]` share at least one value.
fn overlaps<T>(a: T, b: T, c: T, d: T) -> bool
where
    T: Scalar,
{
    let (a, b) = if a > b { (b, a) } else { (a, b) };
    let (c, d) = if c > d { (d, c) } else { (c, d) };
    let low = if a > c { a } else { c };
    let high = if b < d { b } else { d };

    low <= high
}

fn is_null<T>(vector: &Vector<T>) -> bool
where
    T: Scalar,
{
    vector.x.is_zero() && vector.y.is_zero()
}
