use std::ops::RangeInclusive;

use crate::{BoundingBox, Placement, Scalar, Segment, Surface, Vector, area, classify};

/// The convention deciding which points a self-crossing boundary encloses.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FillRule {
    /// A point is inside if a ray from it crosses the boundary an odd amount of times.
    #[default]
    EvenOdd,
    /// A point is inside if the boundary winds around it a nonzero amount of times.
    NonZero,
}

/// Where a point lies relative to a closed boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Location {
    /// The point is out of the bounding box, or there is no boundary at all.
    Outside,
    /// The point lies on one of the segments.
    Boundary,
    /// The ray cast from the point crossed the boundary.
    Crossed { count: usize, winding: isize },
}

/// Casts a horizontal ray from the given point towards decreasing `x` and accumulates the
/// crossings with the given segments.
fn locate<T>(segments: &[Segment<T>], point: &Vector<T>) -> Location
where
    T: Scalar,
{
    if segments.len() <= 2 {
        return Location::Outside;
    }

    let Ok(bbox) = BoundingBox::from_segments(segments) else {
        return Location::Outside;
    };

    if !bbox.contains(point) {
        return Location::Outside;
    }

    if segments.iter().any(|segment| segment.contains(point)) {
        return Location::Boundary;
    }

    // Ends just beyond the bounding box, so no segment can contain it.
    let end = Vector {
        x: bbox.x_min() - T::one(),
        y: point.y,
        z: T::zero(),
    };

    let ray = end - *point;
    segments
        .iter()
        .filter(|segment| {
            let intersection = classify(&segment.a, &segment.b, point, &end);

            // Half-open straddling attributes a vertex on the ray to exactly one of its edges
            // and discards edges lying on the ray.
            intersection.intersects
                && intersection.placement == Placement::Crossing
                && (segment.a.y > point.y) != (segment.b.y > point.y)
        })
        .fold(
            Location::Crossed {
                count: 0,
                winding: 0,
            },
            |location, segment| match location {
                Location::Crossed { count, winding } => Location::Crossed {
                    count: count + 1,
                    winding: if area(&segment.vec(), &ray).is_positive() {
                        winding + 1
                    } else {
                        winding - 1
                    },
                },
                other => other,
            },
        )
}

/// Returns true if, and only if, the given point is inside the boundary formed by the given
/// segments under the even-odd rule.
///
/// Points on the boundary are inside. Less than three segments enclose nothing.
pub fn even_odd<T>(segments: &[Segment<T>], point: &Vector<T>) -> bool
where
    T: Scalar,
{
    match locate(segments, point) {
        Location::Outside => false,
        Location::Boundary => true,
        Location::Crossed { count, .. } => count % 2 == 1,
    }
}

/// Returns true if, and only if, the given point is inside the boundary formed by the given
/// segments under the nonzero-winding rule.
///
/// Points on the boundary are inside. Less than three segments enclose nothing.
pub fn nonzero_winding<T>(segments: &[Segment<T>], point: &Vector<T>) -> bool
where
    T: Scalar,
{
    match locate(segments, point) {
        Location::Outside => false,
        Location::Boundary => true,
        Location::Crossed { winding, .. } => winding != 0,
    }
}

/// Returns the amount of times the boundary formed by the given segments winds around the
/// given point, or [`None`] if the point lies on the boundary.
pub fn winding_number<T>(segments: &[Segment<T>], point: &Vector<T>) -> Option<isize>
where
    T: Scalar,
{
    match locate(segments, point) {
        Location::Outside => Some(0),
        Location::Boundary => None,
        Location::Crossed { winding, .. } => Some(winding),
    }
}

/// Returns true if, and only if, the given point is inside the boundary formed by the given
/// segments under the given rule.
pub fn contains<T>(segments: &[Segment<T>], point: &Vector<T>, rule: FillRule) -> bool
where
    T: Scalar,
{
    match rule {
        FillRule::EvenOdd => even_odd(segments, point),
        FillRule::NonZero => nonzero_winding(segments, point),
    }
}

/// Returns every integer coordinate inside the bounding box of the given segments that is
/// enclosed by them under the given rule, column by column.
pub(crate) fn covered_pixels<T>(segments: &[Segment<T>], rule: FillRule) -> Vec<(i64, i64)>
where
    T: Scalar,
{
    if segments.len() <= 2 {
        return Vec::new();
    }

    let Ok(bbox) = BoundingBox::from_segments(segments) else {
        return Vec::new();
    };

    let (Some(columns), Some(rows)) = (
        pixel_range(bbox.x_min(), bbox.x_max()),
        pixel_range(bbox.y_min(), bbox.y_max()),
    ) else {
        log::warn!("bounding box {bbox:?} does not fit in pixel coordinates");
        return Vec::new();
    };

    log::trace!("scanning columns {columns:?} and rows {rows:?}");

    scan(columns, |x| {
        rows.clone()
            .filter(|&y| {
                let (Some(px), Some(py)) = (T::from_real(x as f64), T::from_real(y as f64)) else {
                    return false;
                };

                contains(segments, &Vector { x: px, y: py, z: T::zero() }, rule)
            })
            .map(|y| (x, y))
            .collect::<Vec<_>>()
    })
}

/// Paints every integer coordinate enclosed by the given segments under the given rule.
pub(crate) fn fill<T, S>(segments: &[Segment<T>], surface: &mut S, rule: FillRule, color: &S::Color)
where
    T: Scalar,
    S: Surface,
{
    let pixels = covered_pixels(segments, rule);
    log::trace!("filling {} pixels with the {rule:?} rule", pixels.len());

    for (x, y) in pixels {
        surface.set_pixel(x, y, color);
    }
}

fn pixel_range<T>(min: T, max: T) -> Option<RangeInclusive<i64>>
where
    T: Scalar,
{
    let min = num_traits::cast::<f64, i64>(min.to_f64()?.ceil())?;
    let max = num_traits::cast::<f64, i64>(max.to_f64()?.floor())?;
    Some(min..=max)
}

#[cfg(feature = "parallel")]
fn scan<F>(columns: RangeInclusive<i64>, column: F) -> Vec<(i64, i64)>
where
    F: Fn(i64) -> Vec<(i64, i64)> + Send + Sync,
{
    use rayon::prelude::*;

    columns.into_par_iter().flat_map_iter(column).collect()
}

#[cfg(not(feature = "parallel"))]
fn scan<F>(columns: RangeInclusive<i64>, column: F) -> Vec<(i64, i64)>
where
    F: Fn(i64) -> Vec<(i64, i64)>,
{
    columns.flat_map(column).collect()
}
