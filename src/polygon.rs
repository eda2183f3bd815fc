use num_traits::NumCast;

use crate::{
    BoundingBox, Error, FillRule, Scalar, Segment, Surface, Vector, determinant::Determinant, fill,
};

/// A closed loop of segments in the plain.
///
/// The loop is always oriented clockwise and the normal of every segment points towards the
/// centroid of the polygon. Both invariants are re-established by every operation mutating
/// the polygon. Self-crossing loops are allowed.
#[derive(Debug, Clone)]
pub struct Polygon<T> {
    segments: Vec<Segment<T>>,
}

impl<T> Default for Polygon<T> {
    fn default() -> Self {
        Self {
            segments: Vec::new(),
        }
    }
}

impl<T, P> From<Vec<P>> for Polygon<T>
where
    T: Scalar,
    P: Into<Vector<T>>,
{
    fn from(vertices: Vec<P>) -> Self {
        Self::new(vertices.into_iter().map(Into::into).collect())
    }
}

impl<T> PartialEq for Polygon<T>
where
    T: PartialEq + Copy,
{
    /// Two polygons are equal if, and only if, they have the same vertices describing the same
    /// boundary.
    fn eq(&self, other: &Self) -> bool {
        let len = self.segments.len();
        if len != other.segments.len() {
            return false;
        }

        let vertices = self.vertices().collect::<Vec<_>>();
        let mut double = other.vertices().collect::<Vec<_>>();
        double.extend_from_within(..);

        (0..len.max(1)).any(|padding| double[padding..padding + len] == vertices)
    }
}

impl<T> Polygon<T>
where
    T: Scalar,
{
    /// Returns the polygon enclosed by the given vertices, in order.
    pub fn new(vertices: Vec<Vector<T>>) -> Self {
        let segments = vertices
            .iter()
            .zip(vertices.iter().cycle().skip(1))
            .map(|(&a, &b)| Segment::new(a, b))
            .collect();

        Self::normalized(segments)
    }

    /// Returns the polygon formed by the given segments, in order.
    ///
    /// The normals of the given segments are discarded and derived again.
    pub fn from_segments(segments: Vec<Segment<T>>) -> Self {
        Self::normalized(segments)
    }

    fn normalized(mut segments: Vec<Segment<T>>) -> Self {
        if let [first, second, ..] = segments.as_slice()
            && Determinant::new(first, second).is_positive()
        {
            segments.reverse();
            segments.iter_mut().for_each(|segment| *segment = segment.reversed());
        }

        let mut polygon = Self {
            segments: segments
                .into_iter()
                .map(|segment| Segment::new(segment.a, segment.b))
                .collect(),
        };

        polygon.fix_normals();
        polygon
    }

    /// Turns the normal of every segment towards the centroid of the polygon.
    fn fix_normals(&mut self) {
        let Some(count) = <T as NumCast>::from(self.segments.len()) else {
            return;
        };

        let two = T::one() + T::one();
        // Twice the sum of all vertices equals the centroid scaled by 2 * count, which keeps
        // the comparison exact for integer coordinates.
        let doubled = self.sum() * two;
        for segment in self.segments.iter_mut() {
            let toward = doubled - (segment.a + segment.b) * count;
            if segment.n.dot(&toward).is_negative() {
                segment.n = -segment.n;
            }
        }
    }

    fn sum(&self) -> Vector<T> {
        self.segments
            .iter()
            .fold(Vector::from([T::zero(), T::zero()]), |sum, segment| sum + segment.a)
    }

    /// Returns the average of all the vertices, rounded to the coordinate type.
    pub fn centroid(&self) -> Option<Vector<T>> {
        let (x, y) = self.real_centroid()?;
        Some(Vector::from([T::from_real(x)?, T::from_real(y)?]))
    }

    fn real_centroid(&self) -> Option<(f64, f64)> {
        if self.segments.is_empty() {
            return None;
        }

        let sum = self.sum();
        let count = self.segments.len() as f64;
        Some((sum.x.to_f64()? / count, sum.y.to_f64()? / count))
    }

    /// Moves every vertex by the given offset.
    pub fn translate(&mut self, shift: Vector<T>) {
        let segments = self
            .segments
            .iter()
            .map(|segment| Segment::new(segment.a + shift, segment.b + shift))
            .collect();

        *self = Self::normalized(segments);
    }

    /// Scales the polygon by the given factor around its centroid.
    pub fn scale(&mut self, factor: f64) {
        let Some((cx, cy)) = self.real_centroid() else {
            return;
        };

        self.remap(|x, y| (cx + (x - cx) * factor, cy + (y - cy) * factor));
    }

    /// Rotates the polygon counter-clockwise by the given angle, in radians, around the given
    /// center.
    pub fn rotate(&mut self, center: Vector<T>, angle: f64) {
        let (Some(cx), Some(cy)) = (center.x.to_f64(), center.y.to_f64()) else {
            return;
        };

        let (sin, cos) = angle.sin_cos();
        self.remap(|x, y| {
            let (dx, dy) = (x - cx, y - cy);
            (cx + dx * cos - dy * sin, cy + dx * sin + dy * cos)
        });
    }

    /// Replaces every vertex by the image of the given mapping, leaving the polygon untouched
    /// if any image cannot be represented.
    fn remap<F>(&mut self, mapping: F)
    where
        F: Fn(f64, f64) -> (f64, f64),
    {
        let map = |point: &Vector<T>| -> Option<Vector<T>> {
            let (x, y) = mapping(point.x.to_f64()?, point.y.to_f64()?);
            Some(Vector::from([T::from_real(x)?, T::from_real(y)?]))
        };

        let segments = self
            .segments
            .iter()
            .map(|segment| Some(Segment::new(map(&segment.a)?, map(&segment.b)?)))
            .collect::<Option<Vec<_>>>();

        match segments {
            Some(segments) => *self = Self::normalized(segments),
            None => log::warn!("transformed polygon does not fit in the coordinate type"),
        }
    }

    /// Returns true if, and only if, the polygon is simple and every turn along the boundary
    /// goes in the same direction.
    pub fn is_convex(&self) -> bool {
        if !self.is_simple() {
            return false;
        }

        let turns = self
            .segments
            .iter()
            .zip(self.segments.iter().cycle().skip(1))
            .map(|(current, next)| Determinant::new(current, next));

        let mut sign = None;
        for turn in turns {
            if turn.is_zero() {
                return false;
            }

            let positive = turn.is_positive();
            if *sign.get_or_insert(positive) != positive {
                return false;
            }
        }

        true
    }

    /// Returns true if, and only if, no two non-adjacent segments touch each other.
    pub fn is_simple(&self) -> bool {
        let total = self.segments.len();
        if total <= 2 {
            return false;
        }

        (0..total).all(|i| {
            (i + 2..total)
                // The first and the last segments are adjacent.
                .filter(|&j| i != 0 || j != total - 1)
                .all(|j| !self.segments[i].intersection(&self.segments[j]).intersects)
        })
    }

    /// Returns the bounding box of the polygon.
    pub fn bounding_box(&self) -> Result<BoundingBox<T>, Error> {
        BoundingBox::from_segments(&self.segments)
    }

    /// Returns true if, and only if, the given point is inside the polygon under the given rule.
    pub fn contains(&self, point: &Vector<T>, rule: FillRule) -> bool {
        fill::contains(&self.segments, point, rule)
    }

    /// Returns true if, and only if, the given point is inside the polygon under the even-odd
    /// rule.
    pub fn even_odd(&self, point: &Vector<T>) -> bool {
        fill::even_odd(&self.segments, point)
    }

    /// Returns true if, and only if, the given point is inside the polygon under the
    /// nonzero-winding rule.
    pub fn nonzero_winding(&self, point: &Vector<T>) -> bool {
        fill::nonzero_winding(&self.segments, point)
    }

    /// Paints every integer coordinate inside the polygon under the given rule.
    ///
    /// Every pixel of the bounding box is tested against every segment: this is meant to be
    /// obviously correct rather than fast.
    pub fn fill<S>(&self, surface: &mut S, rule: FillRule, color: &S::Color)
    where
        S: Surface,
    {
        fill::fill(&self.segments, surface, rule, color);
    }

    /// Draws every segment of the polygon.
    pub fn draw_bounds<S>(&self, surface: &mut S, color: &S::Color)
    where
        S: Surface,
    {
        for segment in &self.segments {
            segment.draw(surface, color);
        }
    }
}

impl<T> Polygon<T> {
    /// Returns the ordered list of segments of the polygon.
    pub fn segments(&self) -> &[Segment<T>] {
        &self.segments
    }

    /// Returns an ordered iterator over the starting vertex of every segment.
    pub fn vertices(&self) -> impl Iterator<Item = Vector<T>> + '_
    where
        T: Copy,
    {
        self.segments.iter().map(|segment| segment.a)
    }

    /// Returns the amount of segments in the polygon.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
