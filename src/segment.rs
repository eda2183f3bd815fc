use crate::{Scalar, Surface, Vector, area, pixel};

/// The straight line between two endpoints.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Segment<T> {
    /// The first point in the segment.
    pub a: Vector<T>,
    /// The last point in the segment.
    pub b: Vector<T>,
    /// The normal of the segment.
    ///
    /// A lone segment gets the direction rotated clockwise by 90 degrees. Only a
    /// [`Polygon`](crate::Polygon) guarantees it points inwards.
    pub n: Vector<T>,
}

impl<T> From<(Vector<T>, Vector<T>)> for Segment<T>
where
    T: Scalar,
{
    fn from((a, b): (Vector<T>, Vector<T>)) -> Self {
        Self::new(a, b)
    }
}

impl<T> Segment<T>
where
    T: Scalar,
{
    /// Returns the segment from a to b.
    pub fn new(a: Vector<T>, b: Vector<T>) -> Self {
        let direction = b - a;

        Self {
            a,
            b,
            n: Vector {
                x: direction.y,
                y: -direction.x,
                z: T::zero(),
            },
        }
    }

    /// Returns the direction vector from a to b.
    pub fn vec(&self) -> Vector<T> {
        self.b - self.a
    }

    /// Returns true if, and only if, both endpoints are the same point.
    pub fn is_degenerate(&self) -> bool {
        self.a.x == self.b.x && self.a.y == self.b.y
    }

    /// Returns true if, and only if, the given point lies on the segment, endpoints included.
    pub fn contains(&self, v: &Vector<T>) -> bool {
        area(&(self.b - *v), &(self.a - *v)).is_zero() && !(self.a - *v).dot(&(self.b - *v)).is_positive()
    }

    /// Returns true if, and only if, the projection of the given point onto the segment falls
    /// strictly between both endpoints.
    pub fn is_interior(&self, v: &Vector<T>) -> bool {
        (self.a - *v).dot(&(self.b - *v)).is_negative()
    }

    /// Returns the middle point of the segment, rounded to the coordinate type.
    pub fn midpoint(&self) -> Option<Vector<T>> {
        let two = T::one() + T::one();
        let x = (self.a.x + self.b.x).to_f64()? / two.to_f64()?;
        let y = (self.a.y + self.b.y).to_f64()? / two.to_f64()?;

        Some(Vector {
            x: T::from_real(x)?,
            y: T::from_real(y)?,
            z: T::zero(),
        })
    }

    /// Returns the same segment travelled the other way around.
    pub fn reversed(&self) -> Self {
        Self {
            a: self.b,
            b: self.a,
            n: self.n,
        }
    }

    /// Draws the segment onto the given surface.
    pub fn draw<S>(&self, surface: &mut S, color: &S::Color)
    where
        S: Surface,
    {
        let (Some(ax), Some(ay), Some(bx), Some(by)) =
            (pixel(self.a.x), pixel(self.a.y), pixel(self.b.x), pixel(self.b.y))
        else {
            log::warn!("segment {self:?} does not fit in pixel coordinates");
            return;
        };

        surface.draw_line(Vector::from([ax, ay]), Vector::from([bx, by]), color);
    }
}

#[cfg(test)]
mod tests {
    use crate::{Segment, Vector, vector};

    #[test]
    fn segment_contains_point() {
        struct Test {
            name: &'static str,
            segment: Segment<i32>,
            point: Vector<i32>,
            want: bool,
        }

        vec![
            Test {
                name: "point in the middle",
                segment: Segment::new(vector!(0, 2), vector!(0, 5)),
                point: vector!(0, 3),
                want: true,
            },
            Test {
                name: "endpoint",
                segment: Segment::new(vector!(0, 2), vector!(0, 5)),
                point: vector!(0, 5),
                want: true,
            },
            Test {
                name: "collinear point before the segment",
                segment: Segment::new(vector!(0, 2), vector!(0, 5)),
                point: vector!(0, -2),
                want: false,
            },
            Test {
                name: "collinear point after the segment",
                segment: Segment::new(vector!(0, 2), vector!(0, 5)),
                point: vector!(0, 7),
                want: false,
            },
            Test {
                name: "point off the supporting line",
                segment: Segment::new(vector!(0, 0), vector!(4, 4)),
                point: vector!(2, 3),
                want: false,
            },
        ]
        .into_iter()
        .for_each(|test| {
            let got = test.segment.contains(&test.point);
            assert_eq!(got, test.want, "{}", test.name);
        });
    }

    #[test]
    fn segment_interior() {
        struct Test {
            name: &'static str,
            segment: Segment<i32>,
            point: Vector<i32>,
            want: bool,
        }

        vec![
            Test {
                name: "vertical segment, inside",
                segment: Segment::new(vector!(0, 2), vector!(0, 5)),
                point: vector!(0, 3),
                want: true,
            },
            Test {
                name: "vertical segment, below",
                segment: Segment::new(vector!(0, 2), vector!(0, 5)),
                point: vector!(0, -2),
                want: false,
            },
            Test {
                name: "vertical segment, above",
                segment: Segment::new(vector!(0, 2), vector!(0, 5)),
                point: vector!(0, 7),
                want: false,
            },
            Test {
                name: "horizontal segment, inside",
                segment: Segment::new(vector!(2, 0), vector!(5, 0)),
                point: vector!(3, 0),
                want: true,
            },
            Test {
                name: "horizontal segment, at an endpoint",
                segment: Segment::new(vector!(2, 0), vector!(5, 0)),
                point: vector!(5, 0),
                want: false,
            },
            Test {
                name: "horizontal segment, right",
                segment: Segment::new(vector!(2, 0), vector!(5, 0)),
                point: vector!(7, 0),
                want: false,
            },
        ]
        .into_iter()
        .for_each(|test| {
            let got = test.segment.is_interior(&test.point);
            assert_eq!(got, test.want, "{}", test.name);
        });
    }

    #[test]
    fn segment_normal_is_a_clockwise_rotation() {
        let segment = Segment::new(vector!(0, 0), vector!(0, 4));
        assert_eq!(segment.n, vector!(4, 0));
    }

    #[test]
    fn segment_midpoint() {
        let segment = Segment::new(vector!(0, 0), vector!(4, 7));
        assert_eq!(segment.midpoint(), Some(vector!(2, 4)));

        let segment = Segment::new(vector!(0., 0.), vector!(4., 7.));
        assert_eq!(segment.midpoint(), Some(vector!(2., 3.5)));
    }
}
