use crate::{Error, Scalar, Segment, Vector};

/// The axis-aligned rectangle enclosing a set of points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox<T> {
    x_min: T,
    x_max: T,
    y_min: T,
    y_max: T,
}

impl<T> BoundingBox<T>
where
    T: Scalar,
{
    /// Returns the bounding box of the given points, or [`Error::EmptyInput`] if there are none.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Vector<T>>) -> Result<Self, Error>
    where
        T: 'a,
    {
        let mut points = points.into_iter();
        let first = points.next().ok_or(Error::EmptyInput)?;

        Ok(points.fold(
            Self {
                x_min: first.x,
                x_max: first.x,
                y_min: first.y,
                y_max: first.y,
            },
            |bbox, point| bbox.extended(point),
        ))
    }

    /// Returns the bounding box of both endpoints of the given segments, or
    /// [`Error::EmptyInput`] if there are none.
    pub fn from_segments<'a>(
        segments: impl IntoIterator<Item = &'a Segment<T>>,
    ) -> Result<Self, Error>
    where
        T: 'a,
    {
        Self::from_points(
            segments
                .into_iter()
                .flat_map(|segment| [&segment.a, &segment.b]),
        )
    }

    fn extended(self, point: &Vector<T>) -> Self {
        Self {
            x_min: if point.x < self.x_min { point.x } else { self.x_min },
            x_max: if point.x > self.x_max { point.x } else { self.x_max },
            y_min: if point.y < self.y_min { point.y } else { self.y_min },
            y_max: if point.y > self.y_max { point.y } else { self.y_max },
        }
    }

    /// Returns true if, and only if, the given point lies inside the box or on its border.
    pub fn contains(&self, point: &Vector<T>) -> bool {
        self.x_min <= point.x && point.x <= self.x_max && self.y_min <= point.y && point.y <= self.y_max
    }

    /// Returns the horizontal extent of the box.
    pub fn width(&self) -> T {
        self.x_max - self.x_min
    }

    /// Returns the vertical extent of the box.
    pub fn height(&self) -> T {
        self.y_max - self.y_min
    }
}

impl<T> BoundingBox<T>
where
    T: Copy,
{
    /// Returns the smallest horizontal coordinate in the box.
    pub fn x_min(&self) -> T {
        self.x_min
    }

    /// Returns the largest horizontal coordinate in the box.
    pub fn x_max(&self) -> T {
        self.x_max
    }

    /// Returns the smallest vertical coordinate in the box.
    pub fn y_min(&self) -> T {
        self.y_min
    }

    /// Returns the largest vertical coordinate in the box.
    pub fn y_max(&self) -> T {
        self.y_max
    }
}

#[cfg(test)]
mod tests {
    use crate::{BoundingBox, Error, Segment, Vector, vector};

    #[test]
    fn bounding_box_of_points() {
        let points: Vec<Vector<i32>> = vec![vector!(3, -1), vector!(-2, 4), vector!(5, 2)];
        let bbox = BoundingBox::from_points(&points).unwrap();

        assert_eq!(bbox.x_min(), -2);
        assert_eq!(bbox.x_max(), 5);
        assert_eq!(bbox.y_min(), -1);
        assert_eq!(bbox.y_max(), 4);
        assert_eq!(bbox.width(), 7);
        assert_eq!(bbox.height(), 5);
    }

    #[test]
    fn bounding_box_of_segments_includes_both_endpoints() {
        let segments = vec![Segment::new(vector!(0, 0), vector!(10, 20))];
        let bbox = BoundingBox::from_segments(&segments).unwrap();

        assert!(bbox.contains(&vector!(10, 20)));
        assert!(bbox.contains(&vector!(5, 5)));
        assert!(!bbox.contains(&vector!(11, 5)));
    }

    #[test]
    fn bounding_box_of_nothing() {
        let points: Vec<Vector<i32>> = Vec::new();
        assert_eq!(BoundingBox::from_points(&points), Err(Error::EmptyInput));

        let segments: Vec<Segment<i32>> = Vec::new();
        assert_eq!(BoundingBox::from_segments(&segments), Err(Error::EmptyInput));
    }
}
