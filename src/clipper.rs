use crate::{Placement, Polygon, Scalar, Segment, intersection::lerp, parameters};

/// The range of positions along a line that remains inside every half-plane seen so far.
#[derive(Debug, Clone, Copy)]
struct Window {
    enter: f64,
    exit: f64,
}

impl Default for Window {
    fn default() -> Self {
        Self {
            enter: 0.,
            exit: 1.,
        }
    }
}

impl Window {
    /// Narrows the window by the half-plane bounded by the given edge, whose normal is expected
    /// to point inwards. Returns [`None`] if the line lies out of the half-plane.
    fn narrowed<T>(self, line: &Segment<T>, edge: &Segment<T>) -> Option<Self>
    where
        T: Scalar,
    {
        match line.intersection(edge).placement {
            Placement::Collinear => Some(self),
            Placement::Parallel => (!(line.a - edge.a).dot(&edge.n).is_negative()).then_some(self),
            Placement::Crossing => {
                let Some((t, _)) = parameters(&line.a, &line.b, &edge.a, &edge.b) else {
                    return Some(self);
                };

                let heading = line.vec().dot(&edge.n);
                if heading.is_positive() {
                    Some(Self {
                        enter: self.enter.max(t),
                        ..self
                    })
                } else if heading.is_negative() {
                    Some(Self {
                        exit: self.exit.min(t),
                        ..self
                    })
                } else {
                    Some(self)
                }
            }
        }
    }

    fn is_empty(&self) -> bool {
        self.enter > self.exit
    }
}

impl<T> Polygon<T>
where
    T: Scalar,
{
    /// Returns the portion of the given line inside the polygon, or the zero-length segment at
    /// the start of the line if none.
    ///
    /// The polygon must be convex, which is never checked: clipping against a concave polygon
    /// yields an arbitrary sub-segment of the line.
    pub fn clip(&self, line: &Segment<T>) -> Segment<T> {
        let outside = Segment::new(line.a, line.a);

        let window = self
            .segments()
            .iter()
            .try_fold(Window::default(), |window, edge| window.narrowed(line, edge));

        let Some(window) = window.filter(|window| !window.is_empty()) else {
            return outside;
        };

        match (
            lerp(&line.a, &line.b, window.enter),
            lerp(&line.a, &line.b, window.exit),
        ) {
            (Some(a), Some(b)) => Segment::new(a, b),
            _ => outside,
        }
    }
}
