//! Rebuilds the boundary of a self-crossing polygon so that it never crosses itself.

mod trace;
mod walk;

use crate::{Error, Polygon, Scalar, Segment, even_odd};

use self::{trace::Trace, walk::Walk};

impl<T> Polygon<T>
where
    T: Scalar,
{
    /// Returns a polygon enclosing the same area as self whose boundary never crosses itself.
    ///
    /// The boundary is travelled from its lowest-leftmost vertex, switching to the other pass of
    /// the boundary at every self-crossing. Loops enclosed by the boundary built so far are
    /// dropped; the rest are spliced in where they touch it. Polygons with less than three
    /// edges are returned as they are.
    ///
    /// Crossing points are rounded to the coordinate type, so crossings lying close to each
    /// other may leave a slightly self-crossing boundary, or be reported as
    /// [`Error::CoincidentIntersection`] once they round to the same point.
    pub fn retrace(&self) -> Result<Polygon<T>, Error> {
        if self.len() < 3 {
            return Ok(self.clone());
        }

        let mut trace = Trace::new(self).inspect_err(|error| {
            log::warn!("cannot retrace polygon: {error}");
        })?;

        log::debug!(
            "retracing {} edges through {} points with {} self-crossings",
            self.len(),
            trace.points.len(),
            trace.crossings
        );

        let mut boundary = Walk {
            trace: &mut trace,
            next: 0,
        }
        .collect::<Vec<_>>();

        let mut pruned = 0;
        while let Some(start) = trace.first_pending() {
            let detour = Walk {
                trace: &mut trace,
                next: start,
            }
            .collect::<Vec<_>>();

            let Some(first) = detour.first().copied() else {
                break;
            };

            if encloses(&boundary, &first) {
                log::trace!("dropping loop of {} segments from {:?}", detour.len(), first.a);
                pruned += 1;
                continue;
            }

            match boundary.iter().position(|segment| segment.b == first.a) {
                Some(index) => {
                    boundary.splice(index + 1..index + 1, detour);
                }
                None => {
                    log::warn!("loop starting at {:?} does not touch the boundary", first.a);
                    boundary.extend(detour);
                }
            }
        }

        log::debug!(
            "retraced boundary has {} segments, {pruned} loops dropped",
            boundary.len()
        );

        Ok(Polygon::from_segments(boundary))
    }
}

/// Returns true if, and only if, the midpoint of the given segment is inside the given boundary
/// under the even-odd rule.
///
/// Every coordinate is doubled, so the midpoint is exact for integer coordinates.
fn encloses<T>(boundary: &[Segment<T>], segment: &Segment<T>) -> bool
where
    T: Scalar,
{
    let doubled = boundary
        .iter()
        .map(|segment| Segment::new(segment.a + segment.a, segment.b + segment.b))
        .collect::<Vec<_>>();

    even_odd(&doubled, &(segment.a + segment.b))
}

#[cfg(test)]
mod tests {
    use crate::{Error, FillRule, Polygon, Vector, vector};

    #[test]
    fn retrace_polygon() {
        struct Test {
            name: &'static str,
            polygon: Polygon<i32>,
            want: Result<Polygon<i32>, Error>,
        }

        vec![
            Test {
                name: "simple square",
                polygon: vec![[0, 0], [10, 0], [10, 10], [0, 10]].into(),
                want: Ok(vec![[0, 0], [10, 0], [10, 10], [0, 10]].into()),
            },
            Test {
                name: "bowtie",
                polygon: vec![[20, 20], [280, 280], [20, 280], [280, 20]].into(),
                want: Ok(Polygon::new(vec![
                    vector!(20, 20),
                    vector!(280, 20),
                    vector!(150, 150),
                    vector!(20, 280),
                    vector!(280, 280),
                    vector!(150, 150),
                ])),
            },
            Test {
                name: "five-point star",
                polygon: vec![[150, 200], [450, 350], [100, 350], [400, 200], [250, 450]].into(),
                want: Ok(vec![
                    [100, 350],
                    [210, 350],
                    [250, 450],
                    [310, 350],
                    [450, 350],
                    [342, 296],
                    [400, 200],
                    [275, 263],
                    [150, 200],
                    [192, 304],
                ]
                .into()),
            },
            Test {
                name: "two edges",
                polygon: vec![[0, 0], [10, 0]].into(),
                want: Ok(vec![[0, 0], [10, 0]].into()),
            },
            Test {
                name: "empty polygon",
                polygon: Polygon::default(),
                want: Ok(Polygon::default()),
            },
            Test {
                name: "zero-length edge",
                polygon: vec![[0, 0], [0, 0], [10, 0], [0, 10]].into(),
                want: Err(Error::ZeroLengthEdge { edge: 0 }),
            },
            Test {
                name: "vertex touching a non-adjacent edge",
                polygon: vec![[0, 0], [20, 0], [20, 20], [10, 0], [0, 20]].into(),
                want: Err(Error::CoincidentIntersection {
                    x: 10.,
                    y: 0.,
                    passes: 2,
                }),
            },
        ]
        .into_iter()
        .for_each(|test| {
            let got = test.polygon.retrace();
            assert_eq!(got, test.want, "{}", test.name);
        });
    }

    #[test]
    fn retraced_bowtie_covers_both_lobes() {
        struct Test {
            name: &'static str,
            point: Vector<i32>,
            want: bool,
        }

        let bowtie: Polygon<i32> = vec![[20, 20], [280, 280], [20, 280], [280, 20]].into();
        let retraced = bowtie.retrace().unwrap();

        vec![
            Test {
                name: "lower lobe",
                point: vector!(150, 100),
                want: true,
            },
            Test {
                name: "upper lobe",
                point: vector!(150, 200),
                want: true,
            },
            Test {
                name: "crossing point",
                point: vector!(150, 150),
                want: true,
            },
            Test {
                name: "left gap",
                point: vector!(100, 150),
                want: false,
            },
            Test {
                name: "right gap",
                point: vector!(200, 150),
                want: false,
            },
            Test {
                name: "next to the left border",
                point: vector!(50, 150),
                want: false,
            },
        ]
        .into_iter()
        .for_each(|test| {
            assert_eq!(
                retraced.contains(&test.point, FillRule::EvenOdd),
                test.want,
                "{}",
                test.name
            );
            assert_eq!(
                retraced.contains(&test.point, FillRule::EvenOdd),
                bowtie.contains(&test.point, FillRule::EvenOdd),
                "{} (same as before retracing)",
                test.name
            );
        });
    }

    #[test]
    fn retraced_star_fills_the_center() {
        let star: Polygon<i32> =
            vec![[150, 200], [450, 350], [100, 350], [400, 200], [250, 450]].into();
        let center = vector!(250, 300);

        assert!(!star.contains(&center, FillRule::EvenOdd));
        assert!(star.contains(&center, FillRule::NonZero));

        let retraced = star.retrace().unwrap();
        assert!(retraced.contains(&center, FillRule::EvenOdd));
        assert!(retraced.contains(&center, FillRule::NonZero));
        assert!(retraced.contains(&vector!(150, 340), FillRule::EvenOdd));
        assert!(!retraced.contains(&vector!(250, 230), FillRule::EvenOdd));
    }
}
