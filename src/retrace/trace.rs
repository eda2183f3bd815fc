use std::{
    cmp::Ordering,
    collections::{BTreeMap, btree_map::Entry},
};

use crate::{
    Error, Polygon, Scalar, Vector,
    intersection::{lerp, proper_crossing},
};

/// A point usable as key of an ordered map, compared by its planar coordinates.
#[derive(Debug, Clone, Copy)]
pub(super) struct Key<T>(pub(super) Vector<T>);

impl<T> PartialEq for Key<T>
where
    T: PartialOrd,
{
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Key<T> where T: PartialOrd {}

impl<T> PartialOrd for Key<T>
where
    T: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Key<T>
where
    T: PartialOrd,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .x
            .partial_cmp(&other.0.x)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.0.y.partial_cmp(&other.0.y).unwrap_or(Ordering::Equal))
    }
}

/// A point where an edge crosses another edge of the same boundary.
#[derive(Debug, Clone, Copy)]
struct Crossing<T> {
    /// The position of the crossing along the edge, in the range (0, 1).
    t: f64,
    point: Vector<T>,
}

/// The sequence of points visited while travelling the boundary of a polygon: every vertex
/// followed by the crossings of the edge leaving it, in travel order.
#[derive(Debug)]
pub(super) struct Trace<T> {
    /// The visited points, starting at the lowest-leftmost vertex.
    pub(super) points: Vec<Vector<T>>,
    /// The positions in `points` not yet travelled, grouped by point.
    pub(super) pending: BTreeMap<Key<T>, Vec<usize>>,
    /// Whether the step leaving each position has been travelled already.
    pub(super) used: Vec<bool>,
    /// The amount of self-crossings found along the boundary.
    pub(super) crossings: usize,
}

impl<T> Trace<T>
where
    T: Scalar,
{
    /// Returns the trace of the given polygon.
    ///
    /// Fails if any edge has zero length, if a vertex lies inside an edge not leaving from or
    /// arriving at it, or if the boundary goes through the same point more than twice or twice
    /// through the same vertex.
    pub(super) fn new(polygon: &Polygon<T>) -> Result<Self, Error> {
        let segments = polygon.segments();
        if let Some(edge) = segments.iter().position(|segment| segment.is_degenerate()) {
            return Err(Error::ZeroLengthEdge { edge });
        }

        let total = segments.len();
        for (i, vertex) in segments.iter().map(|segment| segment.a).enumerate() {
            let arriving = (i + total - 1) % total;
            let touching = segments
                .iter()
                .enumerate()
                .filter(|&(j, edge)| {
                    j != i && j != arriving && edge.contains(&vertex) && edge.is_interior(&vertex)
                })
                .count();

            if touching > 0 {
                return Err(coincident(&vertex, touching + 1));
            }
        }

        let mut by_edge: Vec<Vec<Crossing<T>>> = vec![Vec::new(); total];
        let mut crossings = 0;

        for i in 0..total {
            // The first and the last edges are adjacent.
            for j in (i + 2..total).filter(|&j| i != 0 || j != total - 1) {
                let (current, other) = (&segments[i], &segments[j]);
                let Some((t1, t2)) = proper_crossing(&current.a, &current.b, &other.a, &other.b)
                else {
                    continue;
                };

                // The point is rounded once, so both edges agree on where they cross.
                let Some(point) = lerp(&current.a, &current.b, t1) else {
                    log::warn!("crossing between edges {i} and {j} does not fit in the coordinate type");
                    continue;
                };

                by_edge[i].push(Crossing { t: t1, point });
                by_edge[j].push(Crossing { t: t2, point });
                crossings += 1;
            }
        }

        by_edge
            .iter_mut()
            .for_each(|crossings| crossings.sort_by(|a, b| a.t.total_cmp(&b.t)));

        let start = (0..total)
            .min_by(|&i, &j| Key(segments[i].a).cmp(&Key(segments[j].a)))
            .unwrap_or_default();

        let mut points = Vec::with_capacity(total + 2 * crossings);
        let mut vertices = Vec::with_capacity(total);
        for edge in (start..total).chain(0..start) {
            vertices.push(points.len());
            points.push(segments[edge].a);
            points.extend(by_edge[edge].iter().map(|crossing| crossing.point));
        }

        let mut pending: BTreeMap<Key<T>, Vec<usize>> = BTreeMap::new();
        for (position, point) in points.iter().enumerate() {
            match pending.entry(Key(*point)) {
                Entry::Vacant(entry) => {
                    entry.insert(vec![position]);
                }
                Entry::Occupied(mut entry) => entry.get_mut().push(position),
            }
        }

        for (key, positions) in &pending {
            let repeated_vertex = positions
                .iter()
                .filter(|&&position| vertices.binary_search(&position).is_ok())
                .count()
                > 1;

            if positions.len() > 2 || repeated_vertex {
                return Err(coincident(&key.0, positions.len()));
            }
        }

        Ok(Self {
            used: vec![false; points.len()],
            points,
            pending,
            crossings,
        })
    }

    /// Returns the first position whose leaving step has not been travelled yet.
    pub(super) fn first_pending(&self) -> Option<usize> {
        self.used.iter().position(|used| !used)
    }
}

fn coincident<T>(point: &Vector<T>, passes: usize) -> Error
where
    T: Scalar,
{
    Error::CoincidentIntersection {
        x: point.x.to_f64().unwrap_or(f64::NAN),
        y: point.y.to_f64().unwrap_or(f64::NAN),
        passes,
    }
}
