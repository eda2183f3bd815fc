use crate::{Scalar, Segment};

use super::trace::{Key, Trace};

/// Yields the segments of a closed loop through a [`Trace`], switching to the other pass of the
/// boundary at every self-crossing.
pub(super) struct Walk<'a, T> {
    pub(super) trace: &'a mut Trace<T>,
    pub(super) next: usize,
}

impl<T> Iterator for Walk<'_, T>
where
    T: Scalar,
{
    type Item = Segment<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next;
        if self.trace.used.get(current).copied().unwrap_or(true) {
            return None;
        }

        self.trace.used[current] = true;

        let from = self.trace.points[current];
        if let Some(positions) = self.trace.pending.get_mut(&Key(from)) {
            positions.retain(|&position| position != current);
            if positions.is_empty() {
                self.trace.pending.remove(&Key(from));
            }
        }

        let following = (current + 1) % self.trace.points.len();
        let to = self.trace.points[following];

        self.next = self
            .trace
            .pending
            .get(&Key(to))
            .and_then(|positions| {
                positions
                    .iter()
                    .copied()
                    .find(|&position| position != following)
            })
            .unwrap_or(following);

        Some(Segment::new(from, to))
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        Polygon, Segment, vector,
        retrace::{trace::Trace, walk::Walk},
    };

    #[test]
    fn walk_switches_at_crossings() {
        let bowtie: Polygon<i32> = vec![[20, 20], [280, 280], [20, 280], [280, 20]].into();
        let mut trace = Trace::new(&bowtie).unwrap();

        let first = Walk {
            trace: &mut trace,
            next: 0,
        }
        .collect::<Vec<_>>();

        assert_eq!(
            first,
            vec![
                Segment::new(vector!(20, 20), vector!(280, 20)),
                Segment::new(vector!(280, 20), vector!(150, 150)),
                Segment::new(vector!(150, 150), vector!(20, 20)),
            ]
        );

        assert_eq!(trace.first_pending(), Some(2));
        let second = Walk {
            next: 2,
            trace: &mut trace,
        }
        .collect::<Vec<_>>();

        assert_eq!(
            second,
            vec![
                Segment::new(vector!(150, 150), vector!(20, 280)),
                Segment::new(vector!(20, 280), vector!(280, 280)),
                Segment::new(vector!(280, 280), vector!(150, 150)),
            ]
        );

        assert_eq!(trace.first_pending(), None);
        assert!(trace.pending.is_empty());
    }
}
