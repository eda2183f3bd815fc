//! Error types for polytrace operations.

use thiserror::Error;

/// Errors that can occur while operating on polygons.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A bounding box was requested for an empty set of points or segments.
    #[error("cannot bound an empty set")]
    EmptyInput,

    /// The polygon has an edge whose endpoints are the same point.
    #[error("edge {edge} has zero length")]
    ZeroLengthEdge {
        /// Position of the edge in the polygon.
        edge: usize,
    },

    /// More than two passes of the boundary go through the same point.
    #[error("the boundary goes through ({x}, {y}) {passes} times")]
    CoincidentIntersection {
        /// Horizontal coordinate of the point.
        x: f64,
        /// Vertical coordinate of the point.
        y: f64,
        /// Amount of times the boundary goes through the point.
        passes: usize,
    },
}
