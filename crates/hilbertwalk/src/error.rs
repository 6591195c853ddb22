//! Error types used across the crate.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by curve construction and lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The requested order would overflow the index range or exhaust memory.
    /// Reported before any allocation takes place.
    #[error("invalid order {order}: the largest supported order is {max}")]
    InvalidOrder {
        /// The order that was requested.
        order: u32,
        /// The largest order the crate supports.
        max: u32,
    },

    /// A sequence lookup used an index past the end of the curve.
    #[error("index {index} out of range for a curve of {size} cells")]
    IndexOutOfRange {
        /// The index that was requested.
        index: usize,
        /// Total number of cells on the curve.
        size: usize,
    },

    /// A grid lookup used a coordinate outside the constructed grid.
    #[error("coordinate ({x}, {y}) out of range for a {width}x{width} grid")]
    CoordinateOutOfRange {
        /// Requested horizontal position.
        x: i64,
        /// Requested vertical position.
        y: i64,
        /// Side length of the grid.
        width: usize,
    },
}
