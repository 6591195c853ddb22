//! Tabulated 2D Hilbert space-filling curve.
//!
//! Construction walks the classical recursive subdivision once over a
//! `2^order × 2^order` grid, recording the full visiting order and its
//! inverse as flat tables. Every lookup after that is a single array read.
//!
//! # Guarantees
//!
//! For a constructed [`HilbertCurve`]:
//!
//! - index ↔ coordinate is a bijection over the whole grid
//! - consecutive indices are always grid-adjacent (Manhattan distance 1)
//! - the same order always produces the identical sequence
//!
//! The curve is immutable after construction and may be shared read-only
//! across threads without synchronization.

/// 2D grid cell value type and arithmetic.
pub mod coord;
/// The curve builder and the constructed curve.
pub mod curve;
/// Error types used across the crate.
pub mod error;

pub use crate::{
    coord::Coord,
    curve::{HilbertCurve, MAX_ORDER},
};
