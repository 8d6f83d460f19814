//! Trimmed shapes: draw only the part of an outline between two ratios.
//!
//! Purpose
//! - Parameterize a closed polygon by arc length once (`PathTable`), then
//!   answer many `[start, end]` trim queries against it, typically one per
//!   animation frame.
//! - Offer the same `[start, end]` interface for lines and ellipses.
//!
//! Model
//! - A perimeter ratio in [0, 1] is the fraction of the perimeter travelled
//!   from vertex 0 in vertex order.
//! - Each edge (the closing edge included) is a `PathSegment` tagged with the
//!   cumulative ratios at which it starts and ends.
//! - Queries locate the boundary segments, interpolate inside them, and emit
//!   every whole vertex in between into a `PathSink`.
//!
//! Preconditions of the hot path (`PathTable::new`, `PathTable::trace`) are
//! not checked; use `PathTable::checked` for untrusted input.

mod build;
mod locate;
pub mod shapes;
mod trace;
mod types;

pub use locate::{locate_end, locate_start};
pub use types::{PathSegment, PathTable, TrimError};
