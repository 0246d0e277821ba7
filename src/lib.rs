//! Momentum-binned working-point selection.
//!
//! A working point is a per-bin score threshold: an object is assigned to the
//! highest momentum bin whose edge it meets or exceeds, and passes if and only
//! if its score meets that bin's cut. [`wp_mask`] computes the per-object pass
//! mask for a pair of index-aligned `pt`/`score` columns;
//! [`select_objects`] and [`apply_working_points`] filter columns by it.

pub mod error;
pub mod mask;
pub mod select;
pub mod table;

pub use error::SelectError;
pub use mask::{pass_fraction, wp_mask};
pub use select::{ApplyStats, EventColumns, Selected, apply_working_points, select_objects};
pub use table::WorkingPoints;
