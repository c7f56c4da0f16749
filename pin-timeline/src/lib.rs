//! Timeline layout for pinned time-series data files.
//!
//! Takes each file's (possibly messy) start/end dates and produces the
//! global bounds, a month/year header grid and proportional bar geometry
//! for a Gantt-style chart. Everything here is a pure function of its input
//! except [`source`], which defines the seam to whatever supplies the dates.

pub mod bounds;
pub mod config;
pub mod date_format;
pub mod date_range;
pub mod duration;
pub mod error;
pub mod file_info;
pub mod filter;
pub mod geometry;
pub mod grouping;
pub mod layout;
pub mod source;

pub use bounds::{TimelineBounds, YearSpan};
pub use config::{MonthMode, TimelineConfig};
pub use date_format::{normalize_date, DashConvention};
pub use error::TimelineError;
pub use file_info::{FileDateInfo, FileDateRange, FileRef};
pub use geometry::BarGeometry;
pub use layout::TimelineLayout;
pub use source::{DateRangeSource, LoadProgress, TimelineSession};
