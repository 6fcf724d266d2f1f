//! Fluent builders for the dashboard resources.
//!
//! Each builder owns one resource, starts from its default factory, and implements
//! [`Builder`](builder_framework::Builder). Scalar setters return `&mut Self`; setters for
//! composite fields return `Result<&mut Self, BuildError>` and accept a child builder, a
//! typed resource, or a JSON literal.

pub mod dashboard;
pub mod link;
pub mod time;
pub mod timepicker;

pub use dashboard::*;
pub use link::*;
pub use time::*;
pub use timepicker::*;
