//! Plain dashboard resources and their default factories.
//!
//! Every resource has a `default_*` factory returning a complete value, so a builder can
//! always `build` even when no setter was called. The `Default` impls delegate to them.

pub mod dashboard;
pub mod link;
pub mod time;
pub mod timepicker;

pub use dashboard::*;
pub use link::*;
pub use time::*;
pub use timepicker::*;
