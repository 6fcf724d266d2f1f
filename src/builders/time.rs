use crate::model::{default_time_range, TimeRange};
use builder_framework::{kind_of, BuildError, Builder};
use tracing::trace;

/// Builder for [`TimeRange`].
#[derive(Debug, Clone)]
pub struct TimeRangeBuilder {
    internal: TimeRange,
}

impl TimeRangeBuilder {
    pub fn new() -> Self {
        Self {
            internal: default_time_range(),
        }
    }

    /// Start of the range, absolute or relative (`"now-3h"`).
    pub fn from(&mut self, from: impl Into<String>) -> &mut Self {
        self.internal.from = from.into();
        self
    }

    /// End of the range.
    pub fn to(&mut self, to: impl Into<String>) -> &mut Self {
        self.internal.to = to.into();
        self
    }
}

impl Default for TimeRangeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder<TimeRange> for TimeRangeBuilder {
    fn build(&self) -> Result<TimeRange, BuildError> {
        trace!(resource_kind = kind_of::<TimeRange>(), "Build");
        Ok(self.internal.clone())
    }
}
