use crate::model::{default_time_picker, TimePicker};
use builder_framework::{kind_of, BuildError, Builder};
use tracing::trace;

/// Builder for [`TimePicker`].
#[derive(Debug, Clone)]
pub struct TimePickerBuilder {
    internal: TimePicker,
}

impl TimePickerBuilder {
    pub fn new() -> Self {
        Self {
            internal: default_time_picker(),
        }
    }

    pub fn hidden(&mut self, hidden: bool) -> &mut Self {
        self.internal.hidden = hidden;
        self
    }

    /// Replaces the auto-refresh choices offered in the picker.
    pub fn refresh_intervals<I>(&mut self, refresh_intervals: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.internal.refresh_intervals = refresh_intervals.into_iter().map(Into::into).collect();
        self
    }

    pub fn time_options<I>(&mut self, time_options: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.internal.time_options = time_options.into_iter().map(Into::into).collect();
        self
    }

    pub fn collapse(&mut self, collapse: bool) -> &mut Self {
        self.internal.collapse = collapse;
        self
    }

    pub fn enable(&mut self, enable: bool) -> &mut Self {
        self.internal.enable = enable;
        self
    }

    /// Shifts "now" back by this duration, for data sources that lag behind.
    pub fn now_delay(&mut self, now_delay: impl Into<String>) -> &mut Self {
        self.internal.now_delay = Some(now_delay.into());
        self
    }
}

impl Default for TimePickerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder<TimePicker> for TimePickerBuilder {
    fn build(&self) -> Result<TimePicker, BuildError> {
        trace!(resource_kind = kind_of::<TimePicker>(), "Build");
        Ok(self.internal.clone())
    }
}
