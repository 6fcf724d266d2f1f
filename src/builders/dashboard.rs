use crate::model::{
    default_dashboard, Dashboard, DashboardCursorSync, DashboardLink, DashboardStyle, TimePicker,
    TimeRange,
};
use builder_framework::{kind_of, resolve_all, BuildError, Builder, Composite};
use tracing::trace;

/// Builder for [`Dashboard`].
///
/// # Composite fields
/// `time`, `timepicker`, `single_link`, `link` and `links` take a child builder, a typed
/// resource, or a JSON literal. The input is resolved when the setter runs; on error the
/// setter returns it and the dashboard keeps its previous value for that field.
///
/// ```rust
/// use dashboard_builder::builders::{DashboardBuilder, TimePickerBuilder};
/// use builder_framework::{BuildError, Builder};
///
/// # fn main() -> Result<(), BuildError> {
/// let dashboard = DashboardBuilder::new()
///     .title("Checkout")
///     .timepicker(TimePickerBuilder::new().refresh_intervals(["30s", "1m"]))?
///     .time(serde_json::json!({ "from": "now-3h", "to": "now" }))?
///     .build()?;
///
/// assert_eq!(dashboard.timepicker.refresh_intervals, ["30s", "1m"]);
/// assert_eq!(dashboard.time.from, "now-3h");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DashboardBuilder {
    internal: Dashboard,
}

impl DashboardBuilder {
    pub fn new() -> Self {
        Self {
            internal: default_dashboard(),
        }
    }

    pub fn id(&mut self, id: i64) -> &mut Self {
        self.internal.id = Some(id);
        self
    }

    pub fn uid(&mut self, uid: impl Into<String>) -> &mut Self {
        self.internal.uid = uid.into();
        self
    }

    pub fn title(&mut self, title: impl Into<String>) -> &mut Self {
        self.internal.title = title.into();
        self
    }

    pub fn description(&mut self, description: impl Into<String>) -> &mut Self {
        self.internal.description = description.into();
        self
    }

    pub fn tags<I>(&mut self, tags: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.internal.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn style(&mut self, style: DashboardStyle) -> &mut Self {
        self.internal.style = style;
        self
    }

    /// `"browser"`, `"utc"`, or an IANA timezone name.
    pub fn timezone(&mut self, timezone: impl Into<String>) -> &mut Self {
        self.internal.timezone = timezone.into();
        self
    }

    pub fn editable(&mut self, editable: bool) -> &mut Self {
        self.internal.editable = editable;
        self
    }

    /// Sets `graphTooltip`.
    pub fn tooltip(&mut self, tooltip: DashboardCursorSync) -> &mut Self {
        self.internal.graph_tooltip = tooltip;
        self
    }

    pub fn time<'a>(
        &mut self,
        time: impl Into<Composite<'a, TimeRange>>,
    ) -> Result<&mut Self, BuildError> {
        let time: Composite<'a, TimeRange> = time.into();
        self.internal.time = time.resolve("time")?;
        Ok(self)
    }

    pub fn timepicker<'a>(
        &mut self,
        timepicker: impl Into<Composite<'a, TimePicker>>,
    ) -> Result<&mut Self, BuildError> {
        let timepicker: Composite<'a, TimePicker> = timepicker.into();
        self.internal.timepicker = timepicker.resolve("timepicker")?;
        Ok(self)
    }

    /// Auto-refresh interval, e.g. `"1m"`.
    pub fn refresh(&mut self, refresh: impl Into<String>) -> &mut Self {
        self.internal.refresh = Some(refresh.into());
        self
    }

    pub fn live_now(&mut self, live_now: bool) -> &mut Self {
        self.internal.live_now = live_now;
        self
    }

    pub fn week_start(&mut self, week_start: impl Into<String>) -> &mut Self {
        self.internal.week_start = week_start.into();
        self
    }

    pub fn schema_version(&mut self, schema_version: u16) -> &mut Self {
        self.internal.schema_version = schema_version;
        self
    }

    pub fn version(&mut self, version: u32) -> &mut Self {
        self.internal.version = Some(version);
        self
    }

    /// Replaces all links. Either every link resolves or the current links are kept.
    pub fn links<'a, I>(&mut self, links: I) -> Result<&mut Self, BuildError>
    where
        I: IntoIterator,
        I::Item: Into<Composite<'a, DashboardLink>>,
    {
        self.internal.links = resolve_all("links", links)?;
        Ok(self)
    }

    /// Appends one link after the existing ones.
    pub fn link<'a>(
        &mut self,
        link: impl Into<Composite<'a, DashboardLink>>,
    ) -> Result<&mut Self, BuildError> {
        let link: Composite<'a, DashboardLink> = link.into();
        let index = self.internal.links.len();
        let resolved = link.resolve(&format!("links[{index}]"))?;
        self.internal.links.push(resolved);
        Ok(self)
    }

    pub fn single_link<'a>(
        &mut self,
        single_link: impl Into<Composite<'a, DashboardLink>>,
    ) -> Result<&mut Self, BuildError> {
        let single_link: Composite<'a, DashboardLink> = single_link.into();
        self.internal.single_link = Some(single_link.resolve("single_link")?);
        Ok(self)
    }
}

impl Default for DashboardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder<Dashboard> for DashboardBuilder {
    fn build(&self) -> Result<Dashboard, BuildError> {
        trace!(
            resource_kind = kind_of::<Dashboard>(),
            uid = %self.internal.uid,
            links = self.internal.links.len(),
            "Build"
        );
        Ok(self.internal.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_scalar_setters() {
        let dashboard = DashboardBuilder::new()
            .id(42)
            .editable(false)
            .live_now(true)
            .week_start("monday")
            .schema_version(39)
            .version(7)
            .build()
            .unwrap();

        assert_eq!(dashboard.id, Some(42));
        assert!(!dashboard.editable);
        assert!(dashboard.live_now);
        assert_eq!(dashboard.week_start, "monday");
        assert_eq!(dashboard.schema_version, 39);
        assert_eq!(dashboard.version, Some(7));
        assert_eq!(dashboard.title, default_dashboard().title);
    }
}
