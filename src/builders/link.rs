use crate::model::{default_dashboard_link, DashboardLink, DashboardLinkType};
use builder_framework::{kind_of, BuildError, Builder};
use tracing::trace;

/// Builder for [`DashboardLink`].
///
/// The builder starts from [`default_dashboard_link`], whose title is empty.
#[derive(Debug, Clone)]
pub struct DashboardLinkBuilder {
    internal: DashboardLink,
}

impl DashboardLinkBuilder {
    pub fn new() -> Self {
        Self {
            internal: default_dashboard_link(),
        }
    }

    pub fn title(&mut self, title: impl Into<String>) -> &mut Self {
        self.internal.title = title.into();
        self
    }

    /// Sets the `type` of the link.
    pub fn link_type(&mut self, link_type: DashboardLinkType) -> &mut Self {
        self.internal.link_type = link_type;
        self
    }

    pub fn icon(&mut self, icon: impl Into<String>) -> &mut Self {
        self.internal.icon = icon.into();
        self
    }

    pub fn tooltip(&mut self, tooltip: impl Into<String>) -> &mut Self {
        self.internal.tooltip = tooltip.into();
        self
    }

    pub fn url(&mut self, url: impl Into<String>) -> &mut Self {
        self.internal.url = url.into();
        self
    }

    /// Tags used to select dashboards when the link type is `dashboards`.
    pub fn tags<I>(&mut self, tags: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.internal.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn as_dropdown(&mut self, as_dropdown: bool) -> &mut Self {
        self.internal.as_dropdown = as_dropdown;
        self
    }

    pub fn target_blank(&mut self, target_blank: bool) -> &mut Self {
        self.internal.target_blank = target_blank;
        self
    }

    pub fn include_vars(&mut self, include_vars: bool) -> &mut Self {
        self.internal.include_vars = include_vars;
        self
    }

    pub fn keep_time(&mut self, keep_time: bool) -> &mut Self {
        self.internal.keep_time = keep_time;
        self
    }
}

impl Default for DashboardLinkBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder<DashboardLink> for DashboardLinkBuilder {
    fn build(&self) -> Result<DashboardLink, BuildError> {
        trace!(resource_kind = kind_of::<DashboardLink>(), title = %self.internal.title, "Build");
        Ok(self.internal.clone())
    }
}
