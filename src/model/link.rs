use builder_framework::{Composite, Resource};
use serde::{Deserialize, Serialize};

/// What a dashboard link points to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardLinkType {
    /// An arbitrary URL.
    #[default]
    Link,
    /// Other dashboards, selected by tag.
    Dashboards,
}

/// A link shown in the dashboard header.
///
/// # Literal input
/// Links are the usual example of a composite field set from a literal rather than a
/// builder. Missing keys take the values of [`default_dashboard_link`] and unknown keys are
/// rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct DashboardLink {
    pub title: String,
    #[serde(rename = "type")]
    pub link_type: DashboardLinkType,
    pub icon: String,
    pub tooltip: String,
    pub url: String,
    pub tags: Vec<String>,
    pub as_dropdown: bool,
    pub target_blank: bool,
    pub include_vars: bool,
    pub keep_time: bool,
}

/// Untitled plain link with the external link icon and every toggle off.
pub fn default_dashboard_link() -> DashboardLink {
    DashboardLink {
        title: String::new(),
        link_type: DashboardLinkType::Link,
        icon: "external link".to_string(),
        tooltip: String::new(),
        url: String::new(),
        tags: Vec::new(),
        as_dropdown: false,
        target_blank: false,
        include_vars: false,
        keep_time: false,
    }
}

impl Default for DashboardLink {
    fn default() -> Self {
        default_dashboard_link()
    }
}

impl Resource for DashboardLink {}

impl From<DashboardLink> for Composite<'_, DashboardLink> {
    fn from(link: DashboardLink) -> Self {
        Composite::Resource(link)
    }
}
