use super::link::DashboardLink;
use super::time::{default_time_range, TimeRange};
use super::timepicker::{default_time_picker, TimePicker};
use builder_framework::Resource;
use serde::{Deserialize, Serialize};

/// Theme of the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardStyle {
    Light,
    #[default]
    Dark,
}

/// How the crosshair and tooltip are shared between panels.
///
/// Serialized as the integer the dashboard schema uses (`0`, `1`, `2`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum DashboardCursorSync {
    #[default]
    Off,
    Crosshair,
    Tooltip,
}

impl From<DashboardCursorSync> for u8 {
    fn from(sync: DashboardCursorSync) -> Self {
        match sync {
            DashboardCursorSync::Off => 0,
            DashboardCursorSync::Crosshair => 1,
            DashboardCursorSync::Tooltip => 2,
        }
    }
}

impl TryFrom<u8> for DashboardCursorSync {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(DashboardCursorSync::Off),
            1 => Ok(DashboardCursorSync::Crosshair),
            2 => Ok(DashboardCursorSync::Tooltip),
            other => Err(format!("unknown cursor sync mode: {}", other)),
        }
    }
}

/// A dashboard definition: the root of the configuration tree.
///
/// # Builders
/// Built by [`DashboardBuilder`](crate::builders::DashboardBuilder). The composite fields
/// (`time`, `timepicker`, `links`, `single_link`) accept child builders or literals there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Dashboard {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub uid: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub style: DashboardStyle,
    pub timezone: String,
    pub editable: bool,
    pub graph_tooltip: DashboardCursorSync,
    pub time: TimeRange,
    pub timepicker: TimePicker,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh: Option<String>,
    pub live_now: bool,
    pub week_start: String,
    pub schema_version: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    pub links: Vec<DashboardLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub single_link: Option<DashboardLink>,
}

/// Schema version written into new dashboards.
pub const SCHEMA_VERSION: u16 = 36;

/// An empty, editable dark dashboard in the browser's timezone, without auto-refresh.
pub fn default_dashboard() -> Dashboard {
    Dashboard {
        id: None,
        uid: String::new(),
        title: String::new(),
        description: String::new(),
        tags: Vec::new(),
        style: DashboardStyle::Dark,
        timezone: "browser".to_string(),
        editable: true,
        graph_tooltip: DashboardCursorSync::Off,
        time: default_time_range(),
        timepicker: default_time_picker(),
        refresh: None,
        live_now: false,
        week_start: String::new(),
        schema_version: SCHEMA_VERSION,
        version: None,
        links: Vec::new(),
        single_link: None,
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        default_dashboard()
    }
}

impl Resource for Dashboard {}
