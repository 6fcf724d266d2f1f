use builder_framework::{Composite, Resource};
use serde::{Deserialize, Serialize};

/// Settings of the time picker in the dashboard header.
///
/// Keys are serialized as the dashboard schema spells them, which mixes
/// `refresh_intervals` with `nowDelay`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimePicker {
    pub hidden: bool,
    pub refresh_intervals: Vec<String>,
    pub time_options: Vec<String>,
    pub collapse: bool,
    pub enable: bool,
    #[serde(rename = "nowDelay", skip_serializing_if = "Option::is_none")]
    pub now_delay: Option<String>,
}

const DEFAULT_REFRESH_INTERVALS: [&str; 10] =
    ["5s", "10s", "30s", "1m", "5m", "15m", "30m", "1h", "2h", "1d"];

const DEFAULT_TIME_OPTIONS: [&str; 9] = ["5m", "15m", "1h", "6h", "12h", "24h", "2d", "7d", "30d"];

/// Visible, enabled time picker offering the standard refresh intervals.
pub fn default_time_picker() -> TimePicker {
    TimePicker {
        hidden: false,
        refresh_intervals: DEFAULT_REFRESH_INTERVALS.iter().map(|s| s.to_string()).collect(),
        time_options: DEFAULT_TIME_OPTIONS.iter().map(|s| s.to_string()).collect(),
        collapse: false,
        enable: true,
        now_delay: None,
    }
}

impl Default for TimePicker {
    fn default() -> Self {
        default_time_picker()
    }
}

impl Resource for TimePicker {}

impl From<TimePicker> for Composite<'_, TimePicker> {
    fn from(timepicker: TimePicker) -> Self {
        Composite::Resource(timepicker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_time_picker() {
        let timepicker = default_time_picker();
        assert!(!timepicker.hidden);
        assert!(timepicker.enable);
        assert_eq!(timepicker.refresh_intervals.len(), 10);
        assert_eq!(timepicker.refresh_intervals[0], "5s");
        assert_eq!(timepicker.time_options.last().map(String::as_str), Some("30d"));
        assert_eq!(timepicker.now_delay, None);
    }

    #[test]
    fn test_schema_key_spelling() {
        let mut timepicker = default_time_picker();
        timepicker.now_delay = Some("1m".to_string());

        let value = serde_json::to_value(&timepicker).unwrap();
        assert!(value.get("refresh_intervals").is_some());
        assert!(value.get("time_options").is_some());
        assert_eq!(value.get("nowDelay"), Some(&json!("1m")));
    }
}
