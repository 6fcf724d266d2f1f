use builder_framework::{Composite, Resource};
use serde::{Deserialize, Serialize};

/// Time range shown when the dashboard is opened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimeRange {
    pub from: String,
    pub to: String,
}

/// Last six hours, up to now.
pub fn default_time_range() -> TimeRange {
    TimeRange {
        from: "now-6h".to_string(),
        to: "now".to_string(),
    }
}

impl Default for TimeRange {
    fn default() -> Self {
        default_time_range()
    }
}

impl Resource for TimeRange {}

impl From<TimeRange> for Composite<'_, TimeRange> {
    fn from(time: TimeRange) -> Self {
        Composite::Resource(time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_time_range() {
        let time = default_time_range();
        assert_eq!(time.from, "now-6h");
        assert_eq!(time.to, "now");
    }

    #[test]
    fn test_time_range_rejects_unknown_keys() {
        let result = serde_json::from_value::<TimeRange>(serde_json::json!({ "from": "now-1h", "until": "now" }));
        assert!(result.is_err());
    }
}
