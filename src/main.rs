//! # Dashboard Builder Demo
//!
//! Builds a sample dashboard with every kind of composite input (child builder, JSON
//! literal) and prints it as JSON.

use builder_framework::tracing::setup_tracing;
use builder_framework::{BuildError, Builder};
use dashboard_builder::builders::{DashboardBuilder, TimePickerBuilder};
use dashboard_builder::model::{Dashboard, DashboardCursorSync, DashboardStyle};
use serde_json::json;
use tracing::{error, info};

fn sample_dashboard() -> Result<Dashboard, BuildError> {
    DashboardBuilder::new()
        .title("Some title")
        .uid("test-dashboard-codegen")
        .description("Some description")
        .time(json!({ "from": "now-3h", "to": "now" }))?
        .timepicker(TimePickerBuilder::new().refresh_intervals(["30s", "1m", "5m"]))?
        .refresh("1m")
        .style(DashboardStyle::Dark)
        .timezone("utc")
        .tooltip(DashboardCursorSync::Crosshair)
        .tags(["generated", "from", "cue"])
        .links([json!({
            "title": "Some link",
            "url": "http://google.com",
            "type": "link",
            "tags": [],
            "icon": "cloud",
            "tooltip": "",
            "asDropdown": false,
            "targetBlank": false,
            "includeVars": false,
            "keepTime": false,
        })])?
        .build()
}

fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Building sample dashboard");

    let dashboard = match sample_dashboard() {
        Ok(dashboard) => dashboard,
        Err(e) => {
            error!(error = %e, field = ?e.field(), "Dashboard construction failed");
            return Err(e.to_string());
        }
    };

    info!(uid = %dashboard.uid, links = dashboard.links.len(), "Dashboard built");

    let output = serde_json::to_string_pretty(&dashboard).map_err(|e| e.to_string())?;
    println!("{}", output);
    Ok(())
}
