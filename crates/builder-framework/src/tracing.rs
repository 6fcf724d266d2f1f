//! # Observability & Tracing
//!
//! Structured logging for builders and composite resolution, using the `tracing` crate.
//!
//! ## What Gets Traced
//!
//! - **Resolution**: every composite input resolved into a field (`DEBUG`), with the
//!   resource kind, the field path and the input variant (builder, resource, literal)
//! - **Failures**: shape mismatches and failing child builders (`WARN`), with the error
//! - **Builds**: each `build` call on a generated builder (`TRACE`)
//!
//! ## Usage Examples
//!
//! ```bash
//! # Failures only
//! RUST_LOG=warn cargo run
//!
//! # Every resolution, one line each
//! RUST_LOG=debug cargo run
//!
//! # Include build snapshots
//! RUST_LOG=trace cargo run
//! ```
//!
//! With `RUST_LOG=debug` the sample dashboard logs:
//!
//! ```text
//! DEBUG Resolved resource_kind="TimeRange" field="time" input="literal"
//! DEBUG Resolved resource_kind="TimePicker" field="timepicker" input="builder"
//! DEBUG Resolved resource_kind="DashboardLink" field="links[0]" input="literal"
//! DEBUG Resolved collection resource_kind="DashboardLink" field="links" count=1
//! ```

/// Initializes the tracing subscriber.
///
/// Verbosity is controlled by the `RUST_LOG` environment variable. Call once, at the start
/// of a binary; libraries should never install a subscriber themselves.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // resource_kind identifies the source, module paths are noise
        .compact()
        .init();
}
