#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Dashboard Builder
//!
//! > **Fluent, type-safe construction of dashboard definitions.**
//!
//! Dashboards are deep trees: a dashboard holds a time range, a time picker, a list of
//! links, and so on. This crate provides one builder per node of that tree, so a full
//! dashboard is written as a chain of setter calls instead of a nested literal.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Builders delegate, resources stay plain
//! A builder owns exactly one resource. When a setter receives a *child builder* for a
//! sub-resource, it builds the child on the spot and stores the result. Resources therefore
//! never contain builders and can be cloned, compared, and serialized like any other value.
//!
//! ### Both paths for every composite field
//! Writing a throwaway builder for a one-off link is verbose. Every composite setter also
//! takes the finished value directly, either typed or as a `serde_json::Value` literal
//! checked against the resource's shape.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`])
//! - **Role**: Plain resources and their `default_*` factories.
//! - **Key items**: [`Dashboard`](model::Dashboard), [`DashboardLink`](model::DashboardLink),
//!   [`default_dashboard`](model::default_dashboard).
//!
//! ### 2. The Builders ([`builders`])
//! - **Role**: Fluent construction on top of [`builder_framework::Builder`].
//! - **Key items**: [`DashboardBuilder`](builders::DashboardBuilder),
//!   [`TimePickerBuilder`](builders::TimePickerBuilder).
//!
//! The protocol itself (the `Builder` trait, composite resolution, errors) lives in the
//! `builder-framework` crate.
//!
//! ## 🚀 Quick Start
//!
//! ```rust
//! use builder_framework::{BuildError, Builder};
//! use dashboard_builder::builders::DashboardBuilder;
//! use dashboard_builder::model::DashboardLink;
//!
//! # fn main() -> Result<(), BuildError> {
//! let dashboard = DashboardBuilder::new()
//!     .uid("checkout")
//!     .title("Checkout")
//!     .tags(["payments", "prod"])
//!     .links([DashboardLink {
//!         title: "Runbook".to_string(),
//!         url: "https://example.com/runbook".to_string(),
//!         ..Default::default()
//!     }])?
//!     .build()?;
//!
//! assert_eq!(dashboard.links[0].title, "Runbook");
//! assert_eq!(dashboard.refresh, None);
//! # Ok(())
//! # }
//! ```
//!
//! ### Running the Demo
//!
//! ```bash
//! RUST_LOG=debug cargo run
//! ```

pub mod builders;
pub mod model;
