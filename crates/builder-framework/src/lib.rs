//! # Builder Framework
//!
//! This crate provides the building blocks for fluent, type-safe builders of nested
//! configuration resources. A builder owns one in-progress resource, exposes chainable
//! setters, and hands out a finished snapshot when `build` is called.
//!
//! ## Why a Framework?
//!
//! Configuration trees (a dashboard with links, a time picker, a time range, …) are deep.
//! Assembling them as nested literals is verbose, and every parent needs the same plumbing
//! to accept either a child builder or a ready-made value for its sub-resources. This crate
//! writes that plumbing **once**:
//!
//! - **Delegation**: a parent setter accepts a child builder and stores the child's result
//! - **Dual input**: the same setter accepts an already-built resource or a JSON literal
//! - **Atomic collections**: a list setter either resolves every element or changes nothing
//!
//! ## Architecture Overview
//!
//! 1. **Data Layer** ([`Resource`]) - Plain, cloneable values with a default factory
//! 2. **Construction Layer** ([`Builder`]) - Mutable context producing resources
//! 3. **Delegation Layer** ([`Composite`], [`resolve_all`]) - Resolves sub-resource input
//!
//! ## Core Abstractions
//!
//! ### [`Builder`] and [`Composite`]
//!
//! ```rust
//! use builder_framework::{resolve_all, BuildError, Builder, Composite, Resource};
//! use serde::{Deserialize, Serialize};
//!
//! // 1. Define the Resources
//! #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
//! struct Panel { title: String }
//! impl Resource for Panel {}
//!
//! #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
//! struct Row { panels: Vec<Panel> }
//! impl Resource for Row {}
//!
//! // 2. Define the Builders
//! struct PanelBuilder { internal: Panel }
//!
//! impl PanelBuilder {
//!     fn new() -> Self { Self { internal: Panel { title: String::new() } } }
//!     fn title(&mut self, title: impl Into<String>) -> &mut Self {
//!         self.internal.title = title.into();
//!         self
//!     }
//! }
//!
//! impl Builder<Panel> for PanelBuilder {
//!     fn build(&self) -> Result<Panel, BuildError> { Ok(self.internal.clone()) }
//! }
//!
//! struct RowBuilder { internal: Row }
//!
//! impl RowBuilder {
//!     fn new() -> Self { Self { internal: Row { panels: Vec::new() } } }
//!     fn panels<'a, I>(&mut self, panels: I) -> Result<&mut Self, BuildError>
//!     where
//!         I: IntoIterator,
//!         I::Item: Into<Composite<'a, Panel>>,
//!     {
//!         self.internal.panels = resolve_all("panels", panels)?;
//!         Ok(self)
//!     }
//! }
//!
//! impl Builder<Row> for RowBuilder {
//!     fn build(&self) -> Result<Row, BuildError> { Ok(self.internal.clone()) }
//! }
//!
//! // 3. Compose
//! fn main() -> Result<(), BuildError> {
//!     let mut cpu = PanelBuilder::new();
//!     cpu.title("CPU");
//!
//!     let panels: Vec<Composite<'_, Panel>> = vec![
//!         (&cpu).into(),
//!         serde_json::json!({ "title": "Memory" }).into(),
//!     ];
//!     let row = RowBuilder::new().panels(panels)?.build()?;
//!
//!     assert_eq!(row.panels[0].title, "CPU");
//!     assert_eq!(row.panels[1].title, "Memory");
//!     Ok(())
//! }
//! ```
//!
//! ## Setter Conventions
//!
//! - Scalar setters take `&mut self` and return `&mut Self`, never a trait object, so
//!   the chain keeps access to every setter of the concrete builder.
//! - Composite setters return `Result<&mut Self, BuildError>` and continue with `?`.
//!   On error the builder is left exactly as it was before the call.
//! - `build(&self)` never consumes the builder: build, mutate, build again.
//!
//! ## Concurrency Model
//!
//! Everything is synchronous and in-memory. A builder is mutated through `&mut self`, so
//! the borrow checker already forbids concurrent mutation; there is no internal locking.
//!
//! ## Testing
//!
//! The [`mock`] module provides a [`MockBuilder`](mock::MockBuilder) with queued results
//! and call counting, for testing composite setters without hand-written failing builders.

pub mod builder;
pub mod composite;
pub mod error;
pub mod mock;
pub mod resource;
pub mod tracing;

// Re-export core types for convenience
pub use builder::Builder;
pub use composite::{resolve_all, Composite};
pub use error::BuildError;
pub use resource::{kind_of, Resource};
