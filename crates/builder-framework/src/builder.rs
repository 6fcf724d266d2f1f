//! # Builder Trait
//!
//! The one capability every builder exposes: turning its in-progress resource into a
//! finished, fully resolved value.
//!
//! # Architecture Note
//! The trait is deliberately tiny. Setters are *not* part of it: each concrete builder
//! defines its own setters returning `&mut Self`, so a chain never degrades to a trait
//! object and subtype-specific setters stay reachable after any call.
//!
//! `build` takes `&self`. Building is a snapshot, not a consumption: the builder can be
//! mutated and built again afterwards, and two consecutive calls return equal resources.

use crate::error::BuildError;
use crate::resource::Resource;

/// Trait implemented by every builder of a resource `R`.
///
/// # Errors
///
/// Builders over plain defaults never fail. The `Result` exists so that a builder that
/// *can* fail (a hand-written one, or [`MockBuilder`](crate::mock::MockBuilder) in tests)
/// reports its error to whichever composite setter is resolving it.
pub trait Builder<R: Resource> {
    /// Returns the resource owned by this builder, reflecting every setter applied so far.
    fn build(&self) -> Result<R, BuildError>;
}

impl<R: Resource, B: Builder<R> + ?Sized> Builder<R> for &B {
    fn build(&self) -> Result<R, BuildError> {
        (**self).build()
    }
}

impl<R: Resource, B: Builder<R> + ?Sized> Builder<R> for Box<B> {
    fn build(&self) -> Result<R, BuildError> {
        (**self).build()
    }
}
