//! # Resource Trait
//!
//! The `Resource` trait marks the plain data types that builders produce (a dashboard, a link,
//! a time-picker config, …). A resource carries no identity beyond its field values: it is
//! cloned freely, compared structurally, and never holds a builder.
//!
//! # Architecture Note
//! The serde bounds are what make the literal input path possible. A resource that can be
//! deserialized can also be handed to a composite setter as a loosely-typed JSON literal,
//! and the framework checks its shape by deserializing it (see [`Composite`](crate::Composite)).
//!
//! # Provided Methods
//! - [`Resource::validate`] - check applied to every resolved composite input. The default accepts everything.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

/// Trait that any value produced by a [`Builder`](crate::Builder) must implement.
///
/// Resources are snapshots: every call to `build` hands out an independent value, so
/// mutating one resource (or the builder that produced it) never affects another.
pub trait Resource: Clone + Debug + PartialEq + Serialize + DeserializeOwned + 'static {
    /// Checks a resource before it is stored in a parent resource.
    ///
    /// Runs on builder output, typed values and JSON literals alike. Return a human
    /// readable reason on failure.
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

/// Short type name of a resource, used as the `resource_kind` field in logs and errors.
///
/// `dashboard_builder::model::link::DashboardLink` becomes `DashboardLink`.
pub fn kind_of<R: Resource>() -> &'static str {
    let name = std::any::type_name::<R>();
    let base = name.split('<').next().unwrap_or(name);
    base.rsplit("::").next().unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    struct Annotation {
        name: String,
    }

    impl Resource for Annotation {}

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    struct Labelled<T> {
        inner: T,
    }

    impl Resource for Labelled<Annotation> {}

    #[test]
    fn test_kind_of_strips_module_path() {
        assert_eq!(kind_of::<Annotation>(), "Annotation");
    }

    #[test]
    fn test_kind_of_generic_resource() {
        assert_eq!(kind_of::<Labelled<Annotation>>(), "Labelled");
    }

    #[test]
    fn test_validate_accepts_by_default() {
        let annotation = Annotation {
            name: String::new(),
        };
        assert!(annotation.validate().is_ok());
    }
}
