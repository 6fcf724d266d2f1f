//! # Composite Input & Delegation
//!
//! A composite field holds a resource (or a list of resources) rather than a scalar.
//! Setters for such fields accept a [`Composite`]: either a child builder to delegate to,
//! or a value the caller already has in hand.
//!
//! ## Resolution
//!
//! Resolution is **eager**: the setter resolves its input on the spot and stores the
//! resulting resource. The parent never keeps a reference to the child builder, so
//! resources stay plain data and a child mutated later does not reach back into its parent.
//!
//! | Input | Resolution |
//! |-------|------------|
//! | `Composite::Builder` | `build()` on the child; errors are wrapped with the field path |
//! | `Composite::Resource` | stored as-is |
//! | `Composite::Literal` | deserialized into the resource (shape check) |
//!
//! Whatever the input, the resolved resource then goes through [`Resource::validate`], so a
//! value is accepted or rejected the same way whether it came from a builder or not.
//!
//! ## Collections
//!
//! [`resolve_all`] resolves a sequence in input order and stops at the first failure.
//! Because the whole vector is produced before anything is assigned, a failing setter
//! never commits a partial collection.

use crate::builder::Builder;
use crate::error::BuildError;
use crate::resource::{kind_of, Resource};
use serde_json::Value;
use std::fmt;
use tracing::{debug, warn};

/// Input accepted by composite setters: a builder to delegate to, or a ready value.
pub enum Composite<'a, R: Resource> {
    /// A child builder, built when the setter runs.
    Builder(&'a dyn Builder<R>),
    /// An already-built resource.
    Resource(R),
    /// A loosely-typed literal matching the resource's serialized shape.
    Literal(Value),
}

impl<'a, R: Resource> Composite<'a, R> {
    /// Resolves this input into a concrete resource destined for `field`.
    ///
    /// `field` is the path reported in errors and logs (`"timepicker"`, `"links[3]"`).
    pub fn resolve(self, field: &str) -> Result<R, BuildError> {
        let resource_kind = kind_of::<R>();
        let input = self.input_name();

        let result = match self {
            Composite::Builder(builder) => builder
                .build()
                .map_err(|e| BuildError::nested(field, e))
                .and_then(|resource| checked(field, resource)),
            Composite::Resource(resource) => checked(field, resource),
            Composite::Literal(value) => serde_json::from_value::<R>(value)
                .map_err(|source| BuildError::ShapeMismatch {
                    field: field.to_string(),
                    kind: resource_kind,
                    source,
                })
                .and_then(|resource| checked(field, resource)),
        };

        match &result {
            Ok(_) => debug!(resource_kind, field, input, "Resolved"),
            Err(e) => warn!(resource_kind, field, input, error = %e, "Resolution failed"),
        }
        result
    }

    fn input_name(&self) -> &'static str {
        match self {
            Composite::Builder(_) => "builder",
            Composite::Resource(_) => "resource",
            Composite::Literal(_) => "literal",
        }
    }
}

fn checked<R: Resource>(field: &str, resource: R) -> Result<R, BuildError> {
    resource
        .validate()
        .map_err(|reason| BuildError::InvalidValue {
            field: field.to_string(),
            kind: kind_of::<R>(),
            reason,
        })?;
    Ok(resource)
}

/// Resolves a sequence of composite inputs for the collection field `field`.
///
/// Order is preserved and nothing is deduplicated: `output[i]` is the resolution of
/// `input[i]`. Resolution stops at the first failing element, whose error is returned
/// with the path `field[index]`; the remaining elements are never built. An empty input
/// yields an empty vector.
pub fn resolve_all<'a, R, I>(field: &str, items: I) -> Result<Vec<R>, BuildError>
where
    R: Resource,
    I: IntoIterator,
    I::Item: Into<Composite<'a, R>>,
{
    let resources = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let input: Composite<'a, R> = item.into();
            input.resolve(&format!("{field}[{index}]"))
        })
        .collect::<Result<Vec<R>, BuildError>>()?;

    debug!(
        resource_kind = kind_of::<R>(),
        field,
        count = resources.len(),
        "Resolved collection"
    );
    Ok(resources)
}

impl<'a, R: Resource, B: Builder<R>> From<&'a B> for Composite<'a, R> {
    fn from(builder: &'a B) -> Self {
        Composite::Builder(builder)
    }
}

impl<'a, R: Resource, B: Builder<R>> From<&'a mut B> for Composite<'a, R> {
    fn from(builder: &'a mut B) -> Self {
        Composite::Builder(builder)
    }
}

impl<R: Resource> From<Value> for Composite<'_, R> {
    fn from(literal: Value) -> Self {
        Composite::Literal(literal)
    }
}

impl<R: Resource> fmt::Debug for Composite<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Composite::Builder(_) => f.write_str("Builder(..)"),
            Composite::Resource(resource) => f.debug_tuple("Resource").field(resource).finish(),
            Composite::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockBuilder;
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    #[serde(deny_unknown_fields)]
    struct Variable {
        name: String,
        #[serde(default)]
        hide: bool,
    }

    impl Resource for Variable {
        fn validate(&self) -> Result<(), String> {
            if self.name.is_empty() {
                return Err("name must not be empty".to_string());
            }
            Ok(())
        }
    }

    fn variable(name: &str) -> Variable {
        Variable {
            name: name.to_string(),
            hide: false,
        }
    }

    #[test]
    fn test_resolve_builder() {
        let mut mock = MockBuilder::<Variable>::new();
        mock.expect_build().return_ok(variable("env"));

        let input: Composite<'_, Variable> = Composite::from(&mock);
        let resolved = input.resolve("variable").unwrap();
        assert_eq!(resolved, variable("env"));
        mock.verify();
    }

    #[test]
    fn test_resolve_builder_error_is_nested_under_field() {
        let mut mock = MockBuilder::<Variable>::new();
        mock.expect_build().return_err("datasource missing");

        let input: Composite<'_, Variable> = Composite::from(&mock);
        let err = input.resolve("variable").unwrap_err();
        assert!(matches!(err, BuildError::Nested { ref path, .. } if path == "variable"));
        assert_eq!(err.field(), Some("variable"));
    }

    #[test]
    fn test_resolve_literal_fills_defaults() {
        let input: Composite<'_, Variable> = json!({ "name": "env" }).into();
        assert_eq!(input.resolve("variable").unwrap(), variable("env"));
    }

    #[test]
    fn test_resolve_literal_shape_mismatch() {
        let input: Composite<'_, Variable> = json!({ "name": "env", "hidden": true }).into();
        let err = input.resolve("variable").unwrap_err();
        assert!(matches!(
            err,
            BuildError::ShapeMismatch { ref field, kind: "Variable", .. } if field == "variable"
        ));
    }

    #[test]
    fn test_resolve_resource_is_validated() {
        let err = Composite::Resource(variable(""))
            .resolve("variable")
            .unwrap_err();
        assert!(matches!(err, BuildError::InvalidValue { ref reason, .. } if reason == "name must not be empty"));
    }

    #[test]
    fn test_builder_output_is_validated_like_a_resource() {
        let mut mock = MockBuilder::<Variable>::new();
        mock.expect_build().return_ok(variable(""));

        let from_builder: Composite<'_, Variable> = Composite::from(&mock);
        let builder_err = from_builder.resolve("variable").unwrap_err();
        let value_err = Composite::Resource(variable(""))
            .resolve("variable")
            .unwrap_err();
        assert_eq!(builder_err.to_string(), value_err.to_string());
        assert!(matches!(builder_err, BuildError::InvalidValue { .. }));
    }

    #[test]
    fn test_resolve_all_preserves_order() {
        let mut first = MockBuilder::<Variable>::new();
        first.expect_build().return_ok(variable("b"));
        let inputs: Vec<Composite<'_, Variable>> = vec![
            Composite::Resource(variable("a")),
            Composite::from(&first),
            json!({ "name": "c" }).into(),
        ];

        let resolved = resolve_all::<Variable, _>("variables", inputs).unwrap();
        let names: Vec<&str> = resolved.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn test_resolve_all_empty() {
        let resolved = resolve_all::<Variable, _>("variables", Vec::<Composite<'_, Variable>>::new()).unwrap();
        assert!(resolved.is_empty());
    }

    #[test]
    fn test_resolve_all_stops_at_first_failure() {
        let mut failing = MockBuilder::<Variable>::new();
        failing.expect_build().return_err("boom");
        let mut never_built = MockBuilder::<Variable>::new();
        never_built.expect_build().return_ok(variable("late"));

        let inputs: Vec<Composite<'_, Variable>> = vec![
            Composite::Resource(variable("a")),
            Composite::from(&failing),
            Composite::from(&never_built),
        ];

        let err = resolve_all::<Variable, _>("variables", inputs).unwrap_err();
        assert!(matches!(err, BuildError::Nested { ref path, .. } if path == "variables[1]"));
        assert_eq!(failing.build_count(), 1);
        assert_eq!(never_built.build_count(), 0);
    }
}
