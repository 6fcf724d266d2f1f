//! # Build Errors
//!
//! This module defines the error type shared by every builder and composite setter.
//! Each variant names the field (or field path) it failed on, so a caller knows which
//! setter to fix without reading the whole resource.

/// Errors that can occur while resolving composite input or building a resource.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// A JSON literal does not deserialize into the target resource.
    #[error("{field}: literal does not match the {kind} shape: {source}")]
    ShapeMismatch {
        field: String,
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A resolved resource has the right shape but fails [`Resource::validate`](crate::Resource::validate).
    #[error("{field}: invalid {kind}: {reason}")]
    InvalidValue {
        field: String,
        kind: &'static str,
        reason: String,
    },

    /// A builder reported a failure of its own.
    #[error("{kind} builder failed: {reason}")]
    Builder { kind: &'static str, reason: String },

    /// A child builder failed while being resolved into `path`.
    #[error("{path}: {source}")]
    Nested {
        path: String,
        #[source]
        source: Box<BuildError>,
    },
}

impl BuildError {
    /// Wraps a child builder's error with the field path it was resolving into.
    pub fn nested(path: impl Into<String>, source: BuildError) -> Self {
        BuildError::Nested {
            path: path.into(),
            source: Box::new(source),
        }
    }

    /// The top-level field the error was raised for, without any element index.
    ///
    /// Returns `None` for [`BuildError::Builder`], which is raised by a builder before it
    /// is attached to any field.
    pub fn field(&self) -> Option<&str> {
        let path = match self {
            BuildError::ShapeMismatch { field, .. } => field,
            BuildError::InvalidValue { field, .. } => field,
            BuildError::Nested { path, .. } => path,
            BuildError::Builder { .. } => return None,
        };
        path.split('[').next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_strips_element_index() {
        let inner = BuildError::Builder {
            kind: "DashboardLink",
            reason: "boom".to_string(),
        };
        let error = BuildError::nested("links[2]", inner);
        assert_eq!(error.field(), Some("links"));
        assert_eq!(error.to_string(), "links[2]: DashboardLink builder failed: boom");
    }

    #[test]
    fn test_builder_error_has_no_field() {
        let error = BuildError::Builder {
            kind: "TimePicker",
            reason: "boom".to_string(),
        };
        assert_eq!(error.field(), None);
    }
}
