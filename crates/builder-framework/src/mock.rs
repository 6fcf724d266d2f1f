//! # Mock Builder & Testing Guide
//!
//! `MockBuilder<R>` implements [`Builder<R>`] but returns whatever results you queue up, and
//! counts how often it was built. It lets you test composite setters (error propagation,
//! resolution order, "stop at the first failure") without writing a failing builder by hand.
//!
//! ## When to use Mocks vs Real Builders
//!
//! | Feature | MockBuilder | Real Builder |
//! |---------|-------------|--------------|
//! | **Output** | Queued results | Defaults plus setters |
//! | **Failure** | Easy (`return_err`) | Never fails |
//! | **Call tracking** | `build_count()` | None |
//! | **Use Case** | Testing the *parent* setter | Testing the resource itself |
//!
//! ## Example
//!
//! ```rust
//! use builder_framework::mock::MockBuilder;
//! use builder_framework::{resolve_all, BuildError, Composite, Resource};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
//! struct Panel { title: String }
//! impl Resource for Panel {}
//!
//! let mut failing = MockBuilder::<Panel>::new();
//! failing.expect_build().return_err("datasource missing");
//! let mut untouched = MockBuilder::<Panel>::new();
//! untouched.expect_build().return_ok(Panel { title: "never".into() });
//!
//! let inputs: Vec<Composite<'_, Panel>> = vec![(&failing).into(), (&untouched).into()];
//! let err = resolve_all::<Panel, _>("panels", inputs).unwrap_err();
//!
//! assert_eq!(err.field(), Some("panels"));
//! assert_eq!(untouched.build_count(), 0);
//! failing.verify();
//! ```

use crate::builder::Builder;
use crate::error::BuildError;
use crate::resource::{kind_of, Resource};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

/// A queued result for the next `build` call.
enum Expectation<R> {
    Ok(R),
    Err(String),
}

/// A builder with expectation tracking for fluent testing.
///
/// Each `build` call pops the next queued expectation. Building with an empty queue
/// panics, so a test notices when a parent builds a child more often than expected.
pub struct MockBuilder<R: Resource> {
    expectations: Rc<RefCell<VecDeque<Expectation<R>>>>,
    calls: Cell<usize>,
}

impl<R: Resource> Default for MockBuilder<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resource> MockBuilder<R> {
    /// Creates a mock builder with no expectations.
    pub fn new() -> Self {
        Self {
            expectations: Rc::new(RefCell::new(VecDeque::new())),
            calls: Cell::new(0),
        }
    }

    /// Expects one more `build` call.
    pub fn expect_build(&mut self) -> BuildExpectationBuilder<R> {
        BuildExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Number of times `build` was called so far.
    pub fn build_count(&self) -> usize {
        self.calls.get()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.expectations.borrow().len();
        if remaining > 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

impl<R: Resource> Builder<R> for MockBuilder<R> {
    fn build(&self) -> Result<R, BuildError> {
        self.calls.set(self.calls.get() + 1);
        let expectation = self.expectations.borrow_mut().pop_front();
        match expectation {
            Some(Expectation::Ok(resource)) => Ok(resource),
            Some(Expectation::Err(reason)) => Err(BuildError::Builder {
                kind: kind_of::<R>(),
                reason,
            }),
            None => panic!("Unexpected build call: no expectations left"),
        }
    }
}

/// Builder for `build` expectations.
pub struct BuildExpectationBuilder<R> {
    expectations: Rc<RefCell<VecDeque<Expectation<R>>>>,
}

impl<R> BuildExpectationBuilder<R> {
    /// Sets the expectation to return a resource.
    pub fn return_ok(self, resource: R) {
        self.expectations
            .borrow_mut()
            .push_back(Expectation::Ok(resource));
    }

    /// Sets the expectation to fail with a [`BuildError::Builder`].
    pub fn return_err(self, reason: impl Into<String>) {
        self.expectations
            .borrow_mut()
            .push_back(Expectation::Err(reason.into()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    struct Row {
        title: String,
        collapsed: bool,
    }

    impl Resource for Row {}

    fn row(title: &str) -> Row {
        Row {
            title: title.to_string(),
            collapsed: false,
        }
    }

    #[test]
    fn test_mock_builder_with_expectations() {
        let mut mock = MockBuilder::<Row>::new();
        mock.expect_build().return_ok(row("Overview"));
        mock.expect_build().return_err("no panels");

        assert_eq!(mock.build().unwrap(), row("Overview"));
        let err = mock.build().unwrap_err();
        assert_eq!(err.to_string(), "Row builder failed: no panels");
        assert_eq!(mock.build_count(), 2);

        mock.verify();
    }

    #[test]
    #[should_panic(expected = "Not all expectations were met")]
    fn test_verify_panics_on_unmet_expectation() {
        let mut mock = MockBuilder::<Row>::new();
        mock.expect_build().return_ok(row("Overview"));
        mock.verify();
    }

    #[test]
    #[should_panic(expected = "Unexpected build call")]
    fn test_build_without_expectation_panics() {
        let mock = MockBuilder::<Row>::new();
        let _ = mock.build();
    }
}
