//! Schema seam for declared runtime validation.
//!
//! # Design
//! Serde bounds (`Serialize` / `DeserializeOwned`) carry the structural shape
//! of every payload; `Schema` carries the declared invariants on top — range
//! checks, cross-field rules, anything the wire shape alone cannot express.
//! The validation engine itself is the caller's business: this crate only
//! calls `validate` at the right points in the pipeline and maps failures
//! into `ApiError` variants.

use thiserror::Error;

/// A single failed check, addressed by a field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Dotted path to the offending field, e.g. `data.code`. Empty for
    /// whole-value checks.
    pub path: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// One or more failed checks from a `Schema`.
#[derive(Debug, Clone, Error)]
#[error("{}", render_issues(.issues))]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationError {
    /// Single-issue error, the common case.
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            issues: vec![ValidationIssue::new(path, message)],
        }
    }

    pub fn push(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.issues.push(ValidationIssue::new(path, message));
    }
}

fn render_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(|issue| {
            if issue.path.is_empty() {
                issue.message.clone()
            } else {
                format!("{}: {}", issue.path, issue.message)
            }
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// A declared set of checks over a value of type `T`.
///
/// Request bodies and query parameters are validated before encoding,
/// response bodies after JSON parsing.
pub trait Schema<T: ?Sized> {
    fn validate(&self, value: &T) -> Result<(), ValidationError>;
}

/// Adapter letting a plain closure serve as a `Schema`.
pub struct SchemaFn<F>(F);

impl<T: ?Sized, F> Schema<T> for SchemaFn<F>
where
    F: Fn(&T) -> Result<(), ValidationError>,
{
    fn validate(&self, value: &T) -> Result<(), ValidationError> {
        (self.0)(value)
    }
}

/// Wrap a closure as a `Schema`.
pub fn schema_fn<T: ?Sized, F>(f: F) -> SchemaFn<F>
where
    F: Fn(&T) -> Result<(), ValidationError>,
{
    SchemaFn(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_issue_renders_path_and_message() {
        let err = ValidationError::new("data.code", "expected number");
        assert_eq!(err.to_string(), "data.code: expected number");
    }

    #[test]
    fn multiple_issues_are_joined() {
        let mut err = ValidationError::new("param1", "required");
        err.push("param2", "expected number, received string");
        assert_eq!(
            err.to_string(),
            "param1: required; param2: expected number, received string"
        );
    }

    #[test]
    fn empty_path_renders_message_only() {
        let err = ValidationError::new("", "must not be empty");
        assert_eq!(err.to_string(), "must not be empty");
    }

    #[test]
    fn schema_fn_forwards_to_closure() {
        let positive = schema_fn(|value: &i64| {
            if *value > 0 {
                Ok(())
            } else {
                Err(ValidationError::new("", "must be positive"))
            }
        });
        assert!(positive.validate(&1).is_ok());
        assert!(positive.validate(&-1).is_err());
    }
}
