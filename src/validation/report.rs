use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Key used for failures that belong to the whole record rather than a field.
pub const RECORD_SCOPE: &str = "";

/// A single failed rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationFailure {
    pub message: String,
}

impl ValidationFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Every failure collected during one validation pass, grouped by field.
///
/// Fields are ordered by name; messages within a field keep the order in
/// which their rules ran.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationReport {
    errors: BTreeMap<String, Vec<String>>,
}

impl ValidationReport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, failure: ValidationFailure) {
        self.errors
            .entry(field.into())
            .or_default()
            .push(failure.message);
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn field(&self, name: &str) -> &[String] {
        self.errors.get(name).map_or(&[], Vec::as_slice)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    /// Total number of failure messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub const fn errors(&self) -> &BTreeMap<String, Vec<String>> {
        &self.errors
    }

    pub(crate) fn absorb(&mut self, errors: &validator::ValidationErrors) {
        for (field, field_errors) in errors.field_errors() {
            for err in field_errors {
                let message = err
                    .message
                    .as_ref()
                    .map_or_else(|| err.code.to_string(), ToString::to_string);
                self.add(field.to_string(), ValidationFailure::new(message));
            }
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.errors {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                first = false;
                if field.is_empty() {
                    write!(f, "{message}")?;
                } else {
                    write!(f, "{field}: {message}")?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_groups_by_field() {
        let mut report = ValidationReport::new();
        assert!(report.is_valid());

        report.add("rating", ValidationFailure::new("first"));
        report.add("genre", ValidationFailure::new("second"));
        report.add("rating", ValidationFailure::new("third"));

        assert!(!report.is_valid());
        assert_eq!(report.len(), 3);
        assert_eq!(report.field("rating"), ["first", "third"]);
        assert_eq!(report.field("title"), [] as [String; 0]);
        assert_eq!(report.fields().collect::<Vec<_>>(), ["genre", "rating"]);
        assert_eq!(
            report.to_string(),
            "genre: second; rating: first; rating: third"
        );
    }

    #[test]
    fn test_report_serializes_as_map() {
        let mut report = ValidationReport::new();
        report.add(RECORD_SCOPE, ValidationFailure::new("whole record"));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json, serde_json::json!({ "": ["whole record"] }));
    }
}
