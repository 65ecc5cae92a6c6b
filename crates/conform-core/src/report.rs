//! # Violations and Validation Reports
//!
//! A [`Violation`] is one mismatch between a candidate document and a
//! schema constraint. A [`ValidationReport`] is the ordered collection of
//! violations produced by a single validation call; an empty report
//! signals conformance.
//!
//! Non-conformance is a negative result, not an error. Configuration
//! problems (malformed schemas, unreadable files) are modeled as errors
//! in `conform-schema` instead.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::path::InstancePath;

/// The class of schema constraint a violation reports against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConstraintKind {
    /// The instance type did not match the declared `type`.
    Type,
    /// A property marked `required: true` was missing from its enclosing object.
    Required,
    /// A string was shorter than `minLength`.
    MinLength,
    /// A string was longer than `maxLength`.
    MaxLength,
    /// A number was below `minimum`.
    Minimum,
    /// A number was above `maximum`.
    Maximum,
    /// An array had fewer elements than `minItems`.
    MinItems,
    /// An array had more elements than `maxItems`.
    MaxItems,
    /// An array declared `uniqueItems` contained duplicates.
    UniqueItems,
    /// A value was not a member of the declared `enum`.
    Enum,
    /// A string did not match the declared `format`.
    Format,
    /// An object member was not permitted by `additionalProperties`.
    AdditionalProperties,
}

impl ConstraintKind {
    /// The draft-03 keyword this constraint corresponds to.
    pub fn keyword(&self) -> &'static str {
        match self {
            ConstraintKind::Type => "type",
            ConstraintKind::Required => "required",
            ConstraintKind::MinLength => "minLength",
            ConstraintKind::MaxLength => "maxLength",
            ConstraintKind::Minimum => "minimum",
            ConstraintKind::Maximum => "maximum",
            ConstraintKind::MinItems => "minItems",
            ConstraintKind::MaxItems => "maxItems",
            ConstraintKind::UniqueItems => "uniqueItems",
            ConstraintKind::Enum => "enum",
            ConstraintKind::Format => "format",
            ConstraintKind::AdditionalProperties => "additionalProperties",
        }
    }
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A single validation violation with structured context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// Path to the violating (or missing) value in the instance.
    pub path: InstancePath,
    /// The constraint class that was violated.
    pub constraint: ConstraintKind,
    /// Human-readable description of the violation.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_root() {
            write!(f, "  (root): {} [{}]", self.message, self.constraint.keyword())
        } else {
            write!(f, "  {}: {} [{}]", self.path, self.message, self.constraint.keyword())
        }
    }
}

/// The outcome of validating one document against one schema.
///
/// Violations appear in walk order: lexicographic property order within
/// objects, index order within arrays. The order is deterministic, so
/// validating the same (schema, instance) pair twice yields equal reports.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    /// An empty (conformant) report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a violation. Used by validation engines while walking.
    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// True if the document conformed to the schema.
    pub fn is_conformant(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns a slice of all violations.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<Violation> {
        self.violations
    }
}

impl From<Vec<Violation>> for ValidationReport {
    fn from(violations: Vec<Violation>) -> Self {
        Self { violations }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_violation() -> Violation {
        Violation {
            path: InstancePath::root().child_key("collection").child_index(0).child_key("currency"),
            constraint: ConstraintKind::Required,
            message: "required property \"currency\" is missing".to_string(),
        }
    }

    #[test]
    fn empty_report_is_conformant() {
        let report = ValidationReport::new();
        assert!(report.is_conformant());
        assert!(report.is_empty());
        assert_eq!(report.len(), 0);
        assert_eq!(report.to_string(), "");
    }

    #[test]
    fn violation_display_includes_path_and_keyword() {
        let display = sample_violation().to_string();
        assert!(display.contains("/collection/0/currency"));
        assert!(display.contains("required property"));
        assert!(display.contains("[required]"));
    }

    #[test]
    fn violation_display_root() {
        let violation = Violation {
            path: InstancePath::root(),
            constraint: ConstraintKind::Type,
            message: "expected object, found string".to_string(),
        };
        assert!(violation.to_string().contains("(root)"));
    }

    #[test]
    fn report_display_joins_lines() {
        let mut report = ValidationReport::new();
        report.push(sample_violation());
        report.push(Violation {
            path: InstancePath::root().child_key("self"),
            constraint: ConstraintKind::Format,
            message: "\"not a uri\" is not a valid uri".to_string(),
        });
        let display = report.to_string();
        assert_eq!(display.lines().count(), 2);
        assert!(!report.is_conformant());
    }

    #[test]
    fn constraint_keywords_match_draft03_spelling() {
        assert_eq!(ConstraintKind::MaxLength.keyword(), "maxLength");
        assert_eq!(ConstraintKind::UniqueItems.keyword(), "uniqueItems");
        assert_eq!(ConstraintKind::AdditionalProperties.to_string(), "additionalProperties");
    }

    #[test]
    fn report_serializes_with_pointer_paths() {
        let report = ValidationReport::from(vec![sample_violation()]);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json["violations"][0]["path"],
            "/collection/0/currency"
        );
        assert_eq!(json["violations"][0]["constraint"], "required");
    }
}
