//! # Draft-03 Validation Engine
//!
//! Walks a candidate document against a [`RootSchema`] and collects
//! [`Violation`]s into a [`ValidationReport`]. Validation is a pure,
//! synchronous computation over immutable inputs; callers may run any
//! number of validations concurrently with no coordination.
//!
//! ## Walk order
//!
//! Object members are visited in lexicographic key order and array
//! elements in index order, so reports are deterministic: validating the
//! same (schema, instance) pair twice yields identical reports.
//!
//! ## Cascading
//!
//! A type mismatch records one `type` violation; the type-specific
//! keywords of the mismatched schema are then simply inapplicable to the
//! actual value shape, so no secondary noise is produced. `enum` applies
//! to every shape.

use chrono::{DateTime, NaiveDate, NaiveTime};
use conform_core::{ConstraintKind, InstancePath, ValidationReport, Violation};
use serde_json::{Map, Number, Value};

use crate::model::{AdditionalProperties, InstanceType, RootSchema, SchemaObject};

impl RootSchema {
    /// Validate a candidate document against this schema.
    ///
    /// An empty report signals conformance. Non-conformance is a
    /// negative result, not an error; configuration problems are caught
    /// earlier, at schema load time.
    pub fn validate(&self, instance: &Value) -> ValidationReport {
        let mut report = ValidationReport::new();
        check_node(&self.schema, instance, &InstancePath::root(), &mut report);
        report
    }
}

fn check_node(
    schema: &SchemaObject,
    value: &Value,
    path: &InstancePath,
    report: &mut ValidationReport,
) {
    check_type(schema, value, path, report);
    check_enum(schema, value, path, report);

    match value {
        Value::String(s) => check_string(schema, s, path, report),
        Value::Number(n) => check_number(schema, n, path, report),
        Value::Array(elements) => check_array(schema, elements, path, report),
        Value::Object(members) => check_object(schema, members, path, report),
        Value::Bool(_) | Value::Null => {}
    }
}

/// The draft-03 name of the shape a JSON value actually has.
fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) => {
            if is_integral(n) {
                "integer"
            } else {
                "number"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Draft-03 `integer` means a number without a fractional part; `2.0`
/// counts, `2.5` does not.
fn is_integral(n: &Number) -> bool {
    n.is_i64() || n.is_u64() || n.as_f64().is_some_and(|f| f.fract() == 0.0)
}

fn type_matches(declared: InstanceType, value: &Value) -> bool {
    match declared {
        InstanceType::Any => true,
        InstanceType::Null => value.is_null(),
        InstanceType::Boolean => value.is_boolean(),
        InstanceType::Object => value.is_object(),
        InstanceType::Array => value.is_array(),
        InstanceType::String => value.is_string(),
        InstanceType::Number => value.is_number(),
        InstanceType::Integer => match value {
            Value::Number(n) => is_integral(n),
            _ => false,
        },
    }
}

fn check_type(
    schema: &SchemaObject,
    value: &Value,
    path: &InstancePath,
    report: &mut ValidationReport,
) {
    let Some(declared) = &schema.instance_type else {
        return;
    };
    if declared.iter().any(|t| type_matches(*t, value)) {
        return;
    }
    let expected: Vec<&str> = declared.iter().map(InstanceType::name).collect();
    report.push(Violation {
        path: path.clone(),
        constraint: ConstraintKind::Type,
        message: format!(
            "expected {}, found {}",
            expected.join(" or "),
            value_type_name(value)
        ),
    });
}

fn check_enum(
    schema: &SchemaObject,
    value: &Value,
    path: &InstancePath,
    report: &mut ValidationReport,
) {
    let Some(permitted) = &schema.enum_values else {
        return;
    };
    if permitted.iter().any(|candidate| candidate == value) {
        return;
    }
    let listed: Vec<String> = permitted.iter().map(Value::to_string).collect();
    report.push(Violation {
        path: path.clone(),
        constraint: ConstraintKind::Enum,
        message: format!(
            "{value} is not one of the permitted values: {}",
            listed.join(", ")
        ),
    });
}

fn check_string(
    schema: &SchemaObject,
    s: &str,
    path: &InstancePath,
    report: &mut ValidationReport,
) {
    let length = s.chars().count() as u64;

    if let Some(min) = schema.min_length {
        if length < min {
            report.push(Violation {
                path: path.clone(),
                constraint: ConstraintKind::MinLength,
                message: format!("string is {length} characters long, minLength is {min}"),
            });
        }
    }

    if let Some(max) = schema.max_length {
        if length > max {
            report.push(Violation {
                path: path.clone(),
                constraint: ConstraintKind::MaxLength,
                message: format!("string is {length} characters long, maxLength is {max}"),
            });
        }
    }

    if let Some(format) = schema.format.as_deref() {
        if !format_matches(format, s) {
            report.push(Violation {
                path: path.clone(),
                constraint: ConstraintKind::Format,
                message: format!("{s:?} is not a valid {format}"),
            });
        }
    }
}

/// Check a string against the draft-03 formats the corpus uses.
/// Unrecognized format names are advisory and pass.
fn format_matches(format: &str, s: &str) -> bool {
    match format {
        "date-time" => DateTime::parse_from_rfc3339(s).is_ok(),
        "date" => NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok(),
        "time" => NaiveTime::parse_from_str(s, "%H:%M:%S").is_ok(),
        "uri" => url::Url::parse(s).is_ok(),
        "email" => email_shaped(s),
        "ip-address" => s.parse::<std::net::Ipv4Addr>().is_ok(),
        _ => true,
    }
}

/// Minimal structural check: one `@`, non-empty local part, dotted domain.
fn email_shaped(s: &str) -> bool {
    let mut parts = s.splitn(2, '@');
    let (Some(local), Some(domain)) = (parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

fn check_number(
    schema: &SchemaObject,
    n: &Number,
    path: &InstancePath,
    report: &mut ValidationReport,
) {
    let Some(actual) = n.as_f64() else {
        return;
    };

    if let Some(min) = schema.minimum {
        let ok = if schema.exclusive_minimum {
            actual > min
        } else {
            actual >= min
        };
        if !ok {
            report.push(Violation {
                path: path.clone(),
                constraint: ConstraintKind::Minimum,
                message: format!(
                    "value {actual} violates minimum {min}{}",
                    if schema.exclusive_minimum { " (exclusive)" } else { "" }
                ),
            });
        }
    }

    if let Some(max) = schema.maximum {
        let ok = if schema.exclusive_maximum {
            actual < max
        } else {
            actual <= max
        };
        if !ok {
            report.push(Violation {
                path: path.clone(),
                constraint: ConstraintKind::Maximum,
                message: format!(
                    "value {actual} violates maximum {max}{}",
                    if schema.exclusive_maximum { " (exclusive)" } else { "" }
                ),
            });
        }
    }
}

fn check_array(
    schema: &SchemaObject,
    elements: &[Value],
    path: &InstancePath,
    report: &mut ValidationReport,
) {
    let count = elements.len() as u64;

    if let Some(min) = schema.min_items {
        if count < min {
            report.push(Violation {
                path: path.clone(),
                constraint: ConstraintKind::MinItems,
                message: format!("array has {count} items, minItems is {min}"),
            });
        }
    }

    if let Some(max) = schema.max_items {
        if count > max {
            report.push(Violation {
                path: path.clone(),
                constraint: ConstraintKind::MaxItems,
                message: format!("array has {count} items, maxItems is {max}"),
            });
        }
    }

    if schema.unique_items {
        for (later, element) in elements.iter().enumerate() {
            if let Some(earlier) = elements[..later].iter().position(|seen| seen == element) {
                report.push(Violation {
                    path: path.child_index(later),
                    constraint: ConstraintKind::UniqueItems,
                    message: format!(
                        "duplicate of item {earlier}, uniqueItems requires distinct values"
                    ),
                });
            }
        }
    }

    if let Some(item_schema) = &schema.items {
        for (index, element) in elements.iter().enumerate() {
            check_node(item_schema, element, &path.child_index(index), report);
        }
    }
}

fn check_object(
    schema: &SchemaObject,
    members: &Map<String, Value>,
    path: &InstancePath,
    report: &mut ValidationReport,
) {
    for (key, property) in &schema.properties {
        match members.get(key) {
            Some(member) => check_node(property, member, &path.child_key(key), report),
            None => {
                if property.required == Some(true) {
                    report.push(Violation {
                        path: path.child_key(key),
                        constraint: ConstraintKind::Required,
                        message: format!("required property {key:?} is missing"),
                    });
                }
            }
        }
    }

    match &schema.additional_properties {
        Some(AdditionalProperties::Allowed(false)) => {
            for key in members.keys() {
                if !schema.properties.contains_key(key) {
                    report.push(Violation {
                        path: path.child_key(key),
                        constraint: ConstraintKind::AdditionalProperties,
                        message: format!("property {key:?} is not defined by the schema"),
                    });
                }
            }
        }
        Some(AdditionalProperties::Schema(extra)) => {
            for (key, member) in members {
                if !schema.properties.contains_key(key) {
                    check_node(extra, member, &path.child_key(key), report);
                }
            }
        }
        Some(AdditionalProperties::Allowed(true)) | None => {}
    }
}
