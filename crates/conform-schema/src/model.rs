//! # Draft-03 Schema Model
//!
//! Typed representation of the JSON Schema draft-03 subset the accounting
//! API corpus uses. Draft-03 differs from later drafts in two ways that
//! matter here:
//!
//! - `required` is a **boolean on the property**, not an array on the
//!   enclosing object. `"currency": {"type": "string", "required": true}`
//!   means the enclosing object must contain a `currency` member.
//! - `exclusiveMinimum` / `exclusiveMaximum` are booleans qualifying
//!   `minimum` / `maximum`, not standalone bounds.
//!
//! The corpus also carries informational keywords (`sortable`,
//! `filterable`, `readOnly`, `description`, `restdocs`) that are parsed
//! and surfaced but never enforced. Unrecognized keywords are preserved
//! in `extensions` without interpretation.
//!
//! Parsing failures and structurally-unusable schemas surface as
//! [`SchemaError`] — a configuration error, distinct from validation
//! failure.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::SchemaError;

/// Simple instance types defined by draft-03.
///
/// `any` matches every instance; draft-03 also allows a property to
/// declare a union of simple types (`["string", "null"]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstanceType {
    String,
    Number,
    Integer,
    Boolean,
    Object,
    Array,
    Null,
    Any,
}

impl InstanceType {
    /// The draft-03 name of the type.
    pub fn name(&self) -> &'static str {
        match self {
            InstanceType::String => "string",
            InstanceType::Number => "number",
            InstanceType::Integer => "integer",
            InstanceType::Boolean => "boolean",
            InstanceType::Object => "object",
            InstanceType::Array => "array",
            InstanceType::Null => "null",
            InstanceType::Any => "any",
        }
    }
}

impl fmt::Display for InstanceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One value or a list of values (draft-03 union types).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// Iterate over the contained values, one or many.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        match self {
            OneOrMany::One(value) => std::slice::from_ref(value).iter(),
            OneOrMany::Many(values) => values.iter(),
        }
    }
}

/// The `additionalProperties` keyword: a boolean switch or a schema
/// constraining members not named in `properties`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
    /// `true` permits unknown members untouched; `false` forbids them.
    Allowed(bool),
    /// Unknown members must conform to this schema.
    Schema(Box<SchemaObject>),
}

fn is_false(b: &bool) -> bool {
    !*b
}

/// A recursive draft-03 schema node.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SchemaObject {
    /// The `type` keyword: a simple type or a union of simple types.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<OneOrMany<InstanceType>>,

    /// Draft-03 per-property required marker. Meaningful on property
    /// subschemas; the enclosing object must contain the key when `true`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    /// Named members of an object instance.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, SchemaObject>,

    /// Policy for members not named in `properties`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<AdditionalProperties>,

    /// Schema every array element must conform to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaObject>>,

    /// The `enum` keyword: permitted values, compared by deep equality.
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,

    /// Minimum string length, in characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,

    /// Maximum string length, in characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,

    /// Numeric lower bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,

    /// Numeric upper bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,

    /// Whether `minimum` is exclusive (draft-03 boolean form).
    #[serde(skip_serializing_if = "is_false")]
    pub exclusive_minimum: bool,

    /// Whether `maximum` is exclusive (draft-03 boolean form).
    #[serde(skip_serializing_if = "is_false")]
    pub exclusive_maximum: bool,

    /// Minimum array length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_items: Option<u64>,

    /// Maximum array length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<u64>,

    /// Whether array elements must be pairwise distinct.
    #[serde(skip_serializing_if = "is_false")]
    pub unique_items: bool,

    /// The `format` keyword. Enforced for the formats the corpus uses;
    /// unrecognized names are advisory and ignored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Short display name of the described value (e.g. "Customer").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Prose description. Informational only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the API accepts this field in sort expressions. Informational only.
    #[serde(skip_serializing_if = "is_false")]
    pub sortable: bool,

    /// Whether the API accepts this field in filter expressions. Informational only.
    #[serde(skip_serializing_if = "is_false")]
    pub filterable: bool,

    /// Whether the field is server-assigned. Informational only.
    #[serde(skip_serializing_if = "is_false")]
    pub read_only: bool,

    /// Keywords this model does not interpret, preserved verbatim.
    #[serde(flatten)]
    pub extensions: Map<String, Value>,
}

impl SchemaObject {
    /// True if the declared `type` permits instances of the given simple
    /// type. An absent `type`, and the type `any`, permit everything.
    pub fn permits(&self, candidate: InstanceType) -> bool {
        match &self.instance_type {
            None => true,
            Some(declared) => declared
                .iter()
                .any(|t| *t == InstanceType::Any || *t == candidate),
        }
    }

    /// Check that this node (and every node under it) is a usable
    /// draft-03 schema. `pointer` locates the node for diagnostics.
    fn check_well_formed(&self, pointer: &str) -> Result<(), SchemaError> {
        if let Some(values) = &self.enum_values {
            if values.is_empty() {
                return Err(SchemaError::Malformed {
                    pointer: format!("{pointer}/enum"),
                    reason: "enum must list at least one permitted value".to_string(),
                });
            }
        }

        if let (Some(min), Some(max)) = (self.min_length, self.max_length) {
            if min > max {
                return Err(SchemaError::Malformed {
                    pointer: format!("{pointer}/minLength"),
                    reason: format!("minLength {min} exceeds maxLength {max}"),
                });
            }
        }

        if let (Some(min), Some(max)) = (self.min_items, self.max_items) {
            if min > max {
                return Err(SchemaError::Malformed {
                    pointer: format!("{pointer}/minItems"),
                    reason: format!("minItems {min} exceeds maxItems {max}"),
                });
            }
        }

        if let (Some(min), Some(max)) = (self.minimum, self.maximum) {
            if min > max {
                return Err(SchemaError::Malformed {
                    pointer: format!("{pointer}/minimum"),
                    reason: format!("minimum {min} exceeds maximum {max}"),
                });
            }
        }

        if self.items.is_some()
            && !self.permits(InstanceType::Array)
        {
            return Err(SchemaError::Malformed {
                pointer: format!("{pointer}/items"),
                reason: "items is only meaningful for array schemas".to_string(),
            });
        }

        if !self.properties.is_empty() && !self.permits(InstanceType::Object) {
            return Err(SchemaError::Malformed {
                pointer: format!("{pointer}/properties"),
                reason: "properties is only meaningful for object schemas".to_string(),
            });
        }

        for (key, property) in &self.properties {
            property.check_well_formed(&format!(
                "{pointer}/properties/{}",
                escape_token(key)
            ))?;
        }

        if let Some(items) = &self.items {
            items.check_well_formed(&format!("{pointer}/items"))?;
        }

        if let Some(AdditionalProperties::Schema(extra)) = &self.additional_properties {
            extra.check_well_formed(&format!("{pointer}/additionalProperties"))?;
        }

        Ok(())
    }
}

/// The root of one schema document.
///
/// One file in the corpus corresponds to one HTTP resource/verb
/// combination of the remote API; `restdocs` links into the hosted REST
/// documentation for that combination.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RootSchema {
    /// The `$schema` keyword, nominally the draft-03 meta-schema URI.
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    pub meta_schema: Option<String>,

    /// Documentation URL for the resource/verb this schema describes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restdocs: Option<String>,

    /// The root schema node.
    #[serde(flatten)]
    pub schema: SchemaObject,
}

impl RootSchema {
    /// Parse a schema from its JSON text and check it for well-formedness.
    ///
    /// # Errors
    ///
    /// [`SchemaError::Parse`] if the text is not JSON or does not fit the
    /// draft-03 model; [`SchemaError::Malformed`] if it parses but is not
    /// a usable schema (empty `enum`, inverted bounds, keywords applied
    /// to impossible types).
    pub fn from_json_str(text: &str) -> Result<Self, SchemaError> {
        let root: RootSchema = serde_json::from_str(text).map_err(|e| SchemaError::Parse {
            reason: e.to_string(),
        })?;
        root.schema.check_well_formed("#")?;
        Ok(root)
    }

    /// Parse a schema from an already-parsed JSON value.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`RootSchema::from_json_str`].
    pub fn from_value(value: Value) -> Result<Self, SchemaError> {
        let root: RootSchema = serde_json::from_value(value).map_err(|e| SchemaError::Parse {
            reason: e.to_string(),
        })?;
        root.schema.check_well_formed("#")?;
        Ok(root)
    }

    /// The document title, if the schema declares one.
    pub fn title(&self) -> Option<&str> {
        self.schema.title.as_deref()
    }
}

fn escape_token(token: &str) -> String {
    token.replace('~', "~0").replace('/', "~1")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_draft03_property_schema() {
        let root = RootSchema::from_value(json!({
            "$schema": "http://json-schema.org/draft-03/schema#",
            "title": "Customer",
            "restdocs": "https://restdocs.example.com/#get-customers",
            "type": "object",
            "properties": {
                "currency": {
                    "type": "string",
                    "required": true,
                    "minLength": 3,
                    "maxLength": 3,
                    "sortable": true,
                    "filterable": true,
                    "description": "Default payment currency, ISO 4217."
                },
                "balance": {
                    "type": "number",
                    "readOnly": true
                }
            }
        }))
        .unwrap();

        assert_eq!(root.title(), Some("Customer"));
        assert_eq!(
            root.restdocs.as_deref(),
            Some("https://restdocs.example.com/#get-customers")
        );

        let currency = &root.schema.properties["currency"];
        assert_eq!(currency.required, Some(true));
        assert_eq!(currency.min_length, Some(3));
        assert_eq!(currency.max_length, Some(3));
        assert!(currency.sortable);
        assert!(currency.filterable);
        assert!(!currency.read_only);

        let balance = &root.schema.properties["balance"];
        assert!(balance.read_only);
        assert_eq!(balance.required, None);
    }

    #[test]
    fn parses_union_types() {
        let root = RootSchema::from_value(json!({
            "type": "object",
            "properties": {
                "phone": {"type": ["string", "null"]}
            }
        }))
        .unwrap();

        let phone = &root.schema.properties["phone"];
        assert!(phone.permits(InstanceType::String));
        assert!(phone.permits(InstanceType::Null));
        assert!(!phone.permits(InstanceType::Number));
    }

    #[test]
    fn any_type_permits_everything() {
        let root = RootSchema::from_value(json!({
            "type": "object",
            "properties": {"x": {"type": "any"}}
        }))
        .unwrap();
        let x = &root.schema.properties["x"];
        assert!(x.permits(InstanceType::Object));
        assert!(x.permits(InstanceType::Null));
    }

    #[test]
    fn preserves_unknown_keywords_in_extensions() {
        let root = RootSchema::from_value(json!({
            "type": "object",
            "divisibleBy": 5
        }))
        .unwrap();
        assert_eq!(root.schema.extensions["divisibleBy"], json!(5));
    }

    #[test]
    fn rejects_non_model_json() {
        let err = RootSchema::from_json_str(r#"{"type": "object", "maxLength": "long"}"#)
            .unwrap_err();
        assert!(matches!(err, SchemaError::Parse { .. }), "got: {err}");
    }

    #[test]
    fn rejects_empty_enum() {
        let err = RootSchema::from_value(json!({
            "type": "object",
            "properties": {"kind": {"type": "string", "enum": []}}
        }))
        .unwrap_err();
        match err {
            SchemaError::Malformed { pointer, .. } => {
                assert_eq!(pointer, "#/properties/kind/enum");
            }
            other => panic!("expected Malformed, got: {other}"),
        }
    }

    #[test]
    fn rejects_inverted_length_bounds() {
        let err = RootSchema::from_value(json!({
            "type": "object",
            "properties": {"name": {"type": "string", "minLength": 10, "maxLength": 3}}
        }))
        .unwrap_err();
        assert!(matches!(err, SchemaError::Malformed { .. }), "got: {err}");
    }

    #[test]
    fn rejects_items_on_non_array() {
        let err = RootSchema::from_value(json!({
            "type": "object",
            "properties": {
                "name": {"type": "string", "items": {"type": "string"}}
            }
        }))
        .unwrap_err();
        match err {
            SchemaError::Malformed { pointer, .. } => {
                assert_eq!(pointer, "#/properties/name/items");
            }
            other => panic!("expected Malformed, got: {other}"),
        }
    }

    #[test]
    fn items_permitted_on_untyped_node() {
        // A node with no declared type may still constrain elements.
        RootSchema::from_value(json!({
            "properties": {"tags": {"items": {"type": "string"}}}
        }))
        .unwrap();
    }

    #[test]
    fn rejects_inverted_numeric_bounds_in_nested_items() {
        let err = RootSchema::from_value(json!({
            "type": "object",
            "properties": {
                "collection": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "customerNumber": {"type": "integer", "minimum": 10, "maximum": 1}
                        }
                    }
                }
            }
        }))
        .unwrap_err();
        match err {
            SchemaError::Malformed { pointer, .. } => {
                assert_eq!(
                    pointer,
                    "#/properties/collection/items/properties/customerNumber/minimum"
                );
            }
            other => panic!("expected Malformed, got: {other}"),
        }
    }

    #[test]
    fn additional_properties_parses_both_forms() {
        let root = RootSchema::from_value(json!({
            "type": "object",
            "additionalProperties": false
        }))
        .unwrap();
        assert_eq!(
            root.schema.additional_properties,
            Some(AdditionalProperties::Allowed(false))
        );

        let root = RootSchema::from_value(json!({
            "type": "object",
            "additionalProperties": {"type": "string"}
        }))
        .unwrap();
        assert!(matches!(
            root.schema.additional_properties,
            Some(AdditionalProperties::Schema(_))
        ));
    }
}
