//! # Field Catalog
//!
//! Flattens the property tree of a schema into per-field rows carrying
//! the informational metadata the corpus annotates fields with:
//! `sortable`, `filterable`, `readOnly`, `description`, bounds, and
//! format. The validator never enforces any of this; it exists for
//! documentation tooling and the `conform describe` command.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{InstanceType, OneOrMany, RootSchema, SchemaObject};

/// One field of a resource, as declared by its schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Dotted path to the field; array elements are marked with `[]`
    /// (e.g. `collection[].customerGroup.self`).
    pub path: String,
    /// Declared type name(s), `|`-joined for unions, or `unspecified`.
    pub instance_type: String,
    /// Whether the enclosing object must contain the field.
    pub required: bool,
    /// Whether the API accepts the field in sort expressions.
    pub sortable: bool,
    /// Whether the API accepts the field in filter expressions.
    pub filterable: bool,
    /// Whether the field is server-assigned.
    pub read_only: bool,
    /// Maximum string length, when declared.
    pub max_length: Option<u64>,
    /// Declared format name, when any.
    pub format: Option<String>,
    /// Prose description, when any.
    pub description: Option<String>,
}

impl fmt::Display for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.instance_type)?;

        let mut notes = Vec::new();
        if self.required {
            notes.push("required".to_string());
        }
        if self.sortable {
            notes.push("sortable".to_string());
        }
        if self.filterable {
            notes.push("filterable".to_string());
        }
        if self.read_only {
            notes.push("read-only".to_string());
        }
        if let Some(max) = self.max_length {
            notes.push(format!("maxLength {max}"));
        }
        if let Some(format) = &self.format {
            notes.push(format!("format {format}"));
        }
        if !notes.is_empty() {
            write!(f, " ({})", notes.join(", "))?;
        }

        if let Some(description) = &self.description {
            write!(f, " - {description}")?;
        }
        Ok(())
    }
}

/// The flattened field list of one schema document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldCatalog {
    fields: Vec<FieldSpec>,
}

impl FieldCatalog {
    /// Build the catalog by walking the schema's property tree.
    ///
    /// Rows appear in walk order: lexicographic within an object, with
    /// array element fields directly after the array field itself.
    pub fn from_schema(schema: &RootSchema) -> Self {
        let mut fields = Vec::new();
        collect(&schema.schema, "", &mut fields);
        Self { fields }
    }

    /// All fields, in walk order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the schema declares no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Fields the API accepts in sort expressions.
    pub fn sortable_fields(&self) -> Vec<&FieldSpec> {
        self.fields.iter().filter(|f| f.sortable).collect()
    }

    /// Fields the API accepts in filter expressions.
    pub fn filterable_fields(&self) -> Vec<&FieldSpec> {
        self.fields.iter().filter(|f| f.filterable).collect()
    }
}

fn type_label(instance_type: &Option<OneOrMany<InstanceType>>) -> String {
    match instance_type {
        None => "unspecified".to_string(),
        Some(declared) => {
            let names: Vec<&str> = declared.iter().map(InstanceType::name).collect();
            names.join("|")
        }
    }
}

fn collect(node: &SchemaObject, prefix: &str, out: &mut Vec<FieldSpec>) {
    if let Some(items) = &node.items {
        collect(items, &format!("{prefix}[]"), out);
    }

    for (key, property) in &node.properties {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };

        out.push(FieldSpec {
            path: path.clone(),
            instance_type: type_label(&property.instance_type),
            required: property.required == Some(true),
            sortable: property.sortable,
            filterable: property.filterable,
            read_only: property.read_only,
            max_length: property.max_length,
            format: property.format.clone(),
            description: property.description.clone(),
        });

        collect(property, &path, out);
    }
}
