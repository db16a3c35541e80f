//! Event schema model
//!
//! Mirrors the schema vocabulary of the analytics client that consumes the
//! catalog: leaf fields carry a type tag, objects carry `properties`, arrays
//! carry `items`, and any node may carry `_meta` with a description and an
//! optionality flag. Schemas are data only; validation of payloads against them
//! happens in the analytics client.

use std::fmt::{self, Display};

use serde::{
    Serialize, Serializer,
    ser::SerializeMap
};

/// Scalar type tags understood by the analytics client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// 64-bit integer
    Long,
    /// Exact-match string
    Keyword,
    /// ISO-8601 date
    Date,
    /// Free text
    Text,
    /// true/false
    Boolean
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Long => "long",
            FieldType::Keyword => "keyword",
            FieldType::Date => "date",
            FieldType::Text => "text",
            FieldType::Boolean => "boolean"
        }
    }
}

impl Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// `_meta` block attached to a schema node
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optional:    Option<bool>
}

/// A single node of an event schema
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    /// Scalar field, serialized as `{ "type": .., "_meta": .. }`
    Field { field_type: FieldType, meta: Option<FieldMeta> },
    /// Array field, serialized as `{ "type": "array", "items": .., "_meta": .. }`
    Array { items: Box<SchemaNode>, meta: Option<FieldMeta> },
    /// Nested object, serialized as `{ "properties": .., "_meta": .. }`
    Object { properties: Schema, meta: Option<FieldMeta> }
}

impl SchemaNode {
    fn scalar(field_type: FieldType, description: impl Into<String>) -> Self {
        SchemaNode::Field {
            field_type,
            meta: Some(FieldMeta { description: Some(description.into()), optional: None })
        }
    }

    pub fn long(description: impl Into<String>) -> Self {
        Self::scalar(FieldType::Long, description)
    }

    pub fn keyword(description: impl Into<String>) -> Self {
        Self::scalar(FieldType::Keyword, description)
    }

    pub fn date(description: impl Into<String>) -> Self {
        Self::scalar(FieldType::Date, description)
    }

    pub fn text(description: impl Into<String>) -> Self {
        Self::scalar(FieldType::Text, description)
    }

    pub fn boolean(description: impl Into<String>) -> Self {
        Self::scalar(FieldType::Boolean, description)
    }

    /// Array of `items`, without `_meta`
    pub fn array(items: SchemaNode) -> Self {
        SchemaNode::Array { items: Box::new(items), meta: None }
    }

    /// Nested object, without `_meta`
    pub fn object(properties: Schema) -> Self {
        SchemaNode::Object { properties, meta: None }
    }

    /// Set the `_meta.description` of this node
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.meta_mut().description = Some(description.into());
        self
    }

    /// Mark this node `_meta.optional: true`
    pub fn optional(mut self) -> Self {
        self.meta_mut().optional = Some(true);
        self
    }

    /// Mark this node `_meta.optional: false`
    pub fn required(mut self) -> Self {
        self.meta_mut().optional = Some(false);
        self
    }

    pub fn meta(&self) -> Option<&FieldMeta> {
        match self {
            SchemaNode::Field { meta, .. } | SchemaNode::Array { meta, .. } | SchemaNode::Object { meta, .. } => {
                meta.as_ref()
            }
        }
    }

    fn meta_mut(&mut self) -> &mut FieldMeta {
        match self {
            SchemaNode::Field { meta, .. } | SchemaNode::Array { meta, .. } | SchemaNode::Object { meta, .. } => {
                meta.get_or_insert_with(FieldMeta::default)
            }
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.meta().and_then(|meta| meta.description.as_deref())
    }

    pub fn is_optional(&self) -> bool {
        self.meta().and_then(|meta| meta.optional).unwrap_or(false)
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            SchemaNode::Field { field_type, .. } => FieldKind::Scalar(*field_type),
            SchemaNode::Array { .. } => FieldKind::Array,
            SchemaNode::Object { .. } => FieldKind::Object
        }
    }
}

impl Serialize for SchemaNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        match self {
            SchemaNode::Field { field_type, meta } => {
                map.serialize_entry("type", field_type)?;
                if let Some(meta) = meta {
                    map.serialize_entry("_meta", meta)?;
                }
            }
            SchemaNode::Array { items, meta } => {
                map.serialize_entry("type", "array")?;
                map.serialize_entry("items", items)?;
                if let Some(meta) = meta {
                    map.serialize_entry("_meta", meta)?;
                }
            }
            SchemaNode::Object { properties, meta } => {
                map.serialize_entry("properties", properties)?;
                if let Some(meta) = meta {
                    map.serialize_entry("_meta", meta)?;
                }
            }
        }
        map.end()
    }
}

/// Ordered mapping from field name to schema node
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    fields: Vec<(String, SchemaNode)>
}

impl Schema {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Add a field, replacing any previous field with the same name in place
    pub fn field(mut self, name: impl Into<String>, node: SchemaNode) -> Self {
        let name = name.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = node,
            None => self.fields.push((name, node))
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&SchemaNode> {
        self.fields.iter().find(|(field, _)| field == name).map(|(_, node)| node)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SchemaNode)> {
        self.fields.iter().map(|(name, node)| (name.as_str(), node))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Flatten the schema into dotted paths.
    ///
    /// Object children are joined with `.`, array items with `[]`, e.g.
    /// `processing.startTime` or `indices[].index_name`. Containers are listed
    /// before their children. Optionality is inherited from ancestors.
    pub fn field_paths(&self) -> Vec<FieldPath> {
        let mut paths = Vec::new();
        for (name, node) in self.iter() {
            collect_paths(name.to_string(), node, false, &mut paths);
        }
        paths
    }
}

fn collect_paths(path: String, node: &SchemaNode, inherited_optional: bool, out: &mut Vec<FieldPath>) {
    let optional = inherited_optional || node.is_optional();
    out.push(FieldPath { path: path.clone(), kind: node.kind(), optional });

    match node {
        SchemaNode::Field { .. } => {}
        SchemaNode::Array { items, .. } => collect_paths(format!("{path}[]"), items, optional, out),
        SchemaNode::Object { properties, .. } => {
            for (name, child) in properties.iter() {
                collect_paths(format!("{path}.{name}"), child, optional, out);
            }
        }
    }
}

impl Serialize for Schema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, node) in &self.fields {
            map.serialize_entry(name, node)?;
        }
        map.end()
    }
}

/// Shape of a flattened schema path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Scalar(FieldType),
    Array,
    Object
}

impl Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Scalar(field_type) => write!(f, "{}", field_type),
            FieldKind::Array => write!(f, "array"),
            FieldKind::Object => write!(f, "object")
        }
    }
}

/// One entry of [`Schema::field_paths`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
    pub path:     String,
    pub kind:     FieldKind,
    pub optional: bool
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn sample_schema() -> Schema {
        Schema::new()
            .field("name", SchemaNode::keyword("Name"))
            .field(
                "indices",
                SchemaNode::array(SchemaNode::object(
                    Schema::new()
                        .field("index_name", SchemaNode::keyword("Index name"))
                        .field("ilm_policy", SchemaNode::keyword("ILM policy").optional())
                ))
                .with_description("Indices")
                .optional()
            )
    }

    #[test]
    fn test_scalar_serialization() {
        let node = SchemaNode::long("Number of things").optional();
        let value = serde_json::to_value(&node).unwrap();

        assert_eq!(value, json!({ "type": "long", "_meta": { "description": "Number of things", "optional": true } }));
    }

    #[test]
    fn test_nested_serialization() {
        let value = serde_json::to_value(sample_schema()).unwrap();

        assert_eq!(
            value,
            json!({
                "name": { "type": "keyword", "_meta": { "description": "Name" } },
                "indices": {
                    "type": "array",
                    "items": {
                        "properties": {
                            "index_name": { "type": "keyword", "_meta": { "description": "Index name" } },
                            "ilm_policy": { "type": "keyword", "_meta": { "description": "ILM policy", "optional": true } }
                        }
                    },
                    "_meta": { "description": "Indices", "optional": true }
                }
            })
        );
    }

    #[test]
    fn test_serialization_preserves_declaration_order() {
        let json = serde_json::to_string(&Schema::new().field("z", SchemaNode::text("z")).field("a", SchemaNode::text("a")))
            .unwrap();

        assert!(json.find("\"z\"").unwrap() < json.find("\"a\"").unwrap());
    }

    #[test]
    fn test_field_replaces_existing_name() {
        let schema = Schema::new().field("a", SchemaNode::text("first")).field("a", SchemaNode::long("second"));

        assert_eq!(schema.len(), 1);
        assert_eq!(schema.get("a").and_then(|node| node.description()), Some("second"));
    }

    #[test]
    fn test_field_paths_flatten_and_inherit_optional() {
        let paths = sample_schema().field_paths();
        let rendered: Vec<(&str, String, bool)> =
            paths.iter().map(|p| (p.path.as_str(), p.kind.to_string(), p.optional)).collect();

        assert_eq!(
            rendered,
            vec![
                ("name", "keyword".to_string(), false),
                ("indices", "array".to_string(), true),
                ("indices[]", "object".to_string(), true),
                ("indices[].index_name", "keyword".to_string(), true),
                ("indices[].ilm_policy", "keyword".to_string(), true),
            ]
        );
    }

    #[test]
    fn test_required_sets_explicit_false() {
        let node = SchemaNode::keyword("Tag").required();

        assert_eq!(node.meta().and_then(|meta| meta.optional), Some(false));
        assert!(!node.is_optional());
    }
}
