use crate::registry::{FieldDescriptor, TypeDescriptor, TypeRegistry};
use serde_json::{Map, Value, json};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("class not found in registry: {0}")]
    ClassNotFound(String),

    #[error("cannot map {class}: {reason}")]
    Mapping { class: String, reason: String },
}

/// Derives a JSON Schema document for a registered class. Enum, interface and
/// annotation kinds carry no schema shape and yield `None`, mirroring how the
/// reflection-based generator skips them.
pub fn schema_for(registry: &TypeRegistry, class_name: &str) -> Result<Option<Value>, SchemaError> {
    let descriptor = registry
        .get(class_name)
        .ok_or_else(|| SchemaError::ClassNotFound(class_name.to_string()))?;

    let TypeDescriptor::Class { fields } = descriptor else {
        return Ok(None);
    };

    let mut stack = vec![class_name.to_string()];
    object_schema(registry, class_name, class_name, fields, &mut stack).map(Some)
}

fn schema_id(class_name: &str) -> String {
    format!("urn:jsonschema:{}", class_name.replace('.', ":"))
}

fn object_schema(
    registry: &TypeRegistry,
    root: &str,
    class_name: &str,
    fields: &[FieldDescriptor],
    stack: &mut Vec<String>,
) -> Result<Value, SchemaError> {
    let mut properties = Map::new();
    for field in fields {
        let mut prop = field_schema(registry, root, &field.ty, stack)?;
        if field.required
            && let Value::Object(map) = &mut prop
        {
            // Draft-03 style: the required marker lives inside the property.
            map.insert("required".to_string(), Value::Bool(true));
        }
        properties.insert(field.property_name().to_string(), prop);
    }

    let mut schema = Map::new();
    schema.insert("type".to_string(), Value::String("object".to_string()));
    schema.insert("id".to_string(), Value::String(schema_id(class_name)));
    schema.insert("properties".to_string(), Value::Object(properties));
    Ok(Value::Object(schema))
}

fn field_schema(
    registry: &TypeRegistry,
    root: &str,
    ty: &str,
    stack: &mut Vec<String>,
) -> Result<Value, SchemaError> {
    let ty = ty.trim();

    if let Some(inner) = ty.strip_prefix("list<").and_then(|s| s.strip_suffix('>')) {
        let items = field_schema(registry, root, inner, stack)?;
        return Ok(json!({ "type": "array", "items": items }));
    }

    match ty {
        "string" => Ok(json!({ "type": "string" })),
        "date" => Ok(json!({ "type": "string", "format": "date" })),
        "dateTime" => Ok(json!({ "type": "string", "format": "date-time" })),
        "int" | "integer" | "long" | "short" | "byte" => Ok(json!({ "type": "integer" })),
        "double" | "float" | "decimal" => Ok(json!({ "type": "number" })),
        "boolean" => Ok(json!({ "type": "boolean" })),
        _ if ty.contains('.') => reference_schema(registry, root, ty, stack),
        _ => Err(SchemaError::Mapping {
            class: root.to_string(),
            reason: format!("unknown field type: {ty}"),
        }),
    }
}

fn reference_schema(
    registry: &TypeRegistry,
    root: &str,
    ty: &str,
    stack: &mut Vec<String>,
) -> Result<Value, SchemaError> {
    let Some(descriptor) = registry.get(ty) else {
        return Err(SchemaError::Mapping {
            class: root.to_string(),
            reason: format!("unresolved type reference: {ty}"),
        });
    };

    match descriptor {
        TypeDescriptor::Enum { values } => Ok(json!({ "type": "string", "enum": values })),
        TypeDescriptor::Class { fields } => {
            if stack.iter().any(|s| s == ty) {
                return Err(SchemaError::Mapping {
                    class: root.to_string(),
                    reason: format!("recursive type reference: {ty}"),
                });
            }
            stack.push(ty.to_string());
            let schema = object_schema(registry, root, ty, fields, stack);
            stack.pop();
            schema
        }
        TypeDescriptor::Interface | TypeDescriptor::Annotation => Err(SchemaError::Mapping {
            class: root.to_string(),
            reason: format!("{ty} has no schema shape (interface/annotation kind)"),
        }),
    }
}
