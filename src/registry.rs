use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Stand-in for runtime reflection: declared field/annotation metadata per
/// fully qualified type name, loaded from a JSON file ahead of the run.
#[derive(Debug, Clone, Deserialize)]
pub struct TypeRegistry {
    pub types: BTreeMap<String, TypeDescriptor>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TypeDescriptor {
    Class {
        #[serde(default)]
        fields: Vec<FieldDescriptor>,
    },
    Enum {
        values: Vec<String>,
    },
    Interface,
    Annotation,
}

/// One declared field. `type` is a scalar name, `list<T>`, or a fully
/// qualified type name resolved back through the registry. `attribute`
/// records an @XmlAttribute marker, `rename` an @XmlElement name override.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub attribute: bool,
    #[serde(default)]
    pub rename: Option<String>,
}

impl TypeRegistry {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("cannot read type registry: {}", path.display()))?;
        let registry: TypeRegistry = serde_json::from_str(&content)
            .with_context(|| format!("invalid type registry JSON: {}", path.display()))?;
        Ok(registry)
    }

    pub fn get(&self, class_name: &str) -> Option<&TypeDescriptor> {
        self.types.get(class_name)
    }
}

impl FieldDescriptor {
    /// JSON property name after any @XmlElement rename.
    pub fn property_name(&self) -> &str {
        self.rename.as_deref().unwrap_or(&self.name)
    }
}
