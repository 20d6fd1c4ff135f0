//! # jaxb-jsonschema
//!
//! Emit JSON Schema documents for JAXB-annotated classes found on a Java
//! classpath. Rust has no runtime reflection, so the field/annotation
//! metadata the schemas are derived from comes from a config-driven type
//! registry instead of a live class loader.
//!
//! ## Architecture
//!
//! - **cli**: Command-line definition (generate, list)
//! - **config**: Resolution of classpath roots and registry path from the CLI
//! - **scan**: JAR file discovery under a directory tree
//! - **classpath**: ResourceLister capability with directory and jar implementations
//! - **enumerate**: Best-effort class enumeration for a package across all locations
//! - **registry**: Type registry data model and JSON loading
//! - **schema**: JSON Schema derivation from registry descriptors
//! - **emit**: Output sinks (regenerated schema directory, stdout) and factory filtering

pub mod classpath;
pub mod cli;
pub mod config;
pub mod emit;
pub mod enumerate;
pub mod registry;
pub mod scan;
pub mod schema;
