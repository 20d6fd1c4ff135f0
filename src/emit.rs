use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

pub const SCHEMA_DIR_NAME: &str = "jsonschemas";

/// Generated factory classes carry no useful schema shape.
pub const FACTORY_SUFFIX: &str = "ObjectFactory";

pub fn is_factory_class(class_name: &str) -> bool {
    class_name.ends_with(FACTORY_SUFFIX)
}

/// File name for a class's schema: the class name relative to the scanned
/// package, so `pkg.sub.Foo` scanned as `pkg` becomes `sub.Foo.schema.json`.
pub fn schema_file_name(package: &str, class_name: &str) -> String {
    let prefix = format!("{package}.");
    let relative = class_name.strip_prefix(&prefix).unwrap_or(class_name);
    format!("{relative}.schema.json")
}

/// Recreates `<out_root>/jsonschemas` empty: every pre-existing path under it
/// is deleted deepest-first so no stale file from a previous run survives.
/// Individual deletion failures are reported and skipped.
pub fn prepare_output_dir(out_root: &Path) -> Result<PathBuf> {
    let dir = out_root.join(SCHEMA_DIR_NAME);

    if dir.exists() {
        let mut paths = Vec::new();
        collect_paths(&dir, &mut paths)?;
        paths.sort();
        for path in paths.iter().rev() {
            let result = if path.is_dir() {
                fs::remove_dir(path)
            } else {
                fs::remove_file(path)
            };
            if let Err(e) = result {
                eprintln!(
                    "[jaxb-jsonschema] failed to delete {}: {e}",
                    path.display()
                );
            }
        }
    }

    fs::create_dir_all(&dir)
        .with_context(|| format!("cannot create output directory: {}", dir.display()))?;
    Ok(dir)
}

fn collect_paths(path: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    out.push(path.to_path_buf());
    if path.is_dir() {
        for entry in fs::read_dir(path)
            .with_context(|| format!("cannot list output directory: {}", path.display()))?
        {
            collect_paths(&entry?.path(), out)?;
        }
    }
    Ok(())
}

pub fn write_schema(dir: &Path, package: &str, class_name: &str, schema: &Value) -> Result<PathBuf> {
    let path = dir.join(schema_file_name(package, class_name));
    let content = serde_json::to_string_pretty(schema)?;
    fs::write(&path, content)
        .with_context(|| format!("cannot write schema file: {}", path.display()))?;
    Ok(path)
}

pub fn print_schema(schema: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(schema)?);
    Ok(())
}
