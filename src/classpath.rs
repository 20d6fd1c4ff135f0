use anyhow::{Context, Result};
use memmap2::Mmap;
use std::fs::{self, File};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use zip::ZipArchive;

pub fn package_to_path(package: &str) -> String {
    package.replace('.', "/")
}

/// A single classpath location that can report the classes it holds for a
/// package. Directories and jar archives list differently, so each gets its
/// own implementation.
pub trait ResourceLister {
    fn list_classes(&self, package: &str) -> Result<Vec<String>>;

    /// Human-readable location for diagnostics.
    fn location(&self) -> String;
}

/// An unpacked classpath directory. Holds the directory that corresponds to
/// the scanned package itself, not the classpath root.
pub struct DirLister {
    package_dir: PathBuf,
}

/// A jar archive on the classpath. Membership is decided by its flat entry
/// table, so every jar root is a candidate location regardless of package.
pub struct JarLister {
    jar_path: PathBuf,
}

/// Resolves every classpath root that can serve the package: directory roots
/// contribute a location only when the package subpath exists, jar roots are
/// always candidates.
pub fn resolve_locations(roots: &[PathBuf], package: &str) -> Vec<Box<dyn ResourceLister>> {
    let rel = package_to_path(package);
    let mut locations: Vec<Box<dyn ResourceLister>> = Vec::new();

    for root in roots {
        if root.is_dir() {
            let package_dir = root.join(&rel);
            if package_dir.is_dir() {
                locations.push(Box::new(DirLister { package_dir }));
            }
        } else if root.extension().is_some_and(|e| e == "jar") {
            locations.push(Box::new(JarLister {
                jar_path: root.clone(),
            }));
        }
    }

    locations
}

impl ResourceLister for DirLister {
    fn list_classes(&self, package: &str) -> Result<Vec<String>> {
        let mut classes = Vec::new();
        list_dir(&self.package_dir, package, &mut classes)?;
        Ok(classes)
    }

    fn location(&self) -> String {
        self.package_dir.display().to_string()
    }
}

// Parent-package members first, then depth-first into subpackages.
fn list_dir(dir: &Path, package: &str, classes: &mut Vec<String>) -> Result<()> {
    let mut subdirs: Vec<(PathBuf, String)> = Vec::new();

    for entry in
        fs::read_dir(dir).with_context(|| format!("cannot list directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().to_string();

        if path.is_file() {
            if let Some(stem) = name.strip_suffix(".class") {
                classes.push(format!("{package}.{stem}"));
            }
        } else if path.is_dir() {
            subdirs.push((path, name));
        }
    }

    for (path, name) in subdirs {
        list_dir(&path, &format!("{package}.{name}"), classes)?;
    }

    Ok(())
}

impl ResourceLister for JarLister {
    fn list_classes(&self, package: &str) -> Result<Vec<String>> {
        let file = File::open(&self.jar_path)
            .with_context(|| format!("cannot open jar: {}", self.jar_path.display()))?;
        // SAFETY: The file is opened read-only and remains valid for the lifetime of the mmap.
        // The mmap is dropped before the file, ensuring memory safety.
        let mmap = unsafe { Mmap::map(&file) }
            .with_context(|| format!("mmap jar failed: {}", self.jar_path.display()))?;
        let mut archive = ZipArchive::new(Cursor::new(&mmap[..]))
            .with_context(|| format!("cannot parse zip(jar): {}", self.jar_path.display()))?;

        // The trailing separator keeps sibling packages sharing a name prefix
        // (a.b vs a.bc) from matching. Nested subpackage classes appear in the
        // flat entry table under longer prefixes, so no recursion is needed.
        let prefix = format!("{}/", package_to_path(package));
        let mut classes = Vec::new();

        for i in 0..archive.len() {
            let entry = archive.by_index(i)?;
            let name = entry.name();
            if !name.starts_with(&prefix) || !name.ends_with(".class") {
                continue;
            }
            let class_name = name.trim_end_matches(".class").replace(['/', '\\'], ".");
            classes.push(class_name);
        }

        Ok(classes)
    }

    fn location(&self) -> String {
        self.jar_path.display().to_string()
    }
}
