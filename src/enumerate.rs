use crate::classpath::resolve_locations;
use std::path::PathBuf;

/// Best-effort enumeration of every class under `package` across all
/// classpath roots. A location that fails to list is reported on stderr and
/// skipped; the remaining locations still contribute. Duplicates across
/// locations are kept, an empty or unknown package yields an empty vec.
pub fn enumerate_package(roots: &[PathBuf], package: &str) -> Vec<String> {
    let mut classes = Vec::new();

    for lister in resolve_locations(roots, package) {
        match lister.list_classes(package) {
            Ok(mut found) => classes.append(&mut found),
            Err(e) => eprintln!(
                "[jaxb-jsonschema] error scanning package {package} at {}: {e:#}",
                lister.location()
            ),
        }
    }

    classes
}
