use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::cli::Cli;
use crate::scan::scan_jars;

/// Explicit `--classpath` roots plus any jars discovered under `--scan`.
/// Scanned jars are sorted so repeated runs see the same location order.
pub fn resolve_classpath(cli: &Cli) -> Result<Vec<PathBuf>> {
    let mut roots = cli.classpath.clone();

    if let Some(dir) = &cli.scan {
        let mut jars = scan_jars(dir)
            .with_context(|| format!("cannot scan for jars under: {}", dir.display()))?;
        jars.sort();
        roots.append(&mut jars);
    }

    if roots.is_empty() {
        anyhow::bail!("empty classpath: pass --classpath PATH and/or --scan DIR");
    }

    Ok(roots)
}

pub fn resolve_registry_path(cli: &Cli) -> Result<PathBuf> {
    cli.registry
        .clone()
        .context("--registry FILE is required to generate schemas")
}
