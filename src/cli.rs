use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "jaxb-jsonschema")]
#[command(about = "Emit JSON Schema documents for JAXB-annotated classes found on a Java classpath")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Classpath root: a directory of unpacked .class files or a .jar.
    #[arg(long = "classpath", value_name = "PATH")]
    pub classpath: Vec<PathBuf>,

    /// Walk DIR and add every .jar found to the classpath.
    #[arg(long, value_name = "DIR")]
    pub scan: Option<PathBuf>,

    /// Type registry JSON mapping class names to field metadata.
    #[arg(long, value_name = "FILE")]
    pub registry: Option<PathBuf>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Generate one JSON Schema per non-factory class in the package.
    Generate {
        package: String,

        /// Output root; schemas land under <DIR>/jsonschemas/.
        #[arg(short = 'o', long, value_name = "DIR", conflicts_with = "stdout")]
        out: Option<PathBuf>,

        /// Print schemas to stdout instead of writing files.
        #[arg(long)]
        stdout: bool,
    },
    /// List the fully qualified class names found in the package.
    List { package: String },
}
