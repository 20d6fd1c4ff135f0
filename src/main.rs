use anyhow::Result;
use clap::Parser;
use jaxb_jsonschema::cli::{Cli, Commands};
use jaxb_jsonschema::config::{resolve_classpath, resolve_registry_path};
use jaxb_jsonschema::emit::{is_factory_class, prepare_output_dir, print_schema, write_schema};
use jaxb_jsonschema::enumerate::enumerate_package;
use jaxb_jsonschema::registry::TypeRegistry;
use jaxb_jsonschema::schema::{SchemaError, schema_for};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.clone() {
        Commands::List { package } => {
            let roots = resolve_classpath(&cli)?;
            for class_name in enumerate_package(&roots, &package) {
                println!("{class_name}");
            }
        }
        Commands::Generate {
            package,
            out,
            stdout,
        } => {
            let out_root = out.unwrap_or_else(|| PathBuf::from("."));
            run_generate(&cli, &package, &out_root, stdout)?;
        }
    }

    Ok(())
}

fn run_generate(cli: &Cli, package: &str, out_root: &Path, to_stdout: bool) -> Result<()> {
    let roots = resolve_classpath(cli)?;
    let registry = TypeRegistry::load(&resolve_registry_path(cli)?)?;

    let class_names = enumerate_package(&roots, package);
    if class_names.is_empty() {
        anyhow::bail!("no classes found in package: {package}");
    }

    // The output directory is recreated before the first schema is written,
    // so files from a previous run never survive.
    let out_dir = if to_stdout {
        None
    } else {
        Some(prepare_output_dir(out_root)?)
    };

    if !to_stdout {
        println!("Found {} classes in package {package}", class_names.len());
    }

    for class_name in &class_names {
        if is_factory_class(class_name) {
            continue;
        }

        match schema_for(&registry, class_name) {
            // Enum, interface and annotation kinds carry no schema shape.
            Ok(None) => {}
            Ok(Some(schema)) => match &out_dir {
                Some(dir) => {
                    println!("Generating JSON Schema for: {class_name}");
                    if let Err(e) = write_schema(dir, package, class_name, &schema) {
                        eprintln!("[jaxb-jsonschema] error processing {class_name}: {e:#}");
                    }
                }
                None => print_schema(&schema)?,
            },
            Err(SchemaError::ClassNotFound(_)) => {
                eprintln!("[jaxb-jsonschema] class not found in registry: {class_name}");
            }
            Err(e @ SchemaError::Mapping { .. }) => {
                eprintln!("[jaxb-jsonschema] failed to generate schema for {class_name}: {e}");
            }
        }
    }

    Ok(())
}
