//! Command line front end: extrude a batch of airfoils into an STL file.
//!
//! Without a config file the built-in three airfoil cascade is generated and written to
//! `naca0018.stl`.

use clap::Parser;
use foilmesh::config::load_batch;
use foilmesh::io::write_ascii_stl_file;
use foilmesh::{CapMode, FoilBatch, MeshDocument, Result};
use std::path::{Path, PathBuf};

const DEFAULT_OUTPUT: &str = "naca0018.stl";

/// Extrude a batch of tapered, cambered airfoils into a single STL solid
#[derive(Parser, Debug)]
#[command(name = "foilmesh")]
#[command(version, long_about = None)]
struct Args {
    /// JSON batch file; the built-in three airfoil cascade is used when omitted
    #[arg(name = "CONFIG")]
    config: Option<PathBuf>,

    /// Destination STL file, created or replaced
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Close the whole section at both ends instead of the forward half only
    #[arg(long)]
    full_caps: bool,

    /// Write binary STL (requires the `stl` feature)
    #[arg(long)]
    binary: bool,
}

/// Load the batch named on the command line, or the preset, with the command line overrides
/// applied. The batch is validated before it is returned.
fn load(args: &Args) -> Result<FoilBatch> {
    let mut batch = match &args.config {
        Some(path) => load_batch(path)?,
        None => FoilBatch::preset(),
    };
    if args.full_caps {
        batch.cap = CapMode::Full;
    }
    batch.validate()?;
    Ok(batch)
}

#[cfg(feature = "stl")]
fn write_binary(path: &Path, doc: &MeshDocument) -> Result<()> {
    foilmesh::io::write_binary_stl_file(path, doc)
}

#[cfg(not(feature = "stl"))]
fn write_binary(_: &Path, _: &MeshDocument) -> Result<()> {
    Err("binary output requires the 'stl' feature".into())
}

/// Generate, extrude and write the batch, returning the number of airfoils written. Nothing is
/// written if the batch fails to load or validate.
fn run(args: &Args) -> Result<usize> {
    let batch = load(args)?;
    let doc = batch.emit();
    if args.binary {
        write_binary(&args.output, &doc)?;
    } else {
        write_ascii_stl_file(&args.output, &doc)?;
    }
    Ok(batch.airfoils.len())
}

fn main() {
    let args = Args::parse();
    match run(&args) {
        Ok(count) => println!(
            "{} file generated successfully with {} airfoils!",
            args.output.display(),
            count
        ),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
