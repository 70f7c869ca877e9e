//! roiserial: canonical serialization of ROI annotation shapes.
//!
//! A drawing client holds regions of interest (ROIs) as in-memory figures:
//! ellipses, rectangles, points, text, lines and Bezier paths, one per
//! (Z, T) plane of an image. roiserial turns such a collection into
//! canonical records ready to be stored or sent as-is, with each figure's
//! affine transform written as a minimal SVG `transform` attribute value.
//!
//! # Modules
//!
//! - [`geom`]: Geometry value types (points, rectangles, Bezier nodes, transforms, IDs)
//! - [`model`]: Client-side ROIs and figures, canonical output records, JSON I/O
//! - [`transform`]: Canonical text encoding of affine transforms
//! - [`convert`]: Figure classification and per-shape conversion
//! - [`serialize`]: Whole-source serialization, reports and sinks
//! - [`error`]: Error types for roiserial operations

pub mod convert;
pub mod error;
pub mod geom;
pub mod model;
pub mod serialize;
pub mod transform;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

pub use error::RoiError;

/// The roiserial CLI application.
#[derive(Parser)]
#[command(name = "roiserial")]
#[command(version, author, about)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Serialize a ROI document into canonical records.
    Serialize(SerializeArgs),
    /// Print the canonical encoding of an affine transform.
    Transform(TransformArgs),
}

/// Arguments for the serialize subcommand.
#[derive(clap::Args)]
struct SerializeArgs {
    /// ROI document (JSON) to serialize.
    input: PathBuf,

    /// Write records to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Skip mask shapes (reported on stderr) instead of failing.
    #[arg(long, env = "ROISERIAL_SKIP_MASKS")]
    skip_masks: bool,

    /// Format of the report printed on stderr.
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    report: ReportFormat,
}

/// Arguments for the transform subcommand.
#[derive(clap::Args)]
struct TransformArgs {
    /// Scale / rotation term for x.
    #[arg(allow_negative_numbers = true)]
    a: f64,
    /// Shear / rotation term for y from x.
    #[arg(allow_negative_numbers = true)]
    b: f64,
    /// Shear / rotation term for x from y.
    #[arg(allow_negative_numbers = true)]
    c: f64,
    /// Scale / rotation term for y.
    #[arg(allow_negative_numbers = true)]
    d: f64,
    /// Translation along x.
    #[arg(allow_negative_numbers = true)]
    e: f64,
    /// Translation along y.
    #[arg(allow_negative_numbers = true)]
    f: f64,
}

/// Report output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    Text,
    Json,
}

/// Run the roiserial CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), RoiError> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serialize(args)) => run_serialize(args),
        Some(Commands::Transform(args)) => run_transform(args),
        None => {
            println!("roiserial {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Canonical serialization of ROI annotation shapes.");
            println!();
            println!("Run 'roiserial --help' for usage information.");
            Ok(())
        }
    }
}

/// Execute the serialize subcommand.
fn run_serialize(args: SerializeArgs) -> Result<(), RoiError> {
    let document = model::io_json::read_document(&args.input)?;
    info!(
        input = %args.input.display(),
        rois = document.rois.len(),
        "read ROI document"
    );

    let opts = serialize::SerializeOptions {
        skip_unimplemented: args.skip_masks,
    };

    let report = match &args.output {
        Some(path) => {
            let mut sink = serialize::JsonFileSink::new(path);
            serialize::serialize_into(&document.rois, &document.image, &opts, &mut sink)?
        }
        None => {
            let out = serialize::serialize(&document.rois, &document.image, &opts)?;
            let json = model::io_json::records_to_json_string(&out.records).map_err(|source| {
                RoiError::OutputJsonWrite {
                    path: PathBuf::from("-"),
                    source,
                }
            })?;
            println!("{}", json);
            out.report
        }
    };

    match args.report {
        ReportFormat::Json => {
            let json = serde_json::to_string_pretty(&report).map_err(|source| {
                RoiError::OutputJsonWrite {
                    path: PathBuf::from("-"),
                    source,
                }
            })?;
            eprintln!("{}", json);
        }
        ReportFormat::Text => {
            eprintln!("Serialized {}:", args.input.display());
            eprint!("{}", report);
        }
    }

    Ok(())
}

/// Execute the transform subcommand.
fn run_transform(args: TransformArgs) -> Result<(), RoiError> {
    let t = geom::AffineTransform::new(args.a, args.b, args.c, args.d, args.e, args.f);
    println!("{}", transform::encode(&t)?);
    Ok(())
}
