use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser as _;

use objscale::{Options, Pivot, ScaleMode, SizeSpec, DEFAULT_PRECISION};

/// Scale an OBJ to fit inside a target size (e.g. 1/X/1).
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "objscale", version)]
struct Args {
    /// Path to input OBJ file.
    input: PathBuf,

    /// Target size as X/Y/Z. Use X for unconstrained, e.g. 1/X/1.
    #[arg(long)]
    size: SizeSpec,

    /// Path to output OBJ (default: alongside input with .scaled.obj).
    #[arg(long)]
    output: Option<PathBuf>,

    /// Per-axis scaling: constrained axes match exact targets; unconstrained axes unchanged.
    #[arg(long)]
    nonuniform: bool,

    /// Recenter the model to origin after scaling.
    #[arg(long)]
    center: bool,

    /// Decimal places written for vertex coordinates.
    #[arg(long, default_value_t = DEFAULT_PRECISION)]
    precision: usize,
}

impl Args {
    fn options(&self) -> Options {
        Options {
            size: self.size,
            mode: if self.nonuniform {
                ScaleMode::NonUniform
            } else {
                ScaleMode::Uniform
            },
            pivot: if self.center {
                Pivot::BoundsCenter
            } else {
                Pivot::Origin
            },
            precision: self.precision,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| objscale::default_output_path(&args.input));

    let report = objscale::rescale_file(&args.input, &output, &args.options())
        .with_context(|| format!("failed to rescale {}", args.input.display()))?;
    print!("{report}");
    Ok(())
}
