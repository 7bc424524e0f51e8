//! Rescale a Wavefront OBJ mesh so its bounding box fits a target size.
//!
//! Only `v x y z` records are touched. Every other line of the file is
//! written back unchanged.
//!
//! ```
//! use objscale::{rescale, ObjDocument, Options};
//!
//! let mut doc = ObjDocument::parse("v 0 0 0\nv 2 4 8\nf 1 2\n");
//! let options = Options::new("1/X/X".parse().unwrap());
//! let outcome = rescale(&mut doc, &options).unwrap();
//! assert_eq!(outcome.scale.x, 0.5);
//! assert_eq!(doc.to_text(1), "v 0.0 0.0 0.0\nv 1.0 2.0 4.0\nf 1 2\n");
//! ```

pub mod bounds;
pub mod error;
pub mod mesh;
pub mod ops;
pub mod report;
pub mod scale;
pub mod size;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use nalgebra::Vector3;

pub use bounds::Aabb;
pub use error::{Error, Result};
pub use mesh::ObjDocument;
pub use ops::{Pivot, Rescale};
pub use report::Report;
pub use scale::ScaleMode;
pub use size::{SizeSpec, SizeSpecError};

pub const DEFAULT_PRECISION: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Options {
    pub size: SizeSpec,
    pub mode: ScaleMode,
    pub pivot: Pivot,
    /// Decimal places for rewritten vertex coordinates.
    pub precision: usize,
}

impl Options {
    pub fn new(size: SizeSpec) -> Self {
        Self {
            size,
            mode: ScaleMode::Uniform,
            pivot: Pivot::Origin,
            precision: DEFAULT_PRECISION,
        }
    }
}

/// What a rescale did to a document.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Outcome {
    pub original: Aabb,
    pub scale: Vector3<f64>,
    pub result: Aabb,
    /// `v ` lines that were passed through without being scaled.
    pub malformed: usize,
}

pub fn rescale(doc: &mut ObjDocument, options: &Options) -> Result<Outcome> {
    let original = doc.bounds()?;
    log::debug!("Original bounds {:?}", original);
    if options.size.is_unconstrained() {
        log::warn!("No axis is constrained; vertices are rewritten with scale 1");
    }
    let scale = options.mode.scale_for(&original.extents(), &options.size)?;
    let result = Rescale::new(scale, options.pivot).apply(doc);
    Ok(Outcome {
        original,
        scale,
        result,
        malformed: doc.malformed_count(),
    })
}

/// `dir/model.obj` becomes `dir/model.scaled.obj`.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or(input.as_os_str());
    let mut name = stem.to_os_string();
    name.push(".scaled.obj");
    input.with_file_name(name)
}

/// Reads `input`, rescales it and writes the result to `output`.
pub fn rescale_file(input: &Path, output: &Path, options: &Options) -> Result<Report> {
    if !input.exists() {
        return Err(Error::InputNotFound(input.display().to_string()));
    }

    let mut doc = ObjDocument::from_bytes(&std::fs::read(input)?);
    let outcome = rescale(&mut doc, options)?;

    let mut out = BufWriter::new(File::create(output)?);
    doc.write_to(&mut out, options.precision)?;
    out.flush()?;
    log::debug!("Wrote {} lines to {}", doc.line_count(), output.display());

    Ok(Report {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        options: *options,
        outcome,
    })
}
