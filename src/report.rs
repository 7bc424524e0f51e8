use std::fmt;
use std::path::PathBuf;

use nalgebra::Vector3;

use crate::{Options, Outcome, Pivot, ScaleMode};

/// Summary printed after a file has been rescaled.
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub input: PathBuf,
    pub output: PathBuf,
    pub options: Options,
    pub outcome: Outcome,
}

fn write_extents(f: &mut fmt::Formatter<'_>, label: &str, e: Vector3<f64>) -> fmt::Result {
    writeln!(f, "{label} extents: X={:.6}, Y={:.6}, Z={:.6}", e.x, e.y, e.z)
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scale = self.outcome.scale;
        writeln!(f, "Input:  {}", self.input.display())?;
        writeln!(f, "Output: {}", self.output.display())?;
        writeln!(f, "Target size (X/Y/Z): {}", self.options.size)?;
        write_extents(f, "Original", self.outcome.original.extents())?;
        match self.options.mode {
            ScaleMode::Uniform => writeln!(
                f,
                "Applied uniform scale: s={:.6} (preserved proportions)",
                scale.x
            )?,
            ScaleMode::NonUniform => writeln!(
                f,
                "Applied per-axis scales: sx={:.6}, sy={:.6}, sz={:.6}",
                scale.x, scale.y, scale.z
            )?,
        }
        write_extents(f, "Final", self.outcome.result.extents())?;
        if self.options.pivot == Pivot::BoundsCenter {
            writeln!(f, "Model was re-centered to origin.")?;
        }
        if self.outcome.malformed > 0 {
            writeln!(
                f,
                "Left {} malformed vertex line(s) unchanged.",
                self.outcome.malformed
            )?;
        }
        Ok(())
    }
}
