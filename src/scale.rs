use nalgebra::Vector3;

use crate::error::{Error, Result};
use crate::size::{SizeSpec, AXIS_NAMES};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleMode {
    /// One factor for all axes, the largest that keeps every constrained
    /// axis within its target.
    Uniform,
    /// Constrained axes hit their target exactly; the rest stay put.
    NonUniform,
}

impl ScaleMode {
    pub fn scale_for(self, extents: &Vector3<f64>, target: &SizeSpec) -> Result<Vector3<f64>> {
        match self {
            ScaleMode::Uniform => uniform_scale(extents, target).map(Vector3::repeat),
            ScaleMode::NonUniform => per_axis_scale(extents, target),
        }
    }
}

pub fn uniform_scale(extents: &Vector3<f64>, target: &SizeSpec) -> Result<f64> {
    let mut ratios = Vec::with_capacity(3);
    for ((&extent, target), axis) in extents.iter().zip(target.axes()).zip(AXIS_NAMES) {
        let Some(target) = target else { continue };
        if extent <= 0.0 {
            log::warn!("Model is flat along {axis}; that axis does not limit the uniform scale");
            ratios.push(f64::INFINITY);
        } else {
            ratios.push(target / extent);
        }
    }

    // Unconstrained, or only flat axes constrained.
    if ratios.iter().all(|ratio| *ratio == f64::INFINITY) {
        return Ok(1.0);
    }

    let scale = ratios.into_iter().fold(f64::INFINITY, f64::min);
    if scale <= 0.0 || !scale.is_finite() {
        return Err(Error::InvalidScale(scale));
    }
    log::debug!("Uniform scale {scale}");
    Ok(scale)
}

pub fn per_axis_scale(extents: &Vector3<f64>, target: &SizeSpec) -> Result<Vector3<f64>> {
    let mut scale = Vector3::repeat(1.0);
    for (i, (&extent, target)) in extents.iter().zip(target.axes()).enumerate() {
        let Some(target) = target else { continue };
        if extent <= 0.0 {
            log::warn!(
                "Model is flat along {}; cannot stretch it to {target}, leaving scale at 1",
                AXIS_NAMES[i]
            );
            continue;
        }
        let factor = target / extent;
        if !factor.is_finite() {
            return Err(Error::InvalidScale(factor));
        }
        scale[i] = factor;
    }
    log::debug!("Per-axis scale {:?}", scale.as_slice());
    Ok(scale)
}
