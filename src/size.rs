use std::fmt;
use std::str::FromStr;

use derive_more::Display;

pub const AXIS_NAMES: [char; 3] = ['X', 'Y', 'Z'];

/// Target extent per axis. `None` leaves that axis unconstrained.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SizeSpec {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Display)]
pub enum SizeSpecError {
    #[display(fmt = "Size spec must have 3 parts (X/Y/Z). Got {} in {:?}", parts, spec)]
    WrongArity { parts: usize, spec: String },

    #[display(fmt = "Invalid size token {:?} in {:?}. Use numbers or X.", token, spec)]
    InvalidToken { token: String, spec: String },

    #[display(
        fmt = "Target size {} for axis {} must be a finite, non-negative number",
        value,
        axis
    )]
    InvalidTarget { axis: char, value: f64 },
}

impl std::error::Error for SizeSpecError {}

impl SizeSpec {
    pub fn new(x: Option<f64>, y: Option<f64>, z: Option<f64>) -> Self {
        Self { x, y, z }
    }

    pub fn axes(&self) -> [Option<f64>; 3] {
        [self.x, self.y, self.z]
    }

    pub fn is_unconstrained(&self) -> bool {
        self.axes().iter().all(Option::is_none)
    }
}

fn parse_axis(token: &str, axis: char, spec: &str) -> Result<Option<f64>, SizeSpecError> {
    if matches!(token, "x" | "*" | "any") {
        return Ok(None);
    }
    let value: f64 = token.parse().map_err(|_| SizeSpecError::InvalidToken {
        token: token.to_owned(),
        spec: spec.to_owned(),
    })?;
    if !value.is_finite() || value < 0.0 {
        return Err(SizeSpecError::InvalidTarget { axis, value });
    }
    Ok(Some(value))
}

impl FromStr for SizeSpec {
    type Err = SizeSpecError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let normalized = spec.trim().to_lowercase().replace('\\', "/");
        let parts: Vec<&str> = normalized.split('/').collect();
        if parts.len() != 3 {
            return Err(SizeSpecError::WrongArity {
                parts: parts.len(),
                spec: spec.to_owned(),
            });
        }

        let mut axes = [None; 3];
        for ((slot, token), axis) in axes.iter_mut().zip(&parts).zip(AXIS_NAMES) {
            *slot = parse_axis(token.trim(), axis, spec)?;
        }
        let [x, y, z] = axes;
        Ok(Self { x, y, z })
    }
}

impl fmt::Display for SizeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, axis) in self.axes().iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            match axis {
                Some(value) => write!(f, "{value}")?,
                None => f.write_str("X")?,
            }
        }
        Ok(())
    }
}
