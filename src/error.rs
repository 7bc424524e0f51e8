use derive_more::{Display, From};

use crate::size::SizeSpecError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Display, From)]
pub enum Error {
    #[display(fmt = "I/O error: {}", _0)]
    Io(std::io::Error),

    #[display(fmt = "Input file not found: {}", _0)]
    #[from(ignore)]
    InputNotFound(String),

    #[display(fmt = "{}", _0)]
    SizeSpec(SizeSpecError),

    #[display(fmt = "No vertex lines found in OBJ (no 'v x y z').")]
    #[from(ignore)]
    NoVertices,

    /// A scale factor came out non-finite, or zero/negative in uniform mode.
    #[display(
        fmt = "Computed invalid scale factor ({}). Check size spec and model bbox.",
        _0
    )]
    #[from(ignore)]
    InvalidScale(f64),
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::SizeSpec(err) => Some(err),
            _ => None,
        }
    }
}
