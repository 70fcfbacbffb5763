/*!
Error type shared by the strict arithmetic and the settings file layer.
*/

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A strict reciprocal or division was asked to divide by a value
    /// of zero magnitude.
    #[error("division by a complex value of zero magnitude")]
    DivisionByZero,

    /// A tolerance that no pair of values could ever satisfy.
    #[error("epsilon must be finite and non-negative, got {0}")]
    InvalidEpsilon(f64),

    #[error("error accessing {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("error parsing {}: {source}", path.display())]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A settings string, not read from any file, failed to parse.
    #[error("error parsing settings: {0}")]
    InvalidToml(#[from] toml::de::Error),

    #[error("error serializing settings: {0}")]
    SerializeToml(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
