//! Error type shared by the generator and the command line front end.
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("structure name must not be empty")]
    EmptyName,

    /// Only objects and arrays can describe a record layout.
    #[error("top-level example must be an object or an array, found {kind}")]
    UnsupportedRoot { kind: &'static str },

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON pointer `{pointer}` does not match anything in the input")]
    PointerNotFound { pointer: String },
}
