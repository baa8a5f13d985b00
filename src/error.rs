use std::io;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to write image: {0}")]
    Io(#[from] io::Error),
    #[error("invalid render configuration: {0}")]
    InvalidConfig(String),
    #[error("degenerate camera: {0}")]
    DegenerateCamera(&'static str),
}
