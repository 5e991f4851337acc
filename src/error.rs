use std::io;

use thiserror::Error;

use crate::surface::SurfaceError;

#[derive(Debug, Error)]
pub enum WmError {
    #[error(transparent)]
    Surface(#[from] SurfaceError),

    #[error("invalid window manager configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type WmResult<T> = Result<T, WmError>;
