use data_error::CaratError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    IoError(#[from] io::Error),

    #[error(transparent)]
    CaratError(#[from] CaratError),
}
