use thiserror::Error;

#[derive(Error, Debug)]
pub enum SampleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("unknown sample: {0}")]
    UnknownSample(String),
    #[error("matrix error: {0}")]
    Matrix(#[from] sm_matrix::MatrixError),
}

pub type Result<T> = std::result::Result<T, SampleError>;
