use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid spec format: {0}")]
    InvalidSpecFormat(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
