use thiserror::Error;

/// Form-data Error
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid part header
    #[error("invalid part header")]
    InvalidHeader,

    /// Invalid content disposition
    #[error("invalid content disposition")]
    InvalidContentDisposition,

    /// Payload too large
    #[error("payload is too large, limit to `{0}`")]
    PayloadTooLarge(usize),

    /// Invalid size limit
    #[error("invalid size limit `{0}`")]
    InvalidSizeLimit(String),
}
