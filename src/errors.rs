use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A float cannot be written at wire precision without rounding.
    #[error("Precision error: {value} cannot be encoded with {decimals} decimals without rounding")]
    Precision { value: f64, decimals: u32 },
    /// The action is malformed: wrong shape, unknown asset, bad chain id, or it
    /// could not be serialized.
    #[error("Schema error: {0}")]
    Schema(String),
    /// Invalid key material or a structured-hash encoding failure.
    #[error("Signing error: {0}")]
    Signing(String),
}

impl Error {
    pub(crate) fn schema(msg: impl Into<String>) -> Self {
        Error::Schema(msg.into())
    }

    pub(crate) fn signing(msg: impl Into<String>) -> Self {
        Error::Signing(msg.into())
    }
}
