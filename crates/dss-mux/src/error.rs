//! Error types for DSS muxing

use thiserror::Error;

use crate::codec::CodecId;

/// Result type for DSS muxer operations
pub type Result<T> = std::result::Result<T, Error>;

/// DSS muxer error types
#[derive(Error, Debug)]
pub enum Error {
    /// Codec cannot be stored in a DSS container
    #[error("unsupported audio codec: {0:?}")]
    UnsupportedCodec(CodecId),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Stream size after the file header does not match the expected length
    #[error("file header size mismatch: expected {expected} bytes, stream reports {actual}")]
    HeaderSizeMismatch {
        /// Expected header length in bytes
        expected: u64,
        /// Size reported by the stream after flushing the header
        actual: u64,
    },

    /// Binary serialization error
    #[error("binary format error: {0}")]
    BinRw(#[from] binrw::Error),
}
