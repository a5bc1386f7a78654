//! Codec identification and per-codec container parameters

use crate::SYNC_HEADER_LEN;
use crate::error::{Error, Result};
use crate::sync::{G723_1_SYNC_HEADERS, SP_SYNC_HEADERS};

/// Audio codec identifiers negotiated by the recording front end.
///
/// Only [`CodecId::DssSp`] and [`CodecId::G7231`] can be stored in a DSS
/// container; see [`supports_codec`].
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodecId {
    /// Digital Speech Standard (Standard Play) speech codec
    DssSp,
    /// ITU-T G.723.1 speech codec
    G7231,
    /// Uncompressed 16-bit PCM
    Pcm,
}

/// Returns whether packets of the given codec can be stored in a DSS
/// container.
pub fn supports_codec(id: CodecId) -> bool {
    DssCodec::try_from(id).is_ok()
}

/// The audio codec variant carried by one DSS output stream.
///
/// The variant fixes the on-disk codec tag, the sync-header table cycled
/// through in the data region, and the fill byte used to pad the final
/// block. Selected once at session open; immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DssCodec {
    /// Digital Speech Standard (Standard Play)
    Sp,
    /// ITU-T G.723.1
    G7231,
}

impl DssCodec {
    /// On-disk codec tag, stored at absolute offset 675 of the file header.
    pub const fn tag(self) -> u8 {
        match self {
            Self::Sp => 0x00,
            Self::G7231 => 0x02,
        }
    }

    /// Fill byte used to pad the final partial block.
    pub const fn fill_byte(self) -> u8 {
        match self {
            Self::Sp => 0x00,
            Self::G7231 => 0xFF,
        }
    }

    /// The sync-header cycle for this codec.
    pub const fn sync_headers(self) -> &'static [[u8; SYNC_HEADER_LEN]] {
        match self {
            Self::Sp => &SP_SYNC_HEADERS,
            Self::G7231 => &G723_1_SYNC_HEADERS,
        }
    }
}

impl TryFrom<CodecId> for DssCodec {
    type Error = Error;

    fn try_from(id: CodecId) -> Result<Self> {
        match id {
            CodecId::DssSp => Ok(Self::Sp),
            CodecId::G7231 => Ok(Self::G7231),
            other => Err(Error::UnsupportedCodec(other)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_codec_tags() {
        assert_eq!(DssCodec::Sp.tag(), 0x00);
        assert_eq!(DssCodec::G7231.tag(), 0x02);
    }

    #[test]
    fn test_fill_bytes() {
        assert_eq!(DssCodec::Sp.fill_byte(), 0x00);
        assert_eq!(DssCodec::G7231.fill_byte(), 0xFF);
    }

    #[test]
    fn test_sync_table_selection() {
        assert_eq!(DssCodec::Sp.sync_headers().len(), 42);
        assert_eq!(DssCodec::G7231.sync_headers().len(), 12);
    }

    #[test]
    fn test_codec_id_mapping() {
        assert_eq!(DssCodec::try_from(CodecId::DssSp).unwrap(), DssCodec::Sp);
        assert_eq!(DssCodec::try_from(CodecId::G7231).unwrap(), DssCodec::G7231);
        assert!(matches!(
            DssCodec::try_from(CodecId::Pcm),
            Err(Error::UnsupportedCodec(CodecId::Pcm))
        ));
    }

    #[test]
    fn test_supports_codec() {
        assert!(supports_codec(CodecId::DssSp));
        assert!(supports_codec(CodecId::G7231));
        assert!(!supports_codec(CodecId::Pcm));
    }
}
