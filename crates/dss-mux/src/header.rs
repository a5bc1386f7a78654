//! File header layout and construction
//!
//! Handles the fixed `512 × version`-byte preamble written once at stream
//! start, before any audio data.

use binrw::io::Cursor;
use binrw::{BinRead, BinWrite};

use crate::codec::DssCodec;
use crate::error::Result;
use crate::{BLOCK_SIZE, DSS_MAGIC, FILE_HEADER_LEN, FORMAT_VERSION};

/// Absolute offset of the on-disk codec tag byte within the file header.
const CODEC_TAG_OFFSET: usize = 675;

/// Length of the fixed leading fields covered by [`DssFileHeader`].
const FIXED_FIELDS_LEN: usize = 68;

/// Stream metadata written into the file header.
///
/// All string fields are opaque to the muxer: they are zero-padded or
/// truncated to their on-disk width and never interpreted. Recorders
/// typically store ASCII `YYMMDDHHMMSS` timestamps and an ASCII runtime
/// string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DssMetadata {
    /// Author / hardware identification; 16 bytes on disk.
    pub author: String,
    /// Creation timestamp; 12 bytes on disk.
    pub created: String,
    /// Last-modified timestamp; 12 bytes on disk.
    pub modified: String,
    /// Recording runtime as a string; 6 bytes on disk.
    pub runtime: String,
    /// Recording runtime in milliseconds, stored little-endian at absolute
    /// offset 512 (format version 2; version 3 moves it to 530).
    pub runtime_ms: u32,
}

/// Fixed leading fields of the DSS file header.
///
/// Covers the first 68 bytes of the header. The remainder up to
/// [`FILE_HEADER_LEN`] is positional padding produced by
/// [`DssFileHeader::to_bytes`]: `0xFF` filler up to offset 512, the
/// little-endian runtime-in-milliseconds value, zeros up to offset 675, the
/// codec tag byte, then `0xFF` filler to the end.
#[derive(Debug, Clone, PartialEq, Eq, BinRead, BinWrite)]
#[brw(little)]
pub struct DssFileHeader {
    /// Format version; fixes the header length at `512 × version` bytes.
    #[br(assert(version == FORMAT_VERSION, "unsupported DSS version: {}", version))]
    pub version: u8,

    /// Magic signature, always `"dss"`.
    #[br(assert(magic == DSS_MAGIC, "invalid DSS magic: {:?}", magic))]
    pub magic: [u8; 3],

    /// Reserved, all-zero.
    pub reserved0: [u8; 8],

    /// Author / hardware tag, zero-padded.
    pub author: [u8; 16],

    /// Reserved, zero.
    pub reserved1: u32,

    /// Reserved. Sample files show fixed non-zero patterns here
    /// (`FE FF FE FF F7 FF` and variants); all-zero is accepted.
    pub reserved2: [u8; 6],

    /// Creation timestamp, zero-padded.
    pub created: [u8; 12],

    /// Last-modified timestamp, zero-padded.
    pub modified: [u8; 12],

    /// Runtime string, zero-padded.
    pub runtime: [u8; 6],
}

impl DssFileHeader {
    /// Build the fixed header fields from caller metadata.
    pub fn new(metadata: &DssMetadata) -> Self {
        Self {
            version: FORMAT_VERSION,
            magic: DSS_MAGIC,
            reserved0: [0; 8],
            author: fixed_width(&metadata.author),
            reserved1: 0,
            reserved2: [0; 6],
            created: fixed_width(&metadata.created),
            modified: fixed_width(&metadata.modified),
            runtime: fixed_width(&metadata.runtime),
        }
    }

    /// Serialize the complete [`FILE_HEADER_LEN`]-byte file header.
    ///
    /// `codec` supplies the tag byte at offset 675; `runtime_ms` is stored
    /// little-endian at offset 512.
    pub fn to_bytes(&self, codec: DssCodec, runtime_ms: u32) -> Result<Vec<u8>> {
        let mut buffer = Vec::with_capacity(FILE_HEADER_LEN);
        let mut cursor = Cursor::new(&mut buffer);
        self.write(&mut cursor)?;

        buffer.resize(BLOCK_SIZE, 0xFF);
        buffer.extend_from_slice(&runtime_ms.to_le_bytes());
        buffer.resize(CODEC_TAG_OFFSET, 0x00);
        buffer.push(codec.tag());
        buffer.resize(FILE_HEADER_LEN, 0xFF);

        Ok(buffer)
    }
}

/// Zero-pad or truncate caller bytes to a fixed on-disk width.
fn fixed_width<const N: usize>(value: &str) -> [u8; N] {
    let mut field = [0u8; N];
    let bytes = value.as_bytes();
    let len = bytes.len().min(N);
    field[..len].copy_from_slice(&bytes[..len]);
    field
}
