//! Digital Speech Standard (DSS) container muxer
//!
//! DSS is the block-oriented container format produced by digital dictation
//! recorders. An output file starts with a fixed `512 × version`-byte file
//! header carrying author and timestamp metadata, followed by a data region
//! organized as 512-byte blocks. Every block opens with a 6-byte sync header
//! drawn cyclically from a codec-specific calibration table; the rest of the
//! block carries opaque compressed speech packets, split across block
//! boundaries as needed. On close, the final partial block is padded to a
//! full 512 bytes with a codec-dependent fill byte.
//!
//! This crate writes version 2 files carrying either DSS SP or G.723.1
//! speech packets. Packets are treated as opaque byte sequences supplied by
//! an external encoder; no bitstream work happens here, and reading DSS
//! files back is out of scope.
//!
//! # Example
//!
//! ```rust
//! use dss_mux::{CodecId, DssMetadata, DssMuxer};
//! use std::io::Cursor;
//!
//! # fn main() -> dss_mux::Result<()> {
//! let metadata = DssMetadata {
//!     author: "DPM 9600".to_string(),
//!     ..DssMetadata::default()
//! };
//!
//! let mut muxer = DssMuxer::open(Cursor::new(Vec::new()), CodecId::DssSp, metadata)?;
//! muxer.write_header()?;
//! muxer.write_packet(&[0u8; 42])?;
//! let stream = muxer.finalize()?;
//!
//! assert_eq!(stream.get_ref().len() % 512, 0);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod codec;
pub mod error;
pub mod header;
pub mod muxer;
pub mod sync;

pub use codec::{CodecId, DssCodec, supports_codec};
pub use error::{Error, Result};
pub use header::{DssFileHeader, DssMetadata};
pub use muxer::DssMuxer;

/// DSS magic bytes at file offset 1
pub const DSS_MAGIC: [u8; 3] = *b"dss";

/// Fixed size of a data-region block
pub const BLOCK_SIZE: usize = 512;

/// Size of the sync header opening each data-region block
pub const SYNC_HEADER_LEN: usize = 6;

/// Container format version written by this muxer
pub const FORMAT_VERSION: u8 = 2;

/// Total file-header length: `512 × version` bytes
pub const FILE_HEADER_LEN: usize = BLOCK_SIZE * FORMAT_VERSION as usize;
