//! Stateful DSS muxing session
//!
//! Owns the per-stream container state: the byte cursor inside the current
//! 512-byte block and the index into the active sync-header cycle.

use std::io::{Seek, SeekFrom, Write};

use tracing::{debug, trace};

use crate::codec::{CodecId, DssCodec};
use crate::error::{Error, Result};
use crate::header::{DssFileHeader, DssMetadata};
use crate::{BLOCK_SIZE, FILE_HEADER_LEN, SYNC_HEADER_LEN};

/// One DSS muxing session over an output stream.
///
/// Drives a single output stream through the container lifecycle:
/// [`open`](Self::open), then [`write_header`](Self::write_header) once, then
/// [`write_packet`](Self::write_packet) once per encoded frame in arrival
/// order, then [`finalize`](Self::finalize). Each session owns its state, so
/// concurrent sessions on different streams are independent.
///
/// After a reported I/O error the session is not safe to resume; reopen on a
/// fresh stream instead.
#[derive(Debug)]
pub struct DssMuxer<W: Write + Seek> {
    writer: W,
    codec: DssCodec,
    metadata: DssMetadata,
    /// Bytes written into the current block, always in `[0, 512)`.
    bytes_in_block: usize,
    /// Cursor into the active sync-header cycle; persists across packets.
    sync_index: usize,
}

impl<W: Write + Seek> DssMuxer<W> {
    /// Open a muxing session for the negotiated codec.
    ///
    /// Fails with [`Error::UnsupportedCodec`] before anything is written if
    /// the codec cannot be stored in a DSS container.
    pub fn open(writer: W, codec_id: CodecId, metadata: DssMetadata) -> Result<Self> {
        let codec = DssCodec::try_from(codec_id)?;
        debug!("opening DSS muxing session for {codec:?}");

        Ok(Self {
            writer,
            codec,
            metadata,
            bytes_in_block: 0,
            sync_index: 0,
        })
    }

    /// The codec variant this session stores.
    pub const fn codec(&self) -> DssCodec {
        self.codec
    }

    /// Bytes written into the current 512-byte block.
    pub const fn bytes_in_current_block(&self) -> usize {
        self.bytes_in_block
    }

    /// Write the file header; call once, with the stream at offset 0.
    ///
    /// After flushing, the stream must report exactly [`FILE_HEADER_LEN`]
    /// bytes or the call fails with [`Error::HeaderSizeMismatch`]. The data
    /// region begins immediately after.
    pub fn write_header(&mut self) -> Result<()> {
        let header = DssFileHeader::new(&self.metadata);
        let bytes = header.to_bytes(self.codec, self.metadata.runtime_ms)?;
        self.writer.write_all(&bytes)?;
        self.writer.flush()?;

        let size = self.writer.seek(SeekFrom::End(0))?;
        let expected = FILE_HEADER_LEN as u64;
        if size != expected {
            return Err(Error::HeaderSizeMismatch {
                expected,
                actual: size,
            });
        }

        debug!("wrote {size} byte DSS file header");
        self.bytes_in_block = 0;
        Ok(())
    }

    /// Write one compressed audio packet into the data region.
    ///
    /// Packets are laid out in arrival order and never reordered. A sync
    /// header opens every 512-byte block; a packet longer than the space
    /// left in the current block is split across as many block boundaries as
    /// needed. Packet contents are opaque and never validated.
    pub fn write_packet(&mut self, packet: &[u8]) -> Result<()> {
        trace!(
            "packet of {} bytes, {} in current block",
            packet.len(),
            self.bytes_in_block
        );

        if self.bytes_in_block == 0 {
            self.write_sync_header()?;
        }

        let mut rest = packet;
        while self.bytes_in_block + rest.len() > BLOCK_SIZE {
            let space = BLOCK_SIZE - self.bytes_in_block;
            self.writer.write_all(&rest[..space])?;
            rest = &rest[space..];
            trace!("block boundary crossed, {} bytes remain", rest.len());
            self.write_sync_header()?;
        }

        self.writer.write_all(rest)?;
        self.bytes_in_block += rest.len();
        if self.bytes_in_block == BLOCK_SIZE {
            self.bytes_in_block = 0;
        }

        Ok(())
    }

    /// Pad the final partial block, flush, and return the underlying stream.
    pub fn finalize(mut self) -> Result<W> {
        self.pad_trailer()?;
        self.writer.flush()?;
        debug!("finalized DSS muxing session");
        Ok(self.writer)
    }

    /// Emit the next record of the active sync-header cycle, opening a block.
    fn write_sync_header(&mut self) -> Result<()> {
        let table = self.codec.sync_headers();
        self.writer.write_all(&table[self.sync_index])?;
        self.sync_index = (self.sync_index + 1) % table.len();
        self.bytes_in_block = SYNC_HEADER_LEN;
        Ok(())
    }

    /// Fill the rest of a partially written block with the codec fill byte.
    ///
    /// No-op when the current block is already complete.
    fn pad_trailer(&mut self) -> Result<()> {
        if self.bytes_in_block == 0 {
            return Ok(());
        }

        let padding = BLOCK_SIZE - self.bytes_in_block;
        debug!("padding final block with {padding} fill bytes");
        self.writer.write_all(&vec![self.codec.fill_byte(); padding])?;
        self.bytes_in_block = 0;
        Ok(())
    }
}
