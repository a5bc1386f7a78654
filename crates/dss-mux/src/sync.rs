//! Sync-header calibration tables
//!
//! Every 512-byte block in the data region opens with a 6-byte sync header
//! drawn cyclically from the table of the active codec. The records encode
//! per-frame timing/gain parameters and were recovered byte-for-byte from
//! recorder sample files; the muxer treats them as opaque calibration data.

use crate::SYNC_HEADER_LEN;

/// Sync-header cycle for the DSS SP codec.
///
/// The cycle is 42 records long; the final record is all-zero in recorder
/// output.
pub static SP_SYNC_HEADERS: [[u8; SYNC_HEADER_LEN]; 42] = [
    [15, 3, 13, 255, 0, 255],
    [143, 16, 12, 255, 0, 255],
    [143, 9, 13, 255, 0, 255],
    [15, 23, 12, 255, 0, 255],
    [15, 16, 12, 255, 0, 255],
    [15, 9, 13, 255, 0, 255],
    [143, 22, 12, 255, 0, 255],
    [143, 15, 12, 255, 0, 255],
    [143, 8, 13, 255, 0, 255],
    [15, 22, 12, 255, 0, 255],
    [15, 15, 12, 255, 0, 255],
    [15, 8, 13, 255, 0, 255],
    [143, 21, 12, 255, 0, 255],
    [143, 14, 12, 255, 0, 255],
    [143, 7, 13, 255, 0, 255],
    [15, 21, 12, 255, 0, 255],
    [15, 14, 12, 255, 0, 255],
    [15, 7, 13, 255, 0, 255],
    [143, 20, 12, 255, 0, 255],
    [143, 13, 12, 255, 0, 255],
    [143, 6, 13, 255, 0, 255],
    [15, 20, 12, 255, 0, 255],
    [15, 13, 12, 255, 0, 255],
    [15, 6, 13, 255, 0, 255],
    [143, 19, 12, 255, 0, 255],
    [143, 12, 12, 255, 0, 255],
    [143, 5, 13, 255, 0, 255],
    [15, 19, 12, 255, 0, 255],
    [15, 12, 12, 255, 0, 255],
    [15, 5, 13, 255, 0, 255],
    [143, 18, 12, 255, 0, 255],
    [143, 11, 12, 255, 0, 255],
    [143, 4, 13, 255, 0, 255],
    [15, 18, 12, 255, 0, 255],
    [15, 11, 12, 255, 0, 255],
    [15, 4, 13, 255, 0, 255],
    [143, 17, 12, 255, 0, 255],
    [143, 10, 12, 255, 0, 255],
    [143, 3, 13, 255, 0, 255],
    [15, 17, 12, 255, 0, 255],
    [15, 10, 12, 255, 0, 255],
    [0, 0, 0, 0, 0, 0],
];

/// Sync-header cycle for the G.723.1 codec.
pub static G723_1_SYNC_HEADERS: [[u8; SYNC_HEADER_LEN]; 12] = [
    [15, 3, 22, 255, 2, 255],
    [15, 14, 21, 255, 2, 255],
    [15, 13, 21, 255, 2, 255],
    [15, 12, 21, 255, 2, 255],
    [15, 11, 21, 255, 2, 255],
    [15, 10, 21, 255, 2, 255],
    [15, 9, 21, 255, 2, 255],
    [15, 8, 21, 255, 2, 255],
    [15, 7, 21, 255, 2, 255],
    [15, 6, 21, 255, 2, 255],
    [15, 5, 21, 255, 2, 255],
    [15, 4, 21, 255, 2, 255],
];

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lengths() {
        assert_eq!(SP_SYNC_HEADERS.len(), 42);
        assert_eq!(G723_1_SYNC_HEADERS.len(), 12);
    }

    #[test]
    fn test_codec_marker_bytes() {
        // Byte 4 of every calibrated record carries the codec tag value.
        for record in SP_SYNC_HEADERS.iter().take(41) {
            assert_eq!(record[3], 255);
            assert_eq!(record[4], 0);
            assert_eq!(record[5], 255);
        }
        for record in &G723_1_SYNC_HEADERS {
            assert_eq!(record[3], 255);
            assert_eq!(record[4], 2);
            assert_eq!(record[5], 255);
        }
    }

    #[test]
    fn test_tables_are_disjoint() {
        for sp in &SP_SYNC_HEADERS {
            assert!(!G723_1_SYNC_HEADERS.contains(sp));
        }
    }

    #[test]
    fn test_first_records() {
        assert_eq!(SP_SYNC_HEADERS[0], [0x0F, 0x03, 0x0D, 0xFF, 0x00, 0xFF]);
        assert_eq!(G723_1_SYNC_HEADERS[0], [0x0F, 0x03, 0x16, 0xFF, 0x02, 0xFF]);
    }
}
