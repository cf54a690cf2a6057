//! Single 64-byte message blocks and the one-block padding rule.

use crate::core::error::CoreError;

/// Size of one SHA-256 message block in bytes.
pub const BLOCK_LEN: usize = 64;

/// Longest message that still pads into a single block
/// (one 0x80 byte and the 8-byte bit length must fit).
pub const MAX_SINGLE_BLOCK_MSG: usize = 55;

/// Compressed secp256k1 public key for private key 0x1 — the canonical
/// 33-byte test vector carried over from the GPU debugging workflow.
pub const TEST_VECTOR: [u8; 33] = [
    0x02, 0x79, 0xbe, 0x66, 0x7e, 0xf9, 0xdc, 0xbb, 0xac, 0x55, 0xa0, 0x62,
    0x95, 0xce, 0x87, 0x0b, 0x07, 0x02, 0x9b, 0xfc, 0xdb, 0x2d, 0xce, 0x28,
    0xd9, 0x59, 0xf2, 0x81, 0x5b, 0x16, 0xf8, 0x17, 0x98,
];

/// One pre-padded 64-byte block. Immutable once constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Block([u8; BLOCK_LEN]);

impl Block {
    /// Wrap a raw pre-padded block. The slice must be exactly 64 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CoreError> {
        if bytes.len() != BLOCK_LEN {
            return Err(CoreError::invalid_input(&format!(
                "block must be exactly {} bytes, got {}",
                BLOCK_LEN,
                bytes.len()
            )));
        }
        let mut block = [0u8; BLOCK_LEN];
        block.copy_from_slice(bytes);
        Ok(Block(block))
    }

    /// Pad a short message into exactly one block: append 0x80, zero-fill,
    /// and write the big-endian bit length into the last 8 bytes.
    pub fn pad_message(msg: &[u8]) -> Result<Self, CoreError> {
        if msg.len() > MAX_SINGLE_BLOCK_MSG {
            return Err(CoreError::message_too_long(msg.len()));
        }
        let mut block = [0u8; BLOCK_LEN];
        block[..msg.len()].copy_from_slice(msg);
        block[msg.len()] = 0x80;
        let bit_len = (msg.len() as u64) * 8;
        block[56..64].copy_from_slice(&bit_len.to_be_bytes());
        Ok(Block(block))
    }

    /// The built-in pubkey test vector, padded.
    pub fn test_vector() -> Self {
        // 33 bytes always fits in one block.
        match Self::pad_message(&TEST_VECTOR) {
            Ok(b) => b,
            Err(_) => unreachable!("test vector is 33 bytes"),
        }
    }

    pub fn as_bytes(&self) -> &[u8; BLOCK_LEN] {
        &self.0
    }
}
