use anyhow::{Context, Result};

use crate::cli::InputArgs;
use crate::core::block::{Block, TEST_VECTOR};

pub struct ResolvedInput {
    pub block: Block,
    /// Unpadded message bytes when the block came from padding; `None`
    /// for raw `--block` input.
    pub message: Option<Vec<u8>>,
}

/// Turn CLI input selection into a block: raw 64-byte hex, a message from
/// a file or hex argument (padded), or the built-in test vector.
pub fn resolve(args: &InputArgs) -> Result<ResolvedInput> {
    if let Some(hexstr) = &args.block {
        let bytes = hex::decode(hexstr.trim()).context("decode --block hex")?;
        let block = Block::from_bytes(&bytes)?;
        return Ok(ResolvedInput {
            block,
            message: None,
        });
    }

    let msg = if let Some(path) = &args.file {
        std::fs::read(path)
            .with_context(|| format!("read message file '{}'", path.display()))?
    } else if let Some(hexstr) = &args.message {
        hex::decode(hexstr.trim()).context("decode message hex")?
    } else {
        TEST_VECTOR.to_vec()
    };

    let block = Block::pad_message(&msg)?;
    Ok(ResolvedInput {
        block,
        message: Some(msg),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_test_vector() {
        let resolved = resolve(&InputArgs::default()).unwrap();
        assert_eq!(resolved.message.as_deref(), Some(&TEST_VECTOR[..]));
        assert_eq!(resolved.block, Block::test_vector());
    }

    #[test]
    fn raw_block_skips_padding() {
        let args = InputArgs {
            block: Some("00".repeat(64)),
            ..Default::default()
        };
        let resolved = resolve(&args).unwrap();
        assert!(resolved.message.is_none());
        assert_eq!(resolved.block.as_bytes(), &[0u8; 64]);
    }

    #[test]
    fn raw_block_of_wrong_length_is_rejected() {
        let args = InputArgs {
            block: Some("00".repeat(63)),
            ..Default::default()
        };
        assert!(resolve(&args).is_err());
    }
}
