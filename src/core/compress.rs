//! SHA-256 single-block compression with the full internal state
//! trajectory exposed — FIPS PUB 180-4 semantics, wrapping u32 arithmetic
//! throughout.
//!
//! The trace exists so a partial hardware or GPU implementation can be
//! diffed round-by-round against a trusted reference.

use crate::core::block::Block;
use crate::core::trace::{RoundState, Trace};

/// SHA-256 initial hash values (H0).
pub const H0: [u32; 8] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a,
    0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

/// SHA-256 round constants (K).
pub const K: [u32; 64] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5,
    0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3,
    0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc,
    0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7,
    0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13,
    0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3,
    0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5,
    0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208,
    0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

/// Right rotate a 32-bit word
#[inline(always)]
fn rotr(x: u32, n: u32) -> u32 {
    (x >> n) | (x << (32 - n))
}

/// SHA-256 σ₀ function (message schedule)
#[inline(always)]
fn sigma0(x: u32) -> u32 {
    rotr(x, 7) ^ rotr(x, 18) ^ (x >> 3)
}

/// SHA-256 σ₁ function (message schedule)
#[inline(always)]
fn sigma1(x: u32) -> u32 {
    rotr(x, 17) ^ rotr(x, 19) ^ (x >> 10)
}

/// SHA-256 Σ₀ function (rounds)
#[inline(always)]
fn big_sigma0(x: u32) -> u32 {
    rotr(x, 2) ^ rotr(x, 13) ^ rotr(x, 22)
}

/// SHA-256 Σ₁ function (rounds)
#[inline(always)]
fn big_sigma1(x: u32) -> u32 {
    rotr(x, 6) ^ rotr(x, 11) ^ rotr(x, 25)
}

/// SHA-256 Ch function. Operating on u32 keeps the whole result masked;
/// the reference script only masked the second xor term and leaned on the
/// enclosing addition to truncate.
#[inline(always)]
fn ch(e: u32, f: u32, g: u32) -> u32 {
    (e & f) ^ ((!e) & g)
}

/// SHA-256 Maj function
#[inline(always)]
fn maj(a: u32, b: u32, c: u32) -> u32 {
    (a & b) ^ (a & c) ^ (b & c)
}

/// Expand a block into the 64-word message schedule.
///
/// Words 0..15 are the big-endian 4-byte groups of the block; words 16..63
/// follow the schedule recurrence with wrapping additions.
pub fn expand_schedule(block: &Block) -> [u32; 64] {
    let bytes = block.as_bytes();
    let mut w = [0u32; 64];
    for i in 0..16 {
        w[i] = u32::from_be_bytes([
            bytes[i * 4],
            bytes[i * 4 + 1],
            bytes[i * 4 + 2],
            bytes[i * 4 + 3],
        ]);
    }
    for i in 16..64 {
        w[i] = sigma1(w[i - 2])
            .wrapping_add(w[i - 7])
            .wrapping_add(sigma0(w[i - 15]))
            .wrapping_add(w[i - 16]);
    }
    w
}

/// Run the 64 compression rounds from `init`, snapshotting the registers
/// after every round's rotation.
///
/// Rounds are strictly sequential: round i+1 reads round i's outputs.
/// Returns the ordered snapshots and the final a..h registers.
pub fn run_rounds(schedule: &[u32; 64], init: [u32; 8]) -> ([RoundState; 64], [u32; 8]) {
    let mut a = init[0];
    let mut b = init[1];
    let mut c = init[2];
    let mut d = init[3];
    let mut e = init[4];
    let mut f = init[5];
    let mut g = init[6];
    let mut h = init[7];

    let mut rounds = [RoundState::default(); 64];

    for i in 0..64 {
        let t1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(K[i])
            .wrapping_add(schedule[i]);
        let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);

        rounds[i] = RoundState {
            round: i,
            w: schedule[i],
            a, b, c, d, e, f, g, h,
            t1, t2,
        };
    }

    (rounds, [a, b, c, d, e, f, g, h])
}

/// Fold the final registers back into the initial state and render the
/// 32-byte big-endian digest.
pub fn finalize(init: [u32; 8], regs: [u32; 8]) -> ([u32; 8], [u8; 32]) {
    let mut state = [0u32; 8];
    for k in 0..8 {
        state[k] = init[k].wrapping_add(regs[k]);
    }
    let mut digest = [0u8; 32];
    for k in 0..8 {
        digest[k * 4..(k + 1) * 4].copy_from_slice(&state[k].to_be_bytes());
    }
    (state, digest)
}

/// Compress one block from the standard initial state, returning the full
/// trace: schedule, per-round snapshots, final state, and digest.
pub fn compress(block: &Block) -> Trace {
    let schedule = expand_schedule(block);
    let (rounds, regs) = run_rounds(&schedule, H0);
    let (state, digest) = finalize(H0, regs);
    Trace {
        block: *block.as_bytes(),
        schedule,
        init: H0,
        rounds,
        state,
        digest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::block::{Block, TEST_VECTOR};

    #[test]
    fn schedule_head_matches_block_words() {
        let block = Block::test_vector();
        let w = expand_schedule(&block);
        assert_eq!(w[0], 0x0279be66);
        assert_eq!(w[1], 0x7ef9dcbb);
        assert_eq!(w[2], 0xac55a062);
        assert_eq!(w[3], 0x95ce870b);
    }

    #[test]
    fn schedule_extension_known_words() {
        // Hand-checked against the original reference computation.
        let block = Block::test_vector();
        let w = expand_schedule(&block);
        assert_eq!(w[16], 0x1085d5f6);
        assert_eq!(w[17], 0x38699114);
        assert_eq!(w[63], 0x674f76d1);
    }

    #[test]
    fn round_zero_values() {
        let block = Block::test_vector();
        let w = expand_schedule(&block);
        let (rounds, _) = run_rounds(&w, H0);
        let r0 = rounds[0];
        assert_eq!(r0.round, 0);
        assert_eq!(r0.w, 0x0279be66);
        assert_eq!(r0.t1, 0xf5f1abce);
        assert_eq!(r0.t2, 0x08909ae5);
        assert_eq!(r0.a, 0xfe8246b3);
        assert_eq!(r0.e, 0x9b41a108);
        // registers b..d and f..h are the shifted initial state
        assert_eq!(r0.b, H0[0]);
        assert_eq!(r0.f, H0[4]);
    }

    #[test]
    fn final_round_registers() {
        let trace = compress(&Block::test_vector());
        let r63 = trace.rounds[63];
        assert_eq!(r63.a, 0xa5677548);
        assert_eq!(r63.e, 0xe37a7623);
    }

    #[test]
    fn pubkey_vector_digest() {
        let trace = compress(&Block::test_vector());
        assert_eq!(
            trace.digest_hex(),
            "0f715baf5d4c2ed329785cef29e562f73488c8a2bb9dbc5700b361d54b9b0554"
        );
    }

    #[test]
    fn digest_matches_sha2_crate_on_message() {
        use sha2::{Digest, Sha256};
        let trace = compress(&Block::test_vector());
        let expected = Sha256::digest(TEST_VECTOR);
        assert_eq!(trace.digest[..], expected[..]);
    }

    #[test]
    fn abc_single_block() {
        let trace = compress(&Block::pad_message(b"abc").unwrap());
        assert_eq!(
            trace.digest_hex(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn boundary_blocks_have_fixed_digests() {
        let zero = compress(&Block::from_bytes(&[0u8; 64]).unwrap());
        assert_eq!(
            zero.digest_hex(),
            "da5698be17b9b46962335799779fbeca8ce5d491c0d26243bafef9ea1837a9d8"
        );
        let ff = compress(&Block::from_bytes(&[0xffu8; 64]).unwrap());
        assert_eq!(
            ff.digest_hex(),
            "ef0c748df4da50a8d6c43c013edc3ce76c9d9fa9a1458ade56eb86c0a64492d2"
        );
    }
}
