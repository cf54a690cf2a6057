//! Trace records exposed by the compression core.

/// Snapshot of the working registers after one round's rotation,
/// together with the schedule word and temporaries that produced it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoundState {
    pub round: usize,
    pub w: u32,
    pub a: u32,
    pub b: u32,
    pub c: u32,
    pub d: u32,
    pub e: u32,
    pub f: u32,
    pub g: u32,
    pub h: u32,
    pub t1: u32,
    pub t2: u32,
}

impl RoundState {
    /// Registers in conventional a..h order.
    pub fn registers(&self) -> [u32; 8] {
        [
            self.a, self.b, self.c, self.d, self.e, self.f, self.g, self.h,
        ]
    }
}

/// Complete internal trajectory of one block compression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trace {
    /// The input block as consumed.
    pub block: [u8; 64],
    /// Expanded message schedule, W[0..64].
    pub schedule: [u32; 64],
    /// Initial hash state the rounds started from.
    pub init: [u32; 8],
    /// Per-round snapshots, ascending round order.
    pub rounds: [RoundState; 64],
    /// Hash state after the final additions.
    pub state: [u32; 8],
    /// Big-endian concatenation of `state`.
    pub digest: [u8; 32],
}

impl Trace {
    pub fn digest_hex(&self) -> String {
        hex::encode(self.digest)
    }
}
