use uuid::{Builder, Uuid};

const FNV_OFFSET_BASIS: u32 = 2_166_136_261;
const FNV_PRIME: u32 = 16_777_619;
const MULBERRY_INCREMENT: u32 = 0x6D2B_79F5;

/// 32-bit FNV-1a over the UTF-8 bytes of `input`.
///
/// Not suitable for anything that needs to be unguessable.
pub fn fnv1a_32(input: &str) -> u32 {
    input.bytes().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ u32::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// Mulberry32 stream. One instance per generation call, never shared.
#[derive(Debug)]
pub struct SeededRng {
    state: u32,
}

impl SeededRng {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    pub fn from_key(key: &str) -> Self {
        Self::new(fnv1a_32(key))
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(MULBERRY_INCREMENT);
        let s = self.state;
        let mut t = (s ^ (s >> 15)).wrapping_mul(s | 1);
        t = t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61)) ^ t;
        t ^ (t >> 14)
    }

    /// Float in `[0, 1)`.
    pub fn next(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }

    /// Integer in `[min, max)`. Returns `min` when the range is empty.
    pub fn range(&mut self, min: usize, max: usize) -> usize {
        if max <= min {
            return min;
        }

        min + (self.next() * (max - min) as f64).floor() as usize
    }

    /// Version 4 uuid built only from this stream's draws.
    ///
    /// `context` is folded into the bits so two calls made for different purposes
    /// (main meal, first alternate, second alternate) come from different sub-streams.
    pub fn uuid(&mut self, context: &str) -> Uuid {
        let mut local = SeededRng::new(self.next_u32() ^ fnv1a_32(context));
        let mut bytes = [0u8; 16];
        for chunk in bytes.chunks_exact_mut(4) {
            chunk.copy_from_slice(&local.next_u32().to_le_bytes());
        }

        Builder::from_random_bytes(bytes).into_uuid()
    }
}
