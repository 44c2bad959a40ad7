/// Seeded pseudo-random sequence behind the deterministic generator.
///
/// A linear-congruential generator over `u32`:
/// `state = state * 1664525 + 1013904223 (mod 2^32)`, with each draw
/// `state / 2^32` in `[0, 1)`. The wraparound arithmetic is written out
/// explicitly because bit-identical replay of a seed is part of the
/// contract; do not substitute another RNG here.
#[derive(Debug, Clone)]
pub struct SeededSequence {
    state: u32,
}

impl SeededSequence {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Seeds from a stable identifier string via the rolling hash.
    pub fn from_key(key: &str) -> Self {
        Self::new(hash_key(key))
    }

    /// Next draw in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.state = self
            .state
            .wrapping_mul(1_664_525)
            .wrapping_add(1_013_904_223);
        f64::from(self.state) / 4_294_967_296.0
    }

    /// Next draw scaled to an index in `[0, len)`.
    pub(crate) fn next_index(&mut self, len: usize) -> usize {
        (self.next_f64() * len as f64) as usize
    }
}

/// Rolling shift-and-subtract hash of an identifier, kept in 32 bits.
///
/// Equivalent to `hash = (hash << 5) - hash + code_point` per character with
/// the result masked to 32 bits and made non-negative; `u32` wrapping
/// arithmetic gives exactly those semantics.
pub fn hash_key(key: &str) -> u32 {
    let mut hash: u32 = 0;
    for ch in key.chars() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(ch as u32);
    }
    hash
}
