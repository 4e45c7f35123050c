//! Test utilities shared across unit tests, integration tests and benches.
//!
//! This module is always compiled but hidden from documentation.
//! It provides deterministic text generators so failures reproduce by seed.

#![doc(hidden)]

/// Small xorshift generator; deterministic across platforms.
#[derive(Debug, Clone)]
pub struct XorShift64(u64);

impl XorShift64 {
    pub fn new(seed: u64) -> Self {
        // Zero is a fixed point of xorshift
        Self(seed ^ 0x9E37_79B9_7F4A_7C15)
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    /// Uniform-ish value in `0..bound` (`bound > 0`).
    pub fn below(&mut self, bound: usize) -> usize {
        (self.next_u64() % bound as u64) as usize
    }
}

/// `len` bytes drawn from `alphabet`.
pub fn random_text(seed: u64, len: usize, alphabet: &[u8]) -> Vec<u8> {
    let mut rng = XorShift64::new(seed);
    (0..len).map(|_| alphabet[rng.below(alphabet.len())]).collect()
}

/// DNA-like text over `ACGT`.
pub fn dna_text(seed: u64, len: usize) -> Vec<u8> {
    random_text(seed, len, b"ACGT")
}

/// Highly repetitive text: a random motif repeated with rare point edits.
pub fn repetitive_text(seed: u64, len: usize, motif_len: usize) -> Vec<u8> {
    let mut rng = XorShift64::new(seed);
    let motif = random_text(seed.wrapping_add(1), motif_len.max(1), b"abcdefgh");
    (0..len)
        .map(|i| {
            if rng.below(64) == 0 {
                b'z'
            } else {
                motif[i % motif.len()]
            }
        })
        .collect()
}

/// Fibonacci word `abaababaabaab...`, a classic worst case for small ɤ.
pub fn fibonacci_word(len: usize) -> Vec<u8> {
    let (mut prev, mut cur) = (b"a".to_vec(), b"ab".to_vec());
    while cur.len() < len {
        let next = [cur.as_slice(), prev.as_slice()].concat();
        prev = cur;
        cur = next;
    }
    cur.truncate(len);
    cur
}
