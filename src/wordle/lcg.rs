/// 48-bit linear congruential generator with the `java.util.Random`
/// parameters: multiplier `0x5DEECE66D`, increment `0xB`, modulus `2^48`,
/// seeded as `seed ^ 0x5DEECE66D`.
///
/// The daily word is drawn from this generator, and every instance has to
/// resolve the same date to the same word with no coordination, so the
/// algorithm is pinned here rather than taken from a library whose output
/// may change between versions. Changing any of these parameters reshuffles
/// every future daily word.
#[derive(Debug, Clone)]
pub struct Lcg48 {
    state: u64,
}

impl Lcg48 {
    const MULTIPLIER: u64 = 0x5_DEEC_E66D;
    const INCREMENT: u64 = 0xB;
    const MASK: u64 = (1 << 48) - 1;

    pub fn new(seed: i64) -> Self {
        Self {
            state: (seed as u64 ^ Self::MULTIPLIER) & Self::MASK,
        }
    }

    /// Advances the state once and returns the top `bits` bits.
    fn next(&mut self, bits: u32) -> u32 {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
            & Self::MASK;

        (self.state >> (48 - bits)) as u32
    }

    /// Uniform draw from `[0, bound)`.
    ///
    /// Power-of-two bounds take a single multiply-shift; everything else
    /// goes through the classic rejection loop so the draw stays uniform
    /// when `2^31` is not a multiple of `bound`.
    pub fn next_index(&mut self, bound: u32) -> u32 {
        debug_assert!(bound > 0, "bound must be positive");

        if bound.is_power_of_two() {
            return ((u64::from(bound) * u64::from(self.next(31))) >> 31) as u32;
        }

        loop {
            let bits = self.next(31);
            let val = bits % bound;

            if i64::from(bits) - i64::from(val) + i64::from(bound - 1) <= i64::from(i32::MAX) {
                return val;
            }
        }
    }
}
