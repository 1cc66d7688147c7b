/// Linear congruential generator with the Numerical Recipes constants.
///
/// The whole stream is a pure function of the seed, which is what the
/// permutation tables in [`crate::Simplex`] rely on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    const MULTIPLIER: u32 = 1664525;
    const INCREMENT: u32 = 1013904223;

    /// Only the low 32 bits of `seed` are kept, so `-1` and `0xFFFF_FFFF`
    /// produce the same stream.
    pub const fn new(seed: i64) -> Self {
        Self { state: seed as u32 }
    }

    pub const fn state(&self) -> u32 {
        self.state
    }

    /// Advances the state and returns it.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
        self.state
    }

    /// Returns `next() / (2^32 - 1) + 0.5`.
    ///
    /// The result lies in `[0.5, 1.5]`, not the unit interval. Every
    /// permutation table ever built depends on this offset, so it stays.
    pub fn random(&mut self) -> f64 {
        f64::from(self.next()) / f64::from(u32::MAX) + 0.5
    }
}

impl Iterator for Lcg {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        Some(Lcg::next(self))
    }
}
