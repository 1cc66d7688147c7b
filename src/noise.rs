use crate::{
    error::{NoiseError, Result},
    lcg::Lcg,
    utils::wrap_byte,
};

const SQRT_3: f64 = 1.7320508075688772;

/// Fractal settings shared by [`Simplex::fbm`] and texture generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractalParams {
    pub octaves: u32,
    pub persistence: f64,
    pub lacunarity: f64,
}

impl Default for FractalParams {
    fn default() -> Self {
        Self {
            octaves: 4,
            persistence: 0.5,
            lacunarity: 2.0,
        }
    }
}

impl FractalParams {
    pub fn new(octaves: u32, persistence: f64, lacunarity: f64) -> Self {
        Self {
            octaves,
            persistence,
            lacunarity,
        }
    }

    /// Rejects settings that would turn fbm into `0 / 0` or a degenerate
    /// frequency sweep.
    pub fn validate(&self) -> Result<()> {
        if self.octaves == 0 {
            return Err(NoiseError::invalid("octaves", "must be at least 1"));
        }
        let total = self.amplitude_sum();
        if total == 0.0 || !total.is_finite() {
            return Err(NoiseError::invalid(
                "persistence",
                format!(
                    "{} over {} octaves sums amplitudes to {total}",
                    self.persistence, self.octaves
                ),
            ));
        }
        if !(self.lacunarity.is_finite() && self.lacunarity > 0.0) {
            return Err(NoiseError::invalid(
                "lacunarity",
                format!("must be finite and positive, got {}", self.lacunarity),
            ));
        }
        Ok(())
    }

    /// Sum of the per-octave amplitudes fbm divides by. Persistence is only
    /// applied after an octave is sampled, so one octave always sums to 1.
    fn amplitude_sum(&self) -> f64 {
        let mut total = 0.0;
        let mut amplitude = 1.0;
        for _ in 0..self.octaves {
            total += amplitude;
            amplitude *= self.persistence;
        }
        total
    }
}

/// 2D simplex noise over a permutation table drawn from [`Lcg`].
///
/// Tables are built once in [`Simplex::new`] and never change, so a
/// `Simplex` can be shared freely between threads.
pub struct Simplex {
    perm: [u8; 512],
    perm9: [u8; 512],
}

impl Simplex {
    // Constants for 2D simplex noise
    const F2: f64 = 0.5 * (SQRT_3 - 1.0);
    const G2: f64 = (3.0 - SQRT_3) / 6.0;

    const GRADIENT_2D: [(i8, i8); 9] = [
        (1, 1),
        (-1, 1),
        (1, -1),
        (-1, -1),
        (1, 0),
        (-1, 0),
        (0, 1),
        (0, -1),
        (0, 1),
    ];

    pub fn new(seed: i64) -> Self {
        let mut perm = [0u8; 512];
        let mut perm9 = [0u8; 512];

        let mut rng = Lcg::new(seed);
        for i in 0..256 {
            // random() is offset into [0.5, 1.5], the mask folds it back
            let n = ((256.0 * rng.random()).floor() as u32 & 255) as u8;

            perm[i] = n;
            perm[i + 256] = n;
            perm9[i] = n % 9;
            perm9[i + 256] = n % 9;
        }

        log::debug!("built simplex permutation table for seed {seed}");

        Self { perm, perm9 }
    }

    pub const fn permutation(&self) -> &[u8; 512] {
        &self.perm
    }

    /// Gradient index (`perm % 9`) for every permutation entry.
    pub const fn gradient_indices(&self) -> &[u8; 512] {
        &self.perm9
    }

    /// Coherent noise at `(x, y)`, roughly in `[-1, 1]`.
    pub fn get_value(&self, x: f64, y: f64) -> f64 {
        let s = (x + y) * Self::F2;
        let i = (x + s).floor();
        let j = (y + s).floor();

        let t = (i + j) * Self::G2;
        let x0 = x - (i - t);
        let y0 = y - (j - t);

        let (i1, j1): (usize, usize) = if x0 > y0 { (1, 0) } else { (0, 1) };

        let x1 = x0 - i1 as f64 + Self::G2;
        let y1 = y0 - j1 as f64 + Self::G2;

        let x2 = x0 - 1.0 + 2.0 * Self::G2;
        let y2 = y0 - 1.0 + 2.0 * Self::G2;

        let ii = usize::from(wrap_byte(i));
        let jj = usize::from(wrap_byte(j));

        let gi0 = self.perm9[ii + self.perm[jj] as usize];
        let gi1 = self.perm9[ii + i1 + self.perm[jj + j1] as usize];
        let gi2 = self.perm9[ii + 1 + self.perm[jj + 1] as usize];

        let n0 = Self::corner(gi0, x0, y0);
        let n1 = Self::corner(gi1, x1, y1);
        let n2 = Self::corner(gi2, x2, y2);

        70.0 * (n0 + n1 + n2)
    }

    /// Fractal Brownian motion: `octaves` layers of [`Self::get_value`],
    /// normalised by the summed amplitudes.
    pub fn fbm(
        &self,
        x: f64,
        y: f64,
        octaves: u32,
        persistence: f64,
        lacunarity: f64,
    ) -> Result<f64> {
        let params = FractalParams::new(octaves, persistence, lacunarity);
        params.validate()?;
        Ok(self.fbm_unchecked(x, y, &params))
    }

    pub(crate) fn fbm_unchecked(&self, x: f64, y: f64, params: &FractalParams) -> f64 {
        let mut value = 0.0;
        let mut max_value = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;

        for _ in 0..params.octaves {
            value += self.get_value(x * frequency, y * frequency) * amplitude;
            max_value += amplitude;

            amplitude *= params.persistence;
            frequency *= params.lacunarity;
        }

        value / max_value
    }

    fn corner(gi: u8, x: f64, y: f64) -> f64 {
        let t = 0.5 - x * x - y * y;
        if t < 0.0 {
            return 0.0;
        }
        let t_sq = t * t;
        t_sq * t_sq * Self::dot2d(gi, x, y)
    }

    fn dot2d(gi: u8, x: f64, y: f64) -> f64 {
        let grad = Self::GRADIENT_2D[gi as usize];
        f64::from(grad.0) * x + f64::from(grad.1) * y
    }
}
