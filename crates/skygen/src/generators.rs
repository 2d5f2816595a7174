//! Seeded generators for independent, correlated and anti-correlated datasets.

use rand::prelude::*;

use crate::{samplers, Dataset, Distribution, Vector};

/// Generate a dataset of `count` points in `[0, 1]^dim`.
///
/// A fresh random number generator is seeded with `seed` for every call, so
/// the same arguments always produce the same dataset. `Distribution::Unknown`
/// produces `count` points of `dim` zeros.
///
/// # Arguments:
///
/// * `count`: number of points to generate.
/// * `dim`: dimensionality of the points.
/// * `distribution`: the family to draw the points from.
/// * `seed`: for the random number generator.
///
/// # Errors
///
/// * If `dim` is zero.
pub fn generate(count: usize, dim: usize, distribution: Distribution, seed: u64) -> Result<Dataset, String> {
    Generator::from_seed(seed).generate(count, dim, distribution)
}

/// The current UNIX time in seconds, for use as a default seed.
#[must_use]
pub fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_or(0, |d| d.as_secs())
}

/// A seeded source of synthetic datasets.
///
/// Unlike [`generate`], a `Generator` keeps its random state between calls:
/// two consecutive calls continue the same random stream. Use
/// [`Generator::reseed`] to start over.
///
/// The correlated and anti-correlated families redraw a point until all of its
/// components lie in `[0, 1]`. By default there is no limit on the number of
/// redraws. [`Generator::with_max_attempts`] sets one.
#[derive(Debug, Clone)]
pub struct Generator {
    /// The random number generator.
    rng: StdRng,
    /// The seed the generator was last seeded with.
    seed: u64,
    /// The maximum number of candidates drawn for a single point.
    max_attempts: Option<usize>,
}

impl Generator {
    /// Creates a new `Generator` seeded with `seed`.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
            max_attempts: None,
        }
    }

    /// Creates a new `Generator` seeded with the current time.
    #[must_use]
    pub fn from_time() -> Self {
        Self::from_seed(time_seed())
    }

    /// Limits the number of candidates drawn for any single point.
    ///
    /// Generation fails, without returning any points, if a point cannot be
    /// accepted within `max_attempts` candidates.
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    /// The seed the generator was last seeded with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Resets the random state as though the generator were created with `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
        self.seed = seed;
    }

    /// Generates `count` points of dimensionality `dim` from `distribution`.
    ///
    /// # Errors
    ///
    /// * If `dim` is zero.
    /// * If a point exceeds the maximum number of attempts.
    pub fn generate(&mut self, count: usize, dim: usize, distribution: Distribution) -> Result<Dataset, String> {
        match distribution {
            Distribution::Independent => self.independent(count, dim),
            Distribution::Correlated => self.correlated(count, dim),
            Distribution::AntiCorrelated => self.anti_correlated(count, dim),
            Distribution::Unknown => {
                check_dim(dim)?;
                Ok(vec![vec![0.0; dim]; count])
            }
        }
    }

    /// Generates `count` points whose components are independent and uniform
    /// in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// * If `dim` is zero.
    pub fn independent(&mut self, count: usize, dim: usize) -> Result<Dataset, String> {
        check_dim(dim)?;
        let rng = &mut self.rng;
        Ok((0..count)
            .map(|_| (0..dim).map(|_| samplers::uniform(rng, 0.0, 1.0)).collect())
            .collect())
    }

    /// Generates `count` points whose components are positively correlated.
    ///
    /// # Errors
    ///
    /// * If `dim` is zero.
    /// * If a point exceeds the maximum number of attempts.
    pub fn correlated(&mut self, count: usize, dim: usize) -> Result<Dataset, String> {
        check_dim(dim)?;
        let max_attempts = self.max_attempts;
        let rng = &mut self.rng;
        (0..count)
            .map(|_| accept(rng, dim, max_attempts, draft_correlated))
            .collect()
    }

    /// Generates `count` points whose components are negatively correlated.
    ///
    /// # Errors
    ///
    /// * If `dim` is zero.
    /// * If a point exceeds the maximum number of attempts.
    pub fn anti_correlated(&mut self, count: usize, dim: usize) -> Result<Dataset, String> {
        check_dim(dim)?;
        let max_attempts = self.max_attempts;
        let rng = &mut self.rng;
        (0..count)
            .map(|_| accept(rng, dim, max_attempts, draft_anti_correlated))
            .collect()
    }
}

/// Rejects a dimensionality of zero.
fn check_dim(dim: usize) -> Result<(), String> {
    if dim == 0 {
        Err("Dimensionality must be at least 1.".to_string())
    } else {
        Ok(())
    }
}

/// The stages a correlated or anti-correlated point passes through.
enum Candidate {
    /// The buffer is being filled and perturbed.
    Drafting(Vector),
    /// One full perturbation pass is done and the domain check is pending.
    Validating(Vector),
    /// The point lies in `[0, 1]^dim`.
    Accepted(Vector),
}

/// Drafts candidates with `draft` until one lies in `[0, 1]^dim`.
///
/// # Errors
///
/// * If `max_attempts` candidates were drafted and none was accepted.
fn accept<R, F>(rng: &mut R, dim: usize, max_attempts: Option<usize>, mut draft: F) -> Result<Vector, String>
where
    R: Rng,
    F: FnMut(&mut R, &mut [f64]),
{
    let mut attempts = 0;
    let mut state = Candidate::Drafting(vec![0.0; dim]);
    loop {
        state = match state {
            Candidate::Drafting(mut x) => {
                if max_attempts.is_some_and(|max| attempts >= max) {
                    return Err(format!("Could not draw a valid point in {attempts} attempts."));
                }
                attempts += 1;
                draft(rng, &mut x);
                Candidate::Validating(x)
            }
            Candidate::Validating(x) => {
                if samplers::in_bounds(0.0, 1.0, &x) {
                    Candidate::Accepted(x)
                } else {
                    Candidate::Drafting(x)
                }
            }
            Candidate::Accepted(x) => return Ok(x),
        };
    }
}

/// Fills `x` with a correlated candidate.
///
/// All components start at a common base value and each axis then trades a
/// small, roughly normal amount with its cyclic neighbour.
fn draft_correlated<R: Rng>(rng: &mut R, x: &mut [f64]) {
    let dim = x.len();
    let v = samplers::peaked(rng, 0.0, 1.0, dim);
    let l = margin(v);
    x.fill(v);
    for d in 0..dim {
        let h = samplers::normal(rng, 0.0, l, dim);
        couple(x, d, h);
    }
}

/// Fills `x` with an anti-correlated candidate.
///
/// The base value is peaked around 0.5 and each axis trades a uniform amount
/// with its cyclic neighbour.
fn draft_anti_correlated<R: Rng>(rng: &mut R, x: &mut [f64]) {
    let dim = x.len();
    let v = samplers::normal(rng, 0.5, 0.25, dim);
    let l = margin(v);
    x.fill(v);
    for d in 0..dim {
        let h = samplers::uniform(rng, -l, l);
        couple(x, d, h);
    }
}

/// Distance from `v` to the nearer end of `[0, 1]`.
fn margin(v: f64) -> f64 {
    if v <= 0.5 {
        v
    } else {
        1.0 - v
    }
}

/// Adds `h` to axis `d` and subtracts it from the next axis, wrapping around.
///
/// With a single axis the two cancel and `x` is left unchanged.
fn couple(x: &mut [f64], d: usize, h: f64) {
    let next = (d + 1) % x.len();
    if next != d {
        x[d] += h;
        x[next] -= h;
    }
}
