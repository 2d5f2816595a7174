//! Descriptors of generation runs, for use in benchmarks.

use rand::prelude::*;
use rayon::prelude::*;

use crate::{generators, Dataset, Distribution};

/// The parameters of a single generation run, apart from its size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestCase {
    /// Dimensionality of the points.
    pub dim: usize,
    /// The family to draw the points from.
    pub distribution: Distribution,
    /// For the random number generator.
    pub seed: u64,
}

impl TestCase {
    /// Creates a new `TestCase`.
    #[must_use]
    pub const fn new(dim: usize, distribution: Distribution, seed: u64) -> Self {
        Self {
            dim,
            distribution,
            seed,
        }
    }

    /// Builds a batch of test cases with random dimensionality and distribution.
    ///
    /// # Arguments:
    ///
    /// * `num_cases`: number of test cases to build.
    /// * `max_dim`: dimensionalities are drawn uniformly from `1..=max_dim`.
    /// * `seed`: shared by all test cases for generating their data.
    /// * `rng`: random number generator used to pick the parameters.
    ///
    /// # Errors
    ///
    /// * If `max_dim` is zero.
    pub fn random_batch<R: Rng>(num_cases: usize, max_dim: usize, seed: u64, rng: &mut R) -> Result<Vec<Self>, String> {
        if max_dim == 0 {
            return Err("max_dim must be at least 1.".to_string());
        }

        Ok((0..num_cases)
            .map(|_| {
                let dim = rng.gen_range(1..=max_dim);
                let distribution = Distribution::ALL[rng.gen_range(0..Distribution::ALL.len())];
                Self::new(dim, distribution, seed)
            })
            .collect())
    }

    /// Generates the dataset described by this test case.
    ///
    /// # Errors
    ///
    /// See [`generators::generate`].
    pub fn generate(&self, count: usize) -> Result<Dataset, String> {
        generators::generate(count, self.dim, self.distribution, self.seed)
    }

    /// Generates the dataset and returns the number of points in it.
    ///
    /// # Errors
    ///
    /// See [`generators::generate`].
    pub fn run(&self, count: usize) -> Result<usize, String> {
        self.generate(count).map(|data| data.len())
    }
}

/// Generates the datasets for all `cases` in parallel.
///
/// Every case seeds its own random number generator, so the results are the
/// same as generating the cases one after another.
///
/// # Errors
///
/// * If any of the cases fails. No datasets are returned in that case.
pub fn par_generate(cases: &[TestCase], count: usize) -> Result<Vec<Dataset>, String> {
    cases.par_iter().map(|case| case.generate(count)).collect()
}
