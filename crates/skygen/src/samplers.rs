//! Scalar samplers and the domain check shared by the dataset generators.

use rand::Rng;

/// Draws a value uniformly from the interval `[min, max]`.
///
/// Returns `min` when `min == max`. Consumes exactly one draw from `rng`.
///
/// # Arguments:
///
/// * `rng`: random number generator.
/// * `min`: lower end of the interval.
/// * `max`: upper end of the interval. Must not be less than `min`.
pub fn uniform<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    let x: f64 = rng.gen();
    x * (max - min) + min
}

/// Draws a peaked value by averaging `dim` uniform draws over `[min, max]`.
///
/// The average is then mapped through `avg * (max - min) + min` even though it
/// already lies in `[min, max]`. The result therefore lies in
/// `[min * (max - min) + min, max * (max - min) + min]` and is centred on
/// `mid * (max - min) + min`, where `mid = (min + max) / 2`. Only for `[0, 1]`
/// is this the interval itself: `[0.25, 0.75]` shrinks to `[0.375, 0.625]`, and
/// `[-l, l]` is centred on `-l`. The generated datasets depend on that exact
/// shape.
///
/// # Arguments:
///
/// * `rng`: random number generator.
/// * `min`: lower end of the interval.
/// * `max`: upper end of the interval.
/// * `dim`: number of uniform draws to average. Must be at least 1.
pub fn peaked<R: Rng>(rng: &mut R, min: f64, max: f64, dim: usize) -> f64 {
    let sum = (0..dim).map(|_| uniform(rng, min, max)).sum::<f64>();
    #[allow(clippy::cast_precision_loss)]
    let avg = sum / dim as f64;
    avg * (max - min) + min
}

/// Draws an approximately normal value centred on `med` using `peaked` over
/// `[med - var, med + var]`.
///
/// With `dim = 1` this is a uniform draw; larger `dim` concentrates the mass
/// near the centre (Irwin-Hall).
pub fn normal<R: Rng>(rng: &mut R, med: f64, var: f64, dim: usize) -> f64 {
    peaked(rng, med - var, med + var, dim)
}

/// Whether every component of `x` lies in `[min, max]`.
#[must_use]
pub fn in_bounds(min: f64, max: f64, x: &[f64]) -> bool {
    x.iter().all(|&v| min <= v && v <= max)
}
