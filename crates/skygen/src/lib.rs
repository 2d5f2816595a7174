#![deny(clippy::correctness)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::pedantic,
    clippy::nursery,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::cast_lossless
)]
#![doc = include_str!("../README.md")]

mod distribution;
pub mod generators;
pub mod samplers;
pub mod test_cases;

pub use distribution::Distribution;
pub use generators::{generate, time_seed, Generator};
pub use test_cases::{par_generate, TestCase};

/// A single point in the unit hypercube.
pub type Vector = Vec<f64>;

/// An ordered collection of points that all have the same dimensionality.
pub type Dataset = Vec<Vector>;

/// The version of the crate.
pub const VERSION: &str = "0.1.0";
