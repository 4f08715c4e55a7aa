//! Deterministic test signals and coefficient sets.

mod coefficients;
mod signal;

pub use coefficients::{one_pole_cascade, random_stable_coefficients};
pub use signal::{impulse, sine, white_noise};
