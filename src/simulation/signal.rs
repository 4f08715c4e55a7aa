use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use std::f64::consts::PI;

use crate::signal::Signal;

/// Unit impulse of `len` samples
pub fn impulse(sampling_rate: u32, len: usize) -> Signal {
    Signal::impulse(sampling_rate, len)
}

/// Sine wave of `amplitude` at `freq_hz`
pub fn sine(sampling_rate: u32, len: usize, freq_hz: f64, amplitude: f64) -> Signal {
    let samples = (0..len)
        .map(|i| amplitude * (2.0 * PI * freq_hz * i as f64 / sampling_rate as f64).sin())
        .collect();
    Signal::new(sampling_rate, samples)
}

/// Gaussian white noise with standard deviation `std_dev`
///
/// The same seed always yields the same signal.
pub fn white_noise(sampling_rate: u32, len: usize, std_dev: f64, seed: u64) -> Signal {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let normal = match Normal::new(0.0, std_dev.abs()) {
        Ok(normal) => normal,
        Err(_) => return Signal::zeros(sampling_rate, len),
    };
    let samples = (0..len).map(|_| normal.sample(&mut rng)).collect();
    Signal::new(sampling_rate, samples)
}
