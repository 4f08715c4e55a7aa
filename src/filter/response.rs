use num_complex::Complex;
use std::f64::consts::PI;

use super::{Coefficients, DirectForm, Realization};
use crate::signal::Signal;

/// First `len` samples of the filter's impulse response
///
/// Computed by running a unit impulse through the direct form, so it
/// reflects exactly what filtering produces.
pub fn impulse_response(coefficients: &Coefficients, len: usize) -> Vec<f64> {
    // Sampling rate does not affect the recurrence.
    DirectForm
        .apply(coefficients, &Signal::impulse(1, len))
        .into_samples()
}

/// Complex frequency response H(e^jw) at each frequency in Hz
///
/// Evaluates `B(z) / A(z)` on the unit circle at `z = e^(j 2 pi f / fs)`.
pub fn frequency_response(
    coefficients: &Coefficients,
    frequencies_hz: &[f64],
    sampling_rate: f64,
) -> Vec<Complex<f64>> {
    frequencies_hz
        .iter()
        .map(|&freq| {
            let omega = 2.0 * PI * freq / sampling_rate;
            let numerator = evaluate_polynomial(coefficients.b(), omega);
            let denominator = evaluate_polynomial(coefficients.a(), omega);
            numerator / denominator
        })
        .collect()
}

/// Magnitude response in dB at each frequency in Hz
pub fn magnitude_response_db(
    coefficients: &Coefficients,
    frequencies_hz: &[f64],
    sampling_rate: f64,
) -> Vec<f64> {
    frequency_response(coefficients, frequencies_hz, sampling_rate)
        .into_iter()
        .map(|h| 20.0 * h.norm().log10())
        .collect()
}

/// sum_k c[k] e^(-j omega k)
fn evaluate_polynomial(coeffs: &[f64], omega: f64) -> Complex<f64> {
    coeffs
        .iter()
        .enumerate()
        .map(|(k, &c)| Complex::from_polar(c, -omega * k as f64))
        .sum()
}
