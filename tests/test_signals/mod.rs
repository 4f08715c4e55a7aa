#![allow(dead_code, unused_imports)]

pub use ltifilter::simulation::{
    impulse, one_pole_cascade, random_stable_coefficients, sine, white_noise,
};

use ltifilter::Signal;

/// Largest per-sample absolute difference between two equal-length signals
pub fn max_abs_difference(a: &Signal, b: &Signal) -> f64 {
    assert_eq!(a.len(), b.len(), "signal lengths differ");
    a.samples()
        .iter()
        .zip(b.samples())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}

/// Assert every sample agrees within `tolerance`, scaled up for large values
pub fn assert_signals_close(actual: &Signal, expected: &Signal, tolerance: f64) {
    assert_eq!(actual.len(), expected.len(), "signal lengths differ");
    assert_eq!(actual.sampling_rate(), expected.sampling_rate());
    for (i, (a, e)) in actual.samples().iter().zip(expected.samples()).enumerate() {
        let scale = e.abs().max(1.0);
        assert!(
            (a - e).abs() <= tolerance * scale,
            "sample {}: {} vs {} (tolerance {})",
            i,
            a,
            e,
            tolerance
        );
    }
}
