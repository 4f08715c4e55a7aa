use super::{Coefficients, Realization, RealizationKind};
use crate::signal::Signal;

/// Straightforward evaluation of the difference equation
///
/// ```text
/// y[n] = sum_{k} b[k] x[n-k] - sum_{m>=1} a[m] y[n-m]
/// ```
///
/// reading previous inputs and outputs directly from the full input and
/// output arrays. Terms reaching before the start of the signal are treated
/// as zero. Cost is O(N (|A| + |B|)) with no buffer maintenance.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectForm;

impl Realization for DirectForm {
    fn kind(&self) -> RealizationKind {
        RealizationKind::DirectForm
    }

    fn apply(&self, coefficients: &Coefficients, signal: &Signal) -> Signal {
        let b = coefficients.b();
        let a = coefficients.a();
        let x = signal.samples();
        let mut y = vec![0.0f64; x.len()];

        for n in 0..x.len() {
            // Ascending k then ascending m; float summation order is fixed.
            let mut acc = 0.0f64;
            for (k, &bk) in b.iter().enumerate().take(n + 1) {
                acc += bk * x[n - k];
            }
            for (m, &am) in a.iter().enumerate().take(n + 1).skip(1) {
                acc -= am * y[n - m];
            }
            y[n] = acc;
        }

        signal.with_samples(y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(b: &[f64], a: &[f64], x: &[f64]) -> Vec<f64> {
        let c = Coefficients::new(b.to_vec(), a.to_vec()).unwrap();
        DirectForm
            .apply(&c, &Signal::new(1000, x.to_vec()))
            .into_samples()
    }

    #[test]
    fn test_one_pole_impulse_response() {
        let y = apply(&[1.0], &[1.0, -0.5], &[1.0, 0.0, 0.0, 0.0]);
        assert_eq!(y, vec![1.0, 0.5, 0.25, 0.125]);
    }

    #[test]
    fn test_fir_moving_sum() {
        let y = apply(&[1.0, 1.0, 1.0], &[1.0], &[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(y, vec![1.0, 3.0, 6.0, 9.0, 12.0]);
    }

    #[test]
    fn test_coefficients_longer_than_signal() {
        let y = apply(&[1.0, 2.0, 3.0, 4.0], &[1.0, 0.5, 0.25, 0.125], &[1.0, 1.0]);
        // y0 = 1, y1 = 1 + 2 - 0.5 * 1
        assert_eq!(y, vec![1.0, 2.5]);
    }

    #[test]
    fn test_preserves_sampling_rate_and_input() {
        let c = Coefficients::new(vec![0.5], vec![1.0]).unwrap();
        let input = Signal::new(44100, vec![2.0, 4.0]);
        let output = DirectForm.apply(&c, &input);
        assert_eq!(output.sampling_rate(), 44100);
        assert_eq!(output.samples(), &[1.0, 2.0]);
        assert_eq!(input.samples(), &[2.0, 4.0]);
    }

    #[test]
    fn test_empty_signal() {
        assert!(apply(&[1.0], &[1.0, -0.9], &[]).is_empty());
    }
}
