use super::{Coefficients, Realization, RealizationKind};
use crate::signal::Signal;

/// Reference delay-line evaluation using shifting registers
///
/// Keeps the last `|B|` inputs and `|A|` outputs in registers where index 0
/// is the newest value, shifting every register by one slot per sample.
/// Same recurrence as the direct form, at an extra O(|A| + |B|) shift cost
/// per sample. The dispatcher never selects it; it is the readable baseline
/// the circular delay line is checked against.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearDelayLine;

impl Realization for LinearDelayLine {
    fn kind(&self) -> RealizationKind {
        RealizationKind::LinearDelayLine
    }

    fn apply(&self, coefficients: &Coefficients, signal: &Signal) -> Signal {
        let b = coefficients.b();
        let feedback = coefficients.feedback();

        let mut wb = vec![0.0f64; b.len()];
        let mut wa = vec![0.0f64; coefficients.a().len()];
        let mut y = Vec::with_capacity(signal.len());

        for &sample in signal.samples() {
            wb[0] = sample;

            let forward: f64 = b.iter().zip(&wb).map(|(bk, xk)| bk * xk).sum();
            let backward: f64 = feedback.iter().zip(&wa).map(|(am, ym)| am * ym).sum();
            let output = forward - backward;

            shift_right(&mut wb);
            shift_right(&mut wa);
            wa[0] = output;

            y.push(output);
        }

        signal.with_samples(y)
    }
}

/// Move every element one slot toward the end, dropping the last
fn shift_right(register: &mut [f64]) {
    let len = register.len();
    if len > 1 {
        register.copy_within(0..len - 1, 1);
    }
}
