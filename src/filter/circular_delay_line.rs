use super::{Coefficients, DelayLine, Realization, RealizationKind};
use crate::signal::Signal;

/// Delay-line evaluation over ring buffers
///
/// Computes the same recurrence as `LinearDelayLine`, but instead of
/// shifting both registers every sample it moves a write cursor, making
/// buffer maintenance O(1) per sample. Results match the linear delay line
/// up to floating-point reordering.
#[derive(Debug, Clone, Copy, Default)]
pub struct CircularDelayLine;

impl Realization for CircularDelayLine {
    fn kind(&self) -> RealizationKind {
        RealizationKind::CircularDelayLine
    }

    fn apply(&self, coefficients: &Coefficients, signal: &Signal) -> Signal {
        let b = coefficients.b();
        let feedback = coefficients.feedback();

        let mut inputs = DelayLine::new(b.len());
        let mut outputs = DelayLine::new(coefficients.a().len());
        let mut y = Vec::with_capacity(signal.len());

        for &sample in signal.samples() {
            inputs.write(sample);

            // Newest input pairs with b[0].
            let forward: f64 = b
                .iter()
                .zip(inputs.newest_to_oldest())
                .map(|(bk, xk)| bk * xk)
                .sum();

            // The slot under the output cursor is the oldest output, about
            // to be replaced; a[1] pairs with the one after it.
            let backward: f64 = feedback
                .iter()
                .zip(outputs.newest_to_oldest().skip(1))
                .map(|(am, ym)| am * ym)
                .sum();

            let output = forward - backward;
            outputs.write(output);
            y.push(output);

            inputs.advance();
            outputs.advance();
        }

        signal.with_samples(y)
    }
}
