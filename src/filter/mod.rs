//! Transfer-function filter and its time-domain realizations.

mod circular_delay_line;
mod coefficients;
mod delay_line;
mod direct_form;
mod linear_delay_line;
mod realization;
pub mod response;

pub use circular_delay_line::CircularDelayLine;
pub use coefficients::Coefficients;
pub use delay_line::DelayLine;
pub use direct_form::DirectForm;
pub use linear_delay_line::LinearDelayLine;
pub use realization::{Realization, RealizationKind};

use num_complex::Complex;

use crate::config::ApplyMode;
use crate::constants::{AUTO_DIRECT_FORM_MAX_COEFFICIENTS, DEFAULT_IMPULSE_RESPONSE_LENGTH};
use crate::error::{FilterError, Result};
use crate::signal::Signal;

/// Linear time-invariant filter described by rational transfer-function
/// coefficients
///
/// Coefficients are normalized on construction so that `a()[0] == 1`.
/// The filter keeps no delay-line state between calls: every `apply_*` call
/// filters one whole signal from rest and returns a new signal.
///
/// # Example
/// ```
/// use ltifilter::{ApplyMode, Filter, Signal};
///
/// let filter = Filter::new(vec![1.0], vec![1.0, -0.5]).unwrap();
/// let output = filter
///     .apply_to(&Signal::impulse(8000, 4), ApplyMode::Auto)
///     .unwrap();
/// assert_eq!(output.samples(), &[1.0, 0.5, 0.25, 0.125]);
/// ```
#[derive(Debug, Clone)]
pub struct Filter {
    coefficients: Coefficients,
    impulse_response_length: usize,
}

impl Filter {
    /// Create a filter with the default impulse response length
    ///
    /// # Errors
    /// Returns `FilterError::InvalidCoefficients` if either sequence is empty
    /// or `|a[0]|` is effectively zero.
    pub fn new(b: Vec<f64>, a: Vec<f64>) -> Result<Self> {
        Self::with_impulse_response_length(b, a, DEFAULT_IMPULSE_RESPONSE_LENGTH)
    }

    /// Create a filter with an explicit impulse response length
    ///
    /// The length is only used by `impulse_response`; filtering ignores it.
    pub fn with_impulse_response_length(
        b: Vec<f64>,
        a: Vec<f64>,
        impulse_response_length: usize,
    ) -> Result<Self> {
        if impulse_response_length == 0 {
            return Err(FilterError::Config(
                "impulse response length must be positive".to_string(),
            ));
        }
        Ok(Self {
            coefficients: Coefficients::new(b, a)?,
            impulse_response_length,
        })
    }

    pub fn coefficients(&self) -> &Coefficients {
        &self.coefficients
    }

    /// Normalized numerator coefficients
    pub fn b(&self) -> &[f64] {
        self.coefficients.b()
    }

    /// Normalized denominator coefficients (`a()[0] == 1`)
    pub fn a(&self) -> &[f64] {
        self.coefficients.a()
    }

    pub fn impulse_response_length(&self) -> usize {
        self.impulse_response_length
    }

    /// Replace both coefficient sequences at once and renormalize
    ///
    /// On error the filter keeps its previous coefficients.
    pub fn set_coefficients(&mut self, b: Vec<f64>, a: Vec<f64>) -> Result<()> {
        self.coefficients = Coefficients::new(b, a)?;
        Ok(())
    }

    /// Replace the denominator, renormalizing it together with the current
    /// numerator
    ///
    /// On error the filter keeps its previous coefficients.
    pub fn set_denominator(&mut self, a: Vec<f64>) -> Result<()> {
        self.coefficients.replace_denominator(a)
    }

    /// Replace the numerator only
    ///
    /// No renormalization happens: the new `b` is interpreted relative to the
    /// already-normalized denominator. Setting `b` and then `a` therefore
    /// differs from setting `a` and then `b` whenever the new `a[0] != 1`;
    /// use `set_coefficients` to change both consistently.
    pub fn set_numerator(&mut self, b: Vec<f64>) -> Result<()> {
        self.coefficients.replace_numerator(b)
    }

    pub fn set_impulse_response_length(&mut self, len: usize) -> Result<()> {
        if len == 0 {
            return Err(FilterError::Config(
                "impulse response length must be positive".to_string(),
            ));
        }
        self.impulse_response_length = len;
        Ok(())
    }

    /// Realization chosen for `mode`
    ///
    /// # Errors
    /// Returns `FilterError::UnsupportedMode` for `ApplyMode::Other`.
    pub fn select_realization(&self, mode: ApplyMode) -> Result<RealizationKind> {
        match mode {
            ApplyMode::Auto => {
                if self.coefficients.len() <= AUTO_DIRECT_FORM_MAX_COEFFICIENTS {
                    Ok(RealizationKind::DirectForm)
                } else {
                    Ok(RealizationKind::CircularDelayLine)
                }
            }
            ApplyMode::DifferenceEquation => Ok(RealizationKind::DirectForm),
            ApplyMode::Other => Err(FilterError::UnsupportedMode(mode)),
        }
    }

    /// Filter `signal` using the realization selected by `mode`
    ///
    /// `ApplyMode::Other` names a frequency-domain path this engine does not
    /// provide; it is reported as an error rather than passing the signal
    /// through unfiltered.
    pub fn apply_to(&self, signal: &Signal, mode: ApplyMode) -> Result<Signal> {
        let kind = match self.select_realization(mode) {
            Ok(kind) => kind,
            Err(e) => {
                log::warn!("Cannot filter with mode {}: {}", mode, e);
                return Err(e);
            }
        };
        log::debug!(
            "Filtering {} samples with {} ({} coefficients, mode {})",
            signal.len(),
            kind,
            self.coefficients.len(),
            mode
        );
        Ok(kind.realization().apply(&self.coefficients, signal))
    }

    /// Filter with the direct-form difference equation regardless of size
    pub fn apply_direct(&self, signal: &Signal) -> Signal {
        DirectForm.apply(&self.coefficients, signal)
    }

    /// Filter with the shifting-register reference delay line
    pub fn apply_linear_buffer(&self, signal: &Signal) -> Signal {
        LinearDelayLine.apply(&self.coefficients, signal)
    }

    /// Filter with the ring-buffer delay line
    pub fn apply_circular_buffer(&self, signal: &Signal) -> Signal {
        CircularDelayLine.apply(&self.coefficients, signal)
    }

    /// First `impulse_response_length()` samples of the impulse response
    pub fn impulse_response(&self) -> Vec<f64> {
        response::impulse_response(&self.coefficients, self.impulse_response_length)
    }

    /// Complex frequency response at each frequency in Hz
    pub fn frequency_response(
        &self,
        frequencies_hz: &[f64],
        sampling_rate: f64,
    ) -> Vec<Complex<f64>> {
        response::frequency_response(&self.coefficients, frequencies_hz, sampling_rate)
    }

    /// Magnitude response in dB at each frequency in Hz
    pub fn magnitude_response_db(&self, frequencies_hz: &[f64], sampling_rate: f64) -> Vec<f64> {
        response::magnitude_response_db(&self.coefficients, frequencies_hz, sampling_rate)
    }
}
