use crate::constants::NORMALIZATION_EPSILON;
use crate::error::{FilterError, Result};

/// Normalized transfer-function coefficients
///
/// Holds the numerator `b` and denominator `a` of
///
/// ```text
///         b[0] + b[1] z^-1 + ... + b[M] z^-M
/// H(z) = ------------------------------------
///         a[0] + a[1] z^-1 + ... + a[N] z^-N
/// ```
///
/// Construction always leaves `a[0] == 1.0`: both sequences are divided by
/// the original leading denominator coefficient.
#[derive(Debug, Clone, PartialEq)]
pub struct Coefficients {
    b: Vec<f64>,
    a: Vec<f64>,
}

impl Coefficients {
    /// Validate and normalize a numerator/denominator pair
    ///
    /// # Errors
    /// Returns `FilterError::InvalidCoefficients` if either sequence is empty
    /// or `|a[0]|` is below `NORMALIZATION_EPSILON`.
    pub fn new(b: Vec<f64>, a: Vec<f64>) -> Result<Self> {
        if b.is_empty() {
            return Err(FilterError::InvalidCoefficients(
                "numerator (B) must have at least one coefficient".to_string(),
            ));
        }
        let mut coefficients = Self { b, a };
        coefficients.normalize()?;
        Ok(coefficients)
    }

    fn normalize(&mut self) -> Result<()> {
        let first = match self.a.first() {
            Some(&first) => first,
            None => {
                return Err(FilterError::InvalidCoefficients(
                    "denominator (A) must have at least one coefficient".to_string(),
                ));
            }
        };

        if first.abs() < NORMALIZATION_EPSILON {
            return Err(FilterError::InvalidCoefficients(format!(
                "leading denominator coefficient A[0] = {:e} is zero",
                first
            )));
        }

        if (first - 1.0).abs() < NORMALIZATION_EPSILON {
            return Ok(());
        }

        log::trace!("Normalizing coefficients by A[0] = {}", first);
        for coeff in self.a.iter_mut().chain(self.b.iter_mut()) {
            *coeff /= first;
        }
        Ok(())
    }

    /// Numerator (feed-forward) coefficients, index 0 = current input
    pub fn b(&self) -> &[f64] {
        &self.b
    }

    /// Denominator coefficients, `a()[0]` is 1
    pub fn a(&self) -> &[f64] {
        &self.a
    }

    /// Feedback coefficients `a[1..]`, paired with previous outputs
    pub fn feedback(&self) -> &[f64] {
        &self.a[1..]
    }

    /// Combined coefficient count `|A| + |B|`
    pub fn len(&self) -> usize {
        self.a.len() + self.b.len()
    }

    /// Always false: both sequences hold at least one coefficient
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Replace the numerator without touching the denominator
    ///
    /// The denominator is already normalized, so `b` is taken as relative
    /// to `a[0] == 1`.
    pub(crate) fn replace_numerator(&mut self, b: Vec<f64>) -> Result<()> {
        if b.is_empty() {
            return Err(FilterError::InvalidCoefficients(
                "numerator (B) must have at least one coefficient".to_string(),
            ));
        }
        self.b = b;
        Ok(())
    }

    /// Renormalize the current numerator against a new denominator
    ///
    /// Leaves `self` unchanged on error.
    pub(crate) fn replace_denominator(&mut self, a: Vec<f64>) -> Result<()> {
        *self = Self::new(self.b.clone(), a)?;
        Ok(())
    }
}
