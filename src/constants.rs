//! Numeric constants for coefficient handling and realization selection
//!
//! These constants define the thresholds shared by the coefficient
//! normalizer and the strategy dispatcher.

/// Tolerance used when checking the leading denominator coefficient.
/// A leading coefficient with magnitude below this is rejected; one within
/// this distance of 1.0 is treated as already normalized.
pub const NORMALIZATION_EPSILON: f64 = 1e-12;

/// Largest combined coefficient count (`|A| + |B|`) for which automatic
/// mode selects the direct form. Larger filters use the circular delay line.
pub const AUTO_DIRECT_FORM_MAX_COEFFICIENTS: usize = 64;

/// Impulse response length used when a filter is built without one.
pub const DEFAULT_IMPULSE_RESPONSE_LENGTH: usize = 512;
