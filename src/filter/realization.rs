use std::fmt;

use super::Coefficients;
use crate::signal::Signal;

/// Common trait for time-domain evaluations of the difference equation
///
/// Implemented by DirectForm, LinearDelayLine and CircularDelayLine. Every
/// implementation is a pure function of its inputs: working buffers are
/// allocated per call and the input signal is never modified.
pub trait Realization {
    /// Which evaluator this is
    fn kind(&self) -> RealizationKind;

    /// Filter the whole signal, returning a new signal of the same length
    /// and sampling rate
    fn apply(&self, coefficients: &Coefficients, signal: &Signal) -> Signal;
}

/// Identifies a realization, e.g. for reporting the dispatcher's choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RealizationKind {
    DirectForm,
    LinearDelayLine,
    CircularDelayLine,
}

impl RealizationKind {
    pub const ALL: [RealizationKind; 3] = [
        RealizationKind::DirectForm,
        RealizationKind::LinearDelayLine,
        RealizationKind::CircularDelayLine,
    ];

    /// The evaluator implementing this kind
    pub fn realization(self) -> &'static dyn Realization {
        match self {
            RealizationKind::DirectForm => &super::DirectForm,
            RealizationKind::LinearDelayLine => &super::LinearDelayLine,
            RealizationKind::CircularDelayLine => &super::CircularDelayLine,
        }
    }
}

impl fmt::Display for RealizationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RealizationKind::DirectForm => "direct form",
            RealizationKind::LinearDelayLine => "linear delay line",
            RealizationKind::CircularDelayLine => "circular delay line",
        };
        f.write_str(name)
    }
}
