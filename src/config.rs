//! Filter configuration.
//!
//! A filter can be described in a TOML file:
//!
//! ```toml
//! mode = "auto"                  # auto | difference-equation | other
//! impulse_response_length = 256  # optional
//!
//! [coefficients]
//! b = [0.2, 0.2]
//! a = [1.0, -0.6]
//! ```

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_IMPULSE_RESPONSE_LENGTH;
use crate::error::{FilterError, Result};
use crate::filter::Filter;

/// How `Filter::apply_to` picks a realization
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum ApplyMode {
    /// Direct form for small filters, circular delay line above the threshold
    #[default]
    Auto,
    /// Always the direct-form difference equation
    DifferenceEquation,
    /// Frequency-domain filtering (not provided; always an error)
    Other,
}

impl fmt::Display for ApplyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ApplyMode::Auto => "auto",
            ApplyMode::DifferenceEquation => "difference-equation",
            ApplyMode::Other => "other",
        };
        f.write_str(name)
    }
}

/// Transfer-function coefficients as written in a config file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoefficientConfig {
    /// Numerator coefficients, index 0 = current input
    pub b: Vec<f64>,
    /// Denominator coefficients, need not be normalized
    pub a: Vec<f64>,
}

/// Complete filter description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    pub coefficients: CoefficientConfig,
    #[serde(default)]
    pub mode: ApplyMode,
    #[serde(default = "default_impulse_response_length")]
    pub impulse_response_length: usize,
}

fn default_impulse_response_length() -> usize {
    DEFAULT_IMPULSE_RESPONSE_LENGTH
}

impl FilterConfig {
    pub fn new(b: Vec<f64>, a: Vec<f64>) -> Self {
        Self {
            coefficients: CoefficientConfig { b, a },
            mode: ApplyMode::default(),
            impulse_response_length: DEFAULT_IMPULSE_RESPONSE_LENGTH,
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| FilterError::Config(e.to_string()))
    }

    /// Read and parse a TOML filter description
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&content)?;
        log::info!(
            "Loaded filter from {}: |B| = {}, |A| = {}, mode {}",
            path.as_ref().display(),
            config.coefficients.b.len(),
            config.coefficients.a.len(),
            config.mode
        );
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| FilterError::Config(e.to_string()))
    }

    /// Build the described filter, normalizing its coefficients
    pub fn build(&self) -> Result<Filter> {
        Filter::with_impulse_response_length(
            self.coefficients.b.clone(),
            self.coefficients.a.clone(),
            self.impulse_response_length,
        )
    }
}

/// Parse a comma- or whitespace-separated coefficient list, e.g. `"1, -0.5"`
pub fn parse_coefficient_list(s: &str) -> Result<Vec<f64>> {
    let coeffs = s
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<f64>()
                .map_err(|_| FilterError::Config(format!("invalid coefficient: {}", part)))
        })
        .collect::<Result<Vec<_>>>()?;

    if coeffs.is_empty() {
        return Err(FilterError::Config("empty coefficient list".to_string()));
    }
    Ok(coeffs)
}
