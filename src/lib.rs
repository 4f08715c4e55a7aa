pub mod config;
pub mod constants;
pub mod error;
pub mod filter;
pub mod signal;
pub mod wav;

#[cfg(feature = "simulation")]
pub mod simulation;

pub use config::{ApplyMode, FilterConfig};
pub use error::{FilterError, Result};
pub use filter::{Coefficients, Filter, RealizationKind};
pub use signal::Signal;
pub use wav::{read_wav, write_wav};
