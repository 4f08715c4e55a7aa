/// Finite discrete-time signal tagged with its sampling rate
///
/// Filtering never mutates a `Signal`; every realization returns a new one
/// with the same sampling rate and the same number of samples.
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    sampling_rate: u32,
    samples: Vec<f64>,
}

impl Signal {
    pub fn new(sampling_rate: u32, samples: Vec<f64>) -> Self {
        Self {
            sampling_rate,
            samples,
        }
    }

    /// Silent signal of `len` samples
    pub fn zeros(sampling_rate: u32, len: usize) -> Self {
        Self::new(sampling_rate, vec![0.0; len])
    }

    /// Unit impulse: 1.0 followed by `len - 1` zeros
    pub fn impulse(sampling_rate: u32, len: usize) -> Self {
        let mut samples = vec![0.0; len];
        if let Some(first) = samples.first_mut() {
            *first = 1.0;
        }
        Self::new(sampling_rate, samples)
    }

    pub fn sampling_rate(&self) -> u32 {
        self.sampling_rate
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Length of the signal in seconds (0 when the sampling rate is 0)
    pub fn duration_secs(&self) -> f64 {
        if self.sampling_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / self.sampling_rate as f64
    }

    /// Build a signal with this one's sampling rate around new samples
    pub(crate) fn with_samples(&self, samples: Vec<f64>) -> Self {
        Self::new(self.sampling_rate, samples)
    }
}
