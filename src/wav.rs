use std::path::Path;

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};

use crate::error::{FilterError, Result};
use crate::signal::Signal;

/// Read a WAV file as one `Signal` per channel
///
/// Integer formats are scaled to [-1, 1).
pub fn read_wav<P: AsRef<Path>>(path: P) -> Result<Vec<Signal>> {
    let mut reader = WavReader::open(path.as_ref())?;
    let spec = reader.spec();
    let channels = spec.channels as usize;

    let interleaved: Vec<f64> = match spec.sample_format {
        SampleFormat::Float => reader
            .samples::<f32>()
            .map(|s| s.map(f64::from))
            .collect::<std::result::Result<Vec<_>, _>>()?,
        SampleFormat::Int => {
            let max_val = 2_i64.pow(spec.bits_per_sample as u32 - 1) as f64;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f64 / max_val))
                .collect::<std::result::Result<Vec<_>, _>>()?
        }
    };

    log::debug!(
        "Read {}: {} channel(s), {} Hz, {} frames",
        path.as_ref().display(),
        channels,
        spec.sample_rate,
        interleaved.len() / channels.max(1)
    );

    Ok(deinterleave(&interleaved, channels, spec.sample_rate))
}

/// Write channels as an interleaved 32-bit float WAV file
///
/// # Errors
/// Returns `FilterError::SignalMismatch` if `channels` is empty or the
/// channels differ in sampling rate or length.
pub fn write_wav<P: AsRef<Path>>(path: P, channels: &[Signal]) -> Result<()> {
    let first = channels
        .first()
        .ok_or_else(|| FilterError::SignalMismatch("no channels to write".to_string()))?;

    if let Some(other) = channels
        .iter()
        .find(|c| c.sampling_rate() != first.sampling_rate() || c.len() != first.len())
    {
        return Err(FilterError::SignalMismatch(format!(
            "channel has {} samples at {} Hz, expected {} samples at {} Hz",
            other.len(),
            other.sampling_rate(),
            first.len(),
            first.sampling_rate()
        )));
    }

    let spec = WavSpec {
        channels: channels.len() as u16,
        sample_rate: first.sampling_rate(),
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };

    let mut writer = WavWriter::create(path, spec)?;
    for frame in 0..first.len() {
        for channel in channels {
            writer.write_sample(channel.samples()[frame] as f32)?;
        }
    }
    writer.finalize()?;
    Ok(())
}

fn deinterleave(interleaved: &[f64], channels: usize, sampling_rate: u32) -> Vec<Signal> {
    (0..channels)
        .map(|ch| {
            let samples = interleaved
                .iter()
                .skip(ch)
                .step_by(channels)
                .copied()
                .collect();
            Signal::new(sampling_rate, samples)
        })
        .collect()
}
