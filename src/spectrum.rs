//! Spectrum reduction: raw FFT magnitudes to three band intensities.
//!
//! Band edges are musically defined Hz ranges, so the result is independent
//! of FFT resolution. Intensities feed influence generation, orbit modulation
//! and the spawner every frame; nothing here is persisted.

use crate::constants::*;

/// Normalized energy per perceptual frequency band, recomputed every frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BandIntensities {
    pub low: f32,
    pub mid: f32,
    pub high: f32,
}

impl BandIntensities {
    pub fn total(&self) -> f32 {
        self.low + self.mid + self.high
    }

    /// Linear decay toward silence, used when no spectrum arrives this frame.
    /// Avoids the visual pop a hard reset would cause.
    pub fn decay(&mut self, dt: f32) {
        let step = BAND_IDLE_DECAY_PER_SEC * dt;
        self.low = (self.low - step).max(0.0);
        self.mid = (self.mid - step).max(0.0);
        self.high = (self.high - step).max(0.0);
    }
}

/// One frame of raw spectrum data from the external audio source.
///
/// `magnitudes` holds one normalized `[0, 1]` value per FFT bin (length is
/// expected to be `fft_size / 2`, but any length is tolerated).
#[derive(Clone, Copy, Debug)]
pub struct SpectrumFrame<'a> {
    pub magnitudes: &'a [f32],
    pub sample_rate: f32,
    pub fft_size: usize,
}

/// Reduce a raw spectrum to band intensities.
///
/// Malformed input (empty magnitudes, non-positive sample rate, NaN bins)
/// reduces to zero energy for the affected bands; NaN never reaches the
/// displacement math.
pub fn reduce_spectrum(frame: &SpectrumFrame, sensitivity: f32) -> BandIntensities {
    if frame.magnitudes.is_empty() || frame.fft_size == 0 || frame.sample_rate <= 0.0 {
        return BandIntensities::default();
    }
    let bin_width = frame.sample_rate / frame.fft_size as f32;
    let low = band_average(frame.magnitudes, LOW_BAND_MIN_HZ, LOW_BAND_MAX_HZ, bin_width);
    let mid = band_average(frame.magnitudes, LOW_BAND_MAX_HZ, MID_BAND_MAX_HZ, bin_width);
    let high = band_average(frame.magnitudes, MID_BAND_MAX_HZ, HIGH_BAND_MAX_HZ, bin_width);
    BandIntensities {
        low: low * LOW_BAND_GAIN * sensitivity,
        mid: mid * MID_BAND_GAIN * sensitivity,
        high: high * HIGH_BAND_GAIN * sensitivity,
    }
}

/// Average magnitude across the bin range covering `[lo_hz, hi_hz)`.
/// An empty bin range (degenerate at very low sample rates) yields 0.
fn band_average(magnitudes: &[f32], lo_hz: f32, hi_hz: f32, bin_width: f32) -> f32 {
    let lo = (lo_hz / bin_width).floor() as usize;
    let hi = ((hi_hz / bin_width).floor() as usize).min(magnitudes.len());
    if hi <= lo {
        return 0.0;
    }
    let mut sum = 0.0;
    for &m in &magnitudes[lo..hi] {
        if m.is_finite() && m > 0.0 {
            sum += m;
        }
    }
    sum / (hi - lo) as f32
}
