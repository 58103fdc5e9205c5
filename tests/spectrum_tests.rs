use ferroviz::constants::*;
use ferroviz::spectrum::{reduce_spectrum, BandIntensities, SpectrumFrame};

fn frame<'a>(magnitudes: &'a [f32]) -> SpectrumFrame<'a> {
    SpectrumFrame {
        magnitudes,
        sample_rate: 44_100.0,
        fft_size: 2048,
    }
}

#[test]
fn pure_bass_lands_in_the_low_band_only() {
    // bin_width ~= 21.5 Hz, so the low band covers bins 0..11
    let mut magnitudes = vec![0.0f32; 1024];
    for m in magnitudes.iter_mut().take(11) {
        *m = 1.0;
    }
    let bands = reduce_spectrum(&frame(&magnitudes), 1.0);
    assert!((bands.low - LOW_BAND_GAIN).abs() < 1e-4, "low = {}", bands.low);
    assert_eq!(bands.mid, 0.0);
    assert_eq!(bands.high, 0.0);
}

#[test]
fn louder_spectrum_means_larger_intensities() {
    let quiet = vec![0.3f32; 1024];
    let loud = vec![0.6f32; 1024];
    let q = reduce_spectrum(&frame(&quiet), 1.0);
    let l = reduce_spectrum(&frame(&loud), 1.0);
    assert!(l.low > q.low);
    assert!(l.mid > q.mid);
    assert!(l.high > q.high);
}

#[test]
fn sensitivity_scales_every_band() {
    let magnitudes = vec![0.5f32; 1024];
    let base = reduce_spectrum(&frame(&magnitudes), 1.0);
    let hot = reduce_spectrum(&frame(&magnitudes), 2.0);
    assert!((hot.low - base.low * 2.0).abs() < 1e-5);
    assert!((hot.mid - base.mid * 2.0).abs() < 1e-5);
    assert!((hot.high - base.high * 2.0).abs() < 1e-5);
}

#[test]
fn nan_and_negative_bins_are_skipped() {
    let mut magnitudes = vec![0.5f32; 1024];
    magnitudes[3] = f32::NAN;
    magnitudes[100] = f32::NEG_INFINITY;
    magnitudes[200] = -1.0;
    let bands = reduce_spectrum(&frame(&magnitudes), 1.0);
    assert!(bands.low.is_finite());
    assert!(bands.mid.is_finite());
    assert!(bands.high.is_finite());
    assert!(bands.low >= 0.0 && bands.mid >= 0.0 && bands.high >= 0.0);
}

#[test]
fn malformed_frames_reduce_to_silence() {
    let empty = SpectrumFrame {
        magnitudes: &[],
        sample_rate: 44_100.0,
        fft_size: 2048,
    };
    assert_eq!(reduce_spectrum(&empty, 1.0), BandIntensities::default());

    let magnitudes = vec![1.0f32; 1024];
    let no_rate = SpectrumFrame {
        magnitudes: &magnitudes,
        sample_rate: 0.0,
        fft_size: 2048,
    };
    assert_eq!(reduce_spectrum(&no_rate, 1.0), BandIntensities::default());

    let no_fft = SpectrumFrame {
        magnitudes: &magnitudes,
        sample_rate: 44_100.0,
        fft_size: 0,
    };
    assert_eq!(reduce_spectrum(&no_fft, 1.0), BandIntensities::default());
}

#[test]
fn degenerate_sample_rate_yields_empty_upper_bands() {
    // At 1 kHz the high band has no bins at all; nothing panics
    let magnitudes = vec![1.0f32; 16];
    let f = SpectrumFrame {
        magnitudes: &magnitudes,
        sample_rate: 1000.0,
        fft_size: 32,
    };
    let bands = reduce_spectrum(&f, 1.0);
    assert!(bands.low >= 0.0);
    assert_eq!(bands.high, 0.0);
}

#[test]
fn decay_is_linear_and_clamped_at_zero() {
    let mut bands = BandIntensities {
        low: 1.0,
        mid: 1.0,
        high: 0.1,
    };
    bands.decay(0.5);
    let step = BAND_IDLE_DECAY_PER_SEC * 0.5;
    assert!((bands.low - (1.0 - step)).abs() < 1e-5);
    assert!((bands.mid - (1.0 - step)).abs() < 1e-5);
    assert_eq!(bands.high, 0.0);

    bands.decay(100.0);
    assert_eq!(bands.total(), 0.0);
}
