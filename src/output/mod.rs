// pentatone -- decaying sine tones for a five-tone scale
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Turning floating point waves into 16 bit samples and files.

pub mod wav;

use log::warn;

/// Largest amplitude of a normalized 16 bit sample.
pub const FULL_SCALE: f64 = i16::MAX as f64;

/// Largest absolute sample value, zero for an empty buffer.
pub fn peak(wave: &[f64]) -> f64 {
    wave.iter().fold(0.0f64, |max, sample| max.max(sample.abs()))
}

/// Scale a wave so that its peak hits full scale and quantize it to 16 bits.
///
/// Samples are rounded to the nearest integer and clamped to the `i16` range.
/// A silent wave stays silent instead of being divided by zero.
///
/// # Examples
///
/// ```
/// use pentatone::output::normalize;
///
/// assert_eq!(normalize(&[0.0, 0.25, -0.5]), vec![0, 16384, -32767]);
/// assert_eq!(normalize(&[0.0, 0.0]), vec![0, 0]);
/// ```
pub fn normalize(wave: &[f64]) -> Vec<i16> {
    let peak = peak(wave);
    if peak == 0.0 || !peak.is_finite() {
        warn!("cannot normalize wave with peak {}, writing silence", peak);
        return vec![0; wave.len()];
    }
    wave.iter()
        .map(|sample| quantize(sample / peak))
        .collect()
}

/// Map a sample in [-1, 1] to the nearest 16 bit value.
pub fn quantize(sample: f64) -> i16 {
    (sample * FULL_SCALE)
        .round()
        .max(i16::MIN as f64)
        .min(i16::MAX as f64) as i16
}

/// Inverse of `quantize`, up to rounding.
pub fn dequantize(sample: i16) -> f64 {
    sample as f64 / FULL_SCALE
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::output::wav;
    use crate::synth::synthesize;
    use crate::wave::ToneSettings;

    #[test]
    fn clamps_overshoot() {
        assert_eq!(quantize(1.0), i16::MAX);
        assert_eq!(quantize(1.5), i16::MAX);
        assert_eq!(quantize(-1.0), -i16::MAX);
        assert_eq!(quantize(-2.0), i16::MIN);
    }

    #[test]
    fn rounds_to_nearest() {
        assert_eq!(quantize(0.6 / FULL_SCALE), 1);
        assert_eq!(quantize(0.4 / FULL_SCALE), 0);
        assert_eq!(quantize(-0.6 / FULL_SCALE), -1);
    }

    #[test]
    fn silent_wave() {
        assert_eq!(normalize(&[0.0; 16]), vec![0; 16]);
        assert_eq!(normalize(&[]), Vec::<i16>::new());
    }

    #[test]
    fn peak_reaches_full_scale() {
        let wave = synthesize(440.0, &ToneSettings::default()).unwrap();
        let samples = normalize(&wave);
        assert_eq!(samples.len(), wave.len());
        let max = samples.iter().map(|s| (*s as i32).abs()).max().unwrap();
        assert_eq!(max, i16::MAX as i32);
    }

    #[test]
    fn normalizing_twice_is_stable() {
        let settings = ToneSettings::default();
        let wave = synthesize(329.63, &settings).unwrap();
        let once = normalize(&wave);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jiao_E4.wav");
        wav::write_file(&path, &once, settings.sample_rate).unwrap();
        let stored = wav::read_file(&path, settings.sample_rate).unwrap();
        assert_eq!(stored, once);

        let decoded: Vec<f64> = stored.iter().copied().map(dequantize).collect();
        let twice = normalize(&decoded);
        assert_eq!(once, twice);
    }

    #[test]
    fn scale_invariant() {
        let wave = [0.1, -0.3, 0.2];
        let louder: Vec<f64> = wave.iter().map(|s| s * 7.0).collect();
        assert_eq!(normalize(&wave), normalize(&louder));
    }
}
