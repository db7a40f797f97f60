// pentatone -- decaying sine tones for a five-tone scale
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! This is the namespace for all parts dealing with data in sampled waves.

use crate::synth::ToneError;

/// Floating point samples of a single mono tone.
pub type Waveform = Vec<f64>;

/// Parameters shared by every synthesized tone.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ToneSettings {
    /// Number of samples per second.
    pub sample_rate: u32,
    /// Length of every tone in seconds.
    pub duration: f64,
    /// Rate of the exponential fade, zero means no fade at all.
    pub decay_rate: f64,
}

impl Default for ToneSettings {
    fn default() -> Self {
        ToneSettings {
            sample_rate: 44100,
            duration: 1.3,
            decay_rate: 2.0,
        }
    }
}

impl ToneSettings {
    /// Number of samples in every tone, truncated towards zero so that all
    /// tones end up with the same length.
    ///
    /// # Examples
    ///
    /// ```
    /// use pentatone::wave::ToneSettings;
    ///
    /// assert_eq!(ToneSettings::default().sample_count(), 57330);
    /// ```
    pub fn sample_count(&self) -> usize {
        (self.sample_rate as f64 * self.duration).floor() as usize
    }

    /// Time in seconds of the sample at `index`, the first sample being at zero.
    pub fn sample_time(&self, index: usize) -> f64 {
        index as f64 / self.sample_rate as f64
    }

    /// Reject settings that cannot produce a meaningful tone.
    pub fn validate(&self) -> Result<(), ToneError> {
        if self.sample_rate == 0 {
            return Err(ToneError::InvalidSampleRate {
                sample_rate: self.sample_rate,
            });
        }
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(ToneError::InvalidDuration {
                duration: self.duration,
            });
        }
        if !self.decay_rate.is_finite() || self.decay_rate < 0.0 {
            return Err(ToneError::InvalidDecayRate {
                decay_rate: self.decay_rate,
            });
        }
        Ok(())
    }
}
