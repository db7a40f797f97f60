// pentatone -- decaying sine tones for a five-tone scale
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! This namespace contains all the parts converting from frequencies to wave data.

pub mod envelope;
pub mod oscillator;

use snafu::Snafu;

use crate::wave::{ToneSettings, Waveform};
use envelope::Decay;
use oscillator::Oscillator;

/// Reasons for refusing to synthesize a tone.
#[derive(Debug, PartialEq, Snafu)]
pub enum ToneError {
    #[snafu(display("Frequency {} Hz is not a positive finite number", frequency))]
    InvalidFrequency { frequency: f64 },
    #[snafu(display("Sample rate {} Hz must be positive", sample_rate))]
    InvalidSampleRate { sample_rate: u32 },
    #[snafu(display("Duration {} s is not a positive finite number", duration))]
    InvalidDuration { duration: f64 },
    #[snafu(display("Decay rate {} must not be negative", decay_rate))]
    InvalidDecayRate { decay_rate: f64 },
}

/// A sine wave at a fixed frequency, faded out exponentially.
#[derive(Debug, Clone)]
pub struct DecayingSine {
    settings: ToneSettings,
    oscillator: Oscillator,
    envelope: Decay,
}

impl DecayingSine {
    pub fn new(frequency: f64, settings: &ToneSettings) -> Result<Self, ToneError> {
        if !frequency.is_finite() || frequency <= 0.0 {
            return Err(ToneError::InvalidFrequency { frequency });
        }
        settings.validate()?;
        Ok(Self {
            settings: *settings,
            oscillator: Oscillator::new(settings.sample_rate as f64, frequency),
            envelope: Decay {
                rate: settings.decay_rate,
            },
        })
    }

    pub fn sample_at(&self, index: usize) -> f64 {
        let time = self.settings.sample_time(index);
        self.oscillator.sample_at(index) * self.envelope.eval(time)
    }

    /// Render the whole tone into a fresh buffer.
    pub fn render(&self) -> Waveform {
        (0..self.settings.sample_count())
            .map(|index| self.sample_at(index))
            .collect()
    }
}

/// Synthesize one decaying sine tone.
///
/// # Examples
///
/// ```
/// use pentatone::synth::synthesize;
/// use pentatone::wave::ToneSettings;
///
/// let wave = synthesize(261.63, &ToneSettings::default()).unwrap();
/// assert_eq!(wave.len(), 57330);
/// assert_eq!(wave[0], 0.0);
///
/// assert!(synthesize(0.0, &ToneSettings::default()).is_err());
/// ```
pub fn synthesize(frequency: f64, settings: &ToneSettings) -> Result<Waveform, ToneError> {
    Ok(DecayingSine::new(frequency, settings)?.render())
}
