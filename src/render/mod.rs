// pentatone -- decaying sine tones for a five-tone scale
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! The glue responsible for turning the scale table into wav files.

use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use snafu::{ResultExt, Snafu};

use crate::note::{PitchKey, ToneName};
use crate::output::{self, wav};
use crate::scale::Scale;
use crate::synth::{self, ToneError};
use crate::wave::ToneSettings;

/// Name of the file holding all tones in pitch order.
pub const COMBINED_FILE_NAME: &str = "combined_sorted_decaying_sine_waves.wav";

/// Possible errors when rendering the scale.
#[derive(Debug, Snafu)]
pub enum RenderError {
    #[snafu(display("Invalid tone settings: {}", source))]
    Settings { source: ToneError },
    #[snafu(display("Could not synthesize {}: {}", tone, source))]
    Tone { tone: String, source: ToneError },
    #[snafu(display("{}", source))]
    Output { source: wav::WavError },
    #[snafu(display("Nothing to combine, no tones were generated"))]
    NothingToMerge,
}

/// A tone that has been written to disk.
#[derive(Clone, Debug, PartialEq)]
pub struct ToneArtifact {
    pub name: ToneName,
    pub path: PathBuf,
    pub sample_count: usize,
}

impl ToneArtifact {
    pub fn pitch_key(&self) -> PitchKey {
        self.name.pitch_key()
    }

    /// File name without directory, e.g. `gong_C3.wav`.
    pub fn file_name(&self) -> String {
        file_name(&self.name)
    }
}

fn file_name(name: &ToneName) -> String {
    format!("{}.{}", name, wav::EXTENSION)
}

/// Everything produced by `render_scale`.
#[derive(Debug)]
pub struct Rendering {
    /// The individual tones in pitch order.
    pub tones: Vec<ToneArtifact>,
    pub combined: PathBuf,
    pub combined_samples: usize,
}

/// Synthesize, normalize and write every tone of the scale into `out_dir`.
///
/// The artifacts are returned in generation order, i.e. the order of the scale table.
pub fn render_tones(
    scale: &Scale,
    settings: &ToneSettings,
    out_dir: &Path,
) -> Result<Vec<ToneArtifact>, RenderError> {
    settings.validate().context(Settings)?;

    let mut artifacts = Vec::with_capacity(scale.tone_count());
    for (name, frequency) in scale.tones() {
        let wave = synth::synthesize(frequency, settings).context(Tone {
            tone: name.to_string(),
        })?;
        let samples = output::normalize(&wave);
        let path = out_dir.join(file_name(&name));
        wav::write_file(&path, &samples, settings.sample_rate).context(Output)?;

        debug!(
            "{}: {:.2} Hz, {} samples -> {}",
            name,
            frequency,
            samples.len(),
            path.display()
        );
        artifacts.push(ToneArtifact {
            name,
            path,
            sample_count: samples.len(),
        });
    }
    Ok(artifacts)
}

/// Order artifacts by octave and letter.
///
/// The sort is stable, so sorting an already sorted list changes nothing.
pub fn sort_by_pitch(artifacts: &mut [ToneArtifact]) {
    artifacts.sort_by_key(ToneArtifact::pitch_key);
}

/// Order bare identifiers such as `gong_C3.wav` by the pitch encoded in their name.
///
/// Identifiers whose letter or octave cannot be recognized are kept and moved
/// to the front.
pub fn sort_identifiers_by_pitch<S: AsRef<str>>(identifiers: &mut [S]) {
    identifiers.sort_by_cached_key(|identifier| {
        let key = PitchKey::parse(identifier.as_ref());
        if !key.is_complete() {
            warn!("cannot determine pitch of {:?}", identifier.as_ref());
        }
        key
    });
}

/// Read back the given artifacts and write them end to end into `path`.
///
/// Nothing is written if there are no artifacts or any of them cannot be read.
/// Returns the number of samples in the combined file.
pub fn combine(
    artifacts: &[ToneArtifact],
    sample_rate: u32,
    path: &Path,
) -> Result<usize, RenderError> {
    if artifacts.is_empty() {
        return NothingToMerge.fail();
    }

    let total = artifacts.iter().map(|a| a.sample_count).sum();
    let mut combined = Vec::with_capacity(total);
    for artifact in artifacts {
        let samples = wav::read_file(&artifact.path, sample_rate).context(Output)?;
        combined.extend_from_slice(&samples);
    }

    wav::write_file(path, &combined, sample_rate).context(Output)?;
    Ok(combined.len())
}

/// Run the whole batch: render every tone, sort them by pitch and combine them.
pub fn render_scale(
    scale: &Scale,
    settings: &ToneSettings,
    out_dir: &Path,
) -> Result<Rendering, RenderError> {
    info!(
        "rendering {} tones at {} Hz, {} s each",
        scale.tone_count(),
        settings.sample_rate,
        settings.duration
    );
    let mut tones = render_tones(scale, settings, out_dir)?;

    sort_by_pitch(&mut tones);
    debug!(
        "pitch order: {:?}",
        tones.iter().map(|t| t.name.to_string()).collect::<Vec<_>>()
    );

    info!("merging tones in pitch order");
    let combined = out_dir.join(COMBINED_FILE_NAME);
    let combined_samples = combine(&tones, settings.sample_rate, &combined)?;
    info!("wrote {} ({} samples)", combined.display(), combined_samples);

    Ok(Rendering {
        tones,
        combined,
        combined_samples,
    })
}
