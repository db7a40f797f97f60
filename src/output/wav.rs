// pentatone -- decaying sine tones for a five-tone scale
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Reading and writing mono 16 bit PCM wav files.

use std::path::{Path, PathBuf};

use log::trace;
use snafu::{ResultExt, Snafu};

/// File extension of all written containers.
pub const EXTENSION: &str = "wav";

#[derive(Debug, Snafu)]
pub enum WavError {
    #[snafu(display("Could not create {}: {}", path.display(), source))]
    CreateFile { path: PathBuf, source: hound::Error },
    #[snafu(display("Could not write samples to {}: {}", path.display(), source))]
    WriteSamples { path: PathBuf, source: hound::Error },
    #[snafu(display("Could not open {}: {}", path.display(), source))]
    OpenFile { path: PathBuf, source: hound::Error },
    #[snafu(display("Could not read samples from {}: {}", path.display(), source))]
    ReadSamples { path: PathBuf, source: hound::Error },
    #[snafu(display(
        "{} is not a mono 16 bit PCM file at {} Hz",
        path.display(),
        sample_rate
    ))]
    FormatMismatch { path: PathBuf, sample_rate: u32 },
}

/// The only format that gets written: mono, 16 bit integer samples.
pub fn spec(sample_rate: u32) -> hound::WavSpec {
    hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    }
}

/// Write samples to a new file, replacing any existing one.
pub fn write_file(path: &Path, samples: &[i16], sample_rate: u32) -> Result<(), WavError> {
    let mut writer =
        hound::WavWriter::create(path, spec(sample_rate)).context(CreateFile { path })?;
    for &sample in samples {
        writer.write_sample(sample).context(WriteSamples { path })?;
    }
    writer.finalize().context(WriteSamples { path })?;
    trace!("wrote {} samples to {}", samples.len(), path.display());
    Ok(())
}

/// Read all samples of a file written by `write_file`.
pub fn read_file(path: &Path, sample_rate: u32) -> Result<Vec<i16>, WavError> {
    let mut reader = hound::WavReader::open(path).context(OpenFile { path })?;
    if reader.spec() != spec(sample_rate) {
        return FormatMismatch { path, sample_rate }.fail();
    }
    let samples = reader
        .samples::<i16>()
        .collect::<hound::Result<Vec<_>>>()
        .context(ReadSamples { path })?;
    trace!("read {} samples from {}", samples.len(), path.display());
    Ok(samples)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn header_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("header.wav");
        write_file(&path, &[0, 1, -1, i16::MAX], 44100).unwrap();
        let bytes = std::fs::read(&path).unwrap();

        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WAVE");
        // mono
        assert_eq!(u16::from_le_bytes([bytes[22], bytes[23]]), 1);
        assert_eq!(
            u32::from_le_bytes([bytes[24], bytes[25], bytes[26], bytes[27]]),
            44100
        );
        // 16 bit
        assert_eq!(u16::from_le_bytes([bytes[34], bytes[35]]), 16);
        // data chunk is at the end and holds two bytes per sample
        assert_eq!(&bytes[bytes.len() - 4..bytes.len() - 2], &[0xff, 0xff]);
        assert_eq!(&bytes[bytes.len() - 2..], &[0xff, 0x7f]);
    }

    #[test]
    fn read_back_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("extremes.wav");
        let samples = vec![0, 100, -100, i16::MIN, i16::MAX];
        write_file(&path, &samples, 8000).unwrap();
        assert_eq!(read_file(&path, 8000).unwrap(), samples);

        // writing again replaces the old content
        write_file(&path, &[7], 8000).unwrap();
        assert_eq!(read_file(&path, 8000).unwrap(), vec![7]);
    }

    #[test]
    fn file_format_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tone.wav");
        write_file(&path, &[1, 2, 3], 22050).unwrap();

        assert_eq!(read_file(&path, 22050).unwrap(), vec![1, 2, 3]);
        match read_file(&path, 44100) {
            Err(WavError::FormatMismatch { sample_rate, .. }) => assert_eq!(sample_rate, 44100),
            other => panic!("expected format mismatch, got {:?}", other),
        }
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        match read_file(&dir.path().join("nope.wav"), 44100) {
            Err(WavError::OpenFile { .. }) => {}
            other => panic!("expected open error, got {:?}", other),
        }
    }
}
