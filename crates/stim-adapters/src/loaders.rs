//! Carga de estímulos crudos desde archivos.
//!
//! Los estímulos cargados no tienen linaje y registran `source_file`; su
//! nombre es el nombre del archivo.
use hound::{SampleFormat, WavReader};
use std::fs;
use std::path::Path;
use thiserror::Error;

use stim_core::{AudioStim, ComplexTextStim, CoreError, DomainError, Stimulus, TextStim};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("io error reading {path}: {message}")]
    Io { path: String, message: String },
    #[error("wav error: {0}")]
    Wav(#[from] hound::Error),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl From<LoadError> for CoreError {
    fn from(err: LoadError) -> Self {
        match err {
            LoadError::Domain(e) => CoreError::Domain(e),
            other => CoreError::InvalidPayload(other.to_string()),
        }
    }
}

fn read_to_string(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|e| LoadError::Io { path: path.display().to_string(),
                                                         message: e.to_string() })
}

fn with_onset(stim: Stimulus, onset: Option<f64>) -> Result<Stimulus, LoadError> {
    match onset {
        Some(o) => Ok(stim.with_onset(o)?),
        None => Ok(stim),
    }
}

/// Archivo de texto completo como un único `TextStim` (espacios de borde
/// recortados).
pub fn load_text(path: impl AsRef<Path>, onset: Option<f64>) -> Result<Stimulus, LoadError> {
    let path = path.as_ref();
    let text = TextStim::new(read_to_string(path)?.trim()).with_source_file(path);
    with_onset(text.into(), onset)
}

/// Archivo de texto tokenizado por espacios: un elemento por palabra.
pub fn load_complex_text(path: impl AsRef<Path>, onset: Option<f64>) -> Result<Stimulus, LoadError> {
    let path = path.as_ref();
    let complex = ComplexTextStim::from_text(read_to_string(path)?.trim()).with_source_file(path);
    with_onset(complex.into(), onset)
}

/// WAV (entero o flotante) mezclado a mono en [-1, 1].
pub fn load_wav(path: impl AsRef<Path>, onset: Option<f64>) -> Result<Stimulus, LoadError> {
    let path = path.as_ref();
    let mut reader = WavReader::open(path)?;
    let spec = reader.spec();
    let interleaved: Vec<f32> = match spec.sample_format {
        SampleFormat::Float => reader.samples::<f32>().collect::<Result<_, _>>()?,
        SampleFormat::Int => {
            let scale = (1_i64 << (spec.bits_per_sample.saturating_sub(1))) as f32;
            reader.samples::<i32>()
                  .map(|s| s.map(|v| v as f32 / scale))
                  .collect::<Result<_, _>>()?
        }
    };
    let channels = spec.channels.max(1) as usize;
    let mono = interleaved.chunks(channels)
                          .map(|frame| frame.iter().sum::<f32>() / frame.len() as f32)
                          .collect();
    let audio = AudioStim::new(mono, spec.sample_rate)?.with_source_file(path);
    with_onset(audio.into(), onset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hound::{WavSpec, WavWriter};
    use std::env;
    use std::process;

    fn temp_path(name: &str) -> std::path::PathBuf {
        env::temp_dir().join(format!("stimflow-{}-{name}", process::id()))
    }

    #[test]
    fn loads_stereo_wav_as_mono() {
        let path = temp_path("stereo.wav");
        let spec = WavSpec { channels: 2,
                             sample_rate: 8000,
                             bits_per_sample: 16,
                             sample_format: SampleFormat::Int };
        let mut writer = WavWriter::create(&path, spec).unwrap();
        for _ in 0..800 {
            writer.write_sample(16384i16).unwrap();
            writer.write_sample(0i16).unwrap();
        }
        writer.finalize().unwrap();

        let stim = load_wav(&path, Some(1.0)).unwrap();
        let audio = stim.as_audio().unwrap();
        assert_eq!(audio.samples().len(), 800);
        assert!((audio.samples()[0] - 0.25).abs() < 1e-6);
        assert!((audio.duration() - 0.1).abs() < 1e-9);
        assert_eq!(stim.onset(), Some(1.0));
        assert_eq!(stim.name(), path.file_name().unwrap().to_str().unwrap());
        assert!(stim.history().is_none());
        fs::remove_file(&path).ok();
    }

    #[test]
    fn loads_text_files() {
        let path = temp_path("scandal.txt");
        fs::write(&path, "To Sherlock Holmes she is always the woman.\n").unwrap();
        let complex = load_complex_text(&path, None).unwrap();
        assert_eq!(complex.as_complex_text().map(ComplexTextStim::len), Some(8));
        assert_eq!(complex.source_file(), Some(path.as_path()));
        let text = load_text(&path, None).unwrap();
        assert_eq!(text.as_text().map(TextStim::text), Some("To Sherlock Holmes she is always the woman."));
        fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_text(temp_path("missing.txt"), None).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        let core: CoreError = err.into();
        assert!(matches!(core, CoreError::InvalidPayload(_)));
    }
}
