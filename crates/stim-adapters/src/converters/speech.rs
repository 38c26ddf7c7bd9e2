//! Transcripción de audio: `AudioStim` → `ComplexTextStim`.
//!
//! Cada elemento recibe `onset = onset del audio + offset de la palabra`.
//! Si el servicio no da tiempos, los elementos heredan el onset del audio.
use log::debug;
use std::sync::Arc;

use stim_core::{register_converter, Capability, CapabilityRole, ComplexTextStim, Converted, Converter, CoreError,
                DomainError, Stimulus, StimulusKind, TextStim};

use crate::services::{RecognizedWord, SpeechRecognizer, TranscriptResolution, Unconfigured};

const INPUTS: &[StimulusKind] = &[StimulusKind::Audio];

macro_rules! speech_converter {
    ($(#[$meta:meta])* $ty:ident, $name:literal, service: $service:literal, hint: $hint:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $ty {
            backend: Arc<dyn SpeechRecognizer>,
            resolution: TranscriptResolution,
        }

        impl $ty {
            pub const NAME: &'static str = $name;

            /// Instancia sin backend (falla al convertir).
            pub fn new() -> Self {
                Self { backend: Arc::new(Unconfigured::new($service, $hint)),
                       resolution: TranscriptResolution::Words }
            }

            pub fn with_backend<B>(mut self, backend: B) -> Self
                where B: SpeechRecognizer + 'static
            {
                self.backend = Arc::new(backend);
                self
            }

            pub fn with_resolution(mut self, resolution: TranscriptResolution) -> Self {
                self.resolution = resolution;
                self
            }

            pub fn resolution(&self) -> TranscriptResolution { self.resolution }
        }

        impl Default for $ty {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Capability for $ty {
            fn name(&self) -> &str {
                Self::NAME
            }

            fn role(&self) -> CapabilityRole {
                CapabilityRole::Converter
            }

            fn input_kinds(&self) -> &[StimulusKind] {
                INPUTS
            }
        }

        impl Converter for $ty {
            fn output_kind(&self) -> StimulusKind {
                StimulusKind::ComplexText
            }

            fn convert(&self, stim: &Stimulus) -> Result<Converted, CoreError> {
                transcribe(Self::NAME, self.backend.as_ref(), self.resolution, stim)
            }
        }
    };
}

speech_converter!(
    /// Transcripción vía wit.ai. El servicio no devuelve tiempos por palabra.
    WitTranscriptionConverter, "WitTranscriptionConverter", service: "wit.ai", hint: "WIT_AI_API_KEY"
);
speech_converter!(
    /// Transcripción vía Google Cloud Speech.
    GoogleSpeechApiConverter, "GoogleSpeechAPIConverter", service: "Google Speech API",
    hint: "GOOGLE_APPLICATION_CREDENTIALS"
);
speech_converter!(
    /// Transcripción vía IBM Watson; admite resolución por palabras o frases.
    IbmSpeechApiConverter, "IBMSpeechAPIConverter", service: "IBM Speech to Text",
    hint: "IBM_USERNAME/IBM_PASSWORD"
);

register_converter!(WitTranscriptionConverter::new());
register_converter!(GoogleSpeechApiConverter::new());
register_converter!(IbmSpeechApiConverter::new());

fn transcribe(name: &str,
              backend: &dyn SpeechRecognizer,
              resolution: TranscriptResolution,
              stim: &Stimulus)
              -> Result<Converted, CoreError> {
    let audio = stim.as_audio()
                    .ok_or_else(|| CoreError::InvalidPayload(format!("{name} requiere AudioStim")))?;
    let words = backend.recognize(audio).map_err(|e| CoreError::adapter(name, e.to_string()))?;
    debug!("{name}: {} palabras reconocidas en {}", words.len(), stim.name());
    let spans = match resolution {
        TranscriptResolution::Words => words,
        TranscriptResolution::Phrases => group_phrases(&words),
    };
    let base = stim.onset();
    let elements = spans.iter()
                        .map(|w| element(w, base))
                        .collect::<Result<Vec<_>, DomainError>>()?;
    Ok(Converted::One(ComplexTextStim::new(elements).into()))
}

fn element(word: &RecognizedWord, base: Option<f64>) -> Result<TextStim, DomainError> {
    let onset = match (base, word.offset) {
        (Some(b), Some(o)) => Some(b + o),
        (b, o) => b.or(o),
    };
    let mut text = TextStim::new(word.text.clone());
    if let Some(onset) = onset {
        text = text.with_onset(onset)?;
    }
    if let Some(duration) = word.duration {
        text = text.with_duration(duration)?;
    }
    Ok(text)
}

/// Agrupa palabras consecutivas con el mismo índice de frase.
fn group_phrases(words: &[RecognizedWord]) -> Vec<RecognizedWord> {
    let mut phrases: Vec<(RecognizedWord, Option<f64>)> = Vec::new();
    for w in words {
        let end = w.offset.zip(w.duration).map(|(o, d)| o + d);
        match phrases.last_mut() {
            Some((current, current_end)) if current.phrase == w.phrase => {
                current.text.push(' ');
                current.text.push_str(&w.text);
                if end.is_some() {
                    *current_end = end;
                }
            }
            _ => phrases.push((w.clone(), end)),
        }
    }
    phrases.into_iter()
           .map(|(mut p, end)| {
               p.duration = match (p.offset, end) {
                   (Some(start), Some(end)) => Some(end - start),
                   _ => p.duration,
               };
               p
           })
           .collect()
}
