//! Frontera con servicios externos.
//!
//! Los clientes concretos (HTTP, autenticación, reintentos) viven fuera del
//! crate. Un conversor sólo conoce estos traits y traduce cualquier fallo a
//! `CoreError::Adapter` sin reintentar.
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use stim_domain::{AudioStim, ImageStim};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ServiceError {
    #[error("{service} no está configurado ({hint})")]
    Unconfigured { service: String, hint: String },
    #[error("{0}")]
    Request(String),
}

/// Palabra reconocida en un audio. `offset` es relativo al inicio del audio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognizedWord {
    pub text: String,
    pub offset: Option<f64>,
    pub duration: Option<f64>,
    /// Índice de frase/alternativa a la que pertenece la palabra.
    #[serde(default)]
    pub phrase: usize,
}

impl RecognizedWord {
    /// Palabra sin información temporal.
    pub fn untimed(text: impl Into<String>) -> Self {
        Self { text: text.into(),
               offset: None,
               duration: None,
               phrase: 0 }
    }

    pub fn timed(text: impl Into<String>, offset: f64, duration: f64) -> Self {
        Self { text: text.into(),
               offset: Some(offset),
               duration: Some(duration),
               phrase: 0 }
    }

    pub fn in_phrase(mut self, phrase: usize) -> Self {
        self.phrase = phrase;
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TranscriptResolution {
    #[default]
    Words,
    Phrases,
}

/// Cómo combinar varias anotaciones de OCR.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnotationHandling {
    #[default]
    First,
    Concatenate,
}

/// Voz a texto: audio → palabras en orden temporal.
pub trait SpeechRecognizer: Send + Sync + fmt::Debug {
    fn recognize(&self, audio: &AudioStim) -> Result<Vec<RecognizedWord>, ServiceError>;
}

/// OCR: imagen → bloques de texto en orden de lectura.
pub trait TextRecognizer: Send + Sync + fmt::Debug {
    fn recognize(&self, image: &ImageStim) -> Result<Vec<String>, ServiceError>;
}

/// Backend por defecto de las instancias registradas: siempre falla
/// indicando qué credencial falta.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unconfigured {
    service: &'static str,
    hint: &'static str,
}

impl Unconfigured {
    pub const fn new(service: &'static str, hint: &'static str) -> Self {
        Self { service, hint }
    }

    fn error(&self) -> ServiceError {
        ServiceError::Unconfigured { service: self.service.to_string(),
                                     hint: self.hint.to_string() }
    }
}

impl SpeechRecognizer for Unconfigured {
    fn recognize(&self, _audio: &AudioStim) -> Result<Vec<RecognizedWord>, ServiceError> {
        Err(self.error())
    }
}

impl TextRecognizer for Unconfigured {
    fn recognize(&self, _image: &ImageStim) -> Result<Vec<String>, ServiceError> {
        Err(self.error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_names_the_service() {
        let audio = AudioStim::new(vec![0.0; 4], 4).unwrap();
        let err = SpeechRecognizer::recognize(&Unconfigured::new("wit.ai", "WIT_AI_API_KEY"), &audio).unwrap_err();
        assert_eq!(err.to_string(), "wit.ai no está configurado (WIT_AI_API_KEY)");
    }

    #[test]
    fn words_deserialize_without_phrase() {
        let w: RecognizedWord = serde_json::from_value(serde_json::json!({
                                    "text": "obey", "offset": 0.5, "duration": 0.25
                                })).unwrap();
        assert_eq!(w, RecognizedWord::timed("obey", 0.5, 0.25));
    }
}
