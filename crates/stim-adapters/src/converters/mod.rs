//! Conversores concretos.
//!
//! - `VideoToAudioConverter`: extrae la pista de audio embebida.
//! - `WitTranscriptionConverter`, `GoogleSpeechApiConverter`,
//!   `IbmSpeechApiConverter`: audio → `ComplexTextStim` vía `SpeechRecognizer`.
//! - `TesseractConverter`, `GoogleVisionApiTextConverter`: imagen → texto vía
//!   `TextRecognizer`.

mod ocr;
mod speech;
mod video;

pub use ocr::{GoogleVisionApiTextConverter, TesseractConverter};
pub use speech::{GoogleSpeechApiConverter, IbmSpeechApiConverter, WitTranscriptionConverter};
pub use video::VideoToAudioConverter;

use stim_core::{ConversionPlan, Converter, StimulusKind};

/// Conversor multi-paso explícito video → transcripción
/// (`VideoToAudioConverter` + `WitTranscriptionConverter`).
///
/// No se registra: el resolvedor ya encuentra ese camino por sí mismo. Útil
/// para fijar el backend de transcripción.
pub fn video_to_text_converter(transcriber: WitTranscriptionConverter) -> ConversionPlan {
    let steps: Vec<Box<dyn Converter>> = vec![Box::new(VideoToAudioConverter::new()), Box::new(transcriber)];
    ConversionPlan::new(StimulusKind::Video, steps)
}
