//! stim-adapters: conversores y extractores concretos.
//!
//! Cada capacidad se auto-registra con las macros de `stim-core`; basta con
//! enlazar este crate para que `CapabilityRegistry::global()` las conozca.
//!
//! Los servicios externos (reconocimiento de voz, OCR) quedan detrás de los
//! traits de `services`. Las instancias registradas usan `Unconfigured`, que
//! falla con un error de adaptador; para usarlas con un backend real se
//! construyen con `with_backend`.

pub mod converters;
pub mod extractors;
pub mod loaders;
pub mod services;

pub use converters::{video_to_text_converter, GoogleSpeechApiConverter, GoogleVisionApiTextConverter,
                     IbmSpeechApiConverter, TesseractConverter, VideoToAudioConverter, WitTranscriptionConverter};
pub use extractors::{image_summary, BrightnessExtractor, FrameCountExtractor, LengthExtractor,
                     NumUniqueWordsExtractor, RmsExtractor, SharpnessExtractor, StftExtractor, VibranceExtractor};
pub use loaders::{load_complex_text, load_text, load_wav, LoadError};
pub use services::{AnnotationHandling, RecognizedWord, ServiceError, SpeechRecognizer, TextRecognizer,
                   TranscriptResolution, Unconfigured};
