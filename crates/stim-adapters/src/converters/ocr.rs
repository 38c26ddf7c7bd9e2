//! OCR: `ImageStim` → `TextStim`.
//!
//! La salida se nombra `text[<texto>]`, así que un botón con la palabra
//! "Exit" produce `text[Exit]`.
use log::debug;
use std::sync::Arc;

use stim_core::{register_converter, Capability, CapabilityRole, Converted, Converter, CoreError, Stimulus,
                StimulusKind, TextStim};

use crate::services::{AnnotationHandling, TextRecognizer, Unconfigured};

const INPUTS: &[StimulusKind] = &[StimulusKind::Image];

fn recognize(name: &str,
             backend: &dyn TextRecognizer,
             handling: AnnotationHandling,
             stim: &Stimulus)
             -> Result<Converted, CoreError> {
    let image = stim.as_image()
                    .ok_or_else(|| CoreError::InvalidPayload(format!("{name} requiere ImageStim")))?;
    let blocks = backend.recognize(image).map_err(|e| CoreError::adapter(name, e.to_string()))?;
    debug!("{name}: {} bloques de texto en {}", blocks.len(), stim.name());
    let text = match handling {
        AnnotationHandling::First => blocks.first().map(|b| b.trim().to_string()).unwrap_or_default(),
        AnnotationHandling::Concatenate => blocks.iter()
                                                 .map(|b| b.trim())
                                                 .filter(|b| !b.is_empty())
                                                 .collect::<Vec<_>>()
                                                 .join(" "),
    };
    Ok(Converted::One(TextStim::new(text).into()))
}

/// OCR local con Tesseract. Concatena todos los bloques reconocidos.
#[derive(Debug, Clone)]
pub struct TesseractConverter {
    backend: Arc<dyn TextRecognizer>,
}

impl TesseractConverter {
    pub const NAME: &'static str = "TesseractConverter";

    pub fn new() -> Self {
        Self { backend: Arc::new(Unconfigured::new("tesseract", "instalar tesseract y registrar un backend")) }
    }

    pub fn with_backend<B>(mut self, backend: B) -> Self
        where B: TextRecognizer + 'static
    {
        self.backend = Arc::new(backend);
        self
    }
}

impl Default for TesseractConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl Capability for TesseractConverter {
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

impl Converter for TesseractConverter {
    fn output_kind(&self) -> StimulusKind {
        StimulusKind::Text
    }

    fn convert(&self, stim: &Stimulus) -> Result<Converted, CoreError> {
        recognize(Self::NAME, self.backend.as_ref(), AnnotationHandling::Concatenate, stim)
    }
}

/// OCR vía Google Cloud Vision. Por defecto usa sólo la primera anotación.
#[derive(Debug, Clone)]
pub struct GoogleVisionApiTextConverter {
    backend: Arc<dyn TextRecognizer>,
    handling: AnnotationHandling,
}

impl GoogleVisionApiTextConverter {
    pub const NAME: &'static str = "GoogleVisionAPITextConverter";

    pub fn new() -> Self {
        Self { backend: Arc::new(Unconfigured::new("Google Vision API", "GOOGLE_APPLICATION_CREDENTIALS")),
               handling: AnnotationHandling::First }
    }

    pub fn with_backend<B>(mut self, backend: B) -> Self
        where B: TextRecognizer + 'static
    {
        self.backend = Arc::new(backend);
        self
    }

    pub fn with_handling(mut self, handling: AnnotationHandling) -> Self {
        self.handling = handling;
        self
    }
}

impl Default for GoogleVisionApiTextConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl Capability for GoogleVisionApiTextConverter {
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

impl Converter for GoogleVisionApiTextConverter {
    fn output_kind(&self) -> StimulusKind {
        StimulusKind::Text
    }

    fn convert(&self, stim: &Stimulus) -> Result<Converted, CoreError> {
        recognize(Self::NAME, self.backend.as_ref(), self.handling, stim)
    }
}

register_converter!(TesseractConverter::new());
register_converter!(GoogleVisionApiTextConverter::new());
