//! Vocabulario cerrado de tipos de estímulo.
//!
//! `StimulusKind` es la clave usada por el registro de capacidades y por el
//! resolvedor de conversiones. El nombre de clase (`VideoStim`, `AudioStim`,
//! ...) forma parte del formato textual del linaje y no debe cambiar.
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StimulusKind {
    Video,
    Audio,
    Image,
    Text,
    ComplexText,
}

impl StimulusKind {
    /// Todas las variantes en orden estable.
    pub const ALL: [StimulusKind; 5] = [StimulusKind::Video,
                                        StimulusKind::Audio,
                                        StimulusKind::Image,
                                        StimulusKind::Text,
                                        StimulusKind::ComplexText];

    /// Nombre de clase usado en el linaje y en los mensajes de error.
    pub fn class_name(self) -> &'static str {
        match self {
            StimulusKind::Video => "VideoStim",
            StimulusKind::Audio => "AudioStim",
            StimulusKind::Image => "ImageStim",
            StimulusKind::Text => "TextStim",
            StimulusKind::ComplexText => "ComplexTextStim",
        }
    }

    /// Acepta `VideoStim`, `videostim` o `video` (sin distinguir mayúsculas).
    pub fn from_class_name(name: &str) -> Option<Self> {
        let lowered = name.trim().to_lowercase();
        let base = lowered.strip_suffix("stim").unwrap_or(&lowered);
        match base {
            "video" => Some(StimulusKind::Video),
            "audio" => Some(StimulusKind::Audio),
            "image" => Some(StimulusKind::Image),
            "text" => Some(StimulusKind::Text),
            "complextext" | "complex_text" => Some(StimulusKind::ComplexText),
            _ => None,
        }
    }

    /// Un `ComplexTextStim` es una secuencia de `TextStim`, por lo que
    /// satisface una petición de `TextStim`. Fuera de ese caso sólo vale la
    /// igualdad.
    pub fn satisfies(self, target: StimulusKind) -> bool {
        self == target || (self == StimulusKind::ComplexText && target == StimulusKind::Text)
    }
}

impl fmt::Display for StimulusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}
