//! Modelo común de estímulo.
//!
//! Cada variante concreta (`VideoStim`, `AudioStim`, `ImageStim`, `TextStim`,
//! `ComplexTextStim`) guarda un `StimMeta` con la superficie común de sólo
//! lectura (nombre, onset, archivo de origen, linaje) y su propio payload.
//! `Stimulus` es la unión cerrada que circula por conversores y extractores.
//!
//! Los estímulos son inmutables una vez construidos: los métodos `with_*`
//! consumen el valor y devuelven uno nuevo; ningún conversor recibe `&mut`.
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::check_time;
use crate::{AudioStim, ComplexTextStim, DomainError, ImageStim, Lineage, StimulusKind, TextStim, VideoStim};

/// Metadatos comunes a todas las variantes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StimMeta {
    pub(crate) name: String,
    pub(crate) onset: Option<f64>,
    pub(crate) source_file: Option<PathBuf>,
    pub(crate) history: Option<Arc<Lineage>>,
}

impl StimMeta {
    pub(crate) fn named(name: impl Into<String>) -> Self {
        Self { name: name.into(),
               onset: None,
               source_file: None,
               history: None }
    }
}

/// Accesores y builders comunes, generados para cada variante concreta.
macro_rules! stim_common {
    ($ty:ident) => {
        impl $ty {
            pub fn name(&self) -> &str { &self.meta.name }
            pub fn onset(&self) -> Option<f64> { self.meta.onset }
            pub fn source_file(&self) -> Option<&std::path::Path> { self.meta.source_file.as_deref() }
            pub fn history(&self) -> Option<&std::sync::Arc<$crate::Lineage>> { self.meta.history.as_ref() }

            /// Reemplaza el nombre derivado por uno explícito.
            pub fn with_name(mut self, name: impl Into<String>) -> Self {
                self.meta.name = name.into();
                self
            }

            /// Fija el onset (segundos, finito y no negativo).
            pub fn with_onset(mut self, onset: f64) -> Result<Self, $crate::DomainError> {
                self.meta.onset = Some($crate::error::check_time(onset, true)?);
                Ok(self)
            }

            /// Registra el archivo de origen; el nombre pasa a ser el nombre
            /// del archivo (p. ej. `button.jpg`).
            pub fn with_source_file(mut self, path: impl Into<std::path::PathBuf>) -> Self {
                let path = path.into();
                if let Some(file_name) = path.file_name() {
                    self.meta.name = file_name.to_string_lossy().into_owned();
                }
                self.meta.source_file = Some(path);
                self
            }
        }
    };
}
pub(crate) use stim_common;

/// Unión cerrada de estímulos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Stimulus {
    Video(VideoStim),
    Audio(AudioStim),
    Image(ImageStim),
    Text(TextStim),
    ComplexText(ComplexTextStim),
}

impl Stimulus {
    pub fn kind(&self) -> StimulusKind {
        match self {
            Stimulus::Video(_) => StimulusKind::Video,
            Stimulus::Audio(_) => StimulusKind::Audio,
            Stimulus::Image(_) => StimulusKind::Image,
            Stimulus::Text(_) => StimulusKind::Text,
            Stimulus::ComplexText(_) => StimulusKind::ComplexText,
        }
    }

    fn meta(&self) -> &StimMeta {
        match self {
            Stimulus::Video(s) => &s.meta,
            Stimulus::Audio(s) => &s.meta,
            Stimulus::Image(s) => &s.meta,
            Stimulus::Text(s) => &s.meta,
            Stimulus::ComplexText(s) => &s.meta,
        }
    }

    fn meta_mut(&mut self) -> &mut StimMeta {
        match self {
            Stimulus::Video(s) => &mut s.meta,
            Stimulus::Audio(s) => &mut s.meta,
            Stimulus::Image(s) => &mut s.meta,
            Stimulus::Text(s) => &mut s.meta,
            Stimulus::ComplexText(s) => &mut s.meta,
        }
    }

    pub fn name(&self) -> &str { &self.meta().name }
    pub fn onset(&self) -> Option<f64> { self.meta().onset }
    pub fn source_file(&self) -> Option<&Path> { self.meta().source_file.as_deref() }
    pub fn history(&self) -> Option<&Arc<Lineage>> { self.meta().history.as_ref() }

    /// Linaje en su forma textual canónica, si existe.
    pub fn history_string(&self) -> Option<String> {
        self.history().map(|h| h.to_string())
    }

    pub fn duration(&self) -> Option<f64> {
        match self {
            Stimulus::Video(s) => Some(s.duration()),
            Stimulus::Audio(s) => Some(s.duration()),
            Stimulus::Image(s) => s.duration(),
            Stimulus::Text(s) => s.duration(),
            Stimulus::ComplexText(s) => s.duration(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.meta_mut().name = name.into();
        self
    }

    pub fn with_onset(mut self, onset: f64) -> Result<Self, DomainError> {
        self.meta_mut().onset = Some(check_time(onset, true)?);
        Ok(self)
    }

    /// Sustituye el linaje. Usado por conversores al sellar resultados.
    pub fn with_history(mut self, history: Option<Arc<Lineage>>) -> Self {
        self.meta_mut().history = history;
        self
    }

    /// Sella este estímulo como derivado de `source` por `converter`:
    /// extiende el linaje de la entrada y, si no tiene onset propio, hereda
    /// el de la entrada.
    pub fn derived_from(mut self, source: &Stimulus, converter: &str) -> Self {
        let history = Lineage::derive(source, converter, self.kind());
        let meta = self.meta_mut();
        if meta.onset.is_none() {
            meta.onset = source.onset();
        }
        meta.history = Some(history);
        self
    }

    pub fn as_video(&self) -> Option<&VideoStim> {
        match self {
            Stimulus::Video(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_audio(&self) -> Option<&AudioStim> {
        match self {
            Stimulus::Audio(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_image(&self) -> Option<&ImageStim> {
        match self {
            Stimulus::Image(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextStim> {
        match self {
            Stimulus::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_complex_text(&self) -> Option<&ComplexTextStim> {
        match self {
            Stimulus::ComplexText(s) => Some(s),
            _ => None,
        }
    }
}

impl From<VideoStim> for Stimulus {
    fn from(s: VideoStim) -> Self { Stimulus::Video(s) }
}

impl From<AudioStim> for Stimulus {
    fn from(s: AudioStim) -> Self { Stimulus::Audio(s) }
}

impl From<ImageStim> for Stimulus {
    fn from(s: ImageStim) -> Self { Stimulus::Image(s) }
}

impl From<TextStim> for Stimulus {
    fn from(s: TextStim) -> Self { Stimulus::Text(s) }
}

impl From<ComplexTextStim> for Stimulus {
    fn from(s: ComplexTextStim) -> Self { Stimulus::ComplexText(s) }
}
