// text.rs
use serde::{Deserialize, Serialize};

use crate::error::check_time;
use crate::stimulus::{stim_common, StimMeta};
use crate::DomainError;

/// Fragmento de texto con onset/duración opcionales.
///
/// El nombre por defecto es `text[<contenido>]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStim {
    pub(crate) meta: StimMeta,
    text: String,
    duration: Option<f64>,
}

stim_common!(TextStim);

impl TextStim {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        TextStim { meta: StimMeta::named(format!("text[{text}]")),
                   text,
                   duration: None }
    }

    /// Texto con tiempos explícitos (p. ej. una palabra de una transcripción).
    pub fn timed(text: impl Into<String>, onset: f64, duration: f64) -> Result<Self, DomainError> {
        Self::new(text).with_onset(onset)?.with_duration(duration)
    }

    pub fn with_duration(mut self, duration: f64) -> Result<Self, DomainError> {
        self.duration = Some(check_time(duration, false)?);
        Ok(self)
    }

    pub fn text(&self) -> &str { &self.text }
    pub fn duration(&self) -> Option<f64> { self.duration }
}

/// Secuencia ordenada de `TextStim` (orden de documento).
///
/// La iteración no consume la secuencia: cada llamada a `iter()` devuelve una
/// vista nueva desde el primer elemento.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplexTextStim {
    pub(crate) meta: StimMeta,
    elements: Vec<TextStim>,
}

stim_common!(ComplexTextStim);

impl ComplexTextStim {
    pub fn new(elements: Vec<TextStim>) -> Self {
        ComplexTextStim { meta: StimMeta::named("complex_text"),
                          elements }
    }

    /// Tokeniza por espacios en blanco: un elemento por palabra.
    pub fn from_text(text: &str) -> Self {
        Self::new(text.split_whitespace().map(TextStim::new).collect())
    }

    pub fn elements(&self) -> &[TextStim] { &self.elements }
    pub fn len(&self) -> usize { self.elements.len() }
    pub fn is_empty(&self) -> bool { self.elements.is_empty() }
    pub fn get(&self, index: usize) -> Option<&TextStim> { self.elements.get(index) }

    pub fn iter(&self) -> std::slice::Iter<'_, TextStim> {
        self.elements.iter()
    }

    /// Texto completo con los elementos separados por un espacio.
    pub fn text(&self) -> String {
        self.elements.iter().map(TextStim::text).collect::<Vec<_>>().join(" ")
    }

    /// Span temporal cubierto por los elementos con tiempos; `None` si ningún
    /// elemento tiene onset.
    pub fn duration(&self) -> Option<f64> {
        let timed: Vec<(f64, f64)> = self.elements
                                         .iter()
                                         .filter_map(|e| e.onset().map(|o| (o, o + e.duration().unwrap_or(0.0))))
                                         .collect();
        let start = timed.iter().map(|(s, _)| *s).fold(f64::INFINITY, f64::min);
        let end = timed.iter().map(|(_, e)| *e).fold(f64::NEG_INFINITY, f64::max);
        if timed.is_empty() {
            None
        } else {
            Some(end - start)
        }
    }
}

impl<'a> IntoIterator for &'a ComplexTextStim {
    type Item = &'a TextStim;
    type IntoIter = std::slice::Iter<'a, TextStim>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
