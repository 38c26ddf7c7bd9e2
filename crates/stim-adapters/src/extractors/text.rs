// text.rs
use std::collections::HashSet;

use stim_core::{register_extractor, CoreError, Extractor, ExtractorResult, Stimulus, StimulusKind, TextStim};

use super::extractor_capability;

const INPUTS: &[StimulusKind] = &[StimulusKind::Text, StimulusKind::ComplexText];

/// Elementos de texto de la entrada: uno para `TextStim`, todos para
/// `ComplexTextStim`.
fn text_elements<'a>(name: &str, stim: &'a Stimulus) -> Result<Vec<&'a TextStim>, CoreError> {
    match stim {
        Stimulus::Text(t) => Ok(vec![t]),
        Stimulus::ComplexText(c) => Ok(c.iter().collect()),
        other => Err(CoreError::TypeMismatch { capability: name.to_string(),
                                               expected: INPUTS.to_vec(),
                                               found: other.kind() }),
    }
}

/// Longitud en caracteres. Sobre un `ComplexTextStim` produce una fila por
/// elemento.
#[derive(Debug, Clone, Copy, Default)]
pub struct LengthExtractor;

impl LengthExtractor {
    pub const NAME: &'static str = "LengthExtractor";
}

extractor_capability!(LengthExtractor, INPUTS);

impl Extractor for LengthExtractor {
    fn extract(&self, stim: &Stimulus) -> Result<ExtractorResult, CoreError> {
        let rows = text_elements(Self::NAME, stim)?.iter()
                                                   .map(|t| vec![t.text().chars().count() as f64])
                                                   .collect();
        ExtractorResult::new(Self::NAME, stim, vec!["text_length".to_string()], rows)
    }
}

/// Número de palabras distintas (sin distinguir mayúsculas ni puntuación
/// de borde) en todo el texto.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumUniqueWordsExtractor;

impl NumUniqueWordsExtractor {
    pub const NAME: &'static str = "NumUniqueWordsExtractor";
}

extractor_capability!(NumUniqueWordsExtractor, INPUTS);

impl Extractor for NumUniqueWordsExtractor {
    fn extract(&self, stim: &Stimulus) -> Result<ExtractorResult, CoreError> {
        let unique: HashSet<String> =
            text_elements(Self::NAME, stim)?.iter()
                                            .flat_map(|t| t.text().split_whitespace())
                                            .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase())
                                            .filter(|w| !w.is_empty())
                                            .collect();
        ExtractorResult::single_row(Self::NAME, stim, vec![("num_unique_words", unique.len() as f64)])
    }
}

register_extractor!(LengthExtractor);
register_extractor!(NumUniqueWordsExtractor);
