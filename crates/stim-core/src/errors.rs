//! Errores del core.
//!
//! Ningún error se reintenta ni se recupera automáticamente: todos llevan el
//! nombre o los tipos intentados para que el caller decida el siguiente paso.

use stim_domain::{DomainError, StimulusKind};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum CoreError {
    #[error("no capability named '{name}' found")]
    NotFound { name: String },
    #[error("no conversion path from {from} to {to}")]
    NoPath { from: StimulusKind, to: StimulusKind },
    #[error("{capability} cannot be applied to {found}: expected {}", kind_list(.expected))]
    TypeMismatch {
        capability: String,
        expected: Vec<StimulusKind>,
        found: StimulusKind,
    },
    /// Fallo opaco de un adaptador externo (red, credenciales, cuota...).
    #[error("adapter {capability} failed: {message}")]
    Adapter { capability: String, message: String },
    #[error("invalid payload: {0}")]
    InvalidPayload(String),
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("configuration error: {0}")]
    Config(String),
}

impl CoreError {
    pub fn adapter(capability: impl Into<String>, message: impl Into<String>) -> Self {
        CoreError::Adapter { capability: capability.into(),
                             message: message.into() }
    }
}

fn kind_list(kinds: &[StimulusKind]) -> String {
    if kinds.is_empty() {
        return "nothing".to_string();
    }
    kinds.iter().map(|k| k.class_name()).collect::<Vec<_>>().join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_mismatch_lists_expected_kinds() {
        let err = CoreError::TypeMismatch { capability: "BrightnessExtractor".into(),
                                            expected: vec![StimulusKind::Image, StimulusKind::Video],
                                            found: StimulusKind::Text };
        assert_eq!(err.to_string(),
                   "BrightnessExtractor cannot be applied to TextStim: expected ImageStim | VideoStim");
    }

    #[test]
    fn no_path_format() {
        let err = CoreError::NoPath { from: StimulusKind::Image,
                                      to: StimulusKind::Audio };
        assert_eq!(err.to_string(), "no conversion path from ImageStim to AudioStim");
    }

    #[test]
    fn domain_error_is_transparent() {
        let err: CoreError = DomainError::InvalidOnset(-1.0).into();
        assert_eq!(err.to_string(), DomainError::InvalidOnset(-1.0).to_string());
    }
}
