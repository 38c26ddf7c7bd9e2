use thiserror::Error;

/// Errores de validación al construir estímulos.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("onset inválido: {0} (debe ser finito y >= 0)")]
    InvalidOnset(f64),
    #[error("duración inválida: {0} (debe ser finita y >= 0)")]
    InvalidDuration(f64),
    #[error("tasa de muestreo inválida: {0}")]
    InvalidRate(String),
    #[error("buffer de píxeles inválido: esperado {expected} bytes, recibido {found}")]
    PixelBufferMismatch { expected: usize, found: usize },
    #[error("{0}")]
    ValidationError(String),
}

pub(crate) fn check_time(value: f64, as_onset: bool) -> Result<f64, DomainError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else if as_onset {
        Err(DomainError::InvalidOnset(value))
    } else {
        Err(DomainError::InvalidDuration(value))
    }
}
