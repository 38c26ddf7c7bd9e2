// audio.rs
use serde::{Deserialize, Serialize};

use crate::stimulus::{stim_common, StimMeta};
use crate::DomainError;

/// Audio mono en memoria (muestras `f32` en [-1, 1]).
///
/// La duración se deriva de `samples.len() / sample_rate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioStim {
    pub(crate) meta: StimMeta,
    samples: Vec<f32>,
    sample_rate: u32,
}

stim_common!(AudioStim);

impl AudioStim {
    /// # Errores
    /// Retorna `DomainError::InvalidRate` si `sample_rate == 0`.
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Result<Self, DomainError> {
        if sample_rate == 0 {
            return Err(DomainError::InvalidRate("sample_rate debe ser > 0".to_string()));
        }
        Ok(AudioStim { meta: StimMeta::named("audio"),
                       samples,
                       sample_rate })
    }

    pub fn samples(&self) -> &[f32] { &self.samples }
    pub fn sample_rate(&self) -> u32 { self.sample_rate }

    pub fn duration(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// Segmento `[start, end)` en segundos como nuevo estímulo crudo.
    /// Los límites se recortan al rango disponible.
    pub fn slice_seconds(&self, start: f64, end: f64) -> AudioStim {
        let rate = self.sample_rate as f64;
        let len = self.samples.len();
        let from = ((start.max(0.0) * rate) as usize).min(len);
        let to = ((end.max(0.0) * rate) as usize).clamp(from, len);
        AudioStim { meta: StimMeta::named(format!("{}[{:.3}-{:.3}]", self.meta.name, start, end)),
                    samples: self.samples[from..to].to_vec(),
                    sample_rate: self.sample_rate }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_is_derived_from_samples() {
        let a = AudioStim::new(vec![0.0; 22050], 44100).unwrap();
        assert!((a.duration() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn zero_rate_is_rejected() {
        assert!(matches!(AudioStim::new(vec![], 0), Err(DomainError::InvalidRate(_))));
    }

    #[test]
    fn slice_is_clamped() {
        let a = AudioStim::new((0..10).map(|i| i as f32).collect(), 10).unwrap();
        let s = a.slice_seconds(0.5, 5.0);
        assert_eq!(s.samples(), &[5.0, 6.0, 7.0, 8.0, 9.0]);
        assert!(s.history().is_none());
    }
}
