// video.rs
use serde::{Deserialize, Serialize};

use crate::stimulus::{stim_common, StimMeta};
use crate::{AudioStim, DomainError, ImageStim};

/// Video en memoria: fotogramas RGB a `fps` constantes y pista de audio
/// opcional.
///
/// La duración se deriva de `frames.len() / fps`. Los decodificadores que
/// producen este valor quedan fuera del crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoStim {
    pub(crate) meta: StimMeta,
    fps: f64,
    frames: Vec<ImageStim>,
    audio: Option<AudioStim>,
}

stim_common!(VideoStim);

impl VideoStim {
    /// # Errores
    /// Retorna `DomainError::InvalidRate` si `fps` no es finito y positivo.
    pub fn new(fps: f64, frames: Vec<ImageStim>) -> Result<Self, DomainError> {
        if !(fps.is_finite() && fps > 0.0) {
            return Err(DomainError::InvalidRate(format!("fps inválido: {fps}")));
        }
        Ok(VideoStim { meta: StimMeta::named("video"),
                       fps,
                       frames,
                       audio: None })
    }

    /// Adjunta la pista de audio embebida.
    pub fn with_audio(mut self, audio: AudioStim) -> Self {
        self.audio = Some(audio);
        self
    }

    pub fn fps(&self) -> f64 { self.fps }
    pub fn frames(&self) -> &[ImageStim] { &self.frames }
    pub fn n_frames(&self) -> usize { self.frames.len() }
    pub fn audio(&self) -> Option<&AudioStim> { self.audio.as_ref() }

    pub fn duration(&self) -> f64 {
        self.frames.len() as f64 / self.fps
    }
}
