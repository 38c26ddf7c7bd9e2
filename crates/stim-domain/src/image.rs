// image.rs
use serde::{Deserialize, Serialize};

use crate::error::check_time;
use crate::stimulus::{stim_common, StimMeta};
use crate::DomainError;

/// Imagen RGB8 en memoria, filas contiguas (`width * height * 3` bytes).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageStim {
    pub(crate) meta: StimMeta,
    width: u32,
    height: u32,
    data: Vec<u8>,
    duration: Option<f64>,
}

stim_common!(ImageStim);

impl ImageStim {
    /// # Errores
    /// Retorna `DomainError::PixelBufferMismatch` si el buffer no coincide con
    /// las dimensiones declaradas.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, DomainError> {
        let expected = width as usize * height as usize * 3;
        if data.len() != expected {
            return Err(DomainError::PixelBufferMismatch { expected, found: data.len() });
        }
        if width == 0 || height == 0 {
            return Err(DomainError::ValidationError("una imagen no puede tener dimensiones vacías".to_string()));
        }
        Ok(ImageStim { meta: StimMeta::named("image"),
                       width,
                       height,
                       data,
                       duration: None })
    }

    /// Imagen de un solo color (útil para fixtures).
    pub fn filled(width: u32, height: u32, rgb: [u8; 3]) -> Result<Self, DomainError> {
        let data = rgb.iter().copied().cycle().take(width as usize * height as usize * 3).collect();
        Self::new(width, height, data)
    }

    pub fn with_duration(mut self, duration: f64) -> Result<Self, DomainError> {
        self.duration = Some(check_time(duration, false)?);
        Ok(self)
    }

    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }
    pub fn data(&self) -> &[u8] { &self.data }
    pub fn duration(&self) -> Option<f64> { self.duration }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 3;
        Some([self.data[i], self.data[i + 1], self.data[i + 2]])
    }

    /// Iterador de píxeles en orden de filas.
    pub fn pixels(&self) -> impl Iterator<Item = [u8; 3]> + '_ {
        self.data.chunks_exact(3).map(|c| [c[0], c[1], c[2]])
    }
}
