//! Estadísticos globales de imagen. Cada extractor produce una sola fila.
use stim_core::{register_extractor, CoreError, Extractor, ExtractorResult, ImageStim, Stimulus, StimulusKind};

use super::extractor_capability;

const INPUTS: &[StimulusKind] = &[StimulusKind::Image];

fn image_of<'a>(name: &str, stim: &'a Stimulus) -> Result<&'a ImageStim, CoreError> {
    stim.as_image()
        .ok_or_else(|| CoreError::InvalidPayload(format!("{name} requiere ImageStim")))
}

/// Luminosidad media: máximo de los canales por píxel, promediado y
/// normalizado a [0, 1].
#[derive(Debug, Clone, Copy, Default)]
pub struct BrightnessExtractor;

impl BrightnessExtractor {
    pub const NAME: &'static str = "BrightnessExtractor";
}

extractor_capability!(BrightnessExtractor, INPUTS);

impl Extractor for BrightnessExtractor {
    fn extract(&self, stim: &Stimulus) -> Result<ExtractorResult, CoreError> {
        let image = image_of(Self::NAME, stim)?;
        let n = (image.width() * image.height()) as f64;
        let total: f64 = image.pixels().map(|p| p.iter().copied().max().unwrap_or(0) as f64).sum();
        ExtractorResult::single_row(Self::NAME, stim, vec![("brightness", total / n / 255.0)])
    }
}

/// Nitidez: máximo del valor absoluto del laplaciano (escala de grises,
/// saturado a 255) normalizado a [0, 1]. Bordes con reflexión.
#[derive(Debug, Clone, Copy, Default)]
pub struct SharpnessExtractor;

impl SharpnessExtractor {
    pub const NAME: &'static str = "SharpnessExtractor";
}

extractor_capability!(SharpnessExtractor, INPUTS);

fn reflect(i: i64, n: i64) -> usize {
    if n == 1 {
        return 0;
    }
    let r = if i < 0 {
        -i
    } else if i >= n {
        2 * n - 2 - i
    } else {
        i
    };
    r as usize
}

fn grayscale(image: &ImageStim) -> Vec<f64> {
    image.pixels()
         .map(|[r, g, b]| (0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64).round())
         .collect()
}

impl Extractor for SharpnessExtractor {
    fn extract(&self, stim: &Stimulus) -> Result<ExtractorResult, CoreError> {
        let image = image_of(Self::NAME, stim)?;
        let (w, h) = (image.width() as i64, image.height() as i64);
        let gray = grayscale(image);
        let at = |x: i64, y: i64| gray[reflect(y, h) * w as usize + reflect(x, w)];
        let mut peak: f64 = 0.0;
        for y in 0..h {
            for x in 0..w {
                let lap = at(x - 1, y) + at(x + 1, y) + at(x, y - 1) + at(x, y + 1) - 4.0 * at(x, y);
                peak = peak.max(lap.abs().min(255.0));
            }
        }
        ExtractorResult::single_row(Self::NAME, stim, vec![("sharpness", peak / 255.0)])
    }
}

/// Vibrancia: varianza de los tres canales por píxel, promediada.
#[derive(Debug, Clone, Copy, Default)]
pub struct VibranceExtractor;

impl VibranceExtractor {
    pub const NAME: &'static str = "VibranceExtractor";
}

extractor_capability!(VibranceExtractor, INPUTS);

impl Extractor for VibranceExtractor {
    fn extract(&self, stim: &Stimulus) -> Result<ExtractorResult, CoreError> {
        let image = image_of(Self::NAME, stim)?;
        let n = (image.width() * image.height()) as f64;
        let total: f64 = image.pixels()
                              .map(|p| {
                                  let c = p.map(f64::from);
                                  let mean = (c[0] + c[1] + c[2]) / 3.0;
                                  c.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / 3.0
                              })
                              .sum();
        ExtractorResult::single_row(Self::NAME, stim, vec![("vibrance", total / n)])
    }
}

register_extractor!(BrightnessExtractor);
register_extractor!(SharpnessExtractor);
register_extractor!(VibranceExtractor);
