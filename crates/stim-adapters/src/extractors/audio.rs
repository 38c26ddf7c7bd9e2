//! Extractores de audio por ventanas.
//!
//! Ambos recorren la señal en ventanas de `frame_size` muestras con salto
//! `hop_size` (la última ventana se completa con ceros). Una señal más corta
//! que una ventana produce una sola fila.
use std::f64::consts::PI;

use stim_core::{register_extractor, AudioStim, CoreError, Extractor, ExtractorResult, Stimulus, StimulusKind,
                CONFIG};

use super::extractor_capability;

const INPUTS: &[StimulusKind] = &[StimulusKind::Audio];

fn audio_of<'a>(name: &str, stim: &'a Stimulus) -> Result<&'a AudioStim, CoreError> {
    let audio = stim.as_audio()
                    .ok_or_else(|| CoreError::InvalidPayload(format!("{name} requiere AudioStim")))?;
    if audio.samples().is_empty() {
        return Err(CoreError::InvalidPayload(format!("{name}: audio vacío")));
    }
    Ok(audio)
}

fn frames(samples: &[f32], frame_size: usize, hop_size: usize) -> Vec<Vec<f64>> {
    let count = if samples.len() <= frame_size {
        1
    } else {
        1 + (samples.len() - frame_size).div_ceil(hop_size)
    };
    (0..count).map(|i| {
                  let start = i * hop_size;
                  (0..frame_size).map(|j| samples.get(start + j).map_or(0.0, |s| *s as f64)).collect()
              })
              .collect()
}

/// Espectrograma de magnitud agregado en `bands` bandas de igual ancho.
///
/// Cada fila es una ventana (Hann) y cada feature una banda nombrada por su
/// rango en Hz (`0_2756`, ...). El valor es la magnitud media de los bins de
/// la banda.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StftExtractor {
    frame_size: usize,
    hop_size: usize,
    bands: usize,
}

impl StftExtractor {
    pub const NAME: &'static str = "STFTExtractor";

    /// Valores no positivos se elevan a 1.
    pub fn new(frame_size: usize, hop_size: usize, bands: usize) -> Self {
        Self { frame_size: frame_size.max(1),
               hop_size: hop_size.max(1),
               bands: bands.max(1) }
    }

    pub fn frame_size(&self) -> usize { self.frame_size }
    pub fn hop_size(&self) -> usize { self.hop_size }
    pub fn bands(&self) -> usize { self.bands }

    fn band_names(&self, sample_rate: u32) -> Vec<String> {
        let nyquist = sample_rate as f64 / 2.0;
        let width = nyquist / self.bands as f64;
        (0..self.bands).map(|b| format!("{:.0}_{:.0}", b as f64 * width, (b + 1) as f64 * width))
                       .collect()
    }

    fn spectrum_bands(&self, frame: &[f64]) -> Vec<f64> {
        let n = frame.len();
        let windowed: Vec<f64> = frame.iter()
                                      .enumerate()
                                      .map(|(i, x)| {
                                          let w = if n > 1 { 0.5 - 0.5 * (2.0 * PI * i as f64 / (n - 1) as f64).cos() } else { 1.0 };
                                          x * w
                                      })
                                      .collect();
        let bins = n / 2 + 1;
        let magnitudes: Vec<f64> = (0..bins).map(|k| {
                                                let (re, im) = windowed.iter().enumerate().fold((0.0, 0.0), |(re, im), (t, x)| {
                                                    let angle = -2.0 * PI * k as f64 * t as f64 / n as f64;
                                                    (re + x * angle.cos(), im + x * angle.sin())
                                                });
                                                (re * re + im * im).sqrt()
                                            })
                                            .collect();
        (0..self.bands).map(|b| {
                           let lo = b * bins / self.bands;
                           let hi = ((b + 1) * bins / self.bands).max(lo + 1).min(bins);
                           let slice = &magnitudes[lo.min(bins - 1)..hi];
                           slice.iter().sum::<f64>() / slice.len() as f64
                       })
                       .collect()
    }
}

impl Default for StftExtractor {
    fn default() -> Self {
        let cfg = CONFIG.stft;
        Self::new(cfg.frame_size, cfg.hop_size, cfg.bands)
    }
}

extractor_capability!(StftExtractor, INPUTS);

impl Extractor for StftExtractor {
    fn extract(&self, stim: &Stimulus) -> Result<ExtractorResult, CoreError> {
        let audio = audio_of(Self::NAME, stim)?;
        let rows = frames(audio.samples(), self.frame_size, self.hop_size).iter()
                                                                          .map(|f| self.spectrum_bands(f))
                                                                          .collect();
        ExtractorResult::new(Self::NAME, stim, self.band_names(audio.sample_rate()), rows)
    }
}

/// Energía RMS por ventana.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RmsExtractor {
    frame_size: usize,
    hop_size: usize,
}

impl RmsExtractor {
    pub const NAME: &'static str = "RMSExtractor";

    pub fn new(frame_size: usize, hop_size: usize) -> Self {
        Self { frame_size: frame_size.max(1),
               hop_size: hop_size.max(1) }
    }
}

impl Default for RmsExtractor {
    fn default() -> Self {
        Self::new(CONFIG.stft.frame_size, CONFIG.stft.hop_size)
    }
}

extractor_capability!(RmsExtractor, INPUTS);

impl Extractor for RmsExtractor {
    fn extract(&self, stim: &Stimulus) -> Result<ExtractorResult, CoreError> {
        let audio = audio_of(Self::NAME, stim)?;
        let rows = frames(audio.samples(), self.frame_size, self.hop_size)
            .iter()
            .map(|f| vec![(f.iter().map(|x| x * x).sum::<f64>() / f.len() as f64).sqrt()])
            .collect();
        ExtractorResult::new(Self::NAME, stim, vec!["rms".to_string()], rows)
    }
}

register_extractor!(StftExtractor::default());
register_extractor!(RmsExtractor::default());

#[cfg(test)]
mod tests {
    use super::*;

    fn sine(freq: f64, rate: u32, len: usize) -> Stimulus {
        let samples = (0..len).map(|i| (2.0 * PI * freq * i as f64 / rate as f64).sin() as f32).collect();
        Stimulus::from(AudioStim::new(samples, rate).unwrap())
    }

    #[test]
    fn frame_count_follows_hop() {
        assert_eq!(frames(&[0.0; 10], 16, 8).len(), 1);
        assert_eq!(frames(&[0.0; 32], 16, 8).len(), 3);
        assert_eq!(frames(&[0.0; 33], 16, 8).len(), 4);
    }

    #[test]
    fn stft_energy_lands_in_the_right_band() {
        // 1.5 kHz a 8 kHz: nyquist 4 kHz, 4 bandas de 1 kHz → banda 1 (1000_2000)
        let stim = sine(1500.0, 8000, 1024);
        let r = StftExtractor::new(256, 128, 4).apply(&stim).unwrap();
        assert_eq!(r.features(), &["0_1000", "1000_2000", "2000_3000", "3000_4000"]);
        assert_eq!(r.n_rows(), 7);
        let row = &r.values()[0];
        let loudest = row.iter().enumerate().fold(0, |best, (i, v)| if *v > row[best] { i } else { best });
        assert_eq!(loudest, 1);
    }

    #[test]
    fn rms_of_constant_signal() {
        let stim = Stimulus::from(AudioStim::new(vec![0.5; 64], 64).unwrap());
        let r = RmsExtractor::new(32, 32).apply(&stim).unwrap();
        assert_eq!(r.column("rms"), Some(vec![0.5, 0.5]));
    }

    #[test]
    fn empty_audio_is_rejected() {
        let stim = Stimulus::from(AudioStim::new(vec![], 8000).unwrap());
        assert!(matches!(StftExtractor::default().apply(&stim), Err(CoreError::InvalidPayload(_))));
    }
}
