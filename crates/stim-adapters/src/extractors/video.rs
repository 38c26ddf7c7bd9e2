// video.rs
use stim_core::{register_extractor, CoreError, Extractor, ExtractorResult, Stimulus, StimulusKind};

use super::extractor_capability;

const INPUTS: &[StimulusKind] = &[StimulusKind::Video];

/// Metadatos temporales de un video: fotogramas, fps y duración.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameCountExtractor;

impl FrameCountExtractor {
    pub const NAME: &'static str = "FrameCountExtractor";
}

extractor_capability!(FrameCountExtractor, INPUTS);

impl Extractor for FrameCountExtractor {
    fn extract(&self, stim: &Stimulus) -> Result<ExtractorResult, CoreError> {
        let video = stim.as_video()
                        .ok_or_else(|| CoreError::InvalidPayload(format!("{} requiere VideoStim", Self::NAME)))?;
        ExtractorResult::single_row(Self::NAME,
                                    stim,
                                    vec![("n_frames", video.n_frames() as f64),
                                         ("fps", video.fps()),
                                         ("duration", video.duration())])
    }
}

register_extractor!(FrameCountExtractor);
