// video.rs
use stim_core::{register_converter, Capability, CapabilityRole, Converted, Converter, CoreError, Stimulus,
                StimulusKind};

const INPUTS: &[StimulusKind] = &[StimulusKind::Video];

/// Video → pista de audio embebida. La duración del audio es la de la pista
/// tal cual (normalmente coincide con la del video).
#[derive(Debug, Clone, Copy, Default)]
pub struct VideoToAudioConverter;

impl VideoToAudioConverter {
    pub const NAME: &'static str = "VideoToAudioConverter";

    pub fn new() -> Self {
        Self
    }
}

impl Capability for VideoToAudioConverter {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn role(&self) -> CapabilityRole {
        CapabilityRole::Converter
    }

    fn input_kinds(&self) -> &[StimulusKind] {
        INPUTS
    }
}

impl Converter for VideoToAudioConverter {
    fn output_kind(&self) -> StimulusKind {
        StimulusKind::Audio
    }

    fn convert(&self, stim: &Stimulus) -> Result<Converted, CoreError> {
        let video = stim.as_video()
                        .ok_or_else(|| CoreError::InvalidPayload(format!("{} requiere VideoStim", Self::NAME)))?;
        let audio = video.audio()
                         .ok_or_else(|| CoreError::InvalidPayload(format!("el video '{}' no tiene pista de audio",
                                                                          video.name())))?;
        let audio = audio.clone().with_name(format!("{}.audio", video.name()));
        Ok(Converted::One(audio.into()))
    }
}

register_converter!(VideoToAudioConverter::new());

#[cfg(test)]
mod tests {
    use super::*;
    use stim_core::{AudioStim, ImageStim, VideoStim};

    fn video(with_audio: bool) -> Stimulus {
        let frames = vec![ImageStim::filled(2, 2, [0, 0, 0]).unwrap(); 30];
        let v = VideoStim::new(15.0, frames).unwrap().with_source_file("/data/video/small.mp4");
        let v = if with_audio {
            v.with_audio(AudioStim::new(vec![0.1; 16_000], 8_000).unwrap())
        } else {
            v
        };
        Stimulus::from(v).with_onset(4.2).unwrap()
    }

    #[test]
    fn extracts_track_and_records_source() {
        let input = video(true);
        let audio = VideoToAudioConverter::new().transform(&input).unwrap().into_single().unwrap();
        let history = audio.history().unwrap();
        assert_eq!(history.source_class(), "VideoStim");
        assert_eq!(history.source_file().and_then(|p| p.to_str()), Some("/data/video/small.mp4"));
        assert_eq!(audio.onset(), Some(4.2));
        assert!((audio.duration().unwrap() - input.duration().unwrap()).abs() < 1e-2);
        assert_eq!(audio.history_string().as_deref(), Some("VideoStim->VideoToAudioConverter/AudioStim"));
    }

    #[test]
    fn silent_video_is_invalid_payload() {
        let err = VideoToAudioConverter::new().transform(&video(false)).unwrap_err();
        assert!(matches!(err, CoreError::InvalidPayload(_)));
    }
}
