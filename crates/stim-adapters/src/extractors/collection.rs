// collection.rs
use stim_core::{register_collection, CapabilityInstance, ExtractorCollection};

use super::{BrightnessExtractor, SharpnessExtractor, VibranceExtractor};

/// Resumen de imagen: brillo, nitidez y vibrancia en una sola llamada.
/// Registrada como `ImageSummaryExtractor`; la política sale de `CONFIG`.
pub fn image_summary() -> ExtractorCollection {
    ExtractorCollection::from_config("ImageSummaryExtractor",
                                     vec![CapabilityInstance::Extractor(Box::new(BrightnessExtractor)),
                                          CapabilityInstance::Extractor(Box::new(SharpnessExtractor)),
                                          CapabilityInstance::Extractor(Box::new(VibranceExtractor))])
}

register_collection!(image_summary());

#[cfg(test)]
mod tests {
    use super::*;
    use stim_core::{AggregationPolicy, Capability, CapabilityRole, ImageStim, Stimulus, StimulusKind};

    #[test]
    fn summary_runs_every_member_in_order() {
        let summary = image_summary().with_policy(AggregationPolicy::Concatenate);
        assert_eq!(summary.role(), CapabilityRole::Collection);
        assert_eq!(summary.input_kinds(), &[StimulusKind::Image]);
        let stim = Stimulus::from(ImageStim::filled(3, 3, [10, 200, 30]).unwrap());
        let results = summary.extract_all(&stim).unwrap();
        let names: Vec<&str> = results.iter().map(|r| r.extractor()).collect();
        assert_eq!(names, vec!["BrightnessExtractor", "SharpnessExtractor", "VibranceExtractor"]);
    }
}
