//! El registro global descubre las capacidades de este crate sin lista
//! central.
use stim_adapters::{BrightnessExtractor, StftExtractor, TesseractConverter, VideoToAudioConverter};
use stim_core::{Capability, CapabilityRegistry, CapabilityRole, Converter, CoreError, StimulusKind};

fn registry() -> std::sync::Arc<CapabilityRegistry> {
    // referencia explícita para asegurar el enlace del crate
    let _ = (StftExtractor::NAME, VideoToAudioConverter::new(), BrightnessExtractor);
    CapabilityRegistry::global()
}

#[test]
fn stft_resolves_under_every_spelling() {
    let reg = registry();
    for query in ["stft", "STFTExtractor", "stftextractor"] {
        assert_eq!(reg.find_by_name(query).unwrap().name(), "STFTExtractor");
    }
    assert!(matches!(reg.find_by_name("doesnotexist"), Err(CoreError::NotFound { .. })));
}

#[test]
fn collections_are_found_by_name() {
    let reg = registry();
    let summary = reg.find_by_name("imagesummary").unwrap();
    assert_eq!(summary.role(), CapabilityRole::Collection);
    assert!(summary.into_collection().is_some());
}

#[test]
fn image_to_text_is_available_but_not_the_reverse() {
    let reg = registry();
    let _ = TesseractConverter::NAME;
    let conv = reg.find_by_types(StimulusKind::Image, StimulusKind::Text).unwrap();
    assert!(["TesseractConverter", "GoogleVisionAPITextConverter"].contains(&conv.name()));
    assert!(reg.find_by_types(StimulusKind::Text, StimulusKind::Image).is_none());
}

#[test]
fn registered_transcribers_fail_without_backend() {
    let reg = registry();
    let conv = reg.find_converter_by_name("WitTranscriptionConverter").unwrap();
    let audio = stim_core::Stimulus::from(stim_core::AudioStim::new(vec![0.0; 100], 100).unwrap());
    assert!(matches!(conv.transform(&audio), Err(CoreError::Adapter { .. })));
}
