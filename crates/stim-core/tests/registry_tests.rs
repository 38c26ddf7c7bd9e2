mod common;

use common::{sample, FakeConverter, FakeExtractor};
use stim_core::{Capability, CapabilityDescriptor, CapabilityInstance, CapabilityRegistry, CapabilityRole, Converter,
                CoreError, RegistryBuilder};
use stim_domain::StimulusKind::{Audio, ComplexText, Image, Text, Video};

fn registry() -> CapabilityRegistry {
    RegistryBuilder::new().register_converter(FakeConverter::new("VideoToAudioConverter", Video, Audio))
                          .register_converter(FakeConverter::new("AudioToTextConverter", Audio, ComplexText))
                          .register_converter(FakeConverter::new("ImageToTextConverter", Image, Text))
                          .register_extractor(FakeExtractor { name: "STFTExtractor",
                                                              inputs: vec![Audio] })
                          .build()
}

#[test]
fn find_by_name_is_case_insensitive_and_appends_suffix() {
    let reg = registry();
    for query in ["stft", "STFTExtractor", "stftextractor", "Stft"] {
        let found = reg.find_by_name(query).unwrap();
        assert_eq!(found.name(), "STFTExtractor", "query {query:?}");
        assert_eq!(found.role(), CapabilityRole::Extractor);
    }
}

#[test]
fn find_by_name_does_not_ignore_whitespace() {
    let reg = registry();
    for query in ["  Stft ", "stft ", " STFTExtractor"] {
        assert!(matches!(reg.find_by_name(query), Err(CoreError::NotFound { .. })), "query {query:?}");
    }
    assert!(reg.find_converter_by_name(" VideoToAudioConverter").is_err());
    assert!(!reg.contains("stftextractor "));
    assert!(reg.contains("STFTEXTRACTOR"));
}

#[test]
fn find_by_name_misses_are_not_found() {
    let reg = registry();
    let err = reg.find_by_name("doesnotexist").unwrap_err();
    assert_eq!(err, CoreError::NotFound { name: "doesnotexist".into() });
    // los conversores no se buscan por nombre de extractor
    assert!(reg.find_by_name("VideoToAudioConverter").is_err());
    assert!(reg.find_converter_by_name("videotoaudioconverter").is_ok());
}

#[test]
fn find_by_types_returns_none_when_absent() {
    let reg = registry();
    assert!(reg.find_by_types(Text, Image).is_none());
    let conv = reg.find_by_types(Image, Text).unwrap();
    assert_eq!(conv.name(), "ImageToTextConverter");
    assert!(reg.find_by_types(Text, Text).is_none());
}

#[test]
fn find_by_types_falls_back_to_a_multi_step_converter() {
    let reg = RegistryBuilder::new().register_converter(FakeConverter::new("VideoToAudioConverter", Video, Audio))
                                    .register_converter(FakeConverter::new("AudioToTextConverter", Audio, ComplexText))
                                    .build();
    let conv = reg.find_by_types(Video, Text).unwrap();
    assert_eq!(conv.name(), "VideoToAudioConverter+AudioToTextConverter");
    assert_eq!(conv.output_kind(), ComplexText);

    let video = sample(Video);
    let out = conv.transform(&video).unwrap().into_single().unwrap();
    assert_eq!(out.kind(), ComplexText);
    assert_eq!(out.history().unwrap().depth(), 2);

    // ComplexText satisface Text: un solo paso basta
    let single = reg.find_by_types(Audio, Text).unwrap();
    assert_eq!(single.name(), "AudioToTextConverter");
    assert!(reg.find_by_types(Text, Image).is_none());
}

#[test]
fn first_discovered_wins_on_duplicates() {
    let reg = RegistryBuilder::new().register_converter(FakeConverter::new("First", Image, Text))
                                    .register_converter(FakeConverter::new("Second", Image, Text))
                                    .register_extractor(FakeExtractor { name: "DupExtractor",
                                                                        inputs: vec![Text] })
                                    .register_extractor(FakeExtractor { name: "dupextractor",
                                                                        inputs: vec![Image] })
                                    .build();
    assert_eq!(reg.find_by_types(Image, Text).unwrap().name(), "First");
    let dup = reg.find_by_name("dup").unwrap();
    assert_eq!(dup.input_kinds(), &[Text]);
    assert_eq!(reg.len(), 3);
    assert_eq!(reg.descriptors().len(), 4);
}

#[test]
fn each_lookup_yields_a_fresh_instance() {
    let reg = registry();
    let a = reg.find_by_name("stft").unwrap();
    let b = reg.find_by_name("stft").unwrap();
    assert!(matches!((a, b), (CapabilityInstance::Extractor(_), CapabilityInstance::Extractor(_))));
}

#[test]
fn global_registration_is_visible_to_later_queries() {
    let before = CapabilityRegistry::global();
    assert!(before.find_by_name("LateRegisteredExtractor").is_err());
    let descriptor = CapabilityDescriptor::from_factory(|| {
        CapabilityInstance::Extractor(Box::new(FakeExtractor { name: "LateRegisteredExtractor",
                                                               inputs: vec![Text] }))
    });
    CapabilityRegistry::register_global(descriptor);
    let after = CapabilityRegistry::global();
    assert!(after.find_by_name("lateregistered").is_ok());
    // la instantánea anterior no cambia
    assert!(before.find_by_name("LateRegisteredExtractor").is_err());
}
