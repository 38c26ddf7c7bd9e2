use stim_domain::{AudioStim, ComplexTextStim, DomainError, ImageStim, Stimulus, StimulusKind, TextStim, VideoStim};

#[test]
fn test_lineage_survives_json() {
    // El linaje anidado se serializa junto al estímulo y conserva el formato
    let audio = Stimulus::from(AudioStim::new(vec![0.0; 4], 4).unwrap()).with_onset(4.2).unwrap();
    let text = Stimulus::from(ComplexTextStim::from_text("we obey")).derived_from(&audio, "WitTranscriptionConverter");
    let word = Stimulus::from(TextStim::new("we")).derived_from(&text, "ComplexTextIterator");

    let json = serde_json::to_string(&word).unwrap();
    let back: Stimulus = serde_json::from_str(&json).unwrap();
    assert_eq!(back, word);
    assert_eq!(back.history_string().as_deref(),
               Some("AudioStim->WitTranscriptionConverter/ComplexTextStim->ComplexTextIterator/TextStim"));
    assert_eq!(back.onset(), Some(4.2));
    assert_eq!(back.history().unwrap().root_kind(), StimulusKind::Audio);
}

#[test]
fn test_source_file_names_stimulus() {
    let img = ImageStim::filled(2, 2, [0, 0, 0]).unwrap().with_source_file("/tmp/button.jpg");
    assert_eq!(img.name(), "button.jpg");
    let text = Stimulus::from(TextStim::new("Exit")).derived_from(&Stimulus::from(img), "TesseractConverter");
    let step = &text.history().unwrap().steps()[0];
    assert_eq!(step.source_name(), "button.jpg");
    assert_eq!(step.source_file().and_then(|p| p.to_str()), Some("/tmp/button.jpg"));
}

#[test]
fn test_video_duration_and_validation() {
    let frames = vec![ImageStim::filled(1, 1, [1, 2, 3]).unwrap(); 30];
    let video = VideoStim::new(15.0, frames).unwrap();
    assert_eq!(video.duration(), 2.0);
    assert!(video.audio().is_none());
    assert!(matches!(VideoStim::new(0.0, vec![]), Err(DomainError::InvalidRate(_))));
    assert!(matches!(ImageStim::new(2, 2, vec![0; 5]), Err(DomainError::PixelBufferMismatch { .. })));
}

#[test]
fn test_complex_text_duration_spans_timed_elements() {
    let words = vec![TextStim::timed("a", 1.0, 0.5).unwrap(), TextStim::timed("b", 2.0, 1.0).unwrap()];
    let complex = ComplexTextStim::new(words);
    assert_eq!(complex.duration(), Some(2.0));
    assert_eq!(complex.text(), "a b");
    assert_eq!(ComplexTextStim::from_text("x y").duration(), None);
}
