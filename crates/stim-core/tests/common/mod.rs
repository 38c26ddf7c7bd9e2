//! Capacidades falsas compartidas por los tests de integración.
#![allow(dead_code)]

use stim_core::{Capability, CapabilityRole, Converted, Converter, CoreError, Extractor, ExtractorResult};
use stim_domain::{AudioStim, ComplexTextStim, ImageStim, Stimulus, StimulusKind, TextStim, VideoStim};

#[derive(Debug, Clone)]
pub struct FakeConverter {
    pub name: &'static str,
    pub inputs: Vec<StimulusKind>,
    pub output: StimulusKind,
}

impl FakeConverter {
    pub fn new(name: &'static str, input: StimulusKind, output: StimulusKind) -> Self {
        Self { name,
               inputs: vec![input],
               output }
    }
}

impl Capability for FakeConverter {
    fn name(&self) -> &str { self.name }
    fn role(&self) -> CapabilityRole { CapabilityRole::Converter }
    fn input_kinds(&self) -> &[StimulusKind] { &self.inputs }
}

impl Converter for FakeConverter {
    fn output_kind(&self) -> StimulusKind {
        self.output
    }

    fn convert(&self, _stim: &Stimulus) -> Result<Converted, CoreError> {
        Ok(Converted::One(sample(self.output)))
    }
}

#[derive(Debug, Clone)]
pub struct FakeExtractor {
    pub name: &'static str,
    pub inputs: Vec<StimulusKind>,
}

impl Capability for FakeExtractor {
    fn name(&self) -> &str { self.name }
    fn role(&self) -> CapabilityRole { CapabilityRole::Extractor }
    fn input_kinds(&self) -> &[StimulusKind] { &self.inputs }
}

impl Extractor for FakeExtractor {
    fn extract(&self, stim: &Stimulus) -> Result<ExtractorResult, CoreError> {
        ExtractorResult::single_row(self.name, stim, vec![("len", stim.name().len() as f64)])
    }
}

pub fn sample(kind: StimulusKind) -> Stimulus {
    match kind {
        StimulusKind::Video => VideoStim::new(10.0, vec![ImageStim::filled(1, 1, [0, 0, 0]).unwrap(); 20]).unwrap().into(),
        StimulusKind::Audio => AudioStim::new(vec![0.0; 8], 8).unwrap().into(),
        StimulusKind::Image => ImageStim::filled(1, 1, [9, 9, 9]).unwrap().into(),
        StimulusKind::Text => TextStim::new("sample").into(),
        StimulusKind::ComplexText => ComplexTextStim::from_text("one two three").into(),
    }
}
