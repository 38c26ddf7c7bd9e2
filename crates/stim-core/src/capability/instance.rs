// instance.rs
use stim_domain::{Stimulus, StimulusKind};

use super::{Capability, CapabilityRole, Converter, Extractor};
use crate::collection::{CollectionItem, ExtractorCollection};
use crate::errors::CoreError;

/// Instancia concreta entregada por el registro.
#[derive(Debug)]
pub enum CapabilityInstance {
    Converter(Box<dyn Converter>),
    Extractor(Box<dyn Extractor>),
    Collection(ExtractorCollection),
}

impl CapabilityInstance {
    pub fn name(&self) -> &str {
        match self {
            CapabilityInstance::Converter(c) => c.name(),
            CapabilityInstance::Extractor(e) => e.name(),
            CapabilityInstance::Collection(c) => c.name(),
        }
    }

    pub fn role(&self) -> CapabilityRole {
        match self {
            CapabilityInstance::Converter(_) => CapabilityRole::Converter,
            CapabilityInstance::Extractor(_) => CapabilityRole::Extractor,
            CapabilityInstance::Collection(_) => CapabilityRole::Collection,
        }
    }

    pub fn input_kinds(&self) -> &[StimulusKind] {
        match self {
            CapabilityInstance::Converter(c) => c.input_kinds(),
            CapabilityInstance::Extractor(e) => e.input_kinds(),
            CapabilityInstance::Collection(c) => c.input_kinds(),
        }
    }

    /// Sólo los conversores declaran tipo de salida.
    pub fn output_kind(&self) -> Option<StimulusKind> {
        match self {
            CapabilityInstance::Converter(c) => Some(c.output_kind()),
            _ => None,
        }
    }

    pub fn accepts(&self, kind: StimulusKind) -> bool {
        self.input_kinds().contains(&kind)
    }

    /// Ejecuta la capacidad sea cual sea su rol.
    pub fn run(&self, stim: &Stimulus) -> Result<Vec<CollectionItem>, CoreError> {
        match self {
            CapabilityInstance::Converter(c) => Ok(vec![CollectionItem::Converted(c.transform(stim)?)]),
            CapabilityInstance::Extractor(e) => Ok(vec![CollectionItem::Features(e.apply(stim)?)]),
            CapabilityInstance::Collection(c) => c.apply(stim),
        }
    }

    pub fn as_extractor(&self) -> Option<&dyn Extractor> {
        match self {
            CapabilityInstance::Extractor(e) => Some(e.as_ref()),
            _ => None,
        }
    }

    pub fn into_converter(self) -> Option<Box<dyn Converter>> {
        match self {
            CapabilityInstance::Converter(c) => Some(c),
            _ => None,
        }
    }

    pub fn into_extractor(self) -> Option<Box<dyn Extractor>> {
        match self {
            CapabilityInstance::Extractor(e) => Some(e),
            _ => None,
        }
    }

    pub fn into_collection(self) -> Option<ExtractorCollection> {
        match self {
            CapabilityInstance::Collection(c) => Some(c),
            _ => None,
        }
    }
}
