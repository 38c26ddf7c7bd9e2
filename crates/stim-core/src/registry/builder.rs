use log::debug;

use super::{CapabilityDescriptor, CapabilityFactory, CapabilityRegistry};
use crate::capability::{CapabilityInstance, Converter, Extractor};
use crate::collection::ExtractorCollection;

/// Acumula descriptores en orden de descubrimiento.
#[derive(Debug, Default, Clone)]
pub struct RegistryBuilder {
    descriptors: Vec<CapabilityDescriptor>,
}

impl RegistryBuilder {
    /// Builder vacío (sin auto-registro).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder con todas las capacidades enviadas vía `inventory`.
    pub fn with_inventory() -> Self {
        let mut builder = Self::new();
        for factory in inventory::iter::<CapabilityFactory> {
            builder = builder.register_factory(factory.create);
        }
        debug!("inventory aportó {} capacidades", builder.descriptors.len());
        builder
    }

    pub fn from_descriptors(descriptors: Vec<CapabilityDescriptor>) -> Self {
        Self { descriptors }
    }

    pub fn register(mut self, descriptor: CapabilityDescriptor) -> Self {
        self.descriptors.push(descriptor);
        self
    }

    pub fn register_factory<F>(self, factory: F) -> Self
        where F: Fn() -> CapabilityInstance + Send + Sync + 'static
    {
        self.register(CapabilityDescriptor::from_factory(factory))
    }

    pub fn register_converter<C>(self, converter: C) -> Self
        where C: Converter + Clone + 'static
    {
        self.register_factory(move || CapabilityInstance::Converter(Box::new(converter.clone())))
    }

    pub fn register_extractor<E>(self, extractor: E) -> Self
        where E: Extractor + Clone + 'static
    {
        self.register_factory(move || CapabilityInstance::Extractor(Box::new(extractor.clone())))
    }

    /// Las colecciones no son `Clone`; se registran con su constructor.
    pub fn register_collection<F>(self, ctor: F) -> Self
        where F: Fn() -> ExtractorCollection + Send + Sync + 'static
    {
        self.register_factory(move || CapabilityInstance::Collection(ctor()))
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn build(self) -> CapabilityRegistry {
        CapabilityRegistry::from_descriptors(self.descriptors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::CapabilityRole;
    use crate::iterator::ComplexTextIterator;
    use stim_domain::StimulusKind;

    #[test]
    fn inventory_collects_builtin_iterator() {
        let reg = RegistryBuilder::with_inventory().build();
        let conv = reg.find_converter_by_name(ComplexTextIterator::NAME).unwrap();
        assert_eq!(conv.output_kind(), StimulusKind::Text);
        let d = reg.converters().into_iter().find(|d| d.name() == ComplexTextIterator::NAME).unwrap();
        assert_eq!(d.role(), CapabilityRole::Converter);
        assert_eq!(d.inputs(), &[StimulusKind::ComplexText]);
    }

    #[test]
    fn explicit_registrations_follow_inventory() {
        let builder = RegistryBuilder::with_inventory();
        let before = builder.len();
        let indexed = builder.clone().build().converters().len();
        let reg = builder.register_converter(ComplexTextIterator::new()).build();
        assert_eq!(reg.descriptors().len(), before + 1);
        // duplicado: el índice conserva el primero
        assert_eq!(reg.converters().len(), indexed);
    }
}
