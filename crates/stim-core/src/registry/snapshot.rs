// snapshot.rs
use indexmap::IndexMap;
use log::{debug, warn};

use stim_domain::StimulusKind;

use super::CapabilityDescriptor;
use crate::capability::{CapabilityInstance, CapabilityRole, Converter};
use crate::constants::EXTRACTOR_SUFFIX;
use crate::errors::CoreError;
use crate::resolver::{ConversionGraph, ConversionResolver};

/// Instantánea inmutable del registro.
///
/// Los índices por nombre conservan la primera aparición de cada nombre
/// normalizado; los duplicados posteriores se ignoran con un `warn!`.
#[derive(Debug, Clone)]
pub struct CapabilityRegistry {
    descriptors: Vec<CapabilityDescriptor>,
    extractors_by_name: IndexMap<String, usize>,
    converters_by_name: IndexMap<String, usize>,
    graph: ConversionGraph,
}

impl CapabilityRegistry {
    pub(crate) fn from_descriptors(descriptors: Vec<CapabilityDescriptor>) -> Self {
        let mut extractors_by_name = IndexMap::new();
        let mut converters_by_name = IndexMap::new();
        for (idx, d) in descriptors.iter().enumerate() {
            let index = match d.role() {
                CapabilityRole::Converter => &mut converters_by_name,
                CapabilityRole::Extractor | CapabilityRole::Collection => &mut extractors_by_name,
            };
            let key = d.normalized_name();
            if index.contains_key(&key) {
                warn!("capacidad duplicada '{}' ignorada", d.name());
                continue;
            }
            index.insert(key, idx);
        }
        let graph = ConversionGraph::from_converters(converters_by_name.values().map(|idx| (*idx, &descriptors[*idx])));
        debug!("registro construido: {} extractores, {} conversores",
               extractors_by_name.len(),
               converters_by_name.len());
        Self { descriptors,
               extractors_by_name,
               converters_by_name,
               graph }
    }

    /// Busca un extractor (o colección) por nombre, sin distinguir
    /// mayúsculas. Si el nombre no termina en `extractor`, se añade el sufijo:
    /// `stft`, `STFTExtractor` y `stftextractor` son equivalentes.
    pub fn find_by_name(&self, name: &str) -> Result<CapabilityInstance, CoreError> {
        let mut key = name.to_lowercase();
        if !key.ends_with(EXTRACTOR_SUFFIX) {
            key.push_str(EXTRACTOR_SUFFIX);
        }
        self.extractors_by_name
            .get(&key)
            .map(|idx| self.descriptors[*idx].instantiate())
            .ok_or_else(|| CoreError::NotFound { name: name.to_string() })
    }

    /// Busca un conversor por nombre exacto (sin sufijo implícito).
    pub fn find_converter_by_name(&self, name: &str) -> Result<Box<dyn Converter>, CoreError> {
        self.converters_by_name
            .get(&name.to_lowercase())
            .and_then(|idx| self.descriptors[*idx].instantiate().into_converter())
            .ok_or_else(|| CoreError::NotFound { name: name.to_string() })
    }

    /// Conversor de `source` a `target`: el primero registrado que lo hace
    /// en un paso o, si no hay, el plan multi-paso del resolvedor. `None`
    /// (no un error) cuando no existe camino o no hace falta conversión.
    pub fn find_by_types(&self, source: StimulusKind, target: StimulusKind) -> Option<Box<dyn Converter>> {
        if let Some(direct) = self.find_direct(source, target) {
            return Some(direct);
        }
        match self.resolver().resolve(source, target) {
            Ok(plan) if !plan.is_identity() => Some(Box::new(plan)),
            _ => None,
        }
    }

    /// Primer conversor registrado que acepta `source` y produce exactamente
    /// `target` en un solo paso.
    pub(crate) fn find_direct(&self, source: StimulusKind, target: StimulusKind) -> Option<Box<dyn Converter>> {
        self.converter_descriptors()
            .find(|d| d.accepts(source) && d.output() == Some(target))
            .and_then(|d| d.instantiate().into_converter())
    }

    pub(crate) fn descriptor(&self, idx: usize) -> Option<&CapabilityDescriptor> {
        self.descriptors.get(idx)
    }

    pub fn descriptors(&self) -> &[CapabilityDescriptor] {
        &self.descriptors
    }

    /// Conversores indexados (sin duplicados), en orden de descubrimiento.
    pub fn converters(&self) -> Vec<&CapabilityDescriptor> {
        self.converter_descriptors().collect()
    }

    /// Extractores y colecciones indexados, en orden de descubrimiento.
    pub fn extractors(&self) -> Vec<&CapabilityDescriptor> {
        self.extractors_by_name.values().map(|idx| &self.descriptors[*idx]).collect()
    }

    fn converter_descriptors(&self) -> impl Iterator<Item = &CapabilityDescriptor> + '_ {
        self.converters_by_name.values().map(|idx| &self.descriptors[*idx])
    }

    pub fn len(&self) -> usize {
        self.extractors_by_name.len() + self.converters_by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `true` si hay un extractor o conversor con ese nombre exacto
    /// (sin distinguir mayúsculas).
    pub fn contains(&self, name: &str) -> bool {
        let key = name.to_lowercase();
        self.extractors_by_name.contains_key(&key) || self.converters_by_name.contains_key(&key)
    }

    pub fn graph(&self) -> &ConversionGraph {
        &self.graph
    }

    pub fn resolver(&self) -> ConversionResolver<'_> {
        ConversionResolver::new(self)
    }
}
