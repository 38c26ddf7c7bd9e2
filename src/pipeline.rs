//! Extracción con conversión implícita.
//!
//! `FeaturePipeline` busca la capacidad por nombre. Si acepta el tipo del
//! estímulo se aplica tal cual; si no, resuelve un camino de conversión hacia
//! el primer tipo de entrada alcanzable (en el orden declarado por la
//! capacidad). Si la conversión produce una colección, cada elemento se
//! procesa por separado.
use log::debug;

use stim_core::{apply_converted, Capability, CapabilityInstance, CapabilityRegistry, CollectionItem, ConversionPlan,
                Converted, Converter, CoreError, ExtractorResult, Stimulus};

#[derive(Debug)]
pub struct FeaturePipeline<'a> {
    registry: &'a CapabilityRegistry,
    capability: CapabilityInstance,
}

impl<'a> FeaturePipeline<'a> {
    /// # Errores
    /// `NotFound` si no hay extractor/colección con ese nombre.
    pub fn new(registry: &'a CapabilityRegistry, name: &str) -> Result<Self, CoreError> {
        let capability = registry.find_by_name(name)?;
        Ok(Self { registry, capability })
    }

    pub fn capability(&self) -> &CapabilityInstance {
        &self.capability
    }

    /// Plan que lleva `stim` a un tipo aceptado por la capacidad.
    ///
    /// # Errores
    /// `NoPath` (con el primer tipo aceptado como destino) si ningún tipo es
    /// alcanzable.
    pub fn plan_for(&self, stim: &Stimulus) -> Result<ConversionPlan, CoreError> {
        if self.capability.accepts(stim.kind()) {
            return Ok(ConversionPlan::identity(stim.kind()));
        }
        let resolver = self.registry.resolver();
        let accepted = self.capability.input_kinds();
        for kind in accepted {
            // un destino alcanzable sólo sirve si el tipo final es aceptado
            match resolver.resolve(stim.kind(), *kind) {
                Ok(plan) if self.capability.accepts(plan.output_kind()) => return Ok(plan),
                Ok(_) | Err(CoreError::NoPath { .. }) => continue,
                Err(other) => return Err(other),
            }
        }
        Err(CoreError::NoPath { from: stim.kind(),
                                to: accepted.first().copied().unwrap_or(stim.kind()) })
    }

    /// Convierte (si hace falta) y aplica la capacidad a cada estímulo
    /// resultante.
    pub fn run(&self, stim: &Stimulus) -> Result<Vec<CollectionItem>, CoreError> {
        let plan = self.plan_for(stim)?;
        debug!("{}: plan '{}' ({} pasos)", self.capability.name(), plan.name(), plan.len());
        let converted = plan.execute(stim)?;
        match &self.capability {
            CapabilityInstance::Extractor(e) => {
                Ok(apply_converted(e.as_ref(), &converted)?.into_iter().map(CollectionItem::Features).collect())
            }
            other => run_each(other, &converted),
        }
    }
}

fn run_each(capability: &CapabilityInstance, converted: &Converted) -> Result<Vec<CollectionItem>, CoreError> {
    let mut items = Vec::new();
    for s in converted {
        items.extend(capability.run(s)?);
    }
    Ok(items)
}

/// Atajo sobre el registro global: sólo devuelve los resultados de features.
pub fn extract(name: &str, stim: &Stimulus) -> Result<Vec<ExtractorResult>, CoreError> {
    let registry = CapabilityRegistry::global();
    let items = FeaturePipeline::new(&registry, name)?.run(stim)?;
    Ok(items.into_iter()
            .filter_map(|item| match item {
                CollectionItem::Features(r) => Some(r),
                CollectionItem::Converted(_) => None,
            })
            .collect())
}
