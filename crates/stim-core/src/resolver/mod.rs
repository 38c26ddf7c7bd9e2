//! Resolución de conversiones multi-paso.
//!
//! El grafo tiene como nodos los tipos de estímulo y como aristas los
//! conversores registrados (en orden de descubrimiento). La búsqueda es BFS:
//! se elige el camino más corto y, a igual longitud, el que usa aristas
//! descubiertas antes. No hay caché de caminos; el resolvedor sólo toma
//! prestada una instantánea del registro.

mod graph;
mod plan;

pub use graph::ConversionGraph;
pub use plan::ConversionPlan;

use log::debug;

use stim_domain::{Stimulus, StimulusKind};

use crate::capability::{Capability, Converted};
use crate::errors::CoreError;
use crate::registry::CapabilityRegistry;

#[derive(Debug, Clone, Copy)]
pub struct ConversionResolver<'a> {
    registry: &'a CapabilityRegistry,
}

impl<'a> ConversionResolver<'a> {
    pub fn new(registry: &'a CapabilityRegistry) -> Self {
        Self { registry }
    }

    /// Plan para llevar `source` a `target`:
    /// 1. identidad si `source == target`;
    /// 2. conversor directo de un paso;
    /// 3. camino más corto en el grafo hasta un tipo que satisfaga `target`;
    /// 4. identidad si `source` ya satisface `target` (ComplexText como Text)
    ///    y no hay camino;
    /// 5. `NoPath` en otro caso.
    pub fn resolve(&self, source: StimulusKind, target: StimulusKind) -> Result<ConversionPlan, CoreError> {
        if source == target {
            return Ok(ConversionPlan::identity(source));
        }
        if let Some(direct) = self.registry.find_direct(source, target) {
            debug!("conversión directa {source} -> {target} vía {}", direct.name());
            return Ok(ConversionPlan::new(source, vec![direct]));
        }
        let Some(path) = self.registry.graph().shortest_path(source, target) else {
            if source.satisfies(target) {
                return Ok(ConversionPlan::identity(source));
            }
            return Err(CoreError::NoPath { from: source, to: target });
        };
        let steps = path.iter()
                        .map(|idx| {
                            self.registry
                                .descriptor(*idx)
                                .and_then(|d| d.instantiate().into_converter())
                                .ok_or_else(|| CoreError::NotFound { name: format!("converter #{idx}") })
                        })
                        .collect::<Result<Vec<_>, _>>()?;
        let plan = ConversionPlan::new(source, steps);
        debug!("conversión {source} -> {target} en {} pasos: {}", plan.len(), plan.name());
        Ok(plan)
    }

    /// Resuelve desde `stim.kind()` y ejecuta el plan.
    pub fn convert(&self, stim: &Stimulus, target: StimulusKind) -> Result<Converted, CoreError> {
        self.resolve(stim.kind(), target)?.execute(stim)
    }
}
