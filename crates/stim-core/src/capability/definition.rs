use log::debug;
use std::fmt;

use stim_domain::{Stimulus, StimulusKind};

use super::{Converted, ExtractorResult};
use crate::errors::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CapabilityRole {
    Converter,
    Extractor,
    Collection,
}

impl fmt::Display for CapabilityRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CapabilityRole::Converter => "converter",
            CapabilityRole::Extractor => "extractor",
            CapabilityRole::Collection => "collection",
        };
        f.write_str(s)
    }
}

/// Superficie común de toda capacidad registrable.
pub trait Capability: Send + Sync + fmt::Debug {
    /// Nombre de clase estable (p. ej. `STFTExtractor`). Es la clave del
    /// registro y aparece en el linaje.
    fn name(&self) -> &str;

    fn role(&self) -> CapabilityRole;

    /// Tipos de estímulo aceptados como entrada.
    fn input_kinds(&self) -> &[StimulusKind];

    fn accepts(&self, kind: StimulusKind) -> bool {
        self.input_kinds().contains(&kind)
    }

    /// Valida el tipo de la entrada antes de ejecutar.
    fn check_input(&self, stim: &Stimulus) -> Result<(), CoreError> {
        if self.accepts(stim.kind()) {
            Ok(())
        } else {
            Err(CoreError::TypeMismatch { capability: self.name().to_string(),
                                          expected: self.input_kinds().to_vec(),
                                          found: stim.kind() })
        }
    }
}

/// Conversor de un tipo de estímulo a otro.
///
/// Las implementaciones sólo escriben `convert` (payload puro); `transform`
/// valida la entrada y sella cada salida con el linaje extendido. La entrada
/// se recibe prestada y nunca se modifica.
pub trait Converter: Capability {
    fn output_kind(&self) -> StimulusKind;

    /// Conversión cruda, sin validación ni sellado de linaje.
    fn convert(&self, stim: &Stimulus) -> Result<Converted, CoreError>;

    fn transform(&self, stim: &Stimulus) -> Result<Converted, CoreError> {
        self.check_input(stim)?;
        let raw = self.convert(stim)?;
        debug!("{} convirtió {} en {} estímulo(s)", self.name(), stim.name(), raw.len());
        Ok(raw.map(|out| out.derived_from(stim, self.name())))
    }
}

/// Operación terminal que produce valores de features.
pub trait Extractor: Capability {
    fn extract(&self, stim: &Stimulus) -> Result<ExtractorResult, CoreError>;

    fn apply(&self, stim: &Stimulus) -> Result<ExtractorResult, CoreError> {
        self.check_input(stim)?;
        self.extract(stim)
    }
}
