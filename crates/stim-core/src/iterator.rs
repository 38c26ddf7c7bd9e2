// iterator.rs
use stim_domain::{Stimulus, StimulusKind};

use crate::capability::{Capability, CapabilityRole, Converted, Converter};
use crate::errors::CoreError;

const INPUTS: &[StimulusKind] = &[StimulusKind::ComplexText];

/// Conversor incorporado `ComplexTextStim -> TextStim` (salida colección).
///
/// Produce cada elemento en orden de documento, sellado con un paso de linaje
/// cuyo origen es el `ComplexTextStim`. Un elemento sin onset propio hereda el
/// del padre.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComplexTextIterator;

impl ComplexTextIterator {
    pub const NAME: &'static str = "ComplexTextIterator";

    pub fn new() -> Self {
        Self
    }
}

impl Capability for ComplexTextIterator {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn role(&self) -> CapabilityRole {
        CapabilityRole::Converter
    }

    fn input_kinds(&self) -> &[StimulusKind] {
        INPUTS
    }
}

impl Converter for ComplexTextIterator {
    fn output_kind(&self) -> StimulusKind {
        StimulusKind::Text
    }

    fn convert(&self, stim: &Stimulus) -> Result<Converted, CoreError> {
        let complex = stim.as_complex_text()
                          .ok_or_else(|| CoreError::InvalidPayload(format!("{} requiere ComplexTextStim", Self::NAME)))?;
        Ok(Converted::Many(complex.iter().cloned().map(Stimulus::from).collect()))
    }
}

crate::register_converter!(ComplexTextIterator::new());
