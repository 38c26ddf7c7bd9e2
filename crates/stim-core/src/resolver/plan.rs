// plan.rs
use stim_domain::{Stimulus, StimulusKind};

use crate::capability::{Capability, CapabilityRole, Converted, Converter};
use crate::constants::PLAN_NAME_SEPARATOR;
use crate::errors::CoreError;

const IDENTITY_NAME: &str = "IdentityConversion";

/// Secuencia de conversores resuelta para un tipo de origen concreto.
///
/// Es a su vez un `Converter`: su nombre es la unión de los pasos
/// (`VideoToAudioConverter+WitTranscriptionConverter`). Cada paso sella su
/// propio linaje, por lo que `transform` no añade un nodo extra. Si un paso
/// produce una colección, los pasos restantes se aplican elemento a
/// elemento.
#[derive(Debug)]
pub struct ConversionPlan {
    name: String,
    inputs: Vec<StimulusKind>,
    output: StimulusKind,
    steps: Vec<Box<dyn Converter>>,
}

impl ConversionPlan {
    pub fn identity(kind: StimulusKind) -> Self {
        Self { name: IDENTITY_NAME.to_string(),
               inputs: vec![kind],
               output: kind,
               steps: Vec::new() }
    }

    pub fn new(source: StimulusKind, steps: Vec<Box<dyn Converter>>) -> Self {
        if steps.is_empty() {
            return Self::identity(source);
        }
        let name = steps.iter().map(|s| s.name()).collect::<Vec<_>>().join(PLAN_NAME_SEPARATOR);
        let output = steps.last().map_or(source, |s| s.output_kind());
        Self { name,
               inputs: vec![source],
               output,
               steps }
    }

    pub fn steps(&self) -> &[Box<dyn Converter>] { &self.steps }
    pub fn len(&self) -> usize { self.steps.len() }
    pub fn is_identity(&self) -> bool { self.steps.is_empty() }

    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.name()).collect()
    }

    /// Ejecuta los pasos en orden. La identidad devuelve una copia exacta de
    /// la entrada (mismo linaje, onset y payload).
    pub fn execute(&self, stim: &Stimulus) -> Result<Converted, CoreError> {
        self.check_input(stim)?;
        let mut current = Converted::One(stim.clone());
        for step in &self.steps {
            current = current.try_flat_map(|s| step.transform(s))?;
        }
        Ok(current)
    }
}

impl Capability for ConversionPlan {
    fn name(&self) -> &str {
        &self.name
    }

    fn role(&self) -> CapabilityRole {
        CapabilityRole::Converter
    }

    fn input_kinds(&self) -> &[StimulusKind] {
        &self.inputs
    }
}

impl Converter for ConversionPlan {
    fn output_kind(&self) -> StimulusKind {
        self.output
    }

    fn convert(&self, stim: &Stimulus) -> Result<Converted, CoreError> {
        self.execute(stim)
    }

    fn transform(&self, stim: &Stimulus) -> Result<Converted, CoreError> {
        self.execute(stim)
    }
}
