// descriptor.rs
use std::fmt;
use std::sync::Arc;

use stim_domain::StimulusKind;

use crate::capability::{CapabilityInstance, CapabilityRole};

/// Fábrica enviada a `inventory` por las macros de registro.
pub struct CapabilityFactory {
    pub create: fn() -> CapabilityInstance,
}

inventory::collect!(CapabilityFactory);

type FactoryFn = Arc<dyn Fn() -> CapabilityInstance + Send + Sync>;

/// Metadatos de una capacidad registrada más su fábrica.
#[derive(Clone)]
pub struct CapabilityDescriptor {
    name: String,
    role: CapabilityRole,
    inputs: Vec<StimulusKind>,
    output: Option<StimulusKind>,
    factory: FactoryFn,
}

impl CapabilityDescriptor {
    /// Instancia la capacidad una vez para leer sus metadatos.
    pub fn from_factory<F>(factory: F) -> Self
        where F: Fn() -> CapabilityInstance + Send + Sync + 'static
    {
        let probe = factory();
        Self { name: probe.name().to_string(),
               role: probe.role(),
               inputs: probe.input_kinds().to_vec(),
               output: probe.output_kind(),
               factory: Arc::new(factory) }
    }

    pub fn name(&self) -> &str { &self.name }
    pub fn role(&self) -> CapabilityRole { self.role }
    pub fn inputs(&self) -> &[StimulusKind] { &self.inputs }
    pub fn output(&self) -> Option<StimulusKind> { self.output }

    pub fn normalized_name(&self) -> String {
        self.name.to_lowercase()
    }

    pub fn accepts(&self, kind: StimulusKind) -> bool {
        self.inputs.contains(&kind)
    }

    /// Nueva instancia independiente.
    pub fn instantiate(&self) -> CapabilityInstance {
        (self.factory)()
    }
}

impl fmt::Debug for CapabilityDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapabilityDescriptor")
         .field("name", &self.name)
         .field("role", &self.role)
         .field("inputs", &self.inputs)
         .field("output", &self.output)
         .finish_non_exhaustive()
    }
}
