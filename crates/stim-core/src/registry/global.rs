// global.rs
use once_cell::sync::Lazy;
use std::sync::{Arc, RwLock};

use super::{CapabilityDescriptor, CapabilityRegistry, RegistryBuilder};

static GLOBAL: Lazy<RwLock<Arc<CapabilityRegistry>>> =
    Lazy::new(|| RwLock::new(Arc::new(RegistryBuilder::with_inventory().build())));

impl CapabilityRegistry {
    /// Instantánea actual del registro global. Construida perezosamente desde
    /// `inventory` en el primer acceso.
    pub fn global() -> Arc<CapabilityRegistry> {
        match GLOBAL.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    /// Añade un descriptor al registro global. Las consultas posteriores a
    /// `global()` ven la nueva instantánea; las ya obtenidas no cambian.
    pub fn register_global(descriptor: CapabilityDescriptor) -> Arc<CapabilityRegistry> {
        let mut guard = match GLOBAL.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let rebuilt = RegistryBuilder::from_descriptors(guard.descriptors().to_vec()).register(descriptor)
                                                                                   .build();
        *guard = Arc::new(rebuilt);
        Arc::clone(&guard)
    }
}
