//! Registro de capacidades.
//!
//! Las capacidades se descubren sin lista central: cada adaptador envía una
//! `CapabilityFactory` con `register_converter!` / `register_extractor!` /
//! `register_collection!` y `RegistryBuilder::with_inventory()` las recoge.
//! También se pueden añadir explícitamente con `RegistryBuilder::register_*`.
//!
//! `build()` produce un `CapabilityRegistry` inmutable. El registro global es
//! un `Arc` intercambiable: `register_global` reconstruye la instantánea con
//! el nuevo descriptor y la sustituye.

mod builder;
mod descriptor;
mod global;
mod snapshot;

pub use builder::RegistryBuilder;
pub use descriptor::{CapabilityDescriptor, CapabilityFactory};
pub use snapshot::CapabilityRegistry;
