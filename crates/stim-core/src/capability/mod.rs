//! Capacidades: conversores y extractores.
//!
//! Una capacidad es una unidad que consume un `Stimulus` prestado y produce
//! otro estímulo (`Converter`) o valores de features (`Extractor`). Este
//! módulo define:
//! - `Capability`: superficie común (nombre, rol, tipos de entrada).
//! - `Converter` / `Extractor`: contratos `transform` / `apply`.
//! - `Converted`: salida de una conversión (uno o varios estímulos).
//! - `ExtractorResult`: tabla de features con fingerprint estable.
//! - `CapabilityInstance`: instancia concreta devuelta por el registro.
//! - Macros `register_*` para el auto-registro vía `inventory`.

mod batch;
pub mod converted;
pub mod definition;
pub mod instance;
pub mod macros;
pub mod result;

pub use batch::{apply_converted, apply_many};
pub use converted::Converted;
pub use definition::{Capability, CapabilityRole, Converter, Extractor};
pub use instance::CapabilityInstance;
pub use result::ExtractorResult;
