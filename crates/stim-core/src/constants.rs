//! Constantes del core.
//!
//! `FINGERPRINT_VERSION` participa en el hash de cada `ExtractorResult`: un
//! cambio en el esquema del fingerprint debe incrementarla para que los
//! resultados antiguos no colisionen con los nuevos.

pub const FINGERPRINT_VERSION: &str = "R1";

/// Sufijo canónico de los extractores en `find_by_name`.
pub const EXTRACTOR_SUFFIX: &str = "extractor";

/// Separador del nombre de un plan multi-paso (`A+B`).
pub const PLAN_NAME_SEPARATOR: &str = "+";
