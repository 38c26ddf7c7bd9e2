//! Configuración desde variables de entorno.
//! Carga `.env` una sola vez y expone una instancia global inmutable (`CONFIG`).
//!
//! Variables reconocidas:
//! - `STIMFLOW_STFT_FRAME_SIZE` (512), `STIMFLOW_STFT_HOP_SIZE` (256),
//!   `STIMFLOW_STFT_BANDS` (8)
//! - `STIMFLOW_COLLECTION_POLICY` (`concatenate` | `first_match`)
//! - `WIT_AI_API_KEY`, `GOOGLE_APPLICATION_CREDENTIALS`, `IBM_USERNAME` +
//!   `IBM_PASSWORD`: sólo se registra su presencia para diagnósticos de los
//!   adaptadores.

use dotenvy::dotenv;
use log::warn;
use once_cell::sync::Lazy;
use std::env;

use crate::collection::AggregationPolicy;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

/// Instancia global perezosa de configuración, evaluada una sola vez.
pub static CONFIG: Lazy<StimConfig> = Lazy::new(StimConfig::from_env);

#[derive(Debug, Clone, PartialEq)]
pub struct StimConfig {
    pub stft: StftConfig,
    /// Política por defecto de `ExtractorCollection::from_config`.
    pub collection_policy: AggregationPolicy,
    pub services: ServiceAvailability,
}

/// Parámetros por defecto del extractor STFT.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StftConfig {
    pub frame_size: usize,
    pub hop_size: usize,
    pub bands: usize,
}

impl Default for StftConfig {
    fn default() -> Self {
        Self { frame_size: 512,
               hop_size: 256,
               bands: 8 }
    }
}

/// Presencia de credenciales de servicios externos.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServiceAvailability {
    pub wit_ai: bool,
    pub google: bool,
    pub ibm: bool,
}

impl Default for StimConfig {
    fn default() -> Self {
        Self { stft: StftConfig::default(),
               collection_policy: AggregationPolicy::default(),
               services: ServiceAvailability::default() }
    }
}

impl StimConfig {
    pub fn from_env() -> Self {
        // asegura que .env se haya cargado
        Lazy::force(&DOTENV_LOADED);
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construye la configuración desde una función de búsqueda arbitraria.
    /// Valores inválidos caen a los defaults (con `warn!`).
    pub fn from_lookup<F>(lookup: F) -> Self
        where F: Fn(&str) -> Option<String>
    {
        let defaults = StftConfig::default();
        let stft = StftConfig { frame_size: positive_or(&lookup, "STIMFLOW_STFT_FRAME_SIZE", defaults.frame_size),
                                hop_size: positive_or(&lookup, "STIMFLOW_STFT_HOP_SIZE", defaults.hop_size),
                                bands: positive_or(&lookup, "STIMFLOW_STFT_BANDS", defaults.bands) };
        let collection_policy = match lookup("STIMFLOW_COLLECTION_POLICY") {
            None => AggregationPolicy::default(),
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                                        warn!("{e}; usando {}", AggregationPolicy::default());
                                        AggregationPolicy::default()
                                    }),
        };
        let services = ServiceAvailability { wit_ai: lookup("WIT_AI_API_KEY").is_some(),
                                             google: lookup("GOOGLE_APPLICATION_CREDENTIALS").is_some(),
                                             ibm: lookup("IBM_USERNAME").is_some() && lookup("IBM_PASSWORD").is_some() };
        Self { stft,
               collection_policy,
               services }
    }
}

fn positive_or<F>(lookup: &F, key: &str, default: usize) -> usize
    where F: Fn(&str) -> Option<String>
{
    match lookup(key) {
        None => default,
        Some(raw) => match raw.trim().parse::<usize>() {
            Ok(v) if v > 0 => v,
            _ => {
                warn!("valor inválido para {key}: {raw:?}; usando default");
                default
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = StimConfig::from_lookup(|_| None);
        assert_eq!(cfg, StimConfig::default());
    }

    #[test]
    fn parses_overrides() {
        let cfg = StimConfig::from_lookup(lookup_from(&[("STIMFLOW_STFT_FRAME_SIZE", "1024"),
                                                        ("STIMFLOW_COLLECTION_POLICY", "first_match"),
                                                        ("WIT_AI_API_KEY", "k")]));
        assert_eq!(cfg.stft.frame_size, 1024);
        assert_eq!(cfg.stft.hop_size, 256);
        assert_eq!(cfg.collection_policy, AggregationPolicy::FirstMatch);
        assert!(cfg.services.wit_ai);
        assert!(!cfg.services.ibm);
    }

    #[test]
    fn invalid_values_fall_back() {
        let cfg = StimConfig::from_lookup(lookup_from(&[("STIMFLOW_STFT_BANDS", "zero"), ("STIMFLOW_STFT_HOP_SIZE", "0"),
                                                         ("STIMFLOW_COLLECTION_POLICY", "shuffle")]));
        assert_eq!(cfg.stft.bands, 8);
        assert_eq!(cfg.stft.hop_size, 256);
        assert_eq!(cfg.collection_policy, AggregationPolicy::Concatenate);
    }
}
