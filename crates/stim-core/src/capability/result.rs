//! Resultado de una extracción.
//!
//! Tabla `filas × features` más la identidad del estímulo de origen. El
//! `fingerprint` se calcula sobre el JSON canónico de todo excepto
//! `extracted_at`, de modo que dos ejecuciones equivalentes producen el mismo
//! hash.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use stim_domain::{Stimulus, StimulusKind};

use crate::constants::FINGERPRINT_VERSION;
use crate::errors::CoreError;
use crate::hashing::hash_value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractorResult {
    extractor: String,
    stim_name: String,
    stim_kind: StimulusKind,
    onset: Option<f64>,
    duration: Option<f64>,
    history: Option<String>,
    features: Vec<String>,
    values: Vec<Vec<f64>>,
    fingerprint: String,
    extracted_at: DateTime<Utc>,
}

impl ExtractorResult {
    /// # Errores
    /// `InvalidPayload` si alguna fila no tiene una columna por feature.
    pub fn new(extractor: &str,
               stim: &Stimulus,
               features: Vec<String>,
               values: Vec<Vec<f64>>)
               -> Result<Self, CoreError> {
        if let Some((i, row)) = values.iter().enumerate().find(|(_, row)| row.len() != features.len()) {
            return Err(CoreError::InvalidPayload(format!("{extractor}: fila {i} tiene {} valores, se esperaban {}",
                                                         row.len(),
                                                         features.len())));
        }
        let history = stim.history_string();
        let fingerprint = hash_value(&json!({
            "v": FINGERPRINT_VERSION,
            "extractor": extractor,
            "stim": {
                "name": stim.name(),
                "kind": stim.kind().class_name(),
                "onset": stim.onset(),
                "duration": stim.duration(),
            },
            "history": history,
            "features": features,
            "values": values,
        }));
        Ok(Self { extractor: extractor.to_string(),
                  stim_name: stim.name().to_string(),
                  stim_kind: stim.kind(),
                  onset: stim.onset(),
                  duration: stim.duration(),
                  history,
                  features,
                  values,
                  fingerprint,
                  extracted_at: Utc::now() })
    }

    /// Atajo para extractores que producen una sola fila.
    pub fn single_row(extractor: &str, stim: &Stimulus, pairs: Vec<(&str, f64)>) -> Result<Self, CoreError> {
        let (features, row): (Vec<String>, Vec<f64>) = pairs.into_iter().map(|(k, v)| (k.to_string(), v)).unzip();
        Self::new(extractor, stim, features, vec![row])
    }

    pub fn extractor(&self) -> &str { &self.extractor }
    pub fn stim_name(&self) -> &str { &self.stim_name }
    pub fn stim_kind(&self) -> StimulusKind { self.stim_kind }
    pub fn onset(&self) -> Option<f64> { self.onset }
    pub fn duration(&self) -> Option<f64> { self.duration }
    pub fn history(&self) -> Option<&str> { self.history.as_deref() }
    pub fn features(&self) -> &[String] { &self.features }
    pub fn values(&self) -> &[Vec<f64>] { &self.values }
    pub fn fingerprint(&self) -> &str { &self.fingerprint }
    pub fn extracted_at(&self) -> DateTime<Utc> { self.extracted_at }

    pub fn n_rows(&self) -> usize {
        self.values.len()
    }

    pub fn feature_index(&self, feature: &str) -> Option<usize> {
        self.features.iter().position(|f| f == feature)
    }

    pub fn value(&self, row: usize, feature: &str) -> Option<f64> {
        let col = self.feature_index(feature)?;
        self.values.get(row).map(|r| r[col])
    }

    /// Todos los valores de una feature, en orden de filas.
    pub fn column(&self, feature: &str) -> Option<Vec<f64>> {
        let col = self.feature_index(feature)?;
        Some(self.values.iter().map(|r| r[col]).collect())
    }
}
