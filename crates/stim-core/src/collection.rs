//! Colecciones de capacidades aplicadas a un mismo estímulo.
//!
//! `Concatenate` exige que todos los miembros acepten la entrada y devuelve
//! todos los resultados en orden; `FirstMatch` usa sólo el primer miembro que
//! acepta la entrada (su error se propaga, no se prueba el siguiente).
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use stim_domain::{Stimulus, StimulusKind};

use crate::capability::{Capability, CapabilityInstance, CapabilityRole, Converted, ExtractorResult};
use crate::config::CONFIG;
use crate::errors::CoreError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregationPolicy {
    #[default]
    Concatenate,
    FirstMatch,
}

impl FromStr for AggregationPolicy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "concatenate" => Ok(AggregationPolicy::Concatenate),
            "first_match" | "firstmatch" => Ok(AggregationPolicy::FirstMatch),
            other => Err(CoreError::Config(format!("política de agregación desconocida: {other}"))),
        }
    }
}

impl fmt::Display for AggregationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AggregationPolicy::Concatenate => f.write_str("concatenate"),
            AggregationPolicy::FirstMatch => f.write_str("first_match"),
        }
    }
}

/// Salida de un miembro de la colección.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CollectionItem {
    Features(ExtractorResult),
    Converted(Converted),
}

impl CollectionItem {
    pub fn as_features(&self) -> Option<&ExtractorResult> {
        match self {
            CollectionItem::Features(r) => Some(r),
            CollectionItem::Converted(_) => None,
        }
    }

    pub fn as_converted(&self) -> Option<&Converted> {
        match self {
            CollectionItem::Converted(c) => Some(c),
            CollectionItem::Features(_) => None,
        }
    }
}

#[derive(Debug)]
pub struct ExtractorCollection {
    name: String,
    members: Vec<CapabilityInstance>,
    policy: AggregationPolicy,
    inputs: Vec<StimulusKind>,
}

impl ExtractorCollection {
    pub fn new(name: impl Into<String>, members: Vec<CapabilityInstance>) -> Self {
        Self::build(name.into(), members, AggregationPolicy::default())
    }

    /// Igual que `new` pero con la política configurada en `CONFIG`.
    pub fn from_config(name: impl Into<String>, members: Vec<CapabilityInstance>) -> Self {
        Self::build(name.into(), members, CONFIG.collection_policy)
    }

    pub fn with_policy(self, policy: AggregationPolicy) -> Self {
        Self::build(self.name, self.members, policy)
    }

    pub fn push(self, member: CapabilityInstance) -> Self {
        let mut members = self.members;
        members.push(member);
        Self::build(self.name, members, self.policy)
    }

    fn build(name: String, members: Vec<CapabilityInstance>, policy: AggregationPolicy) -> Self {
        let inputs = collection_inputs(&members, policy);
        Self { name,
               members,
               policy,
               inputs }
    }

    pub fn members(&self) -> &[CapabilityInstance] { &self.members }
    pub fn policy(&self) -> AggregationPolicy { self.policy }
    pub fn len(&self) -> usize { self.members.len() }
    pub fn is_empty(&self) -> bool { self.members.is_empty() }

    pub fn apply(&self, stim: &Stimulus) -> Result<Vec<CollectionItem>, CoreError> {
        self.check_input(stim)?;
        match self.policy {
            AggregationPolicy::Concatenate => {
                let mut items = Vec::new();
                for member in &self.members {
                    items.extend(member.run(stim)?);
                }
                Ok(items)
            }
            AggregationPolicy::FirstMatch => {
                // check_input garantiza que al menos un miembro acepta la entrada
                let member = self.members
                                 .iter()
                                 .find(|m| m.accepts(stim.kind()))
                                 .ok_or_else(|| CoreError::TypeMismatch { capability: self.name.clone(),
                                                                          expected: self.inputs.clone(),
                                                                          found: stim.kind() })?;
                debug!("{}: usando {} para {}", self.name, member.name(), stim.name());
                member.run(stim)
            }
        }
    }

    /// Sólo los resultados de features, en orden.
    pub fn extract_all(&self, stim: &Stimulus) -> Result<Vec<ExtractorResult>, CoreError> {
        Ok(self.apply(stim)?
               .into_iter()
               .filter_map(|item| match item {
                   CollectionItem::Features(r) => Some(r),
                   CollectionItem::Converted(_) => None,
               })
               .collect())
    }
}

impl Capability for ExtractorCollection {
    fn name(&self) -> &str {
        &self.name
    }

    fn role(&self) -> CapabilityRole {
        CapabilityRole::Collection
    }

    fn input_kinds(&self) -> &[StimulusKind] {
        &self.inputs
    }
}

/// `Concatenate`: tipos aceptados por todos los miembros.
/// `FirstMatch`: tipos aceptados por alguno.
fn collection_inputs(members: &[CapabilityInstance], policy: AggregationPolicy) -> Vec<StimulusKind> {
    if members.is_empty() {
        return Vec::new();
    }
    StimulusKind::ALL.into_iter()
                     .filter(|k| match policy {
                         AggregationPolicy::Concatenate => members.iter().all(|m| m.accepts(*k)),
                         AggregationPolicy::FirstMatch => members.iter().any(|m| m.accepts(*k)),
                     })
                     .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::Extractor;
    use stim_domain::{ImageStim, TextStim};

    #[derive(Debug)]
    struct Fixed {
        name: &'static str,
        inputs: Vec<StimulusKind>,
        value: f64,
        fail: bool,
    }

    impl Capability for Fixed {
        fn name(&self) -> &str { self.name }
        fn role(&self) -> CapabilityRole { CapabilityRole::Extractor }
        fn input_kinds(&self) -> &[StimulusKind] { &self.inputs }
    }

    impl Extractor for Fixed {
        fn extract(&self, stim: &Stimulus) -> Result<ExtractorResult, CoreError> {
            if self.fail {
                return Err(CoreError::adapter(self.name, "caído"));
            }
            ExtractorResult::single_row(self.name, stim, vec![("v", self.value)])
        }
    }

    fn member(name: &'static str, inputs: &[StimulusKind], value: f64, fail: bool) -> CapabilityInstance {
        CapabilityInstance::Extractor(Box::new(Fixed { name,
                                                       inputs: inputs.to_vec(),
                                                       value,
                                                       fail }))
    }

    fn image() -> Stimulus {
        Stimulus::from(ImageStim::filled(2, 2, [1, 2, 3]).unwrap())
    }

    #[test]
    fn concatenate_keeps_member_order() {
        let c = ExtractorCollection::new("Pair",
                                         vec![member("A", &[StimulusKind::Image], 1.0, false),
                                              member("B", &[StimulusKind::Image, StimulusKind::Text], 2.0, false)]);
        assert_eq!(c.input_kinds(), &[StimulusKind::Image]);
        let out = c.extract_all(&image()).unwrap();
        let names: Vec<&str> = out.iter().map(|r| r.extractor()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn concatenate_rejects_partially_accepted_input() {
        let c = ExtractorCollection::new("Pair",
                                         vec![member("A", &[StimulusKind::Image], 1.0, false),
                                              member("B", &[StimulusKind::Text], 2.0, false)]);
        let err = c.apply(&image()).unwrap_err();
        assert!(matches!(err, CoreError::TypeMismatch { .. }));
    }

    #[test]
    fn first_match_uses_first_accepting_member() {
        let c = ExtractorCollection::new("Any",
                                         vec![member("T", &[StimulusKind::Text], 1.0, false),
                                              member("I", &[StimulusKind::Image], 2.0, false),
                                              member("I2", &[StimulusKind::Image], 3.0, false)])
                .with_policy(AggregationPolicy::FirstMatch);
        let out = c.extract_all(&image()).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].extractor(), "I");
        assert!(c.accepts(StimulusKind::Text));
    }

    #[test]
    fn first_match_propagates_member_failure() {
        let c = ExtractorCollection::new("Any",
                                         vec![member("Broken", &[StimulusKind::Image], 0.0, true),
                                              member("Fine", &[StimulusKind::Image], 1.0, false)])
                .with_policy(AggregationPolicy::FirstMatch);
        assert!(matches!(c.apply(&image()), Err(CoreError::Adapter { .. })));
    }

    #[test]
    fn policy_parsing() {
        assert_eq!("First-Match".parse::<AggregationPolicy>().unwrap(), AggregationPolicy::FirstMatch);
        assert!("random".parse::<AggregationPolicy>().is_err());
        let text = Stimulus::from(TextStim::new("x"));
        let empty = ExtractorCollection::new("Empty", vec![]);
        assert!(empty.apply(&text).is_err());
    }
}
