// lineage.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::{Stimulus, StimulusKind};

/// Un paso de procedencia: qué estímulo entró, qué conversor se aplicó y qué
/// tipo de estímulo resultó.
///
/// Los nodos forman una cadena enlazada inmutable (del más reciente al más
/// antiguo vía `parent`) compartida con `Arc`; extender el linaje nunca
/// modifica nodos existentes. Un estímulo cargado directamente desde datos
/// crudos no tiene linaje (`None`), no un nodo vacío.
///
/// El `Display` produce el formato canónico `S0->C1/S1->C2/S2`, consumido por
/// herramientas de logging; cualquier cambio de separadores rompe ese
/// contrato.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lineage {
    source_kind: StimulusKind,
    source_name: String,
    source_file: Option<PathBuf>,
    converter: String,
    result_kind: StimulusKind,
    parent: Option<Arc<Lineage>>,
}

impl Lineage {
    /// Crea un nuevo nodo que extiende el linaje de `source` (si existe).
    pub fn derive(source: &Stimulus, converter: impl Into<String>, result_kind: StimulusKind) -> Arc<Self> {
        Arc::new(Lineage { source_kind: source.kind(),
                           source_name: source.name().to_string(),
                           source_file: source.source_file().map(Path::to_path_buf),
                           converter: converter.into(),
                           result_kind,
                           parent: source.history().cloned() })
    }

    pub fn source_kind(&self) -> StimulusKind { self.source_kind }
    pub fn source_class(&self) -> &'static str { self.source_kind.class_name() }
    pub fn source_name(&self) -> &str { &self.source_name }
    pub fn source_file(&self) -> Option<&Path> { self.source_file.as_deref() }
    pub fn converter(&self) -> &str { &self.converter }
    pub fn result_kind(&self) -> StimulusKind { self.result_kind }
    pub fn result_class(&self) -> &'static str { self.result_kind.class_name() }
    pub fn parent(&self) -> Option<&Arc<Lineage>> { self.parent.as_ref() }

    /// Número de conversiones registradas en la cadena.
    pub fn depth(&self) -> usize {
        self.steps().len()
    }

    /// Pasos ordenados del más antiguo al más reciente.
    pub fn steps(&self) -> Vec<&Lineage> {
        let mut out = Vec::new();
        let mut cursor = Some(self);
        while let Some(node) = cursor {
            out.push(node);
            cursor = node.parent.as_deref();
        }
        out.reverse();
        out
    }

    /// Tipo del estímulo crudo que originó la cadena.
    pub fn root_kind(&self) -> StimulusKind {
        self.steps()[0].source_kind
    }
}

impl fmt::Display for Lineage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.parent {
            Some(parent) => write!(f, "{parent}")?,
            None => f.write_str(self.source_kind.class_name())?,
        }
        write!(f, "->{}/{}", self.converter, self.result_kind.class_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AudioStim, TextStim};

    #[test]
    fn single_step_format() {
        let text = Stimulus::from(TextStim::new("hola"));
        let node = Lineage::derive(&text, "ComplexTextIterator", StimulusKind::Text);
        assert_eq!(node.to_string(), "TextStim->ComplexTextIterator/TextStim");
        assert_eq!(node.depth(), 1);
        assert_eq!(node.source_name(), "text[hola]");
    }

    #[test]
    fn chained_steps_keep_parent_untouched() {
        let audio = AudioStim::new(vec![0.0; 16], 16).unwrap();
        let first = Lineage::derive(&Stimulus::from(audio), "A", StimulusKind::Text);
        let derived = Stimulus::from(TextStim::new("x")).with_history(Some(first.clone()));
        let second = Lineage::derive(&derived, "B", StimulusKind::ComplexText);

        assert_eq!(second.to_string(), "AudioStim->A/TextStim->B/ComplexTextStim");
        assert_eq!(first.to_string(), "AudioStim->A/TextStim");
        assert_eq!(second.depth(), 2);
        assert_eq!(second.root_kind(), StimulusKind::Audio);
        let converters: Vec<&str> = second.steps().iter().map(|s| s.converter()).collect();
        assert_eq!(converters, vec!["A", "B"]);
    }
}
