// converted.rs
use serde::{Deserialize, Serialize};

use stim_domain::Stimulus;

use crate::errors::CoreError;

/// Resultado de una conversión: un estímulo o una colección ordenada.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Converted {
    One(Stimulus),
    Many(Vec<Stimulus>),
}

impl Converted {
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    pub fn is_many(&self) -> bool {
        matches!(self, Converted::Many(_))
    }

    pub fn as_slice(&self) -> &[Stimulus] {
        match self {
            Converted::One(s) => std::slice::from_ref(s),
            Converted::Many(v) => v,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Stimulus> {
        self.as_slice().iter()
    }

    pub fn get(&self, index: usize) -> Option<&Stimulus> {
        self.as_slice().get(index)
    }

    pub fn first(&self) -> Option<&Stimulus> {
        self.get(0)
    }

    /// `Some` sólo para la variante `One`.
    pub fn into_single(self) -> Option<Stimulus> {
        match self {
            Converted::One(s) => Some(s),
            Converted::Many(_) => None,
        }
    }

    pub fn into_vec(self) -> Vec<Stimulus> {
        match self {
            Converted::One(s) => vec![s],
            Converted::Many(v) => v,
        }
    }

    /// Aplica `f` a cada estímulo conservando la forma.
    pub fn map<F>(self, mut f: F) -> Converted
        where F: FnMut(Stimulus) -> Stimulus
    {
        match self {
            Converted::One(s) => Converted::One(f(s)),
            Converted::Many(v) => Converted::Many(v.into_iter().map(f).collect()),
        }
    }

    /// Aplica un paso de conversión elemento a elemento. Una colección de
    /// entrada siempre produce una colección aplanada.
    pub fn try_flat_map<F>(&self, mut f: F) -> Result<Converted, CoreError>
        where F: FnMut(&Stimulus) -> Result<Converted, CoreError>
    {
        match self {
            Converted::One(s) => f(s),
            Converted::Many(v) => {
                let mut out = Vec::with_capacity(v.len());
                for s in v {
                    out.extend(f(s)?.into_vec());
                }
                Ok(Converted::Many(out))
            }
        }
    }
}

impl From<Stimulus> for Converted {
    fn from(s: Stimulus) -> Self {
        Converted::One(s)
    }
}

impl<'a> IntoIterator for &'a Converted {
    type Item = &'a Stimulus;
    type IntoIter = std::slice::Iter<'a, Stimulus>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
