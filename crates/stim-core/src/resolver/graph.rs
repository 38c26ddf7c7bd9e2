// graph.rs
use indexmap::IndexMap;
use std::collections::{HashMap, VecDeque};

use stim_domain::StimulusKind;

use crate::registry::CapabilityDescriptor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Edge {
    converter: usize,
    output: StimulusKind,
}

/// Grafo de conversores: una arista por (tipo de entrada, conversor).
#[derive(Debug, Clone, Default)]
pub struct ConversionGraph {
    edges: IndexMap<StimulusKind, Vec<Edge>>,
}

impl ConversionGraph {
    /// `converters` son pares (índice del descriptor, descriptor) en orden de
    /// descubrimiento.
    pub fn from_converters<'a, I>(converters: I) -> Self
        where I: IntoIterator<Item = (usize, &'a CapabilityDescriptor)>
    {
        let mut edges: IndexMap<StimulusKind, Vec<Edge>> = IndexMap::new();
        for (idx, d) in converters {
            let Some(output) = d.output() else { continue };
            for input in d.inputs() {
                edges.entry(*input).or_default().push(Edge { converter: idx, output });
            }
        }
        Self { edges }
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    /// Tipos alcanzables en un paso desde `kind`, en orden de descubrimiento.
    pub fn neighbors(&self, kind: StimulusKind) -> Vec<StimulusKind> {
        self.edges.get(&kind).map(|e| e.iter().map(|edge| edge.output).collect()).unwrap_or_default()
    }

    /// Camino más corto (índices de descriptores) de `from` a un tipo que
    /// satisfaga `to`. `Some(vec![])` sólo si `from == to`; un `from` que
    /// satisface `to` sin ser igual se busca igualmente en el grafo.
    pub fn shortest_path(&self, from: StimulusKind, to: StimulusKind) -> Option<Vec<usize>> {
        if from == to {
            return Some(Vec::new());
        }
        let mut previous: HashMap<StimulusKind, (StimulusKind, usize)> = HashMap::new();
        let mut queue = VecDeque::from([from]);
        while let Some(kind) = queue.pop_front() {
            for edge in self.edges.get(&kind).into_iter().flatten() {
                if edge.output == from || previous.contains_key(&edge.output) {
                    continue;
                }
                previous.insert(edge.output, (kind, edge.converter));
                if edge.output.satisfies(to) {
                    return Some(walk_back(&previous, from, edge.output));
                }
                queue.push_back(edge.output);
            }
        }
        None
    }
}

fn walk_back(previous: &HashMap<StimulusKind, (StimulusKind, usize)>,
             from: StimulusKind,
             mut at: StimulusKind)
             -> Vec<usize> {
    let mut path = Vec::new();
    while at != from {
        match previous.get(&at) {
            Some((prev, converter)) => {
                path.push(*converter);
                at = *prev;
            }
            None => break,
        }
    }
    path.reverse();
    path
}
