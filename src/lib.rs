//! StimFlow Rust Library
//!
//! Fachada del workspace:
//! - Re-exporta el modelo de estímulos (`stim-domain`), el registro y el
//!   resolvedor (`stim-core`) y las capacidades concretas (`stim-adapters`).
//! - `pipeline` combina resolución de conversiones y extracción: "features
//!   de texto a partir de un video".

pub mod pipeline;

pub use pipeline::{extract, FeaturePipeline};
pub use stim_adapters as adapters;
pub use stim_core::{apply_converted, apply_many, AggregationPolicy, Capability, CapabilityDescriptor,
                    CapabilityInstance, CapabilityRegistry, CapabilityRole, CollectionItem, ComplexTextIterator,
                    ConversionPlan, ConversionResolver, Converted, Converter, CoreError, Extractor,
                    ExtractorCollection, ExtractorResult, RegistryBuilder, StimConfig, CONFIG};
pub use stim_domain::{AudioStim, ComplexTextStim, DomainError, ImageStim, Lineage, Stimulus, StimulusKind, TextStim,
                      VideoStim};
