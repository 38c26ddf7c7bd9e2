//! stim-core: registro de capacidades, resolvedor de conversiones y
//! contrato uniforme `transform` / `apply`.
pub mod capability;
pub mod collection;
pub mod config;
pub mod constants;
pub mod errors;
pub mod hashing;
pub mod iterator;
pub mod registry;
pub mod resolver;

// Usado por `register_converter!` / `register_extractor!` desde otros crates.
pub use inventory;

pub use capability::{apply_converted, apply_many, Capability, CapabilityInstance, CapabilityRole, Converted, Converter,
                     Extractor, ExtractorResult};
pub use collection::{AggregationPolicy, CollectionItem, ExtractorCollection};
pub use config::{StimConfig, CONFIG};
pub use errors::CoreError;
pub use iterator::ComplexTextIterator;
pub use registry::{CapabilityDescriptor, CapabilityFactory, CapabilityRegistry, RegistryBuilder};
pub use resolver::{ConversionGraph, ConversionPlan, ConversionResolver};

pub use stim_domain::{AudioStim, ComplexTextStim, DomainError, ImageStim, Lineage, Stimulus, StimulusKind, TextStim,
                      VideoStim};
