// stim-domain library entry point
pub mod audio;
pub mod error;
pub mod image;
pub mod kind;
pub mod lineage;
pub mod stimulus;
pub mod text;
pub mod video;

pub use audio::AudioStim;
pub use error::DomainError;
pub use image::ImageStim;
pub use kind::StimulusKind;
pub use lineage::Lineage;
pub use stimulus::{StimMeta, Stimulus};
pub use text::{ComplexTextStim, TextStim};
pub use video::VideoStim;
