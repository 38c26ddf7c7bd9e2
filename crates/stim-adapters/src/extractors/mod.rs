//! Extractores concretos.
//!
//! Todos producen un `ExtractorResult` (filas × features) y se auto-registran
//! con su nombre de clase, de modo que `find_by_name("stft")` encuentra
//! `STFTExtractor`.

mod audio;
mod collection;
mod image;
mod text;
mod video;

pub use audio::{RmsExtractor, StftExtractor};
pub use collection::image_summary;
pub use image::{BrightnessExtractor, SharpnessExtractor, VibranceExtractor};
pub use text::{LengthExtractor, NumUniqueWordsExtractor};
pub use video::FrameCountExtractor;

/// Implementa `Capability` para un extractor con nombre y entradas fijas.
macro_rules! extractor_capability {
    ($ty:ty, $inputs:expr) => {
        impl stim_core::Capability for $ty {
            fn name(&self) -> &str {
                Self::NAME
            }

            fn role(&self) -> stim_core::CapabilityRole {
                stim_core::CapabilityRole::Extractor
            }

            fn input_kinds(&self) -> &[stim_core::StimulusKind] {
                $inputs
            }
        }
    };
}
pub(crate) use extractor_capability;
