//! Macros de auto-registro.
//!
//! Cada macro envía una `CapabilityFactory` a `inventory`; el registro las
//! recoge en `RegistryBuilder::with_inventory()` sin lista central.
//!
//! Uso (a nivel de módulo):
//!   stim_core::register_converter!(VideoToAudioConverter::new());
//!   stim_core::register_extractor!(StftExtractor::default());
//!   stim_core::register_collection!(image_summary());

#[macro_export]
macro_rules! register_converter {
    ($ctor:expr) => {
        const _: () = {
            fn __stimflow_create() -> $crate::CapabilityInstance {
                $crate::CapabilityInstance::Converter(::std::boxed::Box::new($ctor))
            }
            $crate::inventory::submit! {
                $crate::registry::CapabilityFactory { create: __stimflow_create }
            }
        };
    };
}

#[macro_export]
macro_rules! register_extractor {
    ($ctor:expr) => {
        const _: () = {
            fn __stimflow_create() -> $crate::CapabilityInstance {
                $crate::CapabilityInstance::Extractor(::std::boxed::Box::new($ctor))
            }
            $crate::inventory::submit! {
                $crate::registry::CapabilityFactory { create: __stimflow_create }
            }
        };
    };
}

#[macro_export]
macro_rules! register_collection {
    ($ctor:expr) => {
        const _: () = {
            fn __stimflow_create() -> $crate::CapabilityInstance {
                $crate::CapabilityInstance::Collection($ctor)
            }
            $crate::inventory::submit! {
                $crate::registry::CapabilityFactory { create: __stimflow_create }
            }
        };
    };
}
