//! Text-completion provider implementations for DualMind.
//!
//! All providers implement the `dualmind_core::Provider` trait.
//! `build_from_config` selects base URL and credentials from `AppConfig`.

pub mod builder;
pub mod openai_compat;

pub use builder::build_from_config;
pub use openai_compat::OpenAiCompatProvider;
