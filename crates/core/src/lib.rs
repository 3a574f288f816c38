//! # DualMind Core
//!
//! Domain types, traits, and error definitions for the DualMind assistant.
//! This crate has **no HTTP dependencies**: it defines the domain model that
//! the provider, memory and agent crates implement against. The only tokio
//! feature it uses is `sync`, for the event bus.
//!
//! ## Design Philosophy
//!
//! The text-completion backend is a trait here ([`Provider`]). The HTTP
//! implementation lives in `dualmind-providers`, and tests swap in scripted
//! fakes. Everything else (intent labels, interaction records, diagnostic
//! events) is a plain value type.

pub mod error;
pub mod event;
pub mod intent;
pub mod interaction;
pub mod message;
pub mod provider;

// Re-export key types at crate root for ergonomics
pub use error::{Error, ProviderError, Result};
pub use event::{DomainEvent, EventBus};
pub use intent::Intent;
pub use interaction::Interaction;
pub use message::{Message, Role};
pub use provider::{Provider, ProviderRequest, ProviderResponse, Usage};
