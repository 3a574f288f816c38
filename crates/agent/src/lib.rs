//! The routing pipeline: the heart of DualMind.
//!
//! Every input goes through three stages:
//!
//! 1. **Classify** the input as factual or creative
//! 2. **Generate** a response with the matching instruction profile, with the
//!    recent history injected as context
//! 3. **Record** the exchange in the bounded history
//!
//! Provider faults never escape: classification falls back to factual and
//! generation falls back to a fixed apology.

pub mod classifier;
pub mod completion;
pub mod generator;
pub mod pipeline;
pub mod prompts;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use classifier::IntentClassifier;
pub use completion::CompletionClient;
pub use generator::{GenerationPolicy, ResponseGenerator};
pub use pipeline::{Pipeline, ProcessResult, preview};
