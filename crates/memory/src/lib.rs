//! Bounded conversation history for DualMind.
//!
//! `RingBuffer` is the fixed-capacity FIFO primitive; `HistoryStore` layers
//! interaction-specific behavior on top (context rendering, statistics).

pub mod history;
pub mod ring_buffer;

pub use history::{AppendOutcome, HistoryStats, HistoryStore, NO_CONTEXT};
pub use ring_buffer::RingBuffer;
