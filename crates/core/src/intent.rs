//! Intent labels: the closed two-valued classification domain.

use serde::{Deserialize, Serialize};

/// What kind of answer the user is asking for.
///
/// There is deliberately no "unknown" variant: anything that gets stored in
/// history has been routed to one of these two strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    /// Information-seeking: questions, definitions, explanations.
    Factual,
    /// Generative: stories, poems, captions, brainstorming.
    Creative,
}

impl Intent {
    /// Label used when classification cannot produce a valid value.
    pub const FALLBACK: Intent = Intent::Factual;

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Factual => "factual",
            Intent::Creative => "creative",
        }
    }

    /// Normalize raw classifier output (trim + lowercase) and match it
    /// against the closed label set. Returns `None` for anything else,
    /// including near misses like `"factual."`.
    pub fn parse_label(raw: &str) -> Option<Intent> {
        match raw.trim().to_lowercase().as_str() {
            "factual" => Some(Intent::Factual),
            "creative" => Some(Intent::Creative),
            _ => None,
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
