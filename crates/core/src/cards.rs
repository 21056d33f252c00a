use serde::{Deserialize, Serialize};

/// Category assigned when the source row leaves the field blank.
pub const OTHER_CATEGORY: &str = "Autre";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CardKind {
    Info,
    Dilemma,
}

impl CardKind {
    /// The literal `type` value used by the feed for this kind.
    pub fn label(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Dilemma => "dilemme",
        }
    }

    /// Exact, case-sensitive match against the feed's `type` values.
    pub fn from_label(raw: &str) -> Option<Self> {
        match raw {
            "info" => Some(Self::Info),
            "dilemme" => Some(Self::Dilemma),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Auto,
    Info,
    Dilemma,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Card {
    pub id: String,
    pub kind: CardKind,
    pub category: String,
    pub prompt: String,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub guide: String,
    /// Raw citation list, split only at render time.
    #[serde(default)]
    pub source_refs: String,
}
