use serde::{Deserialize, Serialize};
use std::fmt;

/// One entry in a shard artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicineRecord {
    /// Display name of the drug, case preserved from the source dataset.
    pub name: String,
    /// Active ingredients, up to two fragments joined with `" + "`.
    pub composition: String,
}

/// Identifier of one alphabetic shard.
///
/// Derivation is deterministic: the first character of the text, lowercased.
/// Anything that does not lowercase into `a..z` (digits, punctuation,
/// non-Latin scripts, the empty string) lands in [`ShardKey::Misc`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShardKey {
    Letter(char),
    Misc,
}

impl ShardKey {
    /// Derives the shard key for a medicine name or a search query.
    pub fn for_text(text: &str) -> Self {
        let Some(first) = text.chars().next() else {
            return ShardKey::Misc;
        };
        match first.to_lowercase().next().unwrap_or(first) {
            c @ 'a'..='z' => ShardKey::Letter(c),
            _ => ShardKey::Misc,
        }
    }

    /// File name of this shard's artifact, e.g. `p.json` or `misc.json`.
    pub fn file_name(&self) -> String {
        format!("{}.json", self)
    }
}

impl fmt::Display for ShardKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShardKey::Letter(c) => write!(f, "{}", c),
            ShardKey::Misc => write!(f, "misc"),
        }
    }
}
