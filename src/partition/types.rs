use crate::shard::ShardKey;
use serde::Deserialize;

/// One row of the raw dataset, as published upstream.
///
/// Deserializes permissively: unknown columns are ignored, and the fields we
/// read tolerate absence, `null`, and alternate key spellings. Cleanup happens
/// in the builder, not here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMedicineRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(
        default,
        alias = "shortComposition1",
        alias = "Short_Composition1",
        alias = "short_composition_1"
    )]
    pub short_composition1: Option<String>,
    #[serde(
        default,
        alias = "shortComposition2",
        alias = "Short_Composition2",
        alias = "short_composition_2"
    )]
    pub short_composition2: Option<String>,
}

/// Per-artifact statistics reported after a partitioner run.
#[derive(Debug, Clone)]
pub struct ShardSummary {
    pub key: ShardKey,
    /// Number of records in the artifact.
    pub records: usize,
    /// Serialized size of the artifact in bytes.
    pub bytes: usize,
}
