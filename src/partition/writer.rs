use super::types::ShardSummary;
use crate::shard::{MedicineRecord, ShardKey};
use anyhow::Result;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Publishes every non-empty bucket as a `<key>.json` artifact under `dir`.
///
/// All buckets are serialized before anything touches the filesystem, so a
/// serialization failure cannot leave a half-written shard set behind.
/// Existing artifacts with the same names are overwritten; empty buckets
/// produce no file.
pub fn write_shards(
    dir: &Path,
    shards: &BTreeMap<ShardKey, Vec<MedicineRecord>>,
) -> Result<Vec<ShardSummary>> {
    let mut artifacts: Vec<(ShardKey, Vec<u8>)> = Vec::with_capacity(shards.len());
    for (key, bucket) in shards {
        if bucket.is_empty() {
            continue;
        }
        artifacts.push((*key, serde_json::to_vec(bucket)?));
    }

    fs::create_dir_all(dir)?;

    let mut summaries = Vec::with_capacity(artifacts.len());
    for (key, bytes) in artifacts {
        let path = dir.join(key.file_name());
        fs::write(&path, &bytes)?;

        summaries.push(ShardSummary {
            key,
            records: shards[&key].len(),
            bytes: bytes.len(),
        });
    }

    Ok(summaries)
}
