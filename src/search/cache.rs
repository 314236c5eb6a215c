use crate::shard::{MedicineRecord, ShardKey};
use anyhow::Result;
use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Process-wide lazy cache of shard artifacts.
///
/// Shards are fetched on first use and kept for the lifetime of the process;
/// with at most 27 shards there is nothing to evict. A stored shard is never
/// mutated in place, only wholesale-inserted, so concurrent readers always see
/// complete data.
pub struct ShardCache {
    shards: DashMap<ShardKey, Arc<Vec<MedicineRecord>>>,
    /// Per-key gates so concurrent misses on the same shard fetch it once.
    inflight: DashMap<ShardKey, Arc<Mutex<()>>>,
    http_client: reqwest::Client,
    base_url: String,
}

impl ShardCache {
    /// `base_url` is the location the partitioner's artifacts are served from,
    /// e.g. `https://clinic.example.com/data/medicines`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            shards: DashMap::new(),
            inflight: DashMap::new(),
            http_client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Returns the shard for `key`, fetching it if this is the first request.
    ///
    /// Any fetch failure yields an empty shard for this call only; nothing is
    /// cached, so the next request for the same key retries the network.
    pub async fn load(&self, key: ShardKey) -> Arc<Vec<MedicineRecord>> {
        if let Some(shard) = self.shards.get(&key) {
            return Arc::clone(&shard);
        }

        let gate = Arc::clone(&self.inflight.entry(key).or_default());
        let _held = gate.lock().await;

        // A concurrent caller may have won the fetch while we waited.
        if let Some(shard) = self.shards.get(&key) {
            return Arc::clone(&shard);
        }

        match self.fetch(key).await {
            Ok(records) => {
                tracing::debug!("Loaded shard {} ({} records)", key, records.len());
                let shard = Arc::new(records);
                self.shards.insert(key, Arc::clone(&shard));
                shard
            }
            Err(err) => {
                tracing::warn!("Failed to load shard {}: {}", key, err);
                Arc::new(Vec::new())
            }
        }
    }

    async fn fetch(&self, key: ShardKey) -> Result<Vec<MedicineRecord>> {
        let url = format!("{}/{}", self.base_url, key.file_name());

        // No deadline here; a caller that needs bounded latency wraps the call.
        let response = self.http_client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(anyhow::anyhow!(
                "Shard request failed: HTTP {}",
                response.status()
            ));
        }

        let records: Vec<MedicineRecord> = response.json().await?;
        Ok(records)
    }

    /// Number of shards currently resident.
    pub fn resident_shards(&self) -> usize {
        self.shards.len()
    }
}
