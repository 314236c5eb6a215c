use super::cache::ShardCache;
use crate::shard::{MedicineRecord, ShardKey};

/// Results returned when the caller does not pick a limit.
pub const DEFAULT_RESULT_LIMIT: usize = 10;

/// Queries shorter than this return nothing and touch no shard; one-character
/// input would flood the UI and fetch on every keystroke.
pub const MIN_QUERY_CHARS: usize = 2;

/// Autocomplete engine over the published shard artifacts.
///
/// Owns its [`ShardCache`] exclusively; the embedding UI holds one
/// `MedicineSearch` per session and calls it on (debounced) keystrokes.
/// Debouncing and discarding stale in-flight results stay with the caller.
pub struct MedicineSearch {
    cache: ShardCache,
}

impl MedicineSearch {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            cache: ShardCache::new(base_url),
        }
    }

    /// Two-tier ranked match: names starting with `query` first, then names
    /// merely containing it, both in shard (alphabetical) order, at most
    /// `limit` results in total. Case-insensitive.
    ///
    /// The scan stops as soon as the prefix tier holds `limit` entries, so the
    /// contains tier only sees records encountered before that cutoff. That
    /// under-fills the contains tier when prefix matches are plentiful; the
    /// bound on scan cost is deliberate and callers depend on the resulting
    /// order.
    pub async fn search(&self, query: &str, limit: usize) -> Vec<MedicineRecord> {
        if query.chars().count() < MIN_QUERY_CHARS || limit == 0 {
            return Vec::new();
        }

        let shard = self.cache.load(ShardKey::for_text(query)).await;
        let needle = query.to_lowercase();

        let mut prefix_matches: Vec<MedicineRecord> = Vec::new();
        let mut contains_matches: Vec<MedicineRecord> = Vec::new();

        for record in shard.iter() {
            let lower_name = record.name.to_lowercase();
            if lower_name.starts_with(&needle) {
                prefix_matches.push(record.clone());
            } else if lower_name.contains(&needle) {
                contains_matches.push(record.clone());
            }

            if prefix_matches.len() >= limit {
                break;
            }
        }

        let mut results = prefix_matches;
        results.append(&mut contains_matches);
        results.truncate(limit);
        results
    }

    /// `search` with the default result limit.
    pub async fn suggest(&self, query: &str) -> Vec<MedicineRecord> {
        self.search(query, DEFAULT_RESULT_LIMIT).await
    }

    /// Resolves a typed name to its composition.
    ///
    /// Only a tight best match yields a composition: one name must be a prefix
    /// of the other (case-insensitive). A loose substring hit would show an
    /// unrelated drug's ingredients next to what the clinician typed.
    pub async fn resolve_composition(&self, name: &str) -> Option<String> {
        if name.chars().count() < MIN_QUERY_CHARS {
            return None;
        }

        let best = self.search(name, 1).await.into_iter().next()?;

        let typed = name.to_lowercase();
        let matched = best.name.to_lowercase();

        if matched.starts_with(&typed) || typed.starts_with(&matched) {
            Some(best.composition)
        } else {
            None
        }
    }

    /// Number of shards resident in this session's cache.
    pub fn resident_shards(&self) -> usize {
        self.cache.resident_shards()
    }
}
