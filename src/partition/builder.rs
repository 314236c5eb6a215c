use super::types::RawMedicineRecord;
use crate::shard::{compare_names, MedicineRecord, ShardKey};
use std::collections::BTreeMap;

/// Separator between the two composition fragments.
const FRAGMENT_SEPARATOR: &str = " + ";

/// Normalizes one raw row to a persistable record.
///
/// Returns `None` when the trimmed name is empty or when both composition
/// fragments trim to empty; such rows are dropped from the output.
pub fn normalize(raw: &RawMedicineRecord) -> Option<MedicineRecord> {
    let name = raw.name.as_deref().unwrap_or("").trim();
    if name.is_empty() {
        return None;
    }

    let comp1 = raw.short_composition1.as_deref().unwrap_or("").trim();
    let comp2 = raw.short_composition2.as_deref().unwrap_or("").trim();

    // Fragment 1 always precedes fragment 2; a lone fragment stands by itself.
    let composition = match (comp1.is_empty(), comp2.is_empty()) {
        (false, false) => format!("{}{}{}", comp1, FRAGMENT_SEPARATOR, comp2),
        (false, true) => comp1.to_string(),
        (true, false) => comp2.to_string(),
        (true, true) => return None,
    };

    Some(MedicineRecord {
        name: name.to_string(),
        composition,
    })
}

/// Buckets the raw dataset into sorted shards.
///
/// Every surviving record lands in the bucket named by the shard key of its
/// own name, so query-time routing finds it again. Buckets are sorted with
/// the shared comparator; the sort is stable, so records with names that
/// compare equal keep their source order.
pub fn build_shards(raw: Vec<RawMedicineRecord>) -> BTreeMap<ShardKey, Vec<MedicineRecord>> {
    let mut shards: BTreeMap<ShardKey, Vec<MedicineRecord>> = BTreeMap::new();

    for row in &raw {
        if let Some(record) = normalize(row) {
            let key = ShardKey::for_text(&record.name);
            shards.entry(key).or_default().push(record);
        }
    }

    for bucket in shards.values_mut() {
        bucket.sort_by(compare_names);
    }

    shards
}
