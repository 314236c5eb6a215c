//! Partitioner Module Tests
//!
//! Validates the offline pipeline from raw rows to published shard artifacts.
//!
//! ## Test Scopes
//! - **Normalization**: Trimming, fragment joining, and the drop rules.
//! - **Bucketing**: Shard-key agreement and per-bucket sort order.
//! - **Writer**: Artifact layout, empty-bucket elision, overwrite and idempotence.
//!
//! *Note: `fetch_dataset` is a thin reqwest call; HTTP fetch behavior against a
//! live server is covered by the search module tests, which use the same stack.*

#[cfg(test)]
mod tests {
    use crate::partition::builder::{build_shards, normalize};
    use crate::partition::types::RawMedicineRecord;
    use crate::partition::writer::write_shards;
    use crate::shard::{MedicineRecord, ShardKey};
    use std::fs;

    fn raw(name: &str, comp1: &str, comp2: &str) -> RawMedicineRecord {
        RawMedicineRecord {
            name: Some(name.to_string()),
            short_composition1: Some(comp1.to_string()),
            short_composition2: Some(comp2.to_string()),
        }
    }

    // ============================================================
    // NORMALIZATION
    // ============================================================

    #[test]
    fn test_normalize_single_fragment() {
        let record = normalize(&raw("Paracetamol 500", "Paracetamol", "")).unwrap();

        assert_eq!(record.name, "Paracetamol 500");
        assert_eq!(record.composition, "Paracetamol");
    }

    #[test]
    fn test_normalize_joins_two_fragments() {
        let record = normalize(&raw("Lopamide", "Loperamide (2mg)", "Simethicone (125mg)")).unwrap();

        assert_eq!(
            record.composition,
            "Loperamide (2mg) + Simethicone (125mg)"
        );
    }

    #[test]
    fn test_normalize_second_fragment_alone() {
        // Literal degradation: only fragment 2 present yields just fragment 2.
        let record = normalize(&raw("Oddity", "", "Zinc Sulfate")).unwrap();
        assert_eq!(record.composition, "Zinc Sulfate");
    }

    #[test]
    fn test_normalize_drops_empty_name() {
        assert!(normalize(&raw("", "X", "")).is_none());
        assert!(normalize(&raw("   ", "X", "")).is_none());
    }

    #[test]
    fn test_normalize_drops_empty_composition() {
        assert!(normalize(&raw("Zedocin", "", "")).is_none());
        assert!(normalize(&raw("Zedocin", "  ", "  ")).is_none());
    }

    #[test]
    fn test_normalize_trims_fields() {
        let record = normalize(&raw("  Crocin  ", "  Paracetamol ", "")).unwrap();

        assert_eq!(record.name, "Crocin");
        assert_eq!(record.composition, "Paracetamol");
    }

    #[test]
    fn test_normalize_missing_fields() {
        let record = normalize(&RawMedicineRecord::default());
        assert!(record.is_none());
    }

    #[test]
    fn test_raw_record_tolerates_unknown_columns_and_nulls() {
        let json = r#"{
            "id": 17,
            "name": "Avastin 400mg Injection",
            "price": "₹33887",
            "manufacturer_name": "Roche Products India Pvt Ltd",
            "short_composition1": "Bevacizumab (400mg)",
            "short_composition2": null
        }"#;

        let row: RawMedicineRecord = serde_json::from_str(json).unwrap();
        let record = normalize(&row).unwrap();

        assert_eq!(record.name, "Avastin 400mg Injection");
        assert_eq!(record.composition, "Bevacizumab (400mg)");
    }

    // ============================================================
    // BUCKETING
    // ============================================================

    #[test]
    fn test_build_shards_routes_by_name_key() {
        let shards = build_shards(vec![
            raw("Paracetamol 500", "Paracetamol", ""),
            raw("zincovit", "Zinc", ""),
            raw("3TC Tablet", "Lamivudine", ""),
        ]);

        assert_eq!(shards[&ShardKey::Letter('p')].len(), 1);
        assert_eq!(shards[&ShardKey::Letter('z')].len(), 1);
        assert_eq!(shards[&ShardKey::Misc].len(), 1);

        // Every record sits in the bucket its own name derives.
        for (key, bucket) in &shards {
            for record in bucket {
                assert_eq!(ShardKey::for_text(&record.name), *key);
            }
        }
    }

    #[test]
    fn test_build_shards_drops_invalid_rows() {
        let shards = build_shards(vec![
            raw("", "X", ""),
            raw("Zedocin", "", ""),
            raw("Crocin", "Paracetamol", ""),
        ]);

        let total: usize = shards.values().map(|b| b.len()).sum();
        assert_eq!(total, 1);
        assert_eq!(shards[&ShardKey::Letter('c')][0].name, "Crocin");
    }

    #[test]
    fn test_build_shards_sorts_each_bucket() {
        let shards = build_shards(vec![
            raw("Pyridoxine", "B6", ""),
            raw("paralcin", "Paracetamol", ""),
            raw("Paracetamol 500", "Paracetamol", ""),
        ]);

        let names: Vec<&str> = shards[&ShardKey::Letter('p')]
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["Paracetamol 500", "paralcin", "Pyridoxine"]);
    }

    #[test]
    fn test_build_shards_no_empty_buckets() {
        let shards = build_shards(vec![raw("Crocin", "Paracetamol", "")]);

        assert_eq!(shards.len(), 1);
        assert!(shards.values().all(|b| !b.is_empty()));
    }

    // ============================================================
    // WRITER
    // ============================================================

    #[test]
    fn test_write_shards_publishes_one_file_per_key() {
        let dir = tempfile::tempdir().unwrap();
        let shards = build_shards(vec![
            raw("Crocin", "Paracetamol", ""),
            raw("Zincovit", "Zinc", ""),
        ]);

        let summaries = write_shards(dir.path(), &shards).unwrap();

        assert_eq!(summaries.len(), 2);
        assert!(dir.path().join("c.json").is_file());
        assert!(dir.path().join("z.json").is_file());

        let body = fs::read_to_string(dir.path().join("c.json")).unwrap();
        let records: Vec<MedicineRecord> = serde_json::from_str(&body).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Crocin");
    }

    #[test]
    fn test_write_shards_creates_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("public").join("data").join("medicines");
        let shards = build_shards(vec![raw("Crocin", "Paracetamol", "")]);

        write_shards(&nested, &shards).unwrap();

        assert!(nested.join("c.json").is_file());
    }

    #[test]
    fn test_write_shards_summary_matches_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let shards = build_shards(vec![
            raw("Crocin", "Paracetamol", ""),
            raw("Calpol", "Paracetamol", ""),
        ]);

        let summaries = write_shards(dir.path(), &shards).unwrap();

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].key, ShardKey::Letter('c'));
        assert_eq!(summaries[0].records, 2);

        let on_disk = fs::read(dir.path().join("c.json")).unwrap();
        assert_eq!(summaries[0].bytes, on_disk.len());
    }

    #[test]
    fn test_write_shards_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let rows = vec![
            raw("Crocin", "Paracetamol", ""),
            raw("Calpol", "Paracetamol", ""),
            raw("Zincovit", "Zinc", ""),
        ];

        write_shards(dir.path(), &build_shards(rows.clone())).unwrap();
        let first = fs::read(dir.path().join("c.json")).unwrap();

        write_shards(dir.path(), &build_shards(rows)).unwrap();
        let second = fs::read(dir.path().join("c.json")).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_write_shards_overwrites_previous_run() {
        let dir = tempfile::tempdir().unwrap();

        write_shards(
            dir.path(),
            &build_shards(vec![
                raw("Crocin", "Paracetamol", ""),
                raw("Calpol", "Paracetamol", ""),
            ]),
        )
        .unwrap();

        // A smaller dataset must fully replace the old artifact, not merge.
        write_shards(
            dir.path(),
            &build_shards(vec![raw("Crocin", "Paracetamol", "")]),
        )
        .unwrap();

        let body = fs::read_to_string(dir.path().join("c.json")).unwrap();
        let records: Vec<MedicineRecord> = serde_json::from_str(&body).unwrap();
        assert_eq!(records.len(), 1);
    }
}
