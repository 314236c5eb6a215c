//! Shard Vocabulary Module
//!
//! Defines the types shared between the offline partitioner and the online matcher.
//!
//! ## Core Concepts
//! - **ShardKey**: The alphabetic partition identifier (`a`..`z` plus `misc`). Derived
//!   from the first character of a name or query, so a query is always routed to the
//!   shard that holds every name it could match.
//! - **MedicineRecord**: The `{name, composition}` pair persisted in shard artifacts.
//! - **Ordering**: `compare_names` is the single comparator used both when sorting a
//!   shard for publication and when tests verify the published order.
//!
//! Both sides of the system must use these definitions; bucketing at partition time
//! and routing at query time diverging would make records unreachable.

pub mod types;


pub use types::{MedicineRecord, ShardKey};

use std::cmp::Ordering;

/// Case-insensitive name ordering used for shard contents.
///
/// Equal lowercased names compare `Equal`; callers sort with a stable sort so
/// ties keep their source order.
pub fn compare_names(a: &MedicineRecord, b: &MedicineRecord) -> Ordering {
    a.name.to_lowercase().cmp(&b.name.to_lowercase())
}
