//! Partitioner Module
//!
//! The offline pipeline that turns the raw medicine dataset into alphabetic
//! shard artifacts.
//!
//! ## Workflow
//! 1. **Fetch**: Downloads the full raw dataset as one JSON document (`source`).
//! 2. **Build**: Normalizes every record to `{name, composition}`, buckets it by
//!    shard key, and sorts each bucket by name (`builder`).
//! 3. **Write**: Serializes every non-empty bucket and publishes one `<key>.json`
//!    artifact per shard, wholesale-replacing any previous run (`writer`).
//!
//! ## Failure Semantics
//! Any fetch or parse failure aborts the run before a single byte is written;
//! shard sets are never published partially. Records that normalize to an empty
//! name or an empty composition are silently discarded, not errors.

pub mod builder;
pub mod source;
pub mod types;
pub mod writer;

#[cfg(test)]
mod tests;
