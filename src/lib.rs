//! Medicine Reference Search Library
//!
//! Splits a large flat drug dataset into alphabetic shards and searches them
//! interactively, without a database or index server. The binary (`main.rs`)
//! runs the offline half; the library's search half is embedded by the clinic
//! front end that consumes the published shards.
//!
//! ## Architecture Modules
//! The system is composed of three loosely coupled subsystems:
//!
//! - **`shard`**: The shared vocabulary. Defines the `{name, composition}` record,
//!   the `a..z`/`misc` shard key, and the name ordering — one derivation used at
//!   both partition time and query time so routing always agrees with bucketing.
//! - **`partition`**: The offline pipeline. Downloads the raw dataset, normalizes
//!   and buckets every record, and publishes one sorted JSON artifact per shard.
//! - **`search`**: The online matcher. Lazily fetches shards over HTTP, caches
//!   them for the session, and ranks prefix matches ahead of substring matches
//!   to power prescription autocomplete.

pub mod partition;
pub mod search;
pub mod shard;
