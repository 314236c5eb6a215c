//! Medicine Search Module
//!
//! The online component behind the prescription form's autocomplete.
//!
//! ## Overview
//! Answers "which medicine names match this text?" against the shard artifacts
//! published by the partitioner, fetching each shard at most once per session
//! and scanning it in memory.
//!
//! ## Responsibilities
//! - **Caching**: Lazily fetches shard artifacts over HTTP and keeps them for
//!   the lifetime of the process (`cache`).
//! - **Ranking**: Two-tier prefix-then-contains matching in shard order, with a
//!   bounded scan (`engine`).
//! - **Lookup**: Resolving a typed name to its composition, accepting only
//!   tight matches (`engine`).
//!
//! ## Failure Policy
//! Nothing here returns an error to the caller. A shard that cannot be fetched
//! behaves as an empty shard for that call and is retried on the next request;
//! autocomplete degrading to "no suggestions" must never break the form.
//!
//! ## Submodules
//! - **`cache`**: The process-wide `ShardCache`.
//! - **`engine`**: `MedicineSearch`, the API the embedding UI calls.

pub mod cache;
pub mod engine;
