//! Backing stores the cache sits in front of.
//!
//! A backing store is the slower "memory" collaborator: it resolves any
//! address to data and counts how many times it has been asked. It has no
//! cache awareness; the cache only reaches it on misses.

pub mod hashmap;
pub mod traits;
