//! Compact bitset types used by the search engines to track visited/queued
//! locations without per-lookup heap allocation.

mod location_set;

pub use location_set::LocationSet;
