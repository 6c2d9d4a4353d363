//! Reverse DNS resolution.
//!
//! This module provides async PTR lookups using `hickory-resolver`. Reverse DNS
//! is best-effort: any failure becomes the `"Unknown"` placeholder.

mod resolution;

// Re-export public API
pub use resolution::{reverse_dns_lookup, ReverseLookup, ReverseResolver};

#[cfg(test)]
mod tests;
