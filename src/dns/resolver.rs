//! Pluggable record resolution.
//!
//! The checker only needs two queries, MX and TXT, so resolution is expressed
//! as a small trait. The hickory resolver implements it for live lookups (see
//! `records.rs`) and [`StaticResolver`](super::StaticResolver) implements it
//! from in-memory fixtures.

use std::future::Future;

use crate::error_handling::LookupError;

/// Resolves MX and TXT records for a name.
pub trait RecordResolver {
    /// Queries MX records, returned as `(preference, exchange)` pairs in the
    /// order the resolver produced them.
    fn lookup_mx(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Vec<(u16, String)>, LookupError>> + Send;

    /// Queries TXT records. Each record's character-strings are joined into
    /// one string.
    fn lookup_txt(&self, name: &str)
        -> impl Future<Output = Result<Vec<String>, LookupError>> + Send;
}
