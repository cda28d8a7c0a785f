//! DNS resolution and record querying.
//!
//! This module provides:
//! - The [`RecordResolver`] capability (MX and TXT queries)
//! - Its implementation for `hickory-resolver`'s `TokioAsyncResolver`
//! - [`StaticResolver`], answering from in-memory fixtures
//! - [`ResolutionPolicy`], which decides what a failed lookup means
//! - SPF/DMARC extraction from TXT records

mod extract;
mod fixture;
mod policy;
mod records;
mod resolver;

// Re-export public API
pub use extract::{extract_dmarc_record, extract_spf_record};
pub use fixture::StaticResolver;
pub use policy::ResolutionPolicy;
pub use resolver::RecordResolver;
