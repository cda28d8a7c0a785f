//! Configuration constants.
//!
//! Record prefixes, the DMARC subdomain label and resolver settings used
//! throughout the checker.

/// Prefix identifying an SPF policy in a TXT record.
pub const SPF_PREFIX: &str = "v=spf1";

/// Prefix identifying a DMARC policy in a TXT record.
///
/// Matching is case-sensitive.
pub const DMARC_PREFIX: &str = "v=DMARC1";

/// Label prepended to a domain to find its DMARC policy.
pub const DMARC_SUBDOMAIN_PREFIX: &str = "_dmarc.";

/// Resolver cache size. Zero disables caching so every lookup hits the network.
pub const RESOLVER_CACHE_SIZE: usize = 0;

/// Value of the input path that selects stdin.
pub const STDIN_PATH: &str = "-";

/// Longest accepted input line in bytes, excluding the line terminator.
///
/// A longer line ends the run with an input error.
pub const MAX_LINE_BYTES: usize = 64 * 1024;
