//! DNS record extraction utilities.
//!
//! This module provides functions to pick SPF and DMARC policies out of
//! TXT record collections.
//!
//! Prefixes are matched exactly: case-sensitive and without trimming, so
//! `" v=spf1"` and `"v=SPF1"` are not SPF records. When several records
//! qualify, the last one in resolver order wins.

use crate::config::{DMARC_PREFIX, SPF_PREFIX};

/// Extracts the SPF record from TXT records.
///
/// SPF records start with "v=spf1".
///
/// # Arguments
///
/// * `txt_records` - Vector of TXT record strings
///
/// # Returns
///
/// The last SPF record found, or `None` if no SPF record exists.
pub fn extract_spf_record(txt_records: &[String]) -> Option<String> {
    last_with_prefix(txt_records, SPF_PREFIX)
}

/// Extracts the DMARC record from TXT records.
///
/// DMARC records are normally published at `_dmarc.<domain>`, but the
/// domain's own TXT set is scanned with this function too.
/// DMARC records start with "v=DMARC1".
///
/// # Arguments
///
/// * `txt_records` - Vector of TXT record strings
///
/// # Returns
///
/// The last DMARC record found, or `None` if no DMARC record exists.
pub fn extract_dmarc_record(txt_records: &[String]) -> Option<String> {
    last_with_prefix(txt_records, DMARC_PREFIX)
}

fn last_with_prefix(txt_records: &[String], prefix: &str) -> Option<String> {
    txt_records
        .iter()
        .rev()
        .find(|txt| txt.starts_with(prefix))
        .cloned()
}
