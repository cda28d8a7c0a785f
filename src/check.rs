//! Per-domain email-authentication check.
//!
//! A check is three lookups run one after another:
//! 1. MX at the domain
//! 2. TXT at the domain, scanned for SPF and DMARC records
//! 3. TXT at `_dmarc.<domain>`, scanned for a DMARC record
//!
//! A DMARC record from step 3 replaces one found in step 2. Lookup failures
//! are folded into "no records" by [`ResolutionPolicy::TreatAsAbsent`], so a
//! check never fails.

use log::debug;

use crate::config::DMARC_SUBDOMAIN_PREFIX;
use crate::dns::{extract_dmarc_record, extract_spf_record, RecordResolver, ResolutionPolicy};

const POLICY: ResolutionPolicy = ResolutionPolicy::TreatAsAbsent;

/// Outcome of checking one domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainCheckResult {
    domain: String,
    has_mx: bool,
    spf_record: Option<String>,
    dmarc_record: Option<String>,
}

impl DomainCheckResult {
    /// The domain exactly as it was given to the check.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// True when the MX lookup returned at least one record.
    pub fn has_mx(&self) -> bool {
        self.has_mx
    }

    /// True when a TXT record at the domain starts with `v=spf1`.
    pub fn has_spf(&self) -> bool {
        self.spf_record.is_some()
    }

    /// The SPF record, or an empty string when there is none.
    pub fn spf_record(&self) -> &str {
        self.spf_record.as_deref().unwrap_or_default()
    }

    /// True when a `v=DMARC1` record was found at the domain or its `_dmarc` name.
    pub fn has_dmarc(&self) -> bool {
        self.dmarc_record.is_some()
    }

    /// The DMARC record, or an empty string when there is none.
    pub fn dmarc_record(&self) -> &str {
        self.dmarc_record.as_deref().unwrap_or_default()
    }
}

/// Checks the MX, SPF and DMARC posture of `domain`.
///
/// The domain is not validated or normalized; whatever the resolver makes of
/// it is what gets reported.
///
/// # Arguments
///
/// * `domain` - The domain to check, used verbatim
/// * `resolver` - The resolver answering the three lookups
///
/// # Returns
///
/// A fully populated [`DomainCheckResult`]. Failed lookups read as absent records.
pub async fn check_domain<R: RecordResolver>(domain: &str, resolver: &R) -> DomainCheckResult {
    let has_mx = !POLICY.apply(resolver.lookup_mx(domain).await).is_empty();

    let txt_records = POLICY.apply(resolver.lookup_txt(domain).await);
    let spf_record = extract_spf_record(&txt_records);
    let domain_dmarc = extract_dmarc_record(&txt_records);

    let dmarc_name = format!("{DMARC_SUBDOMAIN_PREFIX}{domain}");
    let dmarc_records = POLICY.apply(resolver.lookup_txt(&dmarc_name).await);
    let dmarc_record = extract_dmarc_record(&dmarc_records).or(domain_dmarc);

    debug!(
        "Checked {domain}: mx={has_mx} spf={} dmarc={}",
        spf_record.is_some(),
        dmarc_record.is_some()
    );

    DomainCheckResult {
        domain: domain.to_string(),
        has_mx,
        spf_record,
        dmarc_record,
    }
}
