//! Row output.
//!
//! One header line, then one line per checked domain. Fields are joined with
//! `", "` and are not quoted or escaped, so a record containing a comma makes
//! the line ambiguous as CSV.

use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::check::DomainCheckResult;

/// Column header, written once before any row.
pub const HEADER: &str = "domain, hasMX, hasSPF, spfRecord, hasDMARC, dmarcRecord";

/// Renders a result as an output line (without the trailing newline).
pub fn format_row(result: &DomainCheckResult) -> String {
    format!(
        "{}, {}, {}, {}, {}, {}",
        result.domain(),
        result.has_mx(),
        result.has_spf(),
        result.spf_record(),
        result.has_dmarc(),
        result.dmarc_record()
    )
}

/// Writes the header line and flushes.
pub async fn write_header<W: AsyncWrite + Unpin>(out: &mut W) -> std::io::Result<()> {
    write_line(out, HEADER).await
}

/// Writes one result line and flushes, so each row is visible as soon as its
/// domain is done.
pub async fn write_row<W: AsyncWrite + Unpin>(
    out: &mut W,
    result: &DomainCheckResult,
) -> std::io::Result<()> {
    write_line(out, &format_row(result)).await
}

async fn write_line<W: AsyncWrite + Unpin>(out: &mut W, line: &str) -> std::io::Result<()> {
    out.write_all(line.as_bytes()).await?;
    out.write_all(b"\n").await?;
    out.flush().await
}
