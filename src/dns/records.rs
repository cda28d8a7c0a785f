//! DNS record queries (MX, TXT) against a live resolver.

use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::TokioAsyncResolver;

use super::RecordResolver;
use crate::error_handling::LookupError;

impl RecordResolver for TokioAsyncResolver {
    async fn lookup_mx(&self, name: &str) -> Result<Vec<(u16, String)>, LookupError> {
        let lookup = self.mx_lookup(name).await.map_err(classify_error)?;
        Ok(lookup
            .iter()
            .map(|mx| (mx.preference(), mx.exchange().to_utf8()))
            .collect())
    }

    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, LookupError> {
        let lookup = self.txt_lookup(name).await.map_err(classify_error)?;
        Ok(lookup
            .iter()
            .map(|txt| {
                // TXT records can contain multiple strings - join them
                txt.iter()
                    .map(|bytes| String::from_utf8_lossy(bytes))
                    .collect::<String>()
            })
            .collect())
    }
}

/// Maps a hickory resolver error onto [`LookupError`].
pub(crate) fn classify_error(e: ResolveError) -> LookupError {
    match e.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. }
            if *response_code == ResponseCode::NXDomain =>
        {
            LookupError::NxDomain
        }
        ResolveErrorKind::NoRecordsFound { .. } => LookupError::NoRecords,
        ResolveErrorKind::Timeout => LookupError::Timeout,
        _ => LookupError::Other(e.to_string()),
    }
}
