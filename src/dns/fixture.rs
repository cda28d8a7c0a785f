//! In-memory resolver serving fixed records.

use std::collections::HashMap;

use super::RecordResolver;
use crate::error_handling::LookupError;

/// A [`RecordResolver`] answering from records registered up front.
///
/// Names are matched exactly. A name with nothing registered answers
/// [`LookupError::NoRecords`]. Records come back in registration order.
///
/// ```
/// use mailauth_check::dns::StaticResolver;
/// use mailauth_check::LookupError;
///
/// let resolver = StaticResolver::new()
///     .with_mx("example.com", vec![(10, "mx.example.com.".to_string())])
///     .with_txt("example.com", vec!["v=spf1 -all".to_string()])
///     .with_txt_error("_dmarc.example.com", LookupError::Timeout);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    mx: HashMap<String, Result<Vec<(u16, String)>, LookupError>>,
    txt: HashMap<String, Result<Vec<String>, LookupError>>,
}

impl StaticResolver {
    /// Creates a resolver with no records.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers MX records for `name`, replacing earlier ones.
    pub fn with_mx(mut self, name: &str, records: Vec<(u16, String)>) -> Self {
        self.mx.insert(name.to_string(), Ok(records));
        self
    }

    /// Registers TXT records for `name`, replacing earlier ones.
    pub fn with_txt(mut self, name: &str, records: Vec<String>) -> Self {
        self.txt.insert(name.to_string(), Ok(records));
        self
    }

    /// Makes MX lookups for `name` fail with `error`.
    pub fn with_mx_error(mut self, name: &str, error: LookupError) -> Self {
        self.mx.insert(name.to_string(), Err(error));
        self
    }

    /// Makes TXT lookups for `name` fail with `error`.
    pub fn with_txt_error(mut self, name: &str, error: LookupError) -> Self {
        self.txt.insert(name.to_string(), Err(error));
        self
    }
}

impl RecordResolver for StaticResolver {
    async fn lookup_mx(&self, name: &str) -> Result<Vec<(u16, String)>, LookupError> {
        self.mx
            .get(name)
            .cloned()
            .unwrap_or(Err(LookupError::NoRecords))
    }

    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, LookupError> {
        self.txt
            .get(name)
            .cloned()
            .unwrap_or(Err(LookupError::NoRecords))
    }
}
