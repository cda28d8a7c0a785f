//! Error handling.
//!
//! Two families of errors exist:
//! - **Initialization errors**: setup failures reported by the binary before any
//!   domain is checked
//! - **Lookup errors**: per-query DNS failures, which never leave the DNS layer

mod types;

// Re-export public API
pub use types::{InitializationError, LookupError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_error_display() {
        assert_eq!(LookupError::NoRecords.to_string(), "no records found");
        assert_eq!(
            LookupError::NxDomain.to_string(),
            "NXDOMAIN: domain does not exist"
        );
        assert_eq!(LookupError::Timeout.to_string(), "timeout");
        assert_eq!(
            LookupError::Other("connection refused".to_string()).to_string(),
            "DNS error: connection refused"
        );
    }

    #[test]
    fn test_lookup_error_clone_eq() {
        let original = LookupError::Other("servfail".to_string());
        assert_eq!(original.clone(), original);
        assert_ne!(LookupError::NoRecords, LookupError::NxDomain);
    }
}
