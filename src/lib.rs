//! mailauth_check library: email-authentication posture of domains
//!
//! For each domain this library looks up MX records, TXT records at the
//! domain, and TXT records at `_dmarc.<domain>`, then reports whether mail
//! servers, an SPF policy and a DMARC policy were found.
//!
//! # Example
//!
//! ```no_run
//! use mailauth_check::{run_check, initialization::init_resolver};
//! use tokio::io::BufReader;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let input = BufReader::new("example.com\nexample.org\n".as_bytes());
//! let resolver = init_resolver();
//! let report = run_check(input, tokio::io::stdout(), &resolver).await?;
//! println!("{} domains, {} with DMARC", report.total_domains, report.with_dmarc);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

#![warn(missing_docs)]

mod check;
pub mod config;
pub mod dns;
mod error_handling;
pub mod initialization;
pub mod input;
pub mod output;

// Re-export public API
pub use check::{check_domain, DomainCheckResult};
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{InitializationError, LookupError};
pub use run::{run, run_check, CheckReport};

// Internal run module (reads domains, checks them in order, writes rows)
mod run {
    use anyhow::{Context, Result};
    use log::info;
    use tokio::io::{AsyncBufRead, AsyncWrite, BufReader};

    use crate::check::{check_domain, DomainCheckResult};
    use crate::config::Config;
    use crate::dns::RecordResolver;
    use crate::initialization::init_resolver;
    use crate::input::DomainLines;
    use crate::output::{write_header, write_row};

    /// Summary of a checking run.
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct CheckReport {
        /// Number of input lines checked
        pub total_domains: usize,
        /// Domains with at least one MX record
        pub with_mx: usize,
        /// Domains with an SPF record
        pub with_spf: usize,
        /// Domains with a DMARC record
        pub with_dmarc: usize,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    impl CheckReport {
        fn record(&mut self, result: &DomainCheckResult) {
            self.total_domains += 1;
            self.with_mx += usize::from(result.has_mx());
            self.with_spf += usize::from(result.has_spf());
            self.with_dmarc += usize::from(result.has_dmarc());
        }
    }

    /// Checks every domain read from `input` and writes one row per domain to `output`.
    ///
    /// The header is written before the first line is read. Lines are used as
    /// given (only the line terminator is stripped, invalid UTF-8 is replaced)
    /// and checked one at a time, so rows come out in input order.
    ///
    /// # Errors
    ///
    /// Returns an error if reading `input` fails (including a line longer
    /// than [`MAX_LINE_BYTES`](crate::config::MAX_LINE_BYTES)) or writing
    /// `output` fails. Rows written before the failure stay written. DNS
    /// failures are never errors.
    pub async fn run_check<I, O, R>(input: I, mut output: O, resolver: &R) -> Result<CheckReport>
    where
        I: AsyncBufRead + Unpin,
        O: AsyncWrite + Unpin,
        R: RecordResolver,
    {
        let start_time = std::time::Instant::now();
        let mut report = CheckReport::default();

        write_header(&mut output)
            .await
            .context("Failed to write header")?;

        let mut lines = DomainLines::new(input);
        while let Some(domain) = lines
            .next_domain()
            .await
            .context("Error reading from input")?
        {
            let result = check_domain(&domain, resolver).await;
            write_row(&mut output, &result)
                .await
                .with_context(|| format!("Failed to write row for {domain}"))?;
            report.record(&result);
        }

        report.elapsed_seconds = start_time.elapsed().as_secs_f64();
        Ok(report)
    }

    /// Runs a check with the provided configuration.
    ///
    /// Reads domains from the configured file (or stdin for `-`), resolves
    /// them with the system resolver and writes rows to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if the input file cannot be opened, or on any error
    /// from [`run_check`].
    pub async fn run(config: &Config) -> Result<CheckReport> {
        let resolver = init_resolver();
        let stdout = tokio::io::stdout();

        let report = if config.reads_stdin() {
            info!("Reading domains from stdin");
            run_check(BufReader::new(tokio::io::stdin()), stdout, &resolver).await?
        } else {
            let file = tokio::fs::File::open(&config.file)
                .await
                .with_context(|| {
                    format!("Failed to open input file: {}", config.file.display())
                })?;
            info!("Reading domains from {}", config.file.display());
            run_check(BufReader::new(file), stdout, &resolver).await?
        };

        info!(
            "Checked {} domain{} in {:.1}s ({} with MX, {} with SPF, {} with DMARC)",
            report.total_domains,
            if report.total_domains == 1 { "" } else { "s" },
            report.elapsed_seconds,
            report.with_mx,
            report.with_spf,
            report.with_dmarc
        );
        Ok(report)
    }
}
