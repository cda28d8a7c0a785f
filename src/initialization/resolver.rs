//! DNS resolver initialization.

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::system_conf::read_system_conf;
use hickory_resolver::TokioAsyncResolver;
use log::warn;

use crate::config::RESOLVER_CACHE_SIZE;

/// Initializes the DNS resolver used for live checks.
///
/// Uses the platform's resolver configuration (nameservers, search list,
/// timeouts and attempts from `/etc/resolv.conf` or the OS equivalent). No
/// timeout is imposed on top of it. If the system configuration cannot be
/// read, hickory's default configuration is used instead.
///
/// The response cache is disabled so every lookup goes to the nameservers.
pub fn init_resolver() -> TokioAsyncResolver {
    let (config, opts) = resolver_settings();
    TokioAsyncResolver::tokio(config, opts)
}

/// Resolver configuration and options handed to hickory by [`init_resolver`].
fn resolver_settings() -> (ResolverConfig, ResolverOpts) {
    let (config, opts) = match read_system_conf() {
        Ok(system) => system,
        Err(e) => {
            warn!("Failed to read system DNS configuration, using defaults: {e}");
            (ResolverConfig::default(), ResolverOpts::default())
        }
    };
    (config, without_cache(opts))
}

fn without_cache(mut opts: ResolverOpts) -> ResolverOpts {
    opts.cache_size = RESOLVER_CACHE_SIZE;
    opts
}
