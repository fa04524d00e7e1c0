//! Logging setup for the `bitadd` binary.
//!
//! Events come from two targets: `bitwise_add` (the library) and `bitadd`
//! (the binary itself). Both have to appear in the default directives or the
//! binary's own error events are filtered out.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const QUIET_DIRECTIVES: &str = "bitwise_add=info,bitadd=info,warn";
const VERBOSE_DIRECTIVES: &str = "bitwise_add=debug,bitadd=debug,info";

/// Filter directives used when `RUST_LOG` is unset.
pub fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_DIRECTIVES
    } else {
        QUIET_DIRECTIVES
    }
}

/// `RUST_LOG` if set and valid, otherwise [`default_directives`].
pub fn cli_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)))
}

/// Installs a compact stderr subscriber, keeping stdout for the result.
pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(cli_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .without_time()
                .compact(),
        )
        .init();
}
