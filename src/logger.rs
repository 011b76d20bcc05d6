use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt::{self, format::FmtSpan}};

/// Directives used when `RUST_LOG` is unset: dependencies stay at `warn`,
/// this crate logs at `info`, or `debug` when `verbose` is set.
pub fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "warn,tintmono=debug"
    } else {
        "warn,tintmono=info"
    }
}

/// Pipeline spans report their duration on close once the filter lets
/// debug events through anywhere.
fn wants_span_timing(filter: &EnvFilter) -> bool {
    filter
        .max_level_hint()
        .is_some_and(|level| level >= LevelFilter::DEBUG)
}

/// Installs the global subscriber. `RUST_LOG` takes precedence over `verbose`.
pub fn init(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    let span_events = if wants_span_timing(&env_filter) {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_timer(fmt::time::uptime())
        .with_span_events(span_events);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_scope_crate_level() {
        assert_eq!(default_directives(false), "warn,tintmono=info");
        assert_eq!(default_directives(true), "warn,tintmono=debug");
    }

    #[test]
    fn test_span_timing_follows_most_verbose_directive() {
        assert!(!wants_span_timing(&EnvFilter::new(default_directives(false))));
        assert!(wants_span_timing(&EnvFilter::new(default_directives(true))));
        assert!(wants_span_timing(&EnvFilter::new("info,tintmono::image_pipeline=trace")));
        assert!(!wants_span_timing(&EnvFilter::new("error")));
    }
}
