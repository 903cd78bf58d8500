//! Diagnostics setup: warnings and errors go to stderr.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise `warn`, or `debug` with `verbose`.
/// Skipped-line warnings stay on unless `RUST_LOG` names `optconf` itself.
/// Calling this twice is harmless.
pub fn init(verbose: bool) {
    let filter = build_filter(std::env::var("RUST_LOG").ok().as_deref(), verbose);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}

fn build_filter(rust_log: Option<&str>, verbose: bool) -> EnvFilter {
    match rust_log.filter(|s| !s.trim().is_empty()) {
        Some(spec) => {
            let filter = EnvFilter::new(spec);
            if spec.contains(CRATE_TARGET) {
                return filter;
            }
            match format!("{}=warn", CRATE_TARGET).parse() {
                Ok(floor) => filter.add_directive(floor),
                Err(_) => filter,
            }
        }
        None => EnvFilter::new(if verbose { "debug" } else { "warn" }),
    }
}

const CRATE_TARGET: &str = "optconf";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert!(build_filter(None, false).to_string().contains("warn"));
        assert!(build_filter(Some("  "), true).to_string().contains("debug"));
    }

    #[test]
    fn test_quiet_rust_log_keeps_crate_warnings() {
        let filter = build_filter(Some("error"), false).to_string();
        assert!(filter.contains("optconf=warn"), "filter={}", filter);
    }

    #[test]
    fn test_explicit_crate_directive_is_respected() {
        let filter = build_filter(Some("optconf=error"), false).to_string();
        assert!(!filter.contains("optconf=warn"), "filter={}", filter);
    }
}
