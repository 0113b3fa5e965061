use shared_utils::env::get_non_empty_env_var;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "DASHBOARD_LOG";
pub const LOG_FORMAT_ENV: &str = "DASHBOARD_LOG_FORMAT";

const DEFAULT_DIRECTIVE: &str = "info";

/// Install the global `tracing` subscriber.
///
/// Level comes from `DASHBOARD_LOG`, then `RUST_LOG`, then `info`.
/// `DASHBOARD_LOG_FORMAT=json` switches to JSON lines. Calling this twice is
/// harmless; the second call is ignored.
pub fn init() {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(false);

    let _ = match log_format().as_str() {
        "json" => builder.json().try_init(),
        _ => builder.try_init(),
    };
}

fn env_filter() -> EnvFilter {
    EnvFilter::new(filter_directive())
}

/// The filter directive in effect; blank variables are skipped.
fn filter_directive() -> String {
    get_non_empty_env_var(LOG_ENV)
        .or_else(|_| get_non_empty_env_var("RUST_LOG"))
        .unwrap_or_else(|_| DEFAULT_DIRECTIVE.to_string())
}

fn log_format() -> String {
    get_non_empty_env_var(LOG_FORMAT_ENV)
        .map(|value| value.to_lowercase())
        .unwrap_or_else(|_| "plain".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn with_env<T>(vars: &[(&str, Option<&str>)], f: impl FnOnce() -> T) -> T {
        let saved: Vec<_> = vars
            .iter()
            .map(|(name, _)| (*name, std::env::var(name).ok()))
            .collect();
        unsafe {
            for (name, value) in vars {
                match value {
                    Some(value) => std::env::set_var(name, value),
                    None => std::env::remove_var(name),
                }
            }
        }
        let out = f();
        unsafe {
            for (name, value) in saved {
                match value {
                    Some(value) => std::env::set_var(name, value),
                    None => std::env::remove_var(name),
                }
            }
        }
        out
    }

    #[test]
    #[serial]
    fn dashboard_log_wins_over_rust_log() {
        let directive = with_env(
            &[(LOG_ENV, Some("stock_dashboard=debug")), ("RUST_LOG", Some("warn"))],
            filter_directive,
        );
        assert_eq!(directive, "stock_dashboard=debug");
    }

    #[test]
    #[serial]
    fn blank_dashboard_log_falls_through_to_rust_log() {
        let directive = with_env(&[(LOG_ENV, Some("  ")), ("RUST_LOG", Some("warn"))], filter_directive);
        assert_eq!(directive, "warn");
    }

    #[test]
    #[serial]
    fn level_defaults_to_info() {
        let directive = with_env(&[(LOG_ENV, None), ("RUST_LOG", None)], filter_directive);
        assert_eq!(directive, "info");
        // the directive must be accepted by the subscriber
        let _ = with_env(&[(LOG_ENV, None), ("RUST_LOG", None)], env_filter);
    }

    #[test]
    #[serial]
    fn format_switch() {
        assert_eq!(with_env(&[(LOG_FORMAT_ENV, Some(" JSON "))], log_format), "json");
        assert_eq!(with_env(&[(LOG_FORMAT_ENV, Some(""))], log_format), "plain");
        assert_eq!(with_env(&[(LOG_FORMAT_ENV, None)], log_format), "plain");
    }
}
