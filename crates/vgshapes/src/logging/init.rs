use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info", "warn",
/// "vgshapes=debug"). When unset, `RUST_LOG` is consulted, then `info`.
///
/// `write_style` controls ANSI coloring behavior.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl LoggingConfig {
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self {
            env_filter: Some(filter.into()),
            ..Self::default()
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// This function is idempotent; subsequent calls are ignored.
/// Intended usage is early in `main`, before the canvas is created.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = builder(&config, std::env::var("RUST_LOG").ok());

        // A second logger may already be installed by the host program.
        if builder.try_init().is_err() {
            return;
        }

        log::debug!("logging initialized");
    });
}

/// Logger builder for `config`, with `env` standing in for `RUST_LOG`.
///
/// An explicit filter wins over `env`; with neither, the level is `info`.
fn builder(config: &LoggingConfig, env: Option<String>) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();

    match (&config.env_filter, env) {
        (Some(filter), _) => builder.parse_filters(filter),
        (None, Some(filter)) => builder.parse_filters(&filter),
        (None, None) => builder.filter_level(log::LevelFilter::Info),
    };

    builder.write_style(config.write_style);
    builder
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_filter_keeps_default_style() {
        let config = LoggingConfig::with_filter("vgshapes=debug");
        assert_eq!(config.env_filter.as_deref(), Some("vgshapes=debug"));
        assert!(matches!(config.write_style, env_logger::WriteStyle::Auto));
    }

    // ── filter precedence ─────────────────────────────────────────────────

    #[test]
    fn explicit_filter_beats_env() {
        let logger = builder(&LoggingConfig::with_filter("warn"), Some("debug".into())).build();
        assert_eq!(logger.filter(), log::LevelFilter::Warn);
    }

    #[test]
    fn env_used_without_explicit_filter() {
        let logger = builder(&LoggingConfig::default(), Some("debug".into())).build();
        assert_eq!(logger.filter(), log::LevelFilter::Debug);
    }

    #[test]
    fn defaults_to_info() {
        let logger = builder(&LoggingConfig::default(), None).build();
        assert_eq!(logger.filter(), log::LevelFilter::Info);
    }

    #[test]
    fn second_init_is_ignored() {
        init_logging(LoggingConfig::with_filter("warn"));
        let level = log::max_level();
        init_logging(LoggingConfig::with_filter("trace"));
        assert_eq!(log::max_level(), level);
    }
}
