// ABOUTME: Logging configuration and structured logging setup for observability
// ABOUTME: Configures log levels and output formats via tracing-subscriber
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use std::env;
use std::io;
use std::sync::Once;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
        }
    }
}

impl LoggingConfig {
    /// Build a configuration from `RUST_LOG` and `LOG_FORMAT`.
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
        let format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("compact") => LogFormat::Compact,
            _ => LogFormat::Pretty,
        };
        Self { level, format }
    }

    /// Install the global tracing subscriber for this configuration.
    ///
    /// Safe to call more than once; only the first call installs a
    /// subscriber. `RUST_LOG` overrides the configured level when set.
    pub fn init(&self) {
        INIT.call_once(|| {
            let env_filter = env::var("RUST_LOG")
                .map_or_else(|_| EnvFilter::new(&self.level), EnvFilter::new);

            let registry = tracing_subscriber::registry().with(env_filter);
            match self.format {
                LogFormat::Json => {
                    let json_layer = fmt::layer()
                        .with_target(true)
                        .with_writer(io::stdout)
                        .json();
                    registry.with(json_layer).init();
                }
                LogFormat::Pretty => {
                    let pretty_layer = fmt::layer().with_target(true).with_writer(io::stdout);
                    registry.with(pretty_layer).init();
                }
                LogFormat::Compact => {
                    let compact_layer = fmt::layer()
                        .compact()
                        .with_target(false)
                        .with_writer(io::stdout);
                    registry.with(compact_layer).init();
                }
            }
        });
    }
}

static INIT: Once = Once::new();

/// Initialize logging with the default configuration.
pub fn init_default() {
    LoggingConfig::default().init();
}

/// Initialize logging from `RUST_LOG` and `LOG_FORMAT`.
pub fn init_from_env() {
    LoggingConfig::from_env().init();
}
