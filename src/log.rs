// src/log.rs
use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;

use crate::config::consts::{LOG_FILE, STORE_DIR};

static INIT: OnceLock<bool> = OnceLock::new();

/// Install the file logger (`.store/debug.log`).
/// Safe to call more than once; only the first call does any work.
/// Returns whether a subscriber from this crate is active.
pub fn init() -> bool {
    *INIT.get_or_init(|| {
        if let Err(e) = std::fs::create_dir_all(STORE_DIR) {
            eprintln!("Log: cannot create {STORE_DIR}: {e}");
            return false;
        }

        let appender = tracing_appender::rolling::never(STORE_DIR, LOG_FILE);
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info"));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(appender)
            .with_ansi(false)
            .with_target(false)
            .try_init()
            .is_ok()
    })
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}
