//! Logging hooks for the decoder.
//!
//! The crate logs through the `log` facade and never installs a logger on its own.
//! `enable_verbose_logging` is the opt-in for binaries and test harnesses that want
//! to see decoder diagnostics without wiring up their own `env_logger`.
//!
//! The `log_metric!` macro emits structured key-value trace records. It is compiled
//! out of release builds, so it is safe to leave on the hot decode path.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Once;

use log::LevelFilter;

use crate::error::TsmIntError;

/// Logs a structured key-value metric at `trace` level, only in debug builds.
///
/// # Example
/// ```
/// use tsmint::log_metric;
/// let values = 4;
/// log_metric!("event" = "decode", "encoding" = "raw", "values" = values);
/// ```
#[macro_export]
macro_rules! log_metric {
    ($($key:literal = $value:expr),+ $(,)?) => {
        #[cfg(debug_assertions)]
        {
            if ::log::log_enabled!(target: "tsmint::metric", ::log::Level::Trace) {
                let mut parts = Vec::new();
                $(
                    parts.push(format!("\"{}\": \"{}\"", $key, $value));
                )+
                ::log::trace!(
                    target: "tsmint::metric",
                    "TSMINT_METRIC: {{ {} }}",
                    parts.join(", ")
                );
            }
        }
    };
}

static INIT_LOGGER: Once = Once::new();

/// Installs an `env_logger` at `Info` level (or `RUST_LOG`, if set), optionally
/// appending to `log_file`. Only the first call has any effect.
pub fn enable_verbose_logging(log_file: Option<&Path>) -> Result<(), TsmIntError> {
    let file = match log_file {
        Some(path) => Some(OpenOptions::new().append(true).create(true).open(path)?),
        None => None,
    };

    INIT_LOGGER.call_once(|| {
        let mut builder = env_logger::Builder::new();

        builder.is_test(false);
        builder.filter_level(LevelFilter::Info);
        builder.parse_default_env();

        // Custom formatter: just print the level, target and message
        builder.format(|buf, record| {
            use std::io::Write;
            writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args())
        });

        if let Some(file) = file {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }

        let _ = builder.try_init();
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enable_verbose_logging_is_idempotent() {
        let path = std::env::temp_dir().join(format!("tsmint-log-{}.log", std::process::id()));
        enable_verbose_logging(Some(&path)).unwrap();
        enable_verbose_logging(None).unwrap();
        log_metric!("event" = "test", "value" = 1);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_unwritable_log_file_is_io_error() {
        let result = enable_verbose_logging(Some(Path::new("/nonexistent/dir/tsmint.log")));
        assert!(matches!(result, Err(TsmIntError::Io(_))));
    }
}
