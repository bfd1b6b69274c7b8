use time::{UtcOffset, format_description::well_known::Rfc3339};
use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt, fmt::time::OffsetTime, layer::Layered,
    layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError,
};

use crate::logger::{config::LoggerConfig, error::LoggerError, format::LoggerFormat};

/// Registry with the level filter applied; every output layer sits on top of it.
type Filtered = Layered<EnvFilter, Registry>;

type OutputLayer = Box<dyn Layer<Filtered> + Send + Sync>;

/// Build the subscriber for `cfg` and install it globally.
pub(crate) fn install(cfg: &LoggerConfig) -> Result<(), LoggerError> {
    let filter = cfg.level.filter()?;
    let output = output_layer(cfg)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(output)
        .try_init()
        .map_err(classify)
}

fn output_layer(cfg: &LoggerConfig) -> Result<OutputLayer, LoggerError> {
    match cfg.format {
        LoggerFormat::Text => Ok(Box::new(
            fmt::layer::<Filtered>()
                .with_ansi(cfg.use_color)
                .with_target(cfg.with_targets)
                .with_timer(local_timer()),
        )),
        // resolver spans carry the image selector; keep it next to each event
        LoggerFormat::Json => Ok(Box::new(
            fmt::layer::<Filtered>()
                .json()
                .flatten_event(true)
                .with_current_span(true)
                .with_span_list(false)
                .with_target(cfg.with_targets)
                .with_timer(local_timer()),
        )),
        LoggerFormat::Journald => journald_layer(),
    }
}

/// RFC 3339 timestamps in the local offset, UTC when the offset cannot be determined.
fn local_timer() -> OffsetTime<Rfc3339> {
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    OffsetTime::new(offset, Rfc3339)
}

fn classify(e: TryInitError) -> LoggerError {
    let msg = e.to_string();
    if msg.contains("global default") {
        LoggerError::AlreadyInitialized
    } else {
        LoggerError::InitializationFailed(msg)
    }
}

#[cfg(all(target_os = "linux", feature = "journald"))]
fn journald_layer() -> Result<OutputLayer, LoggerError> {
    tracing_journald::layer()
        .map(|layer| Box::new(layer) as OutputLayer)
        .map_err(|e| LoggerError::InitializationFailed(format!("journald: {e}")))
}

#[cfg(not(all(target_os = "linux", feature = "journald")))]
fn journald_layer() -> Result<OutputLayer, LoggerError> {
    Err(LoggerError::JournaldNotSupported)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LoggerLevel;

    // Only this test installs the global subscriber in this binary.
    #[test]
    fn second_install_reports_already_initialized() {
        let cfg = LoggerConfig {
            format: LoggerFormat::Json,
            level: LoggerLevel::new("debug").unwrap(),
            use_color: false,
            ..Default::default()
        };

        install(&cfg).unwrap();
        tracing::info!(image = "web:v1", "logger installed");

        let err = install(&LoggerConfig::default()).unwrap_err();
        assert!(matches!(err, LoggerError::AlreadyInitialized));
    }

    #[cfg(not(all(target_os = "linux", feature = "journald")))]
    #[test]
    fn journald_without_feature_is_unsupported() {
        let cfg = LoggerConfig {
            format: LoggerFormat::Journald,
            ..Default::default()
        };
        assert!(matches!(
            output_layer(&cfg),
            Err(LoggerError::JournaldNotSupported)
        ));
    }
}
