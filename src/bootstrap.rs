use crate::config::Configuration;
use crate::domain::Telemetry;
use crate::no_operation::NoOpTelemetry;

pub fn init_telemetry(config: &Configuration) -> anyhow::Result<Box<dyn Telemetry>> {
    let telemetry: Box<dyn Telemetry> = Box::new(NoOpTelemetry::new());
    tracing::info!(backend = telemetry.name(), "Telemetry backend selected");

    let settings = &config.telemetry;
    if !settings.cloud_disabled && settings.endpoint.as_deref().is_none_or(str::is_empty) {
        anyhow::bail!("Cloud telemetry is enabled, but no endpoint is configured");
    }

    tracing::debug!(
        endpoint = settings.endpoint.as_deref().unwrap_or(""),
        model = settings.model.as_deref().unwrap_or(""),
        has_api_key = settings.api_key.is_some(),
        cloud_disabled = settings.cloud_disabled,
        stream_mode = settings.stream_mode,
        "Applying telemetry settings"
    );

    telemetry.init(
        settings.api_key.as_deref(),
        settings.endpoint.as_deref(),
        settings.model.as_deref(),
    );
    telemetry.set_cloud_disabled(settings.cloud_disabled);
    telemetry.set_stream_mode(settings.stream_mode);

    Ok(telemetry)
}
