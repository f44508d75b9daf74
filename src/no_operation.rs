use crate::domain::{CompletionMetrics, Telemetry};

#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpTelemetry {
    //
}

impl NoOpTelemetry {
    pub const fn new() -> Self {
        Self {}
    }
}

// every operation discards its arguments without any observable effect
impl Telemetry for NoOpTelemetry {
    fn name(&self) -> &'static str {
        "no-operation"
    }

    #[inline]
    fn init(&self, _api_key: Option<&str>, _endpoint: Option<&str>, _model: Option<&str>) {}

    #[inline]
    fn set_cloud_disabled(&self, _disabled: bool) {}

    #[inline]
    fn set_stream_mode(&self, _enabled: bool) {}

    #[inline]
    fn record_completion(&self, _event_type: &str, _metrics: &CompletionMetrics) {}

    #[inline]
    fn record_init(
        &self,
        _model_name: &str,
        _success: bool,
        _duration_ms: f64,
        _error_msg: Option<&str>,
    ) {
    }

    #[inline]
    fn record_transcription(
        &self,
        _audio_data: Option<&str>,
        _success: bool,
        _audio_duration_sec: f64,
        _transcription_duration_sec: f64,
        _cost_usd: f64,
        _num_speakers: i32,
        _language: Option<&str>,
    ) {
    }

    #[inline]
    fn record_stream_transcription(
        &self,
        _session_id: &str,
        _is_final: bool,
        _audio_duration_sec: f64,
        _transcription_duration_sec: f64,
        _cost_usd: f64,
        _chunk_index: i32,
        _time_to_first_token: f64,
        _time_per_chunk: f64,
        _total_transcription_time: f64,
        _num_speakers: i32,
        _language: Option<&str>,
    ) {
    }
}
