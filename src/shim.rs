use crate::domain::{CompletionMetrics, Telemetry};
use crate::no_operation::NoOpTelemetry;

const BACKEND: NoOpTelemetry = NoOpTelemetry::new();

pub fn init(api_key: Option<&str>, endpoint: Option<&str>, model: Option<&str>) {
    BACKEND.init(api_key, endpoint, model);
}

pub fn set_cloud_disabled(disabled: bool) {
    BACKEND.set_cloud_disabled(disabled);
}

pub fn set_stream_mode(enabled: bool) {
    BACKEND.set_stream_mode(enabled);
}

pub fn record_completion(event_type: &str, metrics: &CompletionMetrics) {
    BACKEND.record_completion(event_type, metrics);
}

pub fn record_init(model_name: &str, success: bool, duration_ms: f64, error_msg: Option<&str>) {
    BACKEND.record_init(model_name, success, duration_ms, error_msg);
}

pub fn record_transcription(
    audio_data: Option<&str>,
    success: bool,
    audio_duration_sec: f64,
    transcription_duration_sec: f64,
    cost_usd: f64,
    num_speakers: i32,
    language: Option<&str>,
) {
    BACKEND.record_transcription(
        audio_data,
        success,
        audio_duration_sec,
        transcription_duration_sec,
        cost_usd,
        num_speakers,
        language,
    );
}

#[allow(clippy::too_many_arguments)]
pub fn record_stream_transcription(
    session_id: &str,
    is_final: bool,
    audio_duration_sec: f64,
    transcription_duration_sec: f64,
    cost_usd: f64,
    chunk_index: i32,
    time_to_first_token: f64,
    time_per_chunk: f64,
    total_transcription_time: f64,
    num_speakers: i32,
    language: Option<&str>,
) {
    BACKEND.record_stream_transcription(
        session_id,
        is_final,
        audio_duration_sec,
        transcription_duration_sec,
        cost_usd,
        chunk_index,
        time_to_first_token,
        time_per_chunk,
        total_transcription_time,
        num_speakers,
        language,
    );
}
