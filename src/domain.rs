use serde::{Deserialize, Serialize};

// Field order and types are shared with the real backend build
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CompletionMetrics {
    pub prompt_tokens: f64,
    pub completion_tokens: f64,
    pub total_tokens: f64,
    pub model_id: i32,
    pub is_cached: bool,
    pub cache_hit_tokens: f64,
    pub time_to_first_token: f64,
    pub time_per_output_token: f64,
    pub event_timestamp: f64,
}

pub trait Telemetry: Send + Sync + 'static {
    fn name(&self) -> &'static str;

    fn init(&self, api_key: Option<&str>, endpoint: Option<&str>, model: Option<&str>);

    fn set_cloud_disabled(&self, disabled: bool);

    fn set_stream_mode(&self, enabled: bool);

    fn record_completion(&self, event_type: &str, metrics: &CompletionMetrics);

    fn record_init(
        &self,
        model_name: &str,
        success: bool,
        duration_ms: f64,
        error_msg: Option<&str>,
    );

    #[allow(clippy::too_many_arguments)]
    fn record_transcription(
        &self,
        audio_data: Option<&str>,
        success: bool,
        audio_duration_sec: f64,
        transcription_duration_sec: f64,
        cost_usd: f64,
        num_speakers: i32,
        language: Option<&str>,
    );

    #[allow(clippy::too_many_arguments)]
    fn record_stream_transcription(
        &self,
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
    );
}

#[cfg(test)]
mod tests {
    use crate::domain::CompletionMetrics;
    use std::mem::{align_of, offset_of, size_of};

    #[test]
    fn test_completion_metrics_layout_matches_c_record() {
        assert_eq!(offset_of!(CompletionMetrics, prompt_tokens), 0);
        assert_eq!(offset_of!(CompletionMetrics, completion_tokens), 8);
        assert_eq!(offset_of!(CompletionMetrics, total_tokens), 16);
        assert_eq!(offset_of!(CompletionMetrics, model_id), 24);
        assert_eq!(offset_of!(CompletionMetrics, is_cached), 28);
        assert_eq!(offset_of!(CompletionMetrics, cache_hit_tokens), 32);
        assert_eq!(offset_of!(CompletionMetrics, time_to_first_token), 40);
        assert_eq!(offset_of!(CompletionMetrics, time_per_output_token), 48);
        assert_eq!(offset_of!(CompletionMetrics, event_timestamp), 56);

        assert_eq!(size_of::<CompletionMetrics>(), 64);
        assert_eq!(align_of::<CompletionMetrics>(), 8);
    }

    #[test]
    fn test_completion_metrics_serialized_field_names() {
        let metrics = CompletionMetrics {
            prompt_tokens: 10.0,
            completion_tokens: 5.0,
            total_tokens: 15.0,
            model_id: 1,
            is_cached: false,
            cache_hit_tokens: 0.0,
            time_to_first_token: 0.1,
            time_per_output_token: 0.02,
            event_timestamp: 1000.0,
        };

        let value = serde_json::to_value(metrics).expect("Failed to serialize metrics");
        let keys = value
            .as_object()
            .expect("Metrics must serialize as an object")
            .keys()
            .cloned()
            .collect::<Vec<_>>();

        let mut expected = vec![
            "prompt_tokens",
            "completion_tokens",
            "total_tokens",
            "model_id",
            "is_cached",
            "cache_hit_tokens",
            "time_to_first_token",
            "time_per_output_token",
            "event_timestamp",
        ];
        // serde_json's default map is sorted
        expected.sort();
        assert_eq!(keys, expected);

        let restored: CompletionMetrics =
            serde_json::from_value(value).expect("Failed to deserialize metrics");
        assert_eq!(restored, metrics);
    }

    #[test]
    fn test_default_completion_metrics_is_zeroed() {
        let metrics = CompletionMetrics::default();
        assert_eq!(metrics.total_tokens, 0.0);
        assert_eq!(metrics.model_id, 0);
        assert!(!metrics.is_cached);
    }
}
