//! Asset criticality file processing outcome
//!
//! After a CSV of asset criticality assignments is bulk-upserted, the caller
//! turns the upsert statistics and the processing window into a single
//! telemetry event. Both [`classify_upload`] and [`create_processed_file_event`]
//! are pure: no I/O, no logging, no hidden state.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

use crate::domain::{constant::event_type, event::EventPayload};

/// Statistics returned by the asset criticality bulk upsert.
///
/// `successful + failed` may be lower than `total` when the upsert skipped lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeStatistics {
    /// Records successfully created or updated
    pub successful: u64,
    /// Records which had errors
    pub failed:     u64,
    /// Lines in the uploaded file
    pub total:      u64
}

impl OutcomeStatistics {
    pub fn new(successful: u64, failed: u64, total: u64) -> Self {
        Self { successful, failed, total }
    }
}

/// Outcome of an upload, derived from [`OutcomeStatistics`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadStatus {
    Success,
    PartialSuccess,
    Fail
}

impl UploadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UploadStatus::Success => "success",
            UploadStatus::PartialSuccess => "partial_success",
            UploadStatus::Fail => "fail"
        }
    }
}

impl Display for UploadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classify an upload. First matching rule wins:
///
/// 1. no statistics: `fail`
/// 2. no failures: `success`, even when nothing was written
/// 3. some written: `partial_success`
/// 4. otherwise `fail`
pub fn classify_upload(stats: Option<&OutcomeStatistics>) -> UploadStatus {
    let Some(stats) = stats else {
        return UploadStatus::Fail;
    };

    if stats.failed == 0 {
        return UploadStatus::Success;
    }

    if stats.successful > 0 {
        return UploadStatus::PartialSuccess;
    }

    UploadStatus::Fail
}

/// Start and end of a processing run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingWindow {
    pub start_time: DateTime<Utc>,
    pub end_time:   DateTime<Utc>
}

impl ProcessingWindow {
    pub fn new(start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> Self {
        Self { start_time, end_time }
    }

    /// Elapsed milliseconds. Negative when `end_time` precedes `start_time`.
    pub fn took_ms(&self) -> i64 {
        self.end_time.timestamp_millis() - self.start_time.timestamp_millis()
    }
}

/// Serialized form of a [`ProcessingWindow`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingSummary {
    pub start_time: String,
    pub end_time:   String,
    pub took_ms:    i64
}

impl From<ProcessingWindow> for ProcessingSummary {
    fn from(window: ProcessingWindow) -> Self {
        Self {
            start_time: to_iso_string(&window.start_time),
            end_time:   to_iso_string(&window.end_time),
            took_ms:    window.took_ms()
        }
    }
}

/// `2024-01-01T00:00:05.000Z`
fn to_iso_string(time: &DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Payload of the asset criticality processed-file event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedFileEvent {
    pub processing: ProcessingSummary,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result:     Option<OutcomeStatistics>,
    pub status:     UploadStatus
}

impl EventPayload for ProcessedFileEvent {
    fn event_type(&self) -> &'static str {
        event_type::ASSET_CRITICALITY_PROCESSED_FILE
    }
}

/// Build the processed-file event for one upload run.
///
/// Returns the event type together with the payload so the pair can be handed
/// straight to a reporter.
pub fn create_processed_file_event(
    result: Option<OutcomeStatistics>,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>
) -> (&'static str, ProcessedFileEvent) {
    let status = classify_upload(result.as_ref());
    let processing = ProcessingWindow::new(start_time, end_time).into();

    (event_type::ASSET_CRITICALITY_PROCESSED_FILE, ProcessedFileEvent { processing, result, status })
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;

    fn at(secs: i64, millis: u32) -> DateTime<Utc> {
        Utc.timestamp_opt(1_704_067_200 + secs, millis * 1_000_000).unwrap()
    }

    #[test]
    fn test_status_without_statistics_is_fail() {
        assert_eq!(classify_upload(None), UploadStatus::Fail);
    }

    #[test]
    fn test_status_all_zero_is_success() {
        assert_eq!(classify_upload(Some(&OutcomeStatistics::new(0, 0, 0))), UploadStatus::Success);
    }

    #[test]
    fn test_status_no_failures_is_success() {
        assert_eq!(classify_upload(Some(&OutcomeStatistics::new(5, 0, 5))), UploadStatus::Success);
    }

    #[test]
    fn test_status_mixed_is_partial_success() {
        assert_eq!(classify_upload(Some(&OutcomeStatistics::new(3, 2, 5))), UploadStatus::PartialSuccess);
    }

    #[test]
    fn test_status_all_failed_is_fail() {
        assert_eq!(classify_upload(Some(&OutcomeStatistics::new(0, 5, 5))), UploadStatus::Fail);
    }

    #[test]
    fn test_status_ignores_total() {
        // skipped lines don't affect the outcome
        assert_eq!(classify_upload(Some(&OutcomeStatistics::new(1, 1, 100))), UploadStatus::PartialSuccess);
    }

    #[test]
    fn test_status_serializes_snake_case() {
        assert_eq!(serde_json::to_value(UploadStatus::PartialSuccess).unwrap(), json!("partial_success"));
        assert_eq!(UploadStatus::Fail.to_string(), "fail");
    }

    #[test]
    fn test_processed_file_event_end_to_end() {
        let (event_type, payload) =
            create_processed_file_event(Some(OutcomeStatistics::new(8, 2, 10)), at(0, 0), at(5, 0));

        assert_eq!(event_type, "Asset Criticality Csv Upload Processed");
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "processing": {
                    "startTime": "2024-01-01T00:00:00.000Z",
                    "endTime": "2024-01-01T00:00:05.000Z",
                    "tookMs": 5000
                },
                "result": { "successful": 8, "failed": 2, "total": 10 },
                "status": "partial_success"
            })
        );
    }

    #[test]
    fn test_processed_file_event_without_result() {
        let (_, payload) = create_processed_file_event(None, at(0, 0), at(1, 250));
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(payload.status, UploadStatus::Fail);
        assert_eq!(value["processing"]["tookMs"], json!(1250));
        assert!(value.get("result").is_none());
    }

    #[test]
    fn test_negative_duration_is_preserved() {
        let (_, payload) = create_processed_file_event(Some(OutcomeStatistics::new(1, 0, 1)), at(10, 0), at(7, 500));

        assert_eq!(payload.processing.took_ms, -2500);
        assert_eq!(payload.status, UploadStatus::Success);
    }

    #[test]
    fn test_status_matches_classifier() {
        let samples = [
            None,
            Some(OutcomeStatistics::new(0, 0, 0)),
            Some(OutcomeStatistics::new(4, 1, 5)),
            Some(OutcomeStatistics::new(0, 3, 3)),
        ];

        for stats in samples {
            let (_, payload) = create_processed_file_event(stats, at(0, 0), at(0, 1));
            assert_eq!(payload.status, classify_upload(stats.as_ref()));
        }
    }

    #[test]
    fn test_build_is_repeatable() {
        let stats = Some(OutcomeStatistics::new(2, 2, 4));

        assert_eq!(
            create_processed_file_event(stats, at(0, 0), at(3, 0)),
            create_processed_file_event(stats, at(0, 0), at(3, 0))
        );
    }

    #[test]
    fn test_sub_millisecond_precision_is_truncated() {
        let start = Utc.timestamp_opt(1_704_067_200, 999_999).unwrap();
        let end = Utc.timestamp_opt(1_704_067_200, 2_000_001).unwrap();
        let summary: ProcessingSummary = ProcessingWindow::new(start, end).into();

        assert_eq!(summary.start_time, "2024-01-01T00:00:00.000Z");
        assert_eq!(summary.end_time, "2024-01-01T00:00:00.002Z");
        assert_eq!(summary.took_ms, 2);
    }
}
