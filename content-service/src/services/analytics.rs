//! Aggregate statistics over an organization's prompt records.

use crate::dtos::{AnalyticsResponse, FeedbackEntry};
use crate::models::PromptRecord;

/// Number of trailing records reported as recent feedback.
pub const RECENT_FEEDBACK_COUNT: usize = 5;

/// Summarize prompt records given in natural store order.
///
/// Unrated records count as a rating of zero, so they pull the average down
/// instead of being excluded. The recent feedback list is the tail of the
/// input order, not a time-sorted view. Returns `None` for no records.
pub fn summarize(records: &[PromptRecord]) -> Option<AnalyticsResponse> {
    if records.is_empty() {
        return None;
    }

    let total = records.len();
    let sum: f64 = records.iter().map(|r| r.rating.unwrap_or(0.0)).sum();
    let average = sum / total as f64;

    let last5_feedbacks = records[total.saturating_sub(RECENT_FEEDBACK_COUNT)..]
        .iter()
        .map(|r| FeedbackEntry {
            prompt: r.prompt.clone(),
            rating: r.rating,
            feedback: r.feedback.clone(),
        })
        .collect();

    Some(AnalyticsResponse {
        total_generated: total as u64,
        average_rating: format_rating(average),
        last5_feedbacks,
    })
}

/// Two-decimal text rendering, with exact halves rounded away from zero.
pub fn format_rating(value: f64) -> String {
    format!("{:.2}", (value * 100.0).round() / 100.0)
}
