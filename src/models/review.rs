// src/models/review.rs
use chrono::{DateTime, Local, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i64,             // Server id, or creation time in ms for unsaved reviews
    pub isbn: String,        // Book the review is attached to
    pub user_id: String,     // Author of the review
    pub create_date: String, // ISO-8601, offset optional when coming from the server
    pub content: String,
}

impl Review {
    /// Builds the client-side copy of a review that has not reached the server yet.
    /// The id is a placeholder until the next reconciliation replaces the list.
    pub fn draft(isbn: &str, user_id: &str, content: String, now: DateTime<Utc>) -> Self {
        Self {
            id: now.timestamp_millis(),
            isbn: isbn.to_string(),
            user_id: user_id.to_string(),
            create_date: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            content,
        }
    }

    /// Calendar date shown in the review header.
    pub fn display_date(&self) -> String {
        if let Ok(stamp) = DateTime::parse_from_rfc3339(&self.create_date) {
            return stamp.with_timezone(&Local).format("%Y-%m-%d").to_string();
        }
        // Timestamps without an offset are taken as-is.
        ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"]
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(&self.create_date, fmt).ok())
            .map(|stamp| stamp.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| self.create_date.clone())
    }
}

/// Body of an edit request; only the content of a review can change.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ReviewUpdate {
    pub content: String,
}
