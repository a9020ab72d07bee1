use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A visitor asking to hear about a course that has not launched yet.
///
/// Stored as `{"course": .., "email": .., "timestamp": ..}`; the older
/// `courseTitle` spelling is accepted when reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRequest {
    #[serde(rename = "course", alias = "courseTitle")]
    pub course_title: String,
    pub email: String,
    pub timestamp: DateTime<Utc>,
}
