use std::fmt;

use bazaar_result::Result;
use ulid::Ulid;

use crate::Database;

auto_derived!(
    /// Ratelimit Event
    ///
    /// The creation instant is embedded in the id, which makes counting
    /// events inside a rolling window a plain range query.
    pub struct RatelimitEvent {
        /// Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Relevant Object Id
        pub target_id: String,
        /// Type of event
        pub event_type: RatelimitEventType,
    }

    /// Event type
    pub enum RatelimitEventType {
        AbuseReport,
    }
);

impl fmt::Display for RatelimitEventType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl RatelimitEvent {
    /// Create ratelimit event
    pub async fn create(
        db: &Database,
        target_id: String,
        event_type: RatelimitEventType,
    ) -> Result<()> {
        db.insert_ratelimit_event(&RatelimitEvent {
            id: Ulid::new().to_string(),
            target_id,
            event_type,
        })
        .await
    }
}
