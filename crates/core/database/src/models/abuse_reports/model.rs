use bazaar_models::v0;
use bazaar_models::v0::ReportedTarget;

auto_derived!(
    /// User-submitted complaint referencing a target entity
    ///
    /// Written once on submission; moderation tooling only ever reads it.
    pub struct AbuseReport {
        /// Unique Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Id of the user filing this report, if authenticated
        #[serde(skip_serializing_if = "Option::is_none")]
        pub reporter_id: Option<String>,
        /// Network address the report originated from
        pub reporter_ip: String,
        /// What the report was filed against
        pub target: ReportedTarget,
        /// Free-text report content
        pub message: String,
    }
);

impl AbuseReport {
    /// Convert to public-facing structure
    pub fn into_public(self) -> v0::AbuseReport {
        v0::AbuseReport {
            id: self.id,
            target: self.target,
            message: self.message,
        }
    }
}
