auto_derived!(
    /// User-submitted complaint referencing a target entity
    pub struct AbuseReport {
        /// Unique Id
        #[serde(rename = "_id")]
        pub id: String,
        /// What the report was filed against
        pub target: ReportedTarget,
        /// Free-text report content
        pub message: String,
    }

    /// The entity being reported
    #[serde(tag = "type")]
    pub enum ReportedTarget {
        /// Report an add-on
        Addon {
            /// Id of the catalog record, when one was resolved
            id: Option<String>,
            /// Canonical external identifier of the add-on
            guid: String,
        },
        /// Report a user account
        User {
            /// Id of the account
            id: String,
        },
    }
);
