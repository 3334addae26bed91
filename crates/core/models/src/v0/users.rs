auto_derived!(
    /// Public view of a catalog user account
    pub struct User {
        /// Unique Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Username
        pub username: String,
    }
);
