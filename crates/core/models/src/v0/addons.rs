auto_derived!(
    /// Public listing of an add-on tracked by the catalog
    pub struct Addon {
        /// Unique Id
        #[serde(rename = "_id")]
        pub id: String,
        /// URL name of the add-on
        pub slug: String,
        /// Canonical external identifier
        pub guid: String,
        /// Display name
        pub name: String,
    }
);
