use bazaar_models::v0;
use bazaar_result::Result;

use crate::Database;

auto_derived!(
    /// Catalog user account
    pub struct User {
        /// Unique Id, shared with the auth account
        #[serde(rename = "_id")]
        pub id: String,
        /// Username
        pub username: String,
        /// Whether this user is privileged
        #[serde(skip_serializing_if = "crate::if_false", default)]
        pub privileged: bool,
    }
);

impl User {
    /// Create a new user
    pub async fn create(db: &Database, username: String, account_id: String) -> Result<User> {
        let user = User {
            id: account_id,
            username,
            privileged: false,
        };

        db.insert_user(&user).await?;
        Ok(user)
    }

    /// Convert to public-facing structure
    pub fn into_public(self) -> v0::User {
        v0::User {
            id: self.id,
            username: self.username,
        }
    }
}
