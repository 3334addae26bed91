use std::str::FromStr;

use bazaar_result::Result;
use ulid::Ulid;
#[cfg(feature = "rocket-impl")]
use rocket::request::FromParam;
#[cfg(feature = "rocket-impl")]
use schemars::{
    schema::{InstanceType, Schema, SchemaObject, SingleOrVec},
    JsonSchema,
};

use crate::{Addon, AddonLookup, Database, User};

/// Reference to some object in the database
pub struct Reference<'a> {
    /// Id of object
    pub id: &'a str,
}

impl<'a> Reference<'a> {
    /// Create a Ref from an unchecked string
    pub fn from_unchecked(id: &'a str) -> Reference<'a> {
        Reference { id }
    }

    /// Fetch add-on from Ref, resolving it as an id, guid or slug
    ///
    /// Add-ons which are not publicly visible resolve the same way as
    /// missing records.
    pub async fn as_addon(&self, db: &Database) -> Result<Addon> {
        let addon = match Addon::lookup_field(self.id) {
            AddonLookup::Id => db.fetch_addon(self.id).await?,
            AddonLookup::Guid => db.fetch_addon_by_guid(self.id).await?,
            AddonLookup::Slug => db.fetch_addon_by_slug(self.id).await?,
        };

        if !addon.is_public() {
            return Err(create_error!(NotFound));
        }

        Ok(addon)
    }

    /// Fetch user from Ref, resolving it as an account id or username
    pub async fn as_user(&self, db: &Database) -> Result<User> {
        if Ulid::from_str(self.id).is_ok() {
            db.fetch_user(self.id).await
        } else {
            db.fetch_user_by_username(self.id).await
        }
    }
}

#[cfg(feature = "rocket-impl")]
impl<'r> FromParam<'r> for Reference<'r> {
    type Error = &'r str;

    fn from_param(param: &'r str) -> Result<Self, Self::Error> {
        Ok(Reference::from_unchecked(param))
    }
}

#[cfg(feature = "rocket-impl")]
impl<'a> JsonSchema for Reference<'a> {
    fn schema_name() -> String {
        "Id".to_string()
    }

    fn json_schema(_gen: &mut schemars::gen::SchemaGenerator) -> Schema {
        Schema::Object(SchemaObject {
            instance_type: Some(SingleOrVec::Single(Box::new(InstanceType::String))),
            ..Default::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use ulid::Ulid;

    use super::Reference;
    use crate::{Addon, AddonStatus, Database, DatabaseInfo, User};

    async fn db_with_addon(status: AddonStatus) -> (Database, Addon) {
        let db = DatabaseInfo::Reference.connect().await.expect("`Database`");

        let addon = Addon {
            id: Ulid::new().to_string(),
            slug: "night-mode".to_string(),
            guid: "night-mode@bazaar.dev".to_string(),
            name: "Night Mode".to_string(),
            status,
            disabled_by_user: false,
        };

        db.insert_addon(&addon).await.expect("`Addon`");
        (db, addon)
    }

    #[async_std::test]
    async fn resolve_addon_by_id_slug_and_guid() {
        let (db, addon) = db_with_addon(AddonStatus::Approved).await;

        for identifier in [&addon.id, &addon.slug, &addon.guid] {
            let found = Reference::from_unchecked(identifier)
                .as_addon(&db)
                .await
                .expect("`Addon`");
            assert_eq!(found.id, addon.id);
        }
    }

    #[async_std::test]
    async fn hidden_addons_resolve_as_missing() {
        let (db, addon) = db_with_addon(AddonStatus::Disabled).await;

        assert!(Reference::from_unchecked(&addon.slug)
            .as_addon(&db)
            .await
            .is_err());
    }

    #[async_std::test]
    async fn resolve_user_by_id_or_username() {
        let db = DatabaseInfo::Reference.connect().await.expect("`Database`");
        let user = User::create(&db, "wheatley".to_string(), Ulid::new().to_string())
            .await
            .expect("`User`");

        for identifier in [&user.id, &user.username] {
            let found = Reference::from_unchecked(identifier)
                .as_user(&db)
                .await
                .expect("`User`");
            assert_eq!(found.id, user.id);
        }

        assert!(Reference::from_unchecked("nobody")
            .as_user(&db)
            .await
            .is_err());
    }
}
