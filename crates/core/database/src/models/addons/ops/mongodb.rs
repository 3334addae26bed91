use bazaar_result::Result;

use crate::Addon;
use crate::MongoDb;

use super::AbstractAddons;

static COL: &str = "addons";

#[async_trait]
impl AbstractAddons for MongoDb {
    /// Insert a new add-on into the database
    async fn insert_addon(&self, addon: &Addon) -> Result<()> {
        query!(self, insert_one, COL, &addon).map(|_| ())
    }

    /// Fetch an add-on by its id
    async fn fetch_addon(&self, id: &str) -> Result<Addon> {
        query!(self, find_one_by_id, COL, id)?.ok_or_else(|| create_error!(NotFound))
    }

    /// Fetch an add-on by its URL slug
    async fn fetch_addon_by_slug(&self, slug: &str) -> Result<Addon> {
        query!(
            self,
            find_one,
            COL,
            doc! {
                "slug": slug
            }
        )?
        .ok_or_else(|| create_error!(NotFound))
    }

    /// Fetch an add-on by its external guid
    async fn fetch_addon_by_guid(&self, guid: &str) -> Result<Addon> {
        query!(
            self,
            find_one,
            COL,
            doc! {
                "guid": guid
            }
        )?
        .ok_or_else(|| create_error!(NotFound))
    }
}
