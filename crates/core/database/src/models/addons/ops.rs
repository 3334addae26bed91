use bazaar_result::Result;

use crate::Addon;

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractAddons: Sync + Send {
    /// Insert a new add-on into the database
    async fn insert_addon(&self, addon: &Addon) -> Result<()>;

    /// Fetch an add-on by its id
    async fn fetch_addon(&self, id: &str) -> Result<Addon>;

    /// Fetch an add-on by its URL slug
    async fn fetch_addon_by_slug(&self, slug: &str) -> Result<Addon>;

    /// Fetch an add-on by its external guid
    async fn fetch_addon_by_guid(&self, guid: &str) -> Result<Addon>;
}
