use bazaar_result::Result;

use crate::Addon;
use crate::ReferenceDb;

use super::AbstractAddons;

#[async_trait]
impl AbstractAddons for ReferenceDb {
    /// Insert a new add-on into the database
    async fn insert_addon(&self, addon: &Addon) -> Result<()> {
        let mut addons = self.addons.lock().await;
        if addons.contains_key(&addon.id) {
            Err(create_database_error!("insert", "addons"))
        } else {
            addons.insert(addon.id.to_string(), addon.clone());
            Ok(())
        }
    }

    /// Fetch an add-on by its id
    async fn fetch_addon(&self, id: &str) -> Result<Addon> {
        let addons = self.addons.lock().await;
        addons
            .get(id)
            .cloned()
            .ok_or_else(|| create_error!(NotFound))
    }

    /// Fetch an add-on by its URL slug
    async fn fetch_addon_by_slug(&self, slug: &str) -> Result<Addon> {
        let addons = self.addons.lock().await;
        addons
            .values()
            .find(|addon| addon.slug == slug)
            .cloned()
            .ok_or_else(|| create_error!(NotFound))
    }

    /// Fetch an add-on by its external guid
    async fn fetch_addon_by_guid(&self, guid: &str) -> Result<Addon> {
        let addons = self.addons.lock().await;
        addons
            .values()
            .find(|addon| addon.guid == guid)
            .cloned()
            .ok_or_else(|| create_error!(NotFound))
    }
}
