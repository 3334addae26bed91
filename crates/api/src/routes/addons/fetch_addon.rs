use bazaar_database::{util::reference::Reference, Database};
use bazaar_models::v0;
use bazaar_result::Result;
use rocket::serde::json::Json;
use rocket::State;

/// # Fetch Add-on
///
/// Retrieve a public add-on listing by its id, slug or guid.
#[openapi(tag = "Add-ons")]
#[get("/<target>")]
pub async fn fetch_addon(db: &State<Database>, target: Reference<'_>) -> Result<Json<v0::Addon>> {
    let addon = target.as_addon(db).await?;
    Ok(Json(addon.into_public()))
}

#[cfg(test)]
mod test {
    use crate::util::test::TestHarness;
    use bazaar_database::AddonStatus;
    use bazaar_models::v0;
    use rocket::http::Status;

    #[rocket::async_test]
    async fn success_fetch_addon_by_slug() {
        let harness = TestHarness::new().await;
        let addon = harness.new_addon(AddonStatus::Approved).await;

        let response = harness
            .client
            .get(format!("/addons/{}", addon.slug))
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::Ok);

        let listing: v0::Addon = response.into_json().await.expect("`Addon`");
        assert_eq!(listing.id, addon.id);
        assert_eq!(listing.guid, addon.guid);
    }

    #[rocket::async_test]
    async fn fails_fetch_hidden_addon() {
        let harness = TestHarness::new().await;
        let addon = harness.new_addon(AddonStatus::Nominated).await;

        let response = harness
            .client
            .get(format!("/addons/{}", addon.id))
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::NotFound);
    }
}
