use bazaar_database::{AbuseReport, Addon, AddonLookup, Database, User};
use bazaar_models::v0;
use bazaar_ratelimits::rocket::ClientIp;
use bazaar_result::{create_error, Result};
use rocket::serde::json::Json;
use rocket::State;
use schemars::JsonSchema;
use serde::Deserialize;
use ulid::Ulid;
use validator::Validate;

/// # Report Data
#[derive(Validate, Deserialize, JsonSchema)]
pub struct DataReportAddon {
    /// Add-on being reported: catalog id, slug or external guid
    addon: String,
    /// Report content
    #[validate(length(min = 1, max = 1000))]
    message: String,
}

/// # Report Add-on
///
/// Report an add-on to the moderation team.
///
/// Reports may be filed anonymously; authenticated reporters are recorded.
#[openapi(tag = "Abuse Reports")]
#[post("/report_addon", data = "<data>")]
pub async fn report_addon(
    db: &State<Database>,
    user: Option<User>,
    ip: ClientIp,
    data: Json<DataReportAddon>,
) -> Result<Json<v0::AbuseReport>> {
    let data = data.into_inner();
    data.validate()
        .map_err(|error| create_error!(FailedValidation {
            error: error.to_string()
        }))?;

    super::enforce_report_quota(db, user.as_ref(), &ip).await?;

    // Identifiers shaped like an external guid are recorded as-is without
    // requiring a catalog match; anything else must resolve to a public
    // add-on.
    let target = match Addon::lookup_field(&data.addon) {
        AddonLookup::Guid => v0::ReportedTarget::Addon {
            id: None,
            guid: data.addon,
        },
        AddonLookup::Id => resolved_target(db.fetch_addon(&data.addon).await?)?,
        AddonLookup::Slug => resolved_target(db.fetch_addon_by_slug(&data.addon).await?)?,
    };

    let report = AbuseReport {
        id: Ulid::new().to_string(),
        reporter_id: user.as_ref().map(|user| user.id.to_string()),
        reporter_ip: ip.0.to_string(),
        target,
        message: data.message,
    };

    db.insert_abuse_report(&report).await?;
    super::record_report_quota(db, user.as_ref(), &ip).await?;

    Ok(Json(report.into_public()))
}

/// The stored guid always comes from the catalog record, never from the
/// caller-supplied identifier.
fn resolved_target(addon: Addon) -> Result<v0::ReportedTarget> {
    if !addon.is_public() {
        return Err(create_error!(NotFound));
    }

    Ok(v0::ReportedTarget::Addon {
        id: Some(addon.id),
        guid: addon.guid,
    })
}

#[cfg(test)]
mod test {
    use crate::util::test::TestHarness;
    use bazaar_database::{AddonStatus, RatelimitEvent, RatelimitEventType};
    use bazaar_models::v0;
    use rocket::http::{ContentType, Header, Status};

    #[rocket::async_test]
    async fn success_report_addon_by_id() {
        let harness = TestHarness::new().await;
        let addon = harness.new_addon(AddonStatus::Approved).await;

        let response = harness
            .client
            .post("/abuse/report_addon")
            .header(ContentType::JSON)
            .body(json!({ "addon": addon.id, "message": "distributes malware" }).to_string())
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::Ok);

        let report: v0::AbuseReport = response.into_json().await.expect("`AbuseReport`");
        assert_eq!(
            report.target,
            v0::ReportedTarget::Addon {
                id: Some(addon.id.to_string()),
                guid: addon.guid.to_string()
            }
        );

        let stored = harness
            .db
            .fetch_abuse_report(&report.id)
            .await
            .expect("`AbuseReport`");
        assert_eq!(stored.target, report.target);
        assert_eq!(stored.reporter_id, None);
    }

    #[rocket::async_test]
    async fn success_report_addon_by_slug_stores_record_guid() {
        let harness = TestHarness::new().await;
        let addon = harness.new_addon(AddonStatus::Approved).await;

        let response = harness
            .client
            .post("/abuse/report_addon")
            .header(ContentType::JSON)
            .body(json!({ "addon": addon.slug, "message": "spam listing" }).to_string())
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::Ok);

        let report: v0::AbuseReport = response.into_json().await.expect("`AbuseReport`");
        assert_eq!(
            report.target,
            v0::ReportedTarget::Addon {
                id: Some(addon.id.to_string()),
                guid: addon.guid.to_string()
            }
        );
    }

    #[rocket::async_test]
    async fn success_report_unknown_guid_without_catalog_match() {
        let harness = TestHarness::new().await;

        let response = harness
            .client
            .post("/abuse/report_addon")
            .header(ContentType::JSON)
            .body(json!({ "addon": "sideloaded@evil.example", "message": "phishing" }).to_string())
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::Ok);

        let report: v0::AbuseReport = response.into_json().await.expect("`AbuseReport`");
        assert_eq!(
            report.target,
            v0::ReportedTarget::Addon {
                id: None,
                guid: "sideloaded@evil.example".to_string()
            }
        );
    }

    #[rocket::async_test]
    async fn fails_report_unknown_addon() {
        let harness = TestHarness::new().await;

        let response = harness
            .client
            .post("/abuse/report_addon")
            .header(ContentType::JSON)
            .body(json!({ "addon": "does-not-exist", "message": "spam" }).to_string())
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::NotFound);
    }

    #[rocket::async_test]
    async fn fails_report_hidden_addon() {
        let harness = TestHarness::new().await;
        let addon = harness.new_addon(AddonStatus::Disabled).await;

        let response = harness
            .client
            .post("/abuse/report_addon")
            .header(ContentType::JSON)
            .body(json!({ "addon": addon.id, "message": "spam" }).to_string())
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::NotFound);
    }

    #[rocket::async_test]
    async fn fails_report_with_empty_message() {
        let harness = TestHarness::new().await;
        let addon = harness.new_addon(AddonStatus::Approved).await;

        let response = harness
            .client
            .post("/abuse/report_addon")
            .header(ContentType::JSON)
            .body(json!({ "addon": addon.id, "message": "" }).to_string())
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::BadRequest);
    }

    #[rocket::async_test]
    async fn fails_ratelimited_user_after_daily_quota() {
        let harness = TestHarness::new().await;
        let (_, session, user) = harness.new_user().await;

        for _ in 0..19 {
            RatelimitEvent::create(
                &harness.db,
                user.id.to_string(),
                RatelimitEventType::AbuseReport,
            )
            .await
            .expect("`RatelimitEvent`");
        }

        // The twentieth submission of the day is still within quota.
        let response = harness
            .client
            .post("/abuse/report_addon")
            .header(Header::new("x-session-token", session.token.to_string()))
            .header(ContentType::JSON)
            .body(json!({ "addon": "sideloaded@evil.example", "message": "spam" }).to_string())
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::Ok);

        let response = harness
            .client
            .post("/abuse/report_addon")
            .header(Header::new("x-session-token", session.token.to_string()))
            .header(ContentType::JSON)
            .body(json!({ "addon": "sideloaded@evil.example", "message": "spam" }).to_string())
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::TooManyRequests);
    }

    #[rocket::async_test]
    async fn fails_ratelimited_address_after_daily_quota() {
        let harness = TestHarness::new().await;

        // Anonymous submissions are tracked by originating address only.
        for _ in 0..20 {
            RatelimitEvent::create(
                &harness.db,
                "127.0.0.1".to_string(),
                RatelimitEventType::AbuseReport,
            )
            .await
            .expect("`RatelimitEvent`");
        }

        let response = harness
            .client
            .post("/abuse/report_addon")
            .remote("127.0.0.1:8000".parse().expect("`SocketAddr`"))
            .header(ContentType::JSON)
            .body(json!({ "addon": "sideloaded@evil.example", "message": "spam" }).to_string())
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::TooManyRequests);
    }
}
