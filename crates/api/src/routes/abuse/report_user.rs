use bazaar_database::{util::reference::Reference, AbuseReport, Database, User};
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
pub struct DataReportUser {
    /// User being reported: account id or username
    user: String,
    /// Report content
    #[validate(length(min = 1, max = 1000))]
    message: String,
}

/// # Report User
///
/// Report a user account to the moderation team.
///
/// Reports may be filed anonymously; authenticated reporters are recorded.
#[openapi(tag = "Abuse Reports")]
#[post("/report_user", data = "<data>")]
pub async fn report_user(
    db: &State<Database>,
    user: Option<User>,
    ip: ClientIp,
    data: Json<DataReportUser>,
) -> Result<Json<v0::AbuseReport>> {
    let data = data.into_inner();
    data.validate()
        .map_err(|error| create_error!(FailedValidation {
            error: error.to_string()
        }))?;

    super::enforce_report_quota(db, user.as_ref(), &ip).await?;

    let reported = Reference::from_unchecked(&data.user).as_user(db).await?;

    let report = AbuseReport {
        id: Ulid::new().to_string(),
        reporter_id: user.as_ref().map(|user| user.id.to_string()),
        reporter_ip: ip.0.to_string(),
        target: v0::ReportedTarget::User { id: reported.id },
        message: data.message,
    };

    db.insert_abuse_report(&report).await?;
    super::record_report_quota(db, user.as_ref(), &ip).await?;

    Ok(Json(report.into_public()))
}

#[cfg(test)]
mod test {
    use crate::util::test::TestHarness;
    use bazaar_models::v0;
    use rocket::http::{ContentType, Header, Status};

    #[rocket::async_test]
    async fn success_report_user_by_username() {
        let harness = TestHarness::new().await;
        let (_, session, reporter) = harness.new_user().await;
        let (_, _, reported) = harness.new_user().await;

        let response = harness
            .client
            .post("/abuse/report_user")
            .header(Header::new("x-session-token", session.token.to_string()))
            .header(ContentType::JSON)
            .body(json!({ "user": reported.username, "message": "harassment" }).to_string())
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::Ok);

        let report: v0::AbuseReport = response.into_json().await.expect("`AbuseReport`");
        assert_eq!(
            report.target,
            v0::ReportedTarget::User {
                id: reported.id.to_string()
            }
        );

        let stored = harness
            .db
            .fetch_abuse_report(&report.id)
            .await
            .expect("`AbuseReport`");
        assert_eq!(stored.reporter_id, Some(reporter.id.to_string()));
    }

    #[rocket::async_test]
    async fn success_report_user_by_id_anonymously() {
        let harness = TestHarness::new().await;
        let (_, _, reported) = harness.new_user().await;

        let response = harness
            .client
            .post("/abuse/report_user")
            .header(ContentType::JSON)
            .body(json!({ "user": reported.id, "message": "impersonation" }).to_string())
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::Ok);

        let report: v0::AbuseReport = response.into_json().await.expect("`AbuseReport`");
        let stored = harness
            .db
            .fetch_abuse_report(&report.id)
            .await
            .expect("`AbuseReport`");
        assert_eq!(stored.reporter_id, None);
    }

    #[rocket::async_test]
    async fn fails_report_with_oversized_message() {
        let harness = TestHarness::new().await;
        let (_, _, reported) = harness.new_user().await;

        let response = harness
            .client
            .post("/abuse/report_user")
            .header(ContentType::JSON)
            .body(json!({ "user": reported.id, "message": "a".repeat(1001) }).to_string())
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::BadRequest);
    }

    #[rocket::async_test]
    async fn fails_report_unknown_user() {
        let harness = TestHarness::new().await;

        let response = harness
            .client
            .post("/abuse/report_user")
            .header(ContentType::JSON)
            .body(json!({ "user": "nobody-here", "message": "spam" }).to_string())
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::NotFound);
    }
}
