use std::time::Duration;

use bazaar_config::config;
use bazaar_database::{Database, RatelimitEvent, RatelimitEventType, User};
use bazaar_ratelimits::rocket::ClientIp;
use bazaar_result::{create_error, Result};
use rocket::Route;
use rocket_okapi::okapi::openapi3::OpenApi;

mod report_addon;
mod report_user;

pub fn routes() -> (Vec<Route>, OpenApi) {
    openapi_get_routes_spec![
        // Reports
        report_addon::report_addon,
        report_user::report_user,
    ]
}

/// Rolling window over which report submissions are counted
const REPORT_QUOTA_PERIOD: Duration = Duration::from_secs(24 * 60 * 60);

/// Reject the submission if the reporting user or the originating address
/// has exhausted the daily report quota.
async fn enforce_report_quota(db: &Database, user: Option<&User>, ip: &ClientIp) -> Result<()> {
    let limit = config().await.features.limits.abuse_reports_per_day;

    if let Some(user) = user {
        if db
            .has_ratelimited(
                &user.id,
                RatelimitEventType::AbuseReport,
                REPORT_QUOTA_PERIOD,
                limit,
            )
            .await?
        {
            return Err(create_error!(ReportRatelimited));
        }
    }

    if db
        .has_ratelimited(
            &ip.0,
            RatelimitEventType::AbuseReport,
            REPORT_QUOTA_PERIOD,
            limit,
        )
        .await?
    {
        return Err(create_error!(ReportRatelimited));
    }

    Ok(())
}

/// Count a persisted report against the daily quota, once per dimension.
async fn record_report_quota(db: &Database, user: Option<&User>, ip: &ClientIp) -> Result<()> {
    if let Some(user) = user {
        RatelimitEvent::create(db, user.id.to_string(), RatelimitEventType::AbuseReport).await?;
    }

    RatelimitEvent::create(db, ip.0.to_string(), RatelimitEventType::AbuseReport).await
}
