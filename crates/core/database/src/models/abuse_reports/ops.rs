use bazaar_result::Result;

use crate::AbuseReport;

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractAbuseReports: Sync + Send {
    /// Insert a new abuse report into the database
    async fn insert_abuse_report(&self, report: &AbuseReport) -> Result<()>;

    /// Fetch an abuse report by its id
    async fn fetch_abuse_report(&self, id: &str) -> Result<AbuseReport>;
}
