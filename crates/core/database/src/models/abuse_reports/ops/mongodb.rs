use bazaar_result::Result;

use crate::AbuseReport;
use crate::MongoDb;

use super::AbstractAbuseReports;

static COL: &str = "abuse_reports";

#[async_trait]
impl AbstractAbuseReports for MongoDb {
    /// Insert a new abuse report into the database
    async fn insert_abuse_report(&self, report: &AbuseReport) -> Result<()> {
        query!(self, insert_one, COL, &report).map(|_| ())
    }

    /// Fetch an abuse report by its id
    async fn fetch_abuse_report(&self, id: &str) -> Result<AbuseReport> {
        query!(self, find_one_by_id, COL, id)?.ok_or_else(|| create_error!(NotFound))
    }
}
