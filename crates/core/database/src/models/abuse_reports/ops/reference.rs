use bazaar_result::Result;

use crate::AbuseReport;
use crate::ReferenceDb;

use super::AbstractAbuseReports;

#[async_trait]
impl AbstractAbuseReports for ReferenceDb {
    /// Insert a new abuse report into the database
    async fn insert_abuse_report(&self, report: &AbuseReport) -> Result<()> {
        let mut abuse_reports = self.abuse_reports.lock().await;
        if abuse_reports.contains_key(&report.id) {
            Err(create_database_error!("insert", "abuse_reports"))
        } else {
            abuse_reports.insert(report.id.to_string(), report.clone());
            Ok(())
        }
    }

    /// Fetch an abuse report by its id
    async fn fetch_abuse_report(&self, id: &str) -> Result<AbuseReport> {
        let abuse_reports = self.abuse_reports.lock().await;
        abuse_reports
            .get(id)
            .cloned()
            .ok_or_else(|| create_error!(NotFound))
    }
}
