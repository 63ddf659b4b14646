use gather_models::v0::ReportStatus;
use gather_result::Result;

use crate::ReferenceDb;
use crate::{PartialReport, Report};

use super::AbstractReports;

#[async_trait]
impl AbstractReports for ReferenceDb {
    /// Insert a new report into the database
    async fn insert_report(&self, report: &Report) -> Result<()> {
        let mut safety_reports = self.safety_reports.lock().await;
        if safety_reports.contains_key(&report.id) {
            Err(create_database_error!("insert", "report"))
        } else {
            safety_reports.insert(report.id.to_string(), report.clone());
            Ok(())
        }
    }

    /// Fetch a report from the database
    async fn fetch_report(&self, id: &str) -> Result<Report> {
        let safety_reports = self.safety_reports.lock().await;
        safety_reports
            .get(id)
            .cloned()
            .ok_or_else(|| create_error!(NotFound))
    }

    /// Fetch the report a user filed against an event, if any
    async fn fetch_report_by_author(
        &self,
        event_id: &str,
        author_id: &str,
    ) -> Result<Option<Report>> {
        let safety_reports = self.safety_reports.lock().await;
        Ok(safety_reports
            .values()
            .find(|report| report.event_id == event_id && report.author_id == author_id)
            .cloned())
    }

    /// Fetch all reports filed against an event
    async fn fetch_reports_by_event(&self, event_id: &str) -> Result<Vec<Report>> {
        let safety_reports = self.safety_reports.lock().await;
        Ok(safety_reports
            .values()
            .filter(|report| report.event_id == event_id)
            .cloned()
            .collect())
    }

    /// Count the pending reports filed against an event
    async fn count_pending_reports(&self, event_id: &str) -> Result<u64> {
        let safety_reports = self.safety_reports.lock().await;
        Ok(safety_reports
            .values()
            .filter(|report| {
                report.event_id == event_id && matches!(report.status, ReportStatus::Pending {})
            })
            .count() as u64)
    }

    /// Update a report with new information
    async fn update_report(&self, id: &str, partial: &PartialReport) -> Result<()> {
        let mut safety_reports = self.safety_reports.lock().await;
        if let Some(report) = safety_reports.get_mut(id) {
            report.apply_options(partial.clone());
            Ok(())
        } else {
            Err(create_error!(NotFound))
        }
    }
}
