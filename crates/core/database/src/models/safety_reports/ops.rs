use gather_result::Result;

use crate::{PartialReport, Report};

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractReports: Sync + Send {
    /// Insert a new report into the database
    async fn insert_report(&self, report: &Report) -> Result<()>;

    /// Fetch a report from the database
    async fn fetch_report(&self, id: &str) -> Result<Report>;

    /// Fetch the report a user filed against an event, if any
    async fn fetch_report_by_author(
        &self,
        event_id: &str,
        author_id: &str,
    ) -> Result<Option<Report>>;

    /// Fetch all reports filed against an event
    async fn fetch_reports_by_event(&self, event_id: &str) -> Result<Vec<Report>>;

    /// Count the pending reports filed against an event
    async fn count_pending_reports(&self, event_id: &str) -> Result<u64>;

    /// Update a report with new information
    async fn update_report(&self, id: &str, report: &PartialReport) -> Result<()>;
}
