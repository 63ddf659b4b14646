use mongodb::bson::doc;

use gather_result::Result;

use crate::MongoDb;
use crate::{PartialReport, Report};

use super::AbstractReports;

static COL: &str = "safety_reports";

#[async_trait]
impl AbstractReports for MongoDb {
    /// Insert a new report into the database
    async fn insert_report(&self, report: &Report) -> Result<()> {
        query!(self, insert_one, COL, report).map(|_| ())
    }

    /// Fetch a report from the database
    async fn fetch_report(&self, id: &str) -> Result<Report> {
        query!(self, find_one_by_id, COL, id)?.ok_or_else(|| create_error!(NotFound))
    }

    /// Fetch the report a user filed against an event, if any
    async fn fetch_report_by_author(
        &self,
        event_id: &str,
        author_id: &str,
    ) -> Result<Option<Report>> {
        query!(
            self,
            find_one,
            COL,
            doc! {
                "event_id": event_id,
                "author_id": author_id
            }
        )
    }

    /// Fetch all reports filed against an event
    async fn fetch_reports_by_event(&self, event_id: &str) -> Result<Vec<Report>> {
        query!(
            self,
            find,
            COL,
            doc! {
                "event_id": event_id
            }
        )
    }

    /// Count the pending reports filed against an event
    async fn count_pending_reports(&self, event_id: &str) -> Result<u64> {
        query!(
            self,
            count_documents,
            COL,
            doc! {
                "event_id": event_id,
                "status": "Pending"
            }
        )
    }

    /// Update a report with new information
    async fn update_report(&self, id: &str, partial: &PartialReport) -> Result<()> {
        query!(self, update_one_by_id, COL, id, partial, vec![], None).map(|_| ())
    }
}
