use iso8601_timestamp::Timestamp;
use validator::Validate;

use gather_config::config;
use gather_lifecycle::{crosses_threshold, may_auto_restore, HiddenBy};
use gather_models::v0::{self, ReportStatus, ReviewDecision};
use gather_result::Result;

use crate::{Database, Event, PartialEvent, User, REASON_MASS_REPORTED};

auto_derived_partial!(
    /// User-filed moderation report against an event
    pub struct Report {
        /// Unique Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Id of the user creating this report
        pub author_id: String,
        /// Id of the reported event
        pub event_id: String,

        /// Reason for the report
        pub reason: v0::EventReportReason,
        /// Additional report context
        #[serde(default)]
        pub additional_context: String,

        /// Status of the report
        #[opt_passthrough]
        #[serde(flatten)]
        pub status: ReportStatus,
        /// Notes recorded during review
        #[serde(default)]
        pub notes: String,
    },
    "PartialReport"
);

#[allow(clippy::disallowed_methods)]
impl Report {
    /// File a report against an event
    ///
    /// Organizers cannot report their own events and each user can report
    /// a given event once. Returns the created report and whether filing
    /// it hid the event.
    pub async fn create(
        db: &Database,
        event: &mut Event,
        author: &mut User,
        data: v0::DataReportEvent,
    ) -> Result<(Report, bool)> {
        author.assert_good_standing(db).await?;

        data.validate()
            .map_err(|error| create_error!(FailedValidation {
                error: error.to_string()
            }))?;

        if event.owner == author.id {
            return Err(create_error!(CannotReportYourself));
        }

        if db
            .fetch_report_by_author(&event.id, &author.id)
            .await?
            .is_some()
        {
            return Err(create_error!(AlreadyReported));
        }

        let report = Report {
            id: ulid::Ulid::new().to_string(),
            author_id: author.id.to_string(),
            event_id: event.id.to_string(),
            reason: data.reason,
            additional_context: data.additional_context,
            status: ReportStatus::Pending {},
            notes: String::new(),
        };

        db.insert_report(&report).await?;

        // Lifetime counter, never decremented
        let partial = PartialEvent {
            report_count: Some(event.report_count + 1),
            ..Default::default()
        };
        db.update_event(&event.id, &partial, vec![]).await?;
        event.apply_options(partial);

        let pending = db.count_pending_reports(&event.id).await?;
        let threshold = config().await.moderation.report_threshold;

        let mut auto_hidden = false;
        if crosses_threshold(pending, threshold) {
            // A manual or ban hide takes precedence and is left alone
            let rewrite = match &event.hidden {
                Some(hidden) => matches!(hidden.by, HiddenBy::Automatic),
                None => true,
            };

            if rewrite {
                event
                    .hide(db, HiddenBy::Automatic, REASON_MASS_REPORTED)
                    .await?;
                auto_hidden = true;

                info!(
                    "event {} hidden after {} pending reports",
                    event.id, pending
                );
            }
        }

        Ok((report, auto_hidden))
    }

    /// Review this report
    ///
    /// Reports are reviewed exactly once. Dismissing a report can restore
    /// an automatically hidden event once its pending count drops back
    /// below the threshold; upholding one never restores anything.
    pub async fn review(
        &mut self,
        db: &Database,
        reviewer: &User,
        data: v0::DataReviewReport,
    ) -> Result<()> {
        if !reviewer.privileged {
            return Err(create_error!(NotPrivileged));
        }

        data.validate()
            .map_err(|error| create_error!(FailedValidation {
                error: error.to_string()
            }))?;

        if !matches!(self.status, ReportStatus::Pending {}) {
            return Err(create_error!(ReportAlreadyReviewed));
        }

        let closed_at = Some(Timestamp::now_utc());
        let status = match data.decision {
            ReviewDecision::Accepted => ReportStatus::Accepted {
                reviewed_by: reviewer.id.to_string(),
                closed_at,
            },
            ReviewDecision::Rejected => ReportStatus::Rejected {
                reviewed_by: reviewer.id.to_string(),
                closed_at,
            },
        };

        let partial = PartialReport {
            status: Some(status),
            notes: data.notes,
            ..Default::default()
        };

        db.update_report(&self.id, &partial).await?;
        self.apply_options(partial);

        if matches!(self.status, ReportStatus::Rejected { .. }) {
            // The event may be gone by the time the report is reviewed
            if let Ok(mut event) = db.fetch_event(&self.event_id).await {
                let pending = db.count_pending_reports(&event.id).await?;
                let threshold = config().await.moderation.report_threshold;

                let hidden_by = event.hidden.as_ref().map(|hidden| &hidden.by);
                if may_auto_restore(hidden_by, pending, threshold) {
                    event.restore(db).await?;

                    info!(
                        "event {} restored, {} pending reports remain",
                        event.id, pending
                    );
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use gather_lifecycle::HiddenBy;
    use gather_models::v0;
    use gather_result::ErrorType;

    use crate::util::test_fixtures::{test_admin, test_event, test_user};
    use crate::{Report, REASON_MASS_REPORTED, REASON_ORGANIZER_BANNED};

    fn report() -> v0::DataReportEvent {
        v0::DataReportEvent {
            reason: v0::EventReportReason::UnsolicitedSpam,
            additional_context: String::new(),
        }
    }

    fn reject() -> v0::DataReviewReport {
        v0::DataReviewReport {
            decision: v0::ReviewDecision::Rejected,
            notes: Some("does not violate guidelines".to_string()),
        }
    }

    #[async_std::test]
    async fn cannot_report_yourself_or_twice() {
        database_test!(|db| async move {
            let mut owner = test_user(&db, "morgan").await;
            let mut reporter = test_user(&db, "riley").await;
            let mut event = test_event(&db, &owner, 3, None).await;

            let err = Report::create(&db, &mut event, &mut owner, report())
                .await
                .unwrap_err();
            assert!(matches!(err.error_type, ErrorType::CannotReportYourself));

            Report::create(&db, &mut event, &mut reporter, report())
                .await
                .unwrap();

            let err = Report::create(&db, &mut event, &mut reporter, report())
                .await
                .unwrap_err();
            assert!(matches!(err.error_type, ErrorType::AlreadyReported));
        });
    }

    #[async_std::test]
    async fn reports_hide_the_event_once() {
        database_test!(|db| async move {
            let owner = test_user(&db, "morgan").await;
            let mut event = test_event(&db, &owner, 3, None).await;

            for (index, name) in ["a", "b"].into_iter().enumerate() {
                let mut reporter = test_user(&db, name).await;
                let (_, auto_hidden) = Report::create(&db, &mut event, &mut reporter, report())
                    .await
                    .unwrap();
                assert!(!auto_hidden);
                assert!(!event.is_hidden());
                assert_eq!(event.report_count, index as u32 + 1);
            }

            // The third pending report crosses the threshold
            let mut reporter = test_user(&db, "c").await;
            let (_, auto_hidden) = Report::create(&db, &mut event, &mut reporter, report())
                .await
                .unwrap();
            assert!(auto_hidden);

            let hidden = db.fetch_event(&event.id).await.unwrap().hidden.unwrap();
            assert_eq!(hidden.by, HiddenBy::Automatic);
            assert_eq!(hidden.reason, REASON_MASS_REPORTED);

            // A fourth report does not error and leaves the event hidden
            let mut reporter = test_user(&db, "d").await;
            Report::create(&db, &mut event, &mut reporter, report())
                .await
                .unwrap();
            assert!(event.is_hidden());
            assert_eq!(event.report_count, 4);
        });
    }

    #[async_std::test]
    async fn rejection_restores_below_threshold() {
        database_test!(|db| async move {
            let admin = test_admin(&db).await;
            let owner = test_user(&db, "morgan").await;
            let mut event = test_event(&db, &owner, 3, None).await;

            let mut reports = Vec::new();
            for name in ["a", "b", "c"] {
                let mut reporter = test_user(&db, name).await;
                let (report, _) = Report::create(&db, &mut event, &mut reporter, report())
                    .await
                    .unwrap();
                reports.push(report);
            }
            assert!(db.fetch_event(&event.id).await.unwrap().is_hidden());

            let mut first = reports.remove(0);
            first.review(&db, &admin, reject()).await.unwrap();

            // Two pending reports remain, below the threshold
            assert_eq!(db.count_pending_reports(&event.id).await.unwrap(), 2);
            assert!(!db.fetch_event(&event.id).await.unwrap().is_hidden());

            // Reports are reviewed exactly once
            let err = first.review(&db, &admin, reject()).await.unwrap_err();
            assert!(matches!(err.error_type, ErrorType::ReportAlreadyReviewed));
        });
    }

    #[async_std::test]
    async fn acceptance_never_restores() {
        database_test!(|db| async move {
            let admin = test_admin(&db).await;
            let owner = test_user(&db, "morgan").await;
            let mut event = test_event(&db, &owner, 3, None).await;

            let mut reports = Vec::new();
            for name in ["a", "b", "c"] {
                let mut reporter = test_user(&db, name).await;
                let (report, _) = Report::create(&db, &mut event, &mut reporter, report())
                    .await
                    .unwrap();
                reports.push(report);
            }

            let mut first = reports.remove(0);
            first
                .review(
                    &db,
                    &admin,
                    v0::DataReviewReport {
                        decision: v0::ReviewDecision::Accepted,
                        notes: None,
                    },
                )
                .await
                .unwrap();

            assert!(db.fetch_event(&event.id).await.unwrap().is_hidden());
        });
    }

    #[async_std::test]
    async fn ban_hidden_events_stay_hidden() {
        database_test!(|db| async move {
            let admin = test_admin(&db).await;
            let owner = test_user(&db, "morgan").await;
            let mut event = test_event(&db, &owner, 3, None).await;

            event
                .hide(&db, HiddenBy::BanCascade, REASON_ORGANIZER_BANNED)
                .await
                .unwrap();

            let mut reports = Vec::new();
            for name in ["a", "b", "c"] {
                let mut reporter = test_user(&db, name).await;
                let (report, auto_hidden) =
                    Report::create(&db, &mut event, &mut reporter, report())
                        .await
                        .unwrap();
                // The ban hide takes precedence over the report threshold
                assert!(!auto_hidden);
                reports.push(report);
            }

            for mut report in reports {
                report.review(&db, &admin, reject()).await.unwrap();
            }

            let hidden = db.fetch_event(&event.id).await.unwrap().hidden.unwrap();
            assert_eq!(hidden.by, HiddenBy::BanCascade);
        });
    }

    #[async_std::test]
    async fn review_requires_privilege() {
        database_test!(|db| async move {
            let owner = test_user(&db, "morgan").await;
            let mut reporter = test_user(&db, "riley").await;
            let mut event = test_event(&db, &owner, 3, None).await;

            let (mut report, _) = Report::create(&db, &mut event, &mut reporter, report())
                .await
                .unwrap();

            let err = report.review(&db, &reporter, reject()).await.unwrap_err();
            assert!(matches!(err.error_type, ErrorType::NotPrivileged));
        });
    }
}
