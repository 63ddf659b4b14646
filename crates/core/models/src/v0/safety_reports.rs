use iso8601_timestamp::Timestamp;

#[cfg(feature = "validator")]
use validator::Validate;

auto_derived!(
    /// Reason for reporting an event
    pub enum EventReportReason {
        /// No reason has been specified
        NoneSpecified,

        /// Illegal content catch-all reason
        Illegal,

        /// Unsolicited advertisements
        UnsolicitedSpam,

        /// Scams or fraud
        ScamsFraud,

        /// Event promotes harm to others / self
        PromotesHarm,

        /// Harassment or abuse targeted at another user
        Harassment,

        /// Content inappropriate for a general audience
        InappropriateContent,
    }

    /// Status of a report
    #[cfg_attr(feature = "serde", serde(tag = "status"))]
    pub enum ReportStatus {
        /// Report is waiting for review
        Pending {},

        /// Report was reviewed and upheld
        Accepted {
            /// Id of the reviewing administrator
            reviewed_by: String,
            /// When the report was closed
            closed_at: Option<Timestamp>,
        },

        /// Report was reviewed and dismissed
        Rejected {
            /// Id of the reviewing administrator
            reviewed_by: String,
            /// When the report was closed
            closed_at: Option<Timestamp>,
        },
    }

    /// Decision applied when reviewing a report
    pub enum ReviewDecision {
        /// Uphold the report
        Accepted,
        /// Dismiss the report
        Rejected,
    }

    /// New report information
    #[cfg_attr(feature = "validator", derive(Validate))]
    pub struct DataReportEvent {
        /// Reason for reporting the event
        pub reason: EventReportReason,
        /// Additional report description
        #[cfg_attr(feature = "validator", validate(length(min = 0, max = 1000)))]
        #[cfg_attr(feature = "serde", serde(default))]
        pub additional_context: String,
    }

    /// Review applied to a report
    #[cfg_attr(feature = "validator", derive(Validate))]
    pub struct DataReviewReport {
        /// Whether the report is upheld or dismissed
        pub decision: ReviewDecision,
        /// Notes to record on the report
        #[cfg_attr(feature = "validator", validate(length(min = 0, max = 1000)))]
        pub notes: Option<String>,
    }
);
